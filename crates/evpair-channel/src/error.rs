use std::io;

/// Errors that can occur on a record channel.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    /// The channel never became usable: socket pair allocation failed, or
    /// rebuilding from a carrier did.
    ///
    /// A channel carrying this error has no handles; every operation on it
    /// keeps reporting the same latched OS error.
    #[error("channel initialization failed: {source}")]
    Init { source: io::Error },

    /// The channel has no receive handle (closed, transferred away, or never
    /// initialized).
    #[error("channel has no receive handle")]
    NoReceiveHandle,

    /// The channel has no send handle. Channels rebuilt from a handle
    /// carrier are receive-only.
    #[error("channel has no send handle")]
    NoSendHandle,

    /// The kernel send buffer is full.
    ///
    /// This is backpressure the caller must react to — drop the batch, retry
    /// after the peer drains, or apply flow control upstream.
    #[error("send would block: kernel buffer full")]
    Backpressure,

    /// Any other transport-level I/O error, with the OS error code preserved.
    #[error("channel I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ChannelError {
    /// The OS error code behind this error, if one exists.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            ChannelError::Init { source } => source.raw_os_error(),
            ChannelError::Io(err) => err.raw_os_error(),
            ChannelError::Backpressure => Some(libc::EAGAIN),
            ChannelError::NoReceiveHandle | ChannelError::NoSendHandle => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ChannelError>;
