use std::fmt;
use std::io;
use std::os::fd::{AsFd, AsRawFd, BorrowedFd, OwnedFd};

use tracing::error;

use crate::batch::RawChannel;
use crate::carrier::HandleCarrier;
use crate::error::{ChannelError, Result};
use crate::pair::{self, PairConfig};

/// A record-preserving IPC channel endpoint.
///
/// A freshly created `Channel` owns both ends of a connected
/// `SOCK_SEQPACKET` pair. Every send call moves one kernel message that is
/// delivered whole or not at all, which is what keeps fixed-size records
/// from tearing across reads. A channel rebuilt from a [`HandleCarrier`]
/// owns the receive side only.
///
/// All I/O is non-blocking: [`recv_raw`](Channel::recv_raw) reports
/// "nothing pending" as `Ok(0)` and [`send_raw`](Channel::send_raw) reports
/// a full kernel buffer as [`ChannelError::Backpressure`]. Drive the
/// receive side from a readiness poller via
/// [`receive_fd`](Channel::receive_fd).
///
/// I/O takes `&self`: each message is kernel-atomic, but sends from
/// multiple threads are not ordered by the channel, so callers that need
/// cross-thread ordering serialize externally. Close and transfer take
/// `&mut self` and therefore can never race an in-flight call.
pub struct Channel {
    send: Option<OwnedFd>,
    recv: Option<OwnedFd>,
    /// OS error code latched when allocation or reconstruction failed.
    init_error: Option<i32>,
}

impl Channel {
    /// Create a channel with default 4 KiB buffers in both live directions.
    pub fn new() -> Self {
        Self::with_config(PairConfig::default())
    }

    /// Create a channel with `bytes`-sized kernel buffers in both live
    /// directions.
    pub fn with_buffer_size(bytes: usize) -> Self {
        Self::with_config(PairConfig {
            send_buffer: bytes,
            recv_buffer: bytes,
            ..PairConfig::default()
        })
    }

    /// Create a channel from an explicit pair configuration.
    ///
    /// Construction itself never fails: if the socket pair cannot be
    /// allocated the returned channel holds no handles,
    /// [`init_check`](Channel::init_check) reports the OS error, and every
    /// operation keeps failing with it. Callers that want to react to
    /// allocation failure check `init_check` once after construction.
    pub fn with_config(config: PairConfig) -> Self {
        match pair::allocate(&config) {
            Ok((recv, send)) => Self {
                send: Some(send),
                recv: Some(recv),
                init_error: None,
            },
            Err(err) => {
                error!(%err, "channel allocation failed");
                Self {
                    send: None,
                    recv: None,
                    init_error: Some(err.raw_os_error().unwrap_or(libc::EINVAL)),
                }
            }
        }
    }

    /// `Ok` iff the receive handle is valid.
    ///
    /// This is the single validity oracle for a channel: a failed
    /// allocation, an explicit [`close`](Channel::close), and a completed
    /// [`transfer_into`](Channel::transfer_into) all make it report an
    /// error. A send-side-only defect does not; sending will fail on its
    /// own.
    pub fn init_check(&self) -> Result<()> {
        self.latched_error()?;
        if self.recv.is_none() {
            return Err(ChannelError::NoReceiveHandle);
        }
        Ok(())
    }

    /// Send `buf` as one message.
    ///
    /// Never blocks: a full kernel buffer surfaces as
    /// [`ChannelError::Backpressure`], the signal to drop, retry later, or
    /// throttle upstream. Interrupted calls are retried internally. The
    /// sequenced-packet transport never sends a partial message, so success
    /// means the whole buffer went out.
    pub fn send_raw(&self, buf: &[u8]) -> Result<usize> {
        self.latched_error()?;
        let fd = self.send.as_ref().ok_or(ChannelError::NoSendHandle)?;
        loop {
            // SAFETY: `buf` is valid for reads of `buf.len()` bytes and the
            // descriptor stays open for the duration of the call.
            let n = unsafe {
                libc::send(
                    fd.as_raw_fd(),
                    buf.as_ptr().cast(),
                    buf.len(),
                    libc::MSG_DONTWAIT | libc::MSG_NOSIGNAL,
                )
            };
            if n >= 0 {
                return Ok(n as usize);
            }
            let err = io::Error::last_os_error();
            match err.kind() {
                io::ErrorKind::Interrupted => continue,
                io::ErrorKind::WouldBlock => return Err(ChannelError::Backpressure),
                _ => return Err(ChannelError::Io(err)),
            }
        }
    }

    /// Receive one message into `buf`.
    ///
    /// Never blocks: `Ok(0)` means no message is pending right now, the
    /// normal steady state for a polled channel. Interrupted calls are
    /// retried internally. A peer that closed its end also reads as zero;
    /// distinguishing hangup from idle is the readiness poller's job.
    ///
    /// If `buf` is smaller than the pending message the kernel truncates
    /// and discards the excess, so receive buffers must be sized to whole
    /// messages.
    pub fn recv_raw(&self, buf: &mut [u8]) -> Result<usize> {
        self.latched_error()?;
        let fd = self.recv.as_ref().ok_or(ChannelError::NoReceiveHandle)?;
        loop {
            // SAFETY: `buf` is valid for writes of `buf.len()` bytes and the
            // descriptor stays open for the duration of the call.
            let n = unsafe {
                libc::recv(
                    fd.as_raw_fd(),
                    buf.as_mut_ptr().cast(),
                    buf.len(),
                    libc::MSG_DONTWAIT,
                )
            };
            if n >= 0 {
                return Ok(n as usize);
            }
            let err = io::Error::last_os_error();
            match err.kind() {
                io::ErrorKind::Interrupted => continue,
                io::ErrorKind::WouldBlock => return Ok(0),
                _ => return Err(ChannelError::Io(err)),
            }
        }
    }

    /// The receive-side descriptor, for registration with a readiness
    /// poller. `None` once the channel is closed or transferred away.
    pub fn receive_fd(&self) -> Option<BorrowedFd<'_>> {
        self.recv.as_ref().map(|fd| fd.as_fd())
    }

    /// The send-side descriptor. `None` on a reconstructed (receive-only)
    /// or closed channel.
    pub fn send_fd(&self) -> Option<BorrowedFd<'_>> {
        self.send.as_ref().map(|fd| fd.as_fd())
    }

    /// Release both descriptors now.
    ///
    /// Afterwards [`init_check`](Channel::init_check) reports the channel
    /// invalid. Taking `&mut self` means a close can never race an
    /// in-flight send or receive on the same channel. Dropping the channel
    /// has the same effect.
    pub fn close(&mut self) {
        self.send = None;
        self.recv = None;
    }

    /// Move the receive side of this channel into `carrier`.
    ///
    /// The carrier gets an independent duplicate and this channel's own
    /// copy is released whether or not the carrier write succeeds; after
    /// this call the channel can no longer receive and `init_check` reports
    /// it invalid. The send side, if any, is unaffected.
    pub fn transfer_into<C: HandleCarrier>(&mut self, carrier: &mut C) -> Result<()> {
        self.latched_error()?;
        let recv = self.recv.take().ok_or(ChannelError::NoReceiveHandle)?;
        carrier.write_handle(recv.as_fd()).map_err(ChannelError::Io)
    }

    /// Rebuild a receive-only channel from a handle carrier.
    ///
    /// The carried handle is duplicated, so the reconstructed channel is
    /// independent of the carrier and of every other duplicate: closing one
    /// owner never invalidates another. On a corrupt carrier or a failed
    /// duplication the returned channel is invalid and `init_check` reports
    /// the OS error.
    pub fn from_carrier<C: HandleCarrier>(carrier: &C) -> Self {
        match carrier
            .read_handle()
            .and_then(|fd| fd.try_clone_to_owned())
        {
            Ok(recv) => Self {
                send: None,
                recv: Some(recv),
                init_error: None,
            },
            Err(err) => {
                error!(%err, "cannot duplicate carried receive handle");
                Self {
                    send: None,
                    recv: None,
                    init_error: Some(err.raw_os_error().unwrap_or(libc::EBADF)),
                }
            }
        }
    }

    fn latched_error(&self) -> Result<()> {
        match self.init_error {
            Some(code) => Err(ChannelError::Init {
                source: io::Error::from_raw_os_error(code),
            }),
            None => Ok(()),
        }
    }
}

impl Default for Channel {
    fn default() -> Self {
        Self::new()
    }
}

impl RawChannel for Channel {
    fn send_raw(&self, buf: &[u8]) -> Result<usize> {
        Channel::send_raw(self, buf)
    }

    fn recv_raw(&self, buf: &mut [u8]) -> Result<usize> {
        Channel::recv_raw(self, buf)
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("send", &self.send.as_ref().map(|fd| fd.as_raw_fd()))
            .field("recv", &self.recv.as_ref().map(|fd| fd.as_raw_fd()))
            .field("init_error", &self.init_error)
            .finish()
    }
}
