use std::io;
use std::os::fd::{AsFd, AsRawFd, BorrowedFd, FromRawFd, OwnedFd};

use tracing::debug;

use crate::diag;

/// Default kernel buffer size for each live direction, in bytes.
///
/// The kernel default is typically around 128 KiB per direction, which is
/// far more than a polled event channel needs; the unused reverse direction
/// of each endpoint is always kept at this minimum.
pub const DEFAULT_BUFFER_SIZE: usize = 4 * 1024;

/// Configuration for allocating a channel's socket pair.
#[derive(Debug, Clone)]
pub struct PairConfig {
    /// `SO_SNDBUF` requested for the sending end. Default: 4 KiB.
    pub send_buffer: usize,
    /// `SO_RCVBUF` requested for the receiving end. Default: 4 KiB.
    pub recv_buffer: usize,
    /// When set, bind each end to the abstract-namespace address
    /// `"<label>-f<fd>"` so the pair is attributable in socket diagnostics.
    /// Best-effort and purely diagnostic; [`diag::process_thread_label`] is
    /// the conventional label. Default: off.
    pub debug_name: Option<String>,
}

impl Default for PairConfig {
    fn default() -> Self {
        Self {
            send_buffer: DEFAULT_BUFFER_SIZE,
            recv_buffer: DEFAULT_BUFFER_SIZE,
            debug_name: None,
        }
    }
}

/// Allocate a connected, record-boundary-preserving socket pair.
///
/// Returns `(receive end, send end)`, both non-blocking and close-on-exec.
/// Buffer sizing is resource tuning: the kernel may clamp the request, and
/// a failed `setsockopt` is logged at debug level rather than failing the
/// allocation. Failing to make an end non-blocking does fail the
/// allocation — the never-blocks contract depends on it.
pub(crate) fn allocate(config: &PairConfig) -> io::Result<(OwnedFd, OwnedFd)> {
    let mut fds = [0 as libc::c_int; 2];
    // SAFETY: `fds` is a writable array of two ints; socketpair fills it
    // only on success.
    let rc = unsafe {
        libc::socketpair(
            libc::AF_UNIX,
            libc::SOCK_SEQPACKET | libc::SOCK_CLOEXEC,
            0,
            fds.as_mut_ptr(),
        )
    };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    // SAFETY: on success both descriptors are open and owned by nobody else.
    let (receive, send) = unsafe { (OwnedFd::from_raw_fd(fds[0]), OwnedFd::from_raw_fd(fds[1])) };

    tune_buffer(receive.as_fd(), libc::SO_RCVBUF, "SO_RCVBUF", config.recv_buffer);
    tune_buffer(send.as_fd(), libc::SO_SNDBUF, "SO_SNDBUF", config.send_buffer);
    // No return traffic is expected, so the reverse direction stays small.
    tune_buffer(receive.as_fd(), libc::SO_SNDBUF, "SO_SNDBUF", DEFAULT_BUFFER_SIZE);
    tune_buffer(send.as_fd(), libc::SO_RCVBUF, "SO_RCVBUF", DEFAULT_BUFFER_SIZE);

    set_nonblocking(receive.as_fd())?;
    set_nonblocking(send.as_fd())?;

    if let Some(label) = &config.debug_name {
        diag::name_endpoints(receive.as_fd(), send.as_fd(), label);
    }

    debug!(
        recv = receive.as_raw_fd(),
        send = send.as_raw_fd(),
        "allocated seqpacket pair"
    );
    Ok((receive, send))
}

fn tune_buffer(fd: BorrowedFd<'_>, opt: libc::c_int, name: &'static str, bytes: usize) {
    let value = bytes.min(libc::c_int::MAX as usize) as libc::c_int;
    // SAFETY: `value` lives across the call and the option length matches it.
    let rc = unsafe {
        libc::setsockopt(
            fd.as_raw_fd(),
            libc::SOL_SOCKET,
            opt,
            (&value as *const libc::c_int).cast(),
            std::mem::size_of::<libc::c_int>() as libc::socklen_t,
        )
    };
    if rc != 0 {
        debug!(name, bytes, err = %io::Error::last_os_error(), "socket buffer request ignored");
    }
}

fn set_nonblocking(fd: BorrowedFd<'_>) -> io::Result<()> {
    // SAFETY: the descriptor is open for the duration of both calls.
    let flags = unsafe { libc::fcntl(fd.as_raw_fd(), libc::F_GETFL) };
    if flags < 0 {
        return Err(io::Error::last_os_error());
    }
    // SAFETY: as above.
    let rc = unsafe { libc::fcntl(fd.as_raw_fd(), libc::F_SETFL, flags | libc::O_NONBLOCK) };
    if rc < 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sockopt(fd: BorrowedFd<'_>, opt: libc::c_int) -> libc::c_int {
        let mut value: libc::c_int = 0;
        let mut len = std::mem::size_of::<libc::c_int>() as libc::socklen_t;
        // SAFETY: `value` and `len` are valid writable locations of the
        // advertised sizes.
        let rc = unsafe {
            libc::getsockopt(
                fd.as_raw_fd(),
                libc::SOL_SOCKET,
                opt,
                (&mut value as *mut libc::c_int).cast(),
                &mut len,
            )
        };
        assert_eq!(rc, 0, "getsockopt failed");
        value
    }

    #[test]
    fn default_config() {
        let config = PairConfig::default();
        assert_eq!(config.send_buffer, DEFAULT_BUFFER_SIZE);
        assert_eq!(config.recv_buffer, DEFAULT_BUFFER_SIZE);
        assert!(config.debug_name.is_none());
    }

    #[test]
    fn allocates_distinct_endpoints() {
        let (receive, send) = allocate(&PairConfig::default()).expect("pair should allocate");
        assert_ne!(receive.as_raw_fd(), send.as_raw_fd());
    }

    #[test]
    fn endpoints_are_nonblocking() {
        let (receive, send) = allocate(&PairConfig::default()).expect("pair should allocate");
        for fd in [receive.as_fd(), send.as_fd()] {
            // SAFETY: the descriptor is open.
            let flags = unsafe { libc::fcntl(fd.as_raw_fd(), libc::F_GETFL) };
            assert!(flags >= 0);
            assert_ne!(flags & libc::O_NONBLOCK, 0, "endpoint must be non-blocking");
        }
    }

    #[test]
    fn live_direction_buffers_honor_request() {
        let config = PairConfig {
            send_buffer: 16 * 1024,
            recv_buffer: 16 * 1024,
            debug_name: None,
        };
        let (receive, send) = allocate(&config).expect("pair should allocate");

        // The kernel rounds the request up for bookkeeping overhead, so only
        // a lower bound is portable to assert.
        assert!(sockopt(receive.as_fd(), libc::SO_RCVBUF) >= 16 * 1024);
        assert!(sockopt(send.as_fd(), libc::SO_SNDBUF) >= 16 * 1024);
    }

    #[test]
    fn reverse_direction_stays_small() {
        let config = PairConfig {
            send_buffer: 64 * 1024,
            recv_buffer: 64 * 1024,
            debug_name: None,
        };
        let (receive, send) = allocate(&config).expect("pair should allocate");

        assert!(sockopt(receive.as_fd(), libc::SO_SNDBUF) < 64 * 1024);
        assert!(sockopt(send.as_fd(), libc::SO_RCVBUF) < 64 * 1024);
    }
}
