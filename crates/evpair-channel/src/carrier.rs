//! Handle transfer between owners.
//!
//! A channel's receive side can ride inside one cross-process message and
//! be rebuilt on the far side; see [`Channel::transfer_into`] and
//! [`Channel::from_carrier`]. The message container itself belongs to the
//! surrounding system. The channel needs only the two operations of
//! [`HandleCarrier`] from it.
//!
//! [`Channel::transfer_into`]: crate::Channel::transfer_into
//! [`Channel::from_carrier`]: crate::Channel::from_carrier

use std::io;
use std::os::fd::{AsFd, BorrowedFd, OwnedFd};

/// One-shot message container able to ferry a duplicated receive handle to
/// another owner, typically across a process boundary.
///
/// An implementation embeds its own duplicate of the written handle
/// alongside whatever other payload the message carries, and keeps that
/// duplicate alive until the message is consumed or dropped.
pub trait HandleCarrier {
    /// Embed an independent duplicate of `fd` in the message.
    fn write_handle(&mut self, fd: BorrowedFd<'_>) -> io::Result<()>;

    /// Lend the embedded handle out for duplication by the reader.
    fn read_handle(&self) -> io::Result<BorrowedFd<'_>>;
}

/// Minimal [`HandleCarrier`] holding nothing but the handle.
///
/// Serves tests and same-process handoffs between threads; a real
/// deployment implements [`HandleCarrier`] on its own message type.
#[derive(Debug, Default)]
pub struct FdCarrier {
    fd: Option<OwnedFd>,
}

impl FdCarrier {
    /// Create an empty carrier. Reading from it fails with `EBADF` until a
    /// handle is written.
    pub fn new() -> Self {
        Self { fd: None }
    }
}

impl HandleCarrier for FdCarrier {
    fn write_handle(&mut self, fd: BorrowedFd<'_>) -> io::Result<()> {
        // A carrier holds at most one handle; writing again releases the
        // previous duplicate.
        self.fd = Some(fd.try_clone_to_owned()?);
        Ok(())
    }

    fn read_handle(&self) -> io::Result<BorrowedFd<'_>> {
        match &self.fd {
            Some(fd) => Ok(fd.as_fd()),
            None => Err(io::Error::from_raw_os_error(libc::EBADF)),
        }
    }
}
