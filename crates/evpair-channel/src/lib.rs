//! Record-preserving event channel over a sequenced-packet socket pair.
//!
//! A [`Channel`] ferries batches of fixed-size binary records from a
//! producer to a consumer over a connected `AF_UNIX`/`SOCK_SEQPACKET`
//! pair: each batch is one kernel message, delivered whole or not at all,
//! with no broker and no serialization layer in between. The receive side
//! can be packaged into a cross-process message (any [`HandleCarrier`])
//! and rebuilt in another address space, which is how an event producer
//! hands a consumer its private end of the stream.
//!
//! Everything is synchronous and non-blocking. The intended shape is a
//! readiness poller watching [`Channel::receive_fd`] and draining with
//! [`recv_records`] when it fires; senders react to
//! [`ChannelError::Backpressure`] instead of ever blocking.
//!
//! ```no_run
//! use evpair_channel::{recv_records, send_records, Channel};
//!
//! let channel = Channel::new();
//! let records = [0u8; 3 * 64];
//! send_records(&channel, &records, 3, 64)?;
//!
//! let mut buf = [0u8; 3 * 64];
//! let received = recv_records(&channel, &mut buf, 3, 64)?;
//! assert_eq!(received, 3);
//! # Ok::<(), evpair_channel::ChannelError>(())
//! ```

#[cfg(not(any(target_os = "linux", target_os = "android", target_os = "freebsd")))]
compile_error!(
    "evpair-channel needs SOCK_SEQPACKET socket pairs (Linux, Android, or FreeBSD)"
);

pub mod batch;
pub mod carrier;
pub mod channel;
pub mod diag;
pub mod error;
pub mod pair;

pub use batch::{recv_records, send_records, RawChannel};
pub use carrier::{FdCarrier, HandleCarrier};
pub use channel::Channel;
pub use diag::process_thread_label;
pub use error::{ChannelError, Result};
pub use pair::{PairConfig, DEFAULT_BUFFER_SIZE};
