//! Whole-record batch transfer.
//!
//! The transport moves one kernel message per call and never splits it, so
//! a batch of fixed-size records either crosses whole or not at all. These
//! helpers convert between record counts and raw byte lengths and enforce
//! that no partial record is ever observed.

use crate::error::Result;

/// Byte-level record I/O, implemented by [`crate::Channel`].
///
/// The seam exists so batch transfers can be exercised against a
/// fault-injected endpoint in tests; production code goes through
/// `Channel`.
pub trait RawChannel {
    /// Send `buf` as one message. See [`crate::Channel::send_raw`].
    fn send_raw(&self, buf: &[u8]) -> Result<usize>;

    /// Receive one message into `buf`. See [`crate::Channel::recv_raw`].
    fn recv_raw(&self, buf: &mut [u8]) -> Result<usize>;
}

/// Send `count` records of `record_size` bytes from the front of `records`
/// as one message.
///
/// Returns the number of records sent, which on success is always `count`.
/// Errors pass through unchanged; [`ChannelError::Backpressure`] means the
/// kernel buffer has no room for the batch.
///
/// # Panics
///
/// Panics if `record_size` is zero or `records` holds fewer than
/// `count * record_size` bytes. Also panics if the transport reports a byte
/// count that is not a whole number of records: that would mean a record
/// tore in flight, and nothing downstream can recover from it.
///
/// [`ChannelError::Backpressure`]: crate::ChannelError::Backpressure
pub fn send_records<C: RawChannel>(
    channel: &C,
    records: &[u8],
    count: usize,
    record_size: usize,
) -> Result<usize> {
    let len = batch_len(records.len(), count, record_size);
    let sent = channel.send_raw(&records[..len])?;
    assert!(
        sent % record_size == 0,
        "partial record sent: {sent} bytes is not a multiple of {record_size}"
    );
    Ok(sent / record_size)
}

/// Receive up to `count` records of `record_size` bytes into the front of
/// `buf`.
///
/// Returns the number of records received: `0` means nothing was pending,
/// and fewer than `count` means the pending batch was smaller. Errors pass
/// through unchanged.
///
/// # Panics
///
/// Panics if `record_size` is zero or `buf` holds fewer than
/// `count * record_size` bytes. Also panics if the transport reports a byte
/// count that is not a whole number of records, which a correctly sized
/// buffer over a sequenced-packet transport can only produce when a record
/// tore in flight.
pub fn recv_records<C: RawChannel>(
    channel: &C,
    buf: &mut [u8],
    count: usize,
    record_size: usize,
) -> Result<usize> {
    let len = batch_len(buf.len(), count, record_size);
    let received = channel.recv_raw(&mut buf[..len])?;
    assert!(
        received % record_size == 0,
        "partial record received: {received} bytes is not a multiple of {record_size}"
    );
    Ok(received / record_size)
}

fn batch_len(available: usize, count: usize, record_size: usize) -> usize {
    assert!(record_size > 0, "record size must be non-zero");
    let len = count
        .checked_mul(record_size)
        .expect("record batch length overflows usize");
    assert!(
        available >= len,
        "batch of {count} x {record_size}-byte records needs {len} bytes, buffer holds {available}"
    );
    len
}
