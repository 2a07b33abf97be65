//! Producer/consumer over one channel — the receive side is handed to a
//! consumer thread through a carrier, which then drains record batches
//! driven by poll(2) readiness.
//!
//! Run with:
//!   cargo run --example record-stream

use std::os::fd::AsRawFd;
use std::thread;

use evpair_channel::{recv_records, send_records, Channel, ChannelError, FdCarrier, PairConfig};

const RECORD_SIZE: usize = 32;
const BATCH: usize = 4;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let mut producer = Channel::with_config(PairConfig {
        debug_name: Some(evpair_channel::process_thread_label()),
        ..PairConfig::default()
    });
    producer.init_check()?;

    let mut carrier = FdCarrier::new();
    producer.transfer_into(&mut carrier)?;

    let consumer = thread::spawn(move || -> Result<usize, ChannelError> {
        let channel = Channel::from_carrier(&carrier);
        channel.init_check()?;
        let receive_fd = channel.receive_fd().map(|fd| fd.as_raw_fd()).unwrap_or(-1);

        let mut buf = [0u8; BATCH * RECORD_SIZE];
        let mut total = 0usize;
        loop {
            let mut pollfd = libc::pollfd {
                fd: receive_fd,
                events: libc::POLLIN,
                revents: 0,
            };
            // SAFETY: `pollfd` is a valid array of one entry for the call.
            let ready = unsafe { libc::poll(&mut pollfd, 1, 1000) };
            if ready <= 0 {
                break;
            }
            if pollfd.revents & libc::POLLIN != 0 {
                loop {
                    let got = recv_records(&channel, &mut buf, BATCH, RECORD_SIZE)?;
                    if got == 0 {
                        break;
                    }
                    total += got;
                    eprintln!("drained {got} records ({total} so far)");
                }
            }
            if pollfd.revents & (libc::POLLHUP | libc::POLLERR) != 0 {
                eprintln!("producer hung up");
                break;
            }
        }
        Ok(total)
    });

    let mut records = [0u8; BATCH * RECORD_SIZE];
    for batch in 0..25u8 {
        for (i, byte) in records.iter_mut().enumerate() {
            *byte = batch.wrapping_mul(BATCH as u8).wrapping_add((i / RECORD_SIZE) as u8);
        }
        loop {
            match send_records(&producer, &records, BATCH, RECORD_SIZE) {
                Ok(_) => break,
                Err(ChannelError::Backpressure) => {
                    // Kernel buffer is full; let the consumer catch up.
                    thread::yield_now();
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
    drop(producer);

    let total = consumer.join().expect("consumer thread panicked")?;
    eprintln!("consumer saw {total} records");
    Ok(())
}
