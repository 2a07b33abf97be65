//! End-to-end handoff: a producer builds a channel, ships the receive side
//! through a carrier, and a consumer on another thread rebuilds it and
//! drains records.

use std::thread;
use std::time::{Duration, Instant};

use evpair_channel::{
    recv_records, send_records, Channel, ChannelError, FdCarrier, PairConfig,
};

const RECORD_SIZE: usize = 24;

fn record(seq: u8) -> [u8; RECORD_SIZE] {
    [seq; RECORD_SIZE]
}

/// Drain one batch, waiting out the producer if it has not sent yet.
fn recv_with_patience(channel: &Channel, buf: &mut [u8], count: usize) -> usize {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let got = recv_records(channel, buf, count, RECORD_SIZE).expect("recv should succeed");
        if got > 0 {
            return got;
        }
        assert!(Instant::now() < deadline, "timed out waiting for records");
        thread::sleep(Duration::from_millis(1));
    }
}

#[test]
fn receive_side_survives_a_thread_handoff() {
    let mut producer = Channel::with_config(PairConfig {
        debug_name: Some(evpair_channel::process_thread_label()),
        ..PairConfig::default()
    });
    producer.init_check().expect("producer channel should be valid");

    let mut carrier = FdCarrier::new();
    producer
        .transfer_into(&mut carrier)
        .expect("transfer should succeed");

    // The producer kept its send side only.
    assert!(producer.send_fd().is_some());
    assert!(matches!(
        producer.init_check(),
        Err(ChannelError::NoReceiveHandle)
    ));

    let consumer = thread::spawn(move || {
        let channel = Channel::from_carrier(&carrier);
        channel.init_check().expect("rebuilt channel should be valid");
        assert!(channel.send_fd().is_none());

        let mut buf = [0u8; 4 * RECORD_SIZE];
        let mut total = 0usize;
        let mut next = 0u8;
        while total < 8 {
            let got = recv_with_patience(&channel, &mut buf, 4);
            for rec in buf[..got * RECORD_SIZE].chunks(RECORD_SIZE) {
                assert_eq!(rec, record(next), "records must arrive whole and in order");
                next = next.wrapping_add(1);
            }
            total += got;
        }
        total
    });

    // Records sent after the handoff still land at the rebuilt end.
    for batch in 0..4u8 {
        let mut records = [0u8; 2 * RECORD_SIZE];
        records[..RECORD_SIZE].copy_from_slice(&record(batch * 2));
        records[RECORD_SIZE..].copy_from_slice(&record(batch * 2 + 1));
        send_records(&producer, &records, 2, RECORD_SIZE).expect("send should succeed");
    }

    let total = consumer.join().expect("consumer thread should not panic");
    assert_eq!(total, 8);
}

#[test]
fn backpressure_resolves_once_the_consumer_drains() {
    let channel = Channel::with_buffer_size(4 * 1024);
    let mut records = [0u8; 4 * RECORD_SIZE];
    for (i, byte) in records.iter_mut().enumerate() {
        *byte = (i / RECORD_SIZE) as u8;
    }

    // Fill until the kernel pushes back.
    let mut queued = 0usize;
    loop {
        match send_records(&channel, &records, 4, RECORD_SIZE) {
            Ok(sent) => queued += sent,
            Err(ChannelError::Backpressure) => break,
            Err(err) => panic!("unexpected send error: {err}"),
        }
        assert!(queued < 100_000, "send never reported backpressure");
    }

    // A consumer draining everything makes room again.
    let mut buf = [0u8; 4 * RECORD_SIZE];
    let mut drained = 0usize;
    loop {
        let got = recv_records(&channel, &mut buf, 4, RECORD_SIZE).expect("recv should succeed");
        if got == 0 {
            break;
        }
        drained += got;
    }
    assert_eq!(drained, queued);

    send_records(&channel, &records, 4, RECORD_SIZE)
        .expect("send should succeed after the drain");
}

#[test]
fn sender_dropping_reads_as_quiet_not_error() {
    let mut producer = Channel::new();
    let mut carrier = FdCarrier::new();
    producer.transfer_into(&mut carrier).expect("transfer");
    let consumer = Channel::from_carrier(&carrier);

    producer.send_raw(b"last words").expect("send should succeed");
    drop(producer);

    // The queued message is still delivered after the sender is gone.
    let mut buf = [0u8; 16];
    let n = consumer.recv_raw(&mut buf).expect("recv should succeed");
    assert_eq!(&buf[..n], b"last words");

    // After that, a hung-up channel reads as zero records; readiness
    // polling is what tells hangup apart from idle.
    assert_eq!(consumer.recv_raw(&mut buf).expect("recv should succeed"), 0);
}
