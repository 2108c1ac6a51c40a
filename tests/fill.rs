use rand::{thread_rng, RngCore};

use mersenne::mt19937::N;
use mersenne::recovery::recover;
use mersenne::{Error, Mt19937};

fn serial(seed: u32, count: usize) -> Vec<u32> {
    let mut rng = Mt19937::new(seed);
    (0..count).map(|_| rng.next_u32()).collect()
}

#[test]
fn check_fill_matches_serial_generation() {
    // minimum, one over, and two non-multiples of the block length
    for &len in [2 * N, 2 * N + 1, 1300, 2000].iter() {
        let expected = serial(5489, len);

        let mut rng = Mt19937::new(5489);
        let mut buffer = vec![0_u32; len];
        rng.fill_block(&mut buffer).unwrap();

        assert_eq!(buffer, expected);
    }
}

#[test]
fn check_fill_then_singles_continues_the_stream() {
    let len = 2 * N;
    let expected = serial(99, len + 3 * N);

    let mut rng = Mt19937::new(99);
    let mut buffer = vec![0_u32; len];
    rng.fill_block(&mut buffer).unwrap();
    assert_eq!(buffer[..], expected[..len]);

    for value in expected[len..].iter() {
        assert_eq!(rng.next_u32(), *value);
    }
}

#[test]
fn check_singles_then_fill_at_block_boundary() {
    let seed = thread_rng().next_u32();
    let expected = serial(seed, 3 * N + 10);

    let mut rng = Mt19937::new(seed);
    for value in expected[..N].iter() {
        assert_eq!(rng.next_u32(), *value);
    }

    // N draws later the cursor is back at the boundary, so bulk fill is
    // allowed again
    let mut buffer = vec![0_u32; 2 * N];
    rng.fill_block(&mut buffer).unwrap();
    assert_eq!(buffer[..], expected[N..3 * N]);

    for value in expected[3 * N..].iter() {
        assert_eq!(rng.next_u32(), *value);
    }
}

#[test]
fn check_consecutive_fills_continue_the_stream() {
    let expected = serial(31337, 4 * N);

    let mut rng = Mt19937::new(31337);
    let mut first = vec![0_u32; 2 * N];
    let mut second = vec![0_u32; 2 * N];
    rng.fill_block(&mut first).unwrap();
    rng.fill_block(&mut second).unwrap();

    assert_eq!(first[..], expected[..2 * N]);
    assert_eq!(second[..], expected[2 * N..]);
}

#[test]
fn check_fill_rejects_short_buffers() {
    let mut rng = Mt19937::new(1);

    let mut short = vec![0_u32; 2 * N - 1];
    assert_eq!(rng.fill_block(&mut short), Err(Error::BufferLength));

    let mut exact = vec![0_u32; 2 * N];
    assert_eq!(rng.fill_block(&mut exact), Ok(()));
}

#[test]
fn check_fill_rejects_mid_block_calls() {
    let mut rng = Mt19937::new(1);
    let _ = rng.next_u32();

    let mut buffer = vec![0_u32; 2 * N];
    assert_eq!(rng.fill_block(&mut buffer), Err(Error::BlockInProgress));

    // the rejected call must not disturb the stream
    let mut fresh = Mt19937::new(1);
    let _ = fresh.next_u32();
    for _ in 0..N {
        assert_eq!(rng.next_u32(), fresh.next_u32());
    }
}

#[test]
fn check_recovered_generator_tracks_fills() {
    let mut source = Mt19937::new(thread_rng().next_u32());

    let mut observed = Vec::with_capacity(N);
    for _ in 0..N {
        observed.push(source.next_u32());
    }
    let mut clone = recover(&observed).unwrap();

    let mut a = vec![0_u32; 2 * N];
    let mut b = vec![0_u32; 2 * N];
    source.fill_block(&mut a).unwrap();
    clone.fill_block(&mut b).unwrap();

    assert_eq!(a, b);
}
