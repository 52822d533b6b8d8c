#![cfg(feature = "rand_core")]

use hwentropy::rng::HardwareRng;
use hwentropy::{Shortfall, WordSource, cpu_has_rdrand};
use rand_core::RngCore;

/// Counts up from `next`, failing once `limit` words have been produced.
struct Counter {
    next: u64,
    calls: usize,
    limit: usize,
}

impl Counter {
    fn new(next: u64, limit: usize) -> Self {
        Self {
            next,
            calls: 0,
            limit,
        }
    }
}

impl WordSource for Counter {
    fn next_word(&mut self) -> Option<u64> {
        self.calls += 1;
        if self.calls > self.limit {
            return None;
        }

        let word = self.next;
        self.next += 1;
        Some(word)
    }
}

/// Word-aligned backing store, so fills take the bulk path only.
#[repr(C, align(8))]
struct Aligned([u8; 24]);

#[test]
fn test_rng_constructor_follows_cpu_support() {
    assert_eq!(HardwareRng::new().is_some(), cpu_has_rdrand());
}

#[test]
fn test_rng_fills_through_rng_core() {
    let Some(mut rng) = HardwareRng::new() else {
        return;
    };

    let mut buf = [0u8; 61];
    rng.try_fill_bytes(&mut buf[1..]).unwrap();
    assert!(buf[1..].iter().any(|&b| b != 0));

    let mut other = [0u8; 32];
    rng.fill_bytes(&mut other);
    assert_ne!(other, [0u8; 32]);
}

#[test]
fn test_rng_integer_outputs_vary() {
    let Some(mut rng) = HardwareRng::new() else {
        return;
    };

    let words: Vec<u64> = (0..4).map(|_| rng.next_u64()).collect();
    assert!(words.windows(2).any(|w| w[0] != w[1]));

    let halves: Vec<u32> = (0..4).map(|_| rng.next_u32()).collect();
    assert!(halves.windows(2).any(|w| w[0] != w[1]));
}

#[test]
fn test_rng_empty_fill_succeeds() {
    let mut rng = HardwareRng::from_source(Counter::new(0, 0));

    assert!(rng.try_fill_bytes(&mut []).is_ok());
    assert_eq!(rng.into_source().calls, 0);
}

#[test]
fn test_rng_words_come_from_source() {
    let mut rng = HardwareRng::from_source(Counter::new(0x1_0000_0005, 3));

    assert_eq!(rng.next_u64(), 0x1_0000_0005);
    assert_eq!(rng.next_u32(), 6);

    let mut store = Aligned([0u8; 24]);
    rng.try_fill_bytes(&mut store.0[..8]).unwrap();
    assert_eq!(store.0[..8], 0x1_0000_0007u64.to_le_bytes());
}

#[test]
fn test_rng_try_fill_reports_shortfall() {
    // Two words succeed, the third fails.
    let mut rng = HardwareRng::from_source(Counter::new(1, 2));
    let mut store = Aligned([0u8; 24]);

    let err = rng.try_fill_bytes(&mut store.0).unwrap_err();
    let shortfall = err.inner().downcast_ref::<Shortfall>().unwrap();

    assert_eq!(
        *shortfall,
        Shortfall {
            requested: 24,
            written: 16
        }
    );
    assert_eq!(store.0[16..], [0u8; 8]);
}

#[test]
fn test_rng_try_fill_fails_on_first_word() {
    let mut rng = HardwareRng::from_source(Counter::new(1, 0));
    let mut buf = [0u8; 5];

    let err = rng.try_fill_bytes(&mut buf).unwrap_err();

    assert_eq!(
        err.inner().downcast_ref::<Shortfall>(),
        Some(&Shortfall {
            requested: 5,
            written: 0
        })
    );
}

#[test]
#[should_panic]
fn test_rng_fill_bytes_panics_on_shortfall() {
    let mut rng = HardwareRng::from_source(Counter::new(1, 1));
    let mut buf = [0u8; 16];

    rng.fill_bytes(&mut buf);
}

#[test]
#[should_panic]
fn test_rng_next_u64_panics_on_failed_word() {
    let mut rng = HardwareRng::from_source(Counter::new(1, 0));

    rng.next_u64();
}
