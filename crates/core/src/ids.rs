//! Record identifier generation.
//!
//! Identifiers are the creation time in milliseconds since the Unix epoch. Two records created
//! within the same millisecond would collide, so the generator never hands out a value less
//! than or equal to the last one it issued.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next identifier, based on the current wall clock.
    pub fn next_id(&self) -> i64 {
        self.next_after(Utc::now().timestamp_millis())
    }

    /// Next identifier given a clock reading in milliseconds.
    pub fn next_after(&self, now_millis: i64) -> i64 {
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now_millis.max(last.saturating_add(1));
            match self.last.compare_exchange_weak(
                last,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(current) => last = current,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_follows_clock() {
        let ids = IdGenerator::new();
        let before = Utc::now().timestamp_millis();
        let id = ids.next_id();
        assert!(id >= before, "id should be derived from the current time");
    }

    #[test]
    fn test_next_after_is_strictly_increasing_within_a_millisecond() {
        let ids = IdGenerator::new();
        let first = ids.next_after(1_700_000_000_000);
        let second = ids.next_after(1_700_000_000_000);
        let third = ids.next_after(1_700_000_000_000);
        assert_eq!(first, 1_700_000_000_000);
        assert_eq!(second, 1_700_000_000_001);
        assert_eq!(third, 1_700_000_000_002);
    }

    #[test]
    fn test_next_after_survives_clock_going_backwards() {
        let ids = IdGenerator::new();
        let first = ids.next_after(2_000);
        let second = ids.next_after(1_000);
        assert!(second > first);
    }

    #[test]
    fn test_next_id_is_unique_across_threads() {
        let ids = std::sync::Arc::new(IdGenerator::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = ids.clone();
                std::thread::spawn(move || (0..250).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut all: Vec<i64> = handles
            .into_iter()
            .flat_map(|h| h.join().expect("thread should not panic"))
            .collect();
        let total = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), total, "ids should never repeat");
    }
}
