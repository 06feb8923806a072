//! Invocation counters.
//!
//! State is owned by the caller. [`Counter`] needs `&mut` access and is the
//! default; [`AtomicCounter`] can be shared across threads.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Counter {
    value: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment by one and return the new value.
    pub fn increment(&mut self) -> u64 {
        self.value += 1;
        self.value
    }

    pub fn value(&self) -> u64 {
        self.value
    }
}

/// Increment `counter` and return its post-increment value.
pub fn increment_counter(counter: &mut Counter) -> u64 {
    counter.increment()
}

/// Thread-safe counter with the same semantics as [`Counter`].
#[derive(Debug, Default)]
pub struct AtomicCounter {
    value: AtomicU64,
}

impl AtomicCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) -> u64 {
        self.value.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn value(&self) -> u64 {
        self.value.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_fresh_counter_counts_from_one() {
        let mut counter = Counter::new();
        assert_eq!(increment_counter(&mut counter), 1);
        assert_eq!(increment_counter(&mut counter), 2);
        assert_eq!(counter.value(), 2);
    }

    #[test]
    fn test_counters_are_independent() {
        let mut a = Counter::new();
        let mut b = Counter::new();
        a.increment();
        a.increment();
        assert_eq!(b.increment(), 1);
    }

    #[test]
    fn test_atomic_counter_under_contention() {
        let counter = Arc::new(AtomicCounter::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        counter.increment();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(counter.value(), 8000);
        assert_eq!(counter.increment(), 8001);
    }
}
