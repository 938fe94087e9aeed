use std::sync::atomic::{AtomicUsize, Ordering};

use crate::random::RandomSource;

/// Replays a fixed list of draws, wrapping around at the end
#[derive(Debug)]
pub struct SequenceRandom {
    values: Vec<f64>,
    next: AtomicUsize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "SequenceRandom needs at least one value");

        Self {
            values,
            next: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&self) -> f64 {
        let index = self.next.fetch_add(1, Ordering::SeqCst);
        self.values[index % self.values.len()]
    }
}
