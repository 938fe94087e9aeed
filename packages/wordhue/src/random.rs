use std::sync::Mutex;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of uniform reals in `[0, 1)`
///
/// Everything random in the service goes through this, so tests can swap in a
/// fixed sequence and assert exact outputs.
pub trait RandomSource: Send + Sync {
    fn next_f64(&self) -> f64;

    /// Uniform integer in `[min, max]`, inclusive on both ends
    fn random_int(&self, min: u32, max: u32) -> u32 {
        let span = (max - min) as f64 + 1.0;
        // a misbehaving source returning 1.0 must still land in range
        ((self.next_f64() * span).floor() as u32)
            .saturating_add(min)
            .min(max)
    }

    /// Uniform index into a collection of `len` items, `len` must not be zero
    fn random_index(&self, len: usize) -> usize {
        ((self.next_f64() * len as f64).floor() as usize).min(len.saturating_sub(1))
    }
}

/// The default: the thread-local generator from `rand`
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Reproducible output for a given seed, set via the `seed` config option
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&self) -> f64 {
        match self.rng.lock() {
            Ok(mut rng) => rng.random::<f64>(),
            // a panic mid-draw can't leave the rng in a bad state
            Err(poisoned) => poisoned.into_inner().random::<f64>(),
        }
    }
}
