//! Bounded random weather values.
//!
//! The generator owns a single pseudo-random source, seeded once when
//! it is created. It sits behind a `Mutex` so one instance can be
//! shared by every connection task.

use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::kind::MeasurementKind;

#[derive(Debug)]
pub struct WeatherGenerator {
    rng: Mutex<StdRng>,
}

impl WeatherGenerator {
    /// Seed from the current wall-clock time.
    ///
    /// Successive runs produce different sequences.
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        WeatherGenerator::with_seed(seed)
    }

    /// Fixed seed, for reproducible sequences in tests.
    pub fn with_seed(seed: u64) -> Self {
        WeatherGenerator {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Draw a value for `kind`, uniform over its range, rounded to one
    /// decimal place.
    pub fn generate(&self, kind: MeasurementKind) -> f32 {
        let (min, max) = kind.range();

        // The lock only guards RNG state; a panicked holder cannot leave it
        // inconsistent.
        let raw: f32 = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            rng.gen_range(min..=max)
        };

        round_one_decimal(raw).clamp(min, max)
    }
}

impl Default for WeatherGenerator {
    fn default() -> Self {
        WeatherGenerator::from_time()
    }
}

fn round_one_decimal(v: f32) -> f32 {
    (v * 10.0).round() / 10.0
}
