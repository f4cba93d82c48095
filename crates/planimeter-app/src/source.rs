//! Simulated measurement source.

use planimeter_core::{BoxFuture, Measurement, MeasurementSource};
use rand::Rng;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Yields a random distance after a short random delay, standing in for a
/// real measurement backend.
#[derive(Debug, Clone)]
pub struct RandomSource {
    pub distances: RangeInclusive<f64>,
    pub latency_ms: RangeInclusive<u64>,
}

impl Default for RandomSource {
    fn default() -> Self {
        Self {
            distances: 1.0..=10.0,
            latency_ms: 50..=400,
        }
    }
}

impl MeasurementSource for RandomSource {
    fn request(&self) -> BoxFuture<'_, Measurement> {
        let mut rng = rand::rng();
        let distance = rng.random_range(self.distances.clone());
        let delay = Duration::from_millis(rng.random_range(self.latency_ms.clone()));
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            Measurement { distance }
        })
    }
}
