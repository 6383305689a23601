//! Injectable randomness for the simulation

use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

/// A source of uniform values in `[0, 1)`
///
/// Production code uses the thread RNG, seeded runs and tests use [`StdRng`],
/// and [`ReplaySource`] replays exact values.
pub trait RandomSource {
    /// Returns the next uniform value in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Returns a uniform value in `[low, high)`
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_unit() * (high - low)
    }
}

impl RandomSource for ThreadRng {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

impl RandomSource for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Replays a fixed list of values, cycling when exhausted
///
/// Values are clamped into `[0, 1)` so a replayed list can never push the
/// simulation outside its documented ranges.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    values: Vec<f64>,
    position: usize,
}

impl ReplaySource {
    /// Creates a replay source; an empty list replays `0.5` forever
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let mut values = values.into();
        if values.is_empty() {
            values.push(0.5);
        }
        Self {
            values,
            position: 0,
        }
    }
}

impl RandomSource for ReplaySource {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_replay_source_cycles() {
        let mut source = ReplaySource::new(vec![0.1, 0.2]);
        assert_eq!(source.next_unit(), 0.1);
        assert_eq!(source.next_unit(), 0.2);
        assert_eq!(source.next_unit(), 0.1);
    }

    #[test]
    fn test_replay_source_empty_defaults_to_midpoint() {
        let mut source = ReplaySource::new(Vec::new());
        assert_eq!(source.next_unit(), 0.5);
    }

    #[test]
    fn test_replay_source_clamps_out_of_range_values() {
        let mut source = ReplaySource::new(vec![-3.0, 7.0]);
        assert_eq!(source.next_unit(), 0.0);
        assert!(source.next_unit() < 1.0);
    }

    #[test]
    fn test_uniform_maps_unit_interval() {
        let mut source = ReplaySource::new(vec![0.0, 0.5]);
        assert_eq!(source.uniform(-20.0, 20.0), -20.0);
        assert_eq!(source.uniform(-20.0, 20.0), 0.0);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            let value = a.next_unit();
            assert!((0.0..1.0).contains(&value));
            assert_eq!(value, b.next_unit());
        }
    }

    #[test]
    fn test_boxed_source_delegates() {
        let mut boxed: Box<dyn RandomSource> = Box::new(ReplaySource::new(vec![0.25]));
        assert_eq!(boxed.next_unit(), 0.25);
    }
}
