//! Placeholder values used to prime an empty weekly window.
//!
//! These are not measurements. The source is injected so tests can supply a
//! deterministic sequence.

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};

/// Range a placeholder is drawn from, in kg CO₂.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderRange {
    pub min: f64,
    pub max: f64,
    /// Draw whole kilograms in `min..=max` instead of a continuous value in
    /// `min..max`.
    pub whole_kg: bool,
}

impl PlaceholderRange {
    /// Window creation and single-day reset: continuous 5–15 kg.
    pub const INITIAL: Self = Self {
        min: 5.0,
        max: 15.0,
        whole_kg: false,
    };

    /// "Clear all history": whole kg, 3–17.
    pub const CLEAR_HISTORY: Self = Self {
        min: 3.0,
        max: 17.0,
        whole_kg: true,
    };

    /// Factory reset: whole kg, 2–21.
    pub const FACTORY_RESET: Self = Self {
        min: 2.0,
        max: 21.0,
        whole_kg: true,
    };

    pub fn contains(&self, value: f64) -> bool {
        if self.whole_kg {
            value.fract() == 0.0 && value >= self.min && value <= self.max
        } else {
            value >= self.min && value < self.max
        }
    }
}

/// Supplies placeholder footprints.
pub trait PlaceholderSource {
    fn sample(&mut self, range: PlaceholderRange) -> f64;
}

/// Pseudo-random placeholders backed by a PCG generator.
pub struct RandomPlaceholders {
    rng: Mcg128Xsl64,
}

impl RandomPlaceholders {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mcg128Xsl64::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mcg128Xsl64::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is set, entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }
}

impl Default for RandomPlaceholders {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceholderSource for RandomPlaceholders {
    fn sample(&mut self, range: PlaceholderRange) -> f64 {
        if range.whole_kg {
            let lo = range.min.ceil() as i64;
            let hi = range.max.floor() as i64;
            self.rng.gen_range(lo..=hi) as f64
        } else {
            self.rng.gen_range(range.min..range.max)
        }
    }
}

/// Replays a fixed list of values, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct FixedPlaceholders {
    values: Vec<f64>,
    next: usize,
}

impl FixedPlaceholders {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }
}

impl PlaceholderSource for FixedPlaceholders {
    fn sample(&mut self, range: PlaceholderRange) -> f64 {
        if self.values.is_empty() {
            return range.min;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_source_is_reproducible() {
        let mut a = RandomPlaceholders::seeded(7);
        let mut b = RandomPlaceholders::seeded(7);
        for _ in 0..20 {
            assert_eq!(
                a.sample(PlaceholderRange::INITIAL),
                b.sample(PlaceholderRange::INITIAL)
            );
        }
    }

    #[test]
    fn samples_stay_in_range() {
        let mut source = RandomPlaceholders::seeded(42);
        for range in [
            PlaceholderRange::INITIAL,
            PlaceholderRange::CLEAR_HISTORY,
            PlaceholderRange::FACTORY_RESET,
        ] {
            for _ in 0..500 {
                let value = source.sample(range);
                assert!(range.contains(value), "{value} outside {range:?}");
            }
        }
    }

    #[test]
    fn fixed_source_cycles() {
        let mut source = FixedPlaceholders::new(vec![4.0, 6.0]);
        let r = PlaceholderRange::INITIAL;
        assert_eq!(source.sample(r), 4.0);
        assert_eq!(source.sample(r), 6.0);
        assert_eq!(source.sample(r), 4.0);
    }
}
