//! Personal daily target and the classifications derived from it.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Default daily target in kg CO₂.
pub const DEFAULT_TARGET_KG: f64 = 15.0;

/// Share of the target under which a footprint counts as low.
const LOW_BAND_RATIO: f64 = 0.6;
/// Share of the target at or under which a weekly slot gets a star.
const STAR_RATIO: f64 = 0.8;

/// User-configurable daily threshold. Never alters the emission factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonalTarget(f64);

impl PersonalTarget {
    /// Strict constructor for programmatic use.
    pub fn new(kg: f64) -> Result<Self, ValidationError> {
        if kg.is_finite() && kg > 0.0 {
            Ok(Self(kg))
        } else {
            Err(ValidationError::InvalidTarget(kg))
        }
    }

    /// Lenient parse used by the settings field: anything unusable falls back
    /// to the default target.
    pub fn parse_lenient(raw: &str) -> Self {
        raw.trim()
            .parse::<f64>()
            .ok()
            .and_then(|kg| Self::new(kg).ok())
            .unwrap_or_default()
    }

    pub fn kg(&self) -> f64 {
        self.0
    }

    /// Color band of a footprint relative to this target.
    pub fn band(&self, footprint: f64) -> FootprintBand {
        if footprint < self.0 * LOW_BAND_RATIO {
            FootprintBand::Low
        } else if footprint < self.0 {
            FootprintBand::Moderate
        } else {
            FootprintBand::High
        }
    }

    /// Whether a weekly slot earns the star marker (at or under 80% of target).
    pub fn earns_star(&self, footprint: f64) -> bool {
        footprint <= self.0 * STAR_RATIO
    }

    /// Whether the day's total meets the target (inclusive).
    pub fn is_met_by(&self, footprint: f64) -> bool {
        footprint <= self.0
    }

    /// Progress bar fill, in percent, capped at 100.
    pub fn progress_pct(&self, footprint: f64) -> f64 {
        (footprint / self.0 * 100.0).min(100.0)
    }

    pub fn compare(&self, footprint: f64) -> TargetComparison {
        if footprint < self.0 {
            TargetComparison::Under(self.0 - footprint)
        } else {
            TargetComparison::Over(footprint - self.0)
        }
    }
}

impl Default for PersonalTarget {
    fn default() -> Self {
        Self(DEFAULT_TARGET_KG)
    }
}

/// Color band used for the headline figure and weekly bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FootprintBand {
    /// Under 60% of target (green)
    Low,
    /// Under target (yellow)
    Moderate,
    /// At or over target (red)
    High,
}

impl FootprintBand {
    pub fn color(&self) -> &'static str {
        match self {
            FootprintBand::Low => "green",
            FootprintBand::Moderate => "yellow",
            FootprintBand::High => "red",
        }
    }
}

/// Distance to the target, in kg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "side", content = "kg", rename_all = "snake_case")]
pub enum TargetComparison {
    Under(f64),
    Over(f64),
}

impl std::fmt::Display for TargetComparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetComparison::Under(kg) => write!(f, "✅ {kg:.1}kg under your target!"),
            TargetComparison::Over(kg) => write!(f, "⚠️ {kg:.1}kg over your target"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_constructor_rejects_non_positive() {
        assert!(PersonalTarget::new(0.0).is_err());
        assert!(PersonalTarget::new(-3.0).is_err());
        assert!(PersonalTarget::new(f64::NAN).is_err());
        assert_eq!(PersonalTarget::new(12.0).unwrap().kg(), 12.0);
    }

    #[test]
    fn lenient_parse_falls_back_to_default() {
        assert_eq!(PersonalTarget::parse_lenient("abc").kg(), DEFAULT_TARGET_KG);
        assert_eq!(PersonalTarget::parse_lenient("0").kg(), DEFAULT_TARGET_KG);
        assert_eq!(PersonalTarget::parse_lenient("9.5").kg(), 9.5);
    }

    #[test]
    fn bands_follow_target() {
        let target = PersonalTarget::default();
        assert_eq!(target.band(8.9), FootprintBand::Low);
        assert_eq!(target.band(9.0), FootprintBand::Moderate);
        assert_eq!(target.band(14.9), FootprintBand::Moderate);
        assert_eq!(target.band(15.0), FootprintBand::High);
    }

    #[test]
    fn star_is_inclusive_at_eighty_percent() {
        let target = PersonalTarget::new(10.0).unwrap();
        assert!(target.earns_star(8.0));
        assert!(!target.earns_star(8.01));
    }

    #[test]
    fn progress_is_capped() {
        let target = PersonalTarget::default();
        assert_eq!(target.progress_pct(7.5), 50.0);
        assert_eq!(target.progress_pct(40.0), 100.0);
    }

    #[test]
    fn comparison_text() {
        let target = PersonalTarget::default();
        assert_eq!(target.compare(12.0).to_string(), "✅ 3.0kg under your target!");
        assert_eq!(target.compare(16.5).to_string(), "⚠️ 1.5kg over your target");
    }
}
