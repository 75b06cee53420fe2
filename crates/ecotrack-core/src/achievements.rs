//! Achievement counters accumulated on every save.

use serde::{Deserialize, Serialize};

use crate::emission::FootprintBreakdown;

/// Fixed reference day used by the reduction score, in kg CO₂.
///
/// Independent of the personal target.
pub const REDUCTION_REFERENCE_KG: f64 = 20.0;
/// A saved day under this total counts as a green day.
pub const GREEN_DAY_UNDER_KG: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AchievementState {
    pub days_tracked: u32,
    /// Cumulative reduction score, floored at 0. Not bounded by 100.
    pub total_reduction_pct: f64,
    pub green_days: u32,
}

impl AchievementState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one save event.
    pub fn record_save(&mut self, breakdown: &FootprintBreakdown) {
        let nudge = (REDUCTION_REFERENCE_KG - breakdown.total) / REDUCTION_REFERENCE_KG * 100.0;

        self.days_tracked = self.days_tracked.saturating_add(1);
        self.total_reduction_pct = (self.total_reduction_pct + nudge).max(0.0);
        if breakdown.total < GREEN_DAY_UNDER_KG {
            self.green_days = self.green_days.saturating_add(1);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(kg: f64) -> FootprintBreakdown {
        FootprintBreakdown {
            total: kg,
            ..Default::default()
        }
    }

    #[test]
    fn three_saves_accumulate_stepwise() {
        let mut state = AchievementState::new();
        for kg in [9.0, 20.0, 4.0] {
            state.record_save(&total(kg));
        }

        assert_eq!(state.days_tracked, 3);
        assert_eq!(state.green_days, 2);
        // 55 + 0 + 80
        assert!((state.total_reduction_pct - 135.0).abs() < 1e-9);
    }

    #[test]
    fn reduction_is_floored_at_zero() {
        let mut state = AchievementState::new();
        state.record_save(&total(60.0));
        assert_eq!(state.total_reduction_pct, 0.0);

        state.record_save(&total(10.0));
        assert_eq!(state.total_reduction_pct, 50.0);
        state.record_save(&total(40.0));
        assert_eq!(state.total_reduction_pct, 0.0);
    }

    #[test]
    fn green_day_threshold_is_exclusive() {
        let mut state = AchievementState::new();
        state.record_save(&total(10.0));
        assert_eq!(state.green_days, 0);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut state = AchievementState::new();
        state.record_save(&total(3.0));
        state.reset();
        assert_eq!(state, AchievementState::default());
    }
}
