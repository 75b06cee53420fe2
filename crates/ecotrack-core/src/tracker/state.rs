use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::achievements::AchievementState;
use crate::emission::FootprintInput;
use crate::error::Result;
use crate::feedback::PersonalTarget;
use crate::ledger::HistoryLedger;
use crate::weekly::{PlaceholderSource, WeeklyWindow};

/// Everything the engine owns for one session.
///
/// Plain serde value; persistence is up to the caller. Decoding rejects
/// windows without seven consecutive days and ledgers with duplicate dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerState {
    #[serde(default)]
    pub form: FootprintInput,
    #[serde(default)]
    pub history: HistoryLedger,
    pub week: WeeklyWindow,
    #[serde(default)]
    pub achievements: AchievementState,
    #[serde(default)]
    pub target: PersonalTarget,
}

impl TrackerState {
    /// Fresh state with an empty ledger and a placeholder week ending `today`.
    pub fn new(today: NaiveDate, source: &mut dyn PlaceholderSource) -> Self {
        Self {
            form: FootprintInput::default(),
            history: HistoryLedger::new(),
            week: WeeklyWindow::initialize(today, source),
            achievements: AchievementState::new(),
            target: PersonalTarget::default(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emission::DietType;
    use crate::weekly::{FixedPlaceholders, RandomPlaceholders};

    #[test]
    fn json_roundtrip_preserves_state() {
        let today: NaiveDate = "2024-06-01".parse().unwrap();
        let mut state = TrackerState::new(today, &mut FixedPlaceholders::new(vec![7.0]));
        state.form = FootprintInput::new(12.0, 4.0, DietType::NonVeg);
        state.target = PersonalTarget::new(11.0).unwrap();

        let back = TrackerState::from_json(&state.to_json().unwrap()).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn json_roundtrip_is_exact_for_random_placeholders() {
        let today: NaiveDate = "2024-06-01".parse().unwrap();
        for seed in 0..256 {
            let mut state = TrackerState::new(today, &mut RandomPlaceholders::seeded(seed));
            state.form = FootprintInput::new(0.1 + 0.2, 1.0 / 3.0, DietType::Mixed);

            let back = TrackerState::from_json(&state.to_json().unwrap()).unwrap();
            assert_eq!(back, state, "seed {seed}");
        }
    }

    #[test]
    fn missing_optional_sections_take_defaults() {
        let today: NaiveDate = "2024-06-01".parse().unwrap();
        let state = TrackerState::new(today, &mut FixedPlaceholders::new(vec![7.0]));
        let week = serde_json::to_value(&state.week).unwrap();
        let json = serde_json::json!({ "week": week }).to_string();

        let back = TrackerState::from_json(&json).unwrap();
        assert!(back.history.is_empty());
        assert_eq!(back.target, PersonalTarget::default());
        assert_eq!(back.form, FootprintInput::default());
    }

    #[test]
    fn short_window_is_rejected() {
        let json = r#"{ "week": [] }"#;
        let err = TrackerState::from_json(json).unwrap_err();
        assert!(err.to_string().contains("weekly window has 0 slots"));
    }
}
