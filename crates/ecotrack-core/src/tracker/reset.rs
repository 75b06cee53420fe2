//! Reset levels and the confirmation gate in front of the destructive ones.

use serde::{Deserialize, Serialize};

/// Reset levels, from least to most destructive.
///
/// | Level            | Ledger          | Window                   | Achievements | Target | Form  |
/// |------------------|-----------------|--------------------------|--------------|--------|-------|
/// | `ClearForm`      |                 |                          |              |        | clear |
/// | `ResetToday`     | remove today    | today ← placeholder 5–15 |              |        | clear |
/// | `ClearHistory`   | clear           | all ← whole kg 3–17      | reset        |        |       |
/// | `FactoryReset`   | clear           | all ← whole kg 2–21      | reset        | 15 kg  | clear |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetLevel {
    ClearForm,
    ResetToday,
    ClearHistory,
    FactoryReset,
}

impl ResetLevel {
    /// Whether the caller must confirm before this level runs.
    pub fn requires_confirmation(&self) -> bool {
        matches!(self, ResetLevel::ClearHistory | ResetLevel::FactoryReset)
    }
}

impl std::fmt::Display for ResetLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ResetLevel::ClearForm => "clear form",
            ResetLevel::ResetToday => "reset today",
            ResetLevel::ClearHistory => "clear all history",
            ResetLevel::FactoryReset => "factory reset",
        })
    }
}

/// Caller's answer to the confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}

/// Status value emitted after an engine operation. Presentation decides how
/// long to show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackerStatus {
    Saved,
    FormCleared,
    TodayReset,
    HistoryCleared,
    FactoryReset,
}

impl TrackerStatus {
    pub fn message(&self) -> &'static str {
        match self {
            TrackerStatus::Saved => "Entry saved",
            TrackerStatus::FormCleared => "Form cleared",
            TrackerStatus::TodayReset => "Today's data reset",
            TrackerStatus::HistoryCleared => "All history cleared! Weekly data reset.",
            TrackerStatus::FactoryReset => "Complete factory reset successful!",
        }
    }
}

impl std::fmt::Display for TrackerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
