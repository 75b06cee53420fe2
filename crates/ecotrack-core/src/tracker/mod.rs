//! Session orchestrator.
//!
//! [`Tracker`] owns the [`TrackerState`] and routes every mutation through a
//! named operation: editing the form, saving a day, the four reset levels,
//! and target changes. Reads return snapshots; nothing here blocks or
//! retries.
//!
//! "Today" is always supplied by the caller so the engine stays
//! deterministic under test.

mod reset;
mod state;

pub use reset::{Confirmation, ResetLevel, TrackerStatus};
pub use state::TrackerState;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::achievements::AchievementState;
use crate::emission::{compute, DietType, FootprintBreakdown, FootprintInput};
use crate::error::ResetError;
use crate::feedback::{evaluate_badges, evaluate_tips, Badge, FootprintBand, PersonalTarget, Tip};
use crate::ledger::{HistoryEntry, HistoryLedger};
use crate::report::{build_report, Report};
use crate::weekly::{PlaceholderRange, PlaceholderSource, WeeklyWindow};

/// Result of saving the current form for a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveOutcome {
    pub entry: HistoryEntry,
    /// An earlier entry for the same date was overwritten
    pub replaced: bool,
    /// The weekly window contained the date and was updated
    pub window_updated: bool,
}

impl SaveOutcome {
    pub fn status(&self) -> TrackerStatus {
        TrackerStatus::Saved
    }
}

#[derive(Debug, Clone)]
pub struct Tracker {
    state: TrackerState,
}

impl Tracker {
    pub fn new(today: NaiveDate, source: &mut dyn PlaceholderSource) -> Self {
        Self {
            state: TrackerState::new(today, source),
        }
    }

    pub fn from_state(state: TrackerState) -> Self {
        Self { state }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn into_state(self) -> TrackerState {
        self.state
    }

    pub fn form(&self) -> &FootprintInput {
        &self.state.form
    }

    pub fn breakdown(&self) -> FootprintBreakdown {
        compute(&self.state.form)
    }

    pub fn badges(&self) -> Vec<Badge> {
        evaluate_badges(&self.state.form, &self.breakdown(), self.state.target)
    }

    pub fn tips(&self) -> Vec<Tip> {
        evaluate_tips(&self.state.form, &self.breakdown())
    }

    pub fn band(&self) -> FootprintBand {
        self.state.target.band(self.breakdown().total)
    }

    pub fn progress_pct(&self) -> f64 {
        self.state.target.progress_pct(self.breakdown().total)
    }

    pub fn target(&self) -> PersonalTarget {
        self.state.target
    }

    pub fn history(&self) -> &HistoryLedger {
        &self.state.history
    }

    pub fn week(&self) -> &WeeklyWindow {
        &self.state.week
    }

    pub fn achievements(&self) -> &AchievementState {
        &self.state.achievements
    }

    /// Report data for export. Does not touch state.
    pub fn report(&self, generated_at: DateTime<Utc>, history_limit: usize) -> Report {
        build_report(&self.state, generated_at, history_limit)
    }

    // ── Form ─────────────────────────────────────────────────────────

    pub fn set_form(&mut self, input: FootprintInput) {
        self.state.form = input;
        debug!(?input, total = self.breakdown().total, "form updated");
    }

    /// Update the form from raw field text; unparsable numbers become 0.
    pub fn edit_fields(&mut self, distance: &str, electricity: &str, diet: DietType) {
        self.set_form(FootprintInput::from_fields(distance, electricity, diet));
    }

    pub fn set_target(&mut self, target: PersonalTarget) {
        self.state.target = target;
        info!(target_kg = target.kg(), "personal target updated");
    }

    // ── Save ─────────────────────────────────────────────────────────

    /// Save the current form as the entry for `today`.
    ///
    /// Upserts the ledger, writes today's weekly slot when the window still
    /// contains today, and records the save in the achievements.
    pub fn save_entry(&mut self, today: NaiveDate) -> SaveOutcome {
        let breakdown = self.breakdown();
        let form = self.state.form;
        let entry = HistoryEntry {
            date: today,
            footprint: breakdown.total,
            distance_km: form.distance_km,
            electricity_kwh: form.electricity_kwh,
            diet: form.diet,
        };

        let replaced = self.state.history.upsert(entry.clone()).is_some();
        let window_updated = self.state.week.record_today(today, breakdown.total);
        self.state.achievements.record_save(&breakdown);

        info!(
            %today,
            footprint = breakdown.total,
            replaced,
            window_updated,
            days_tracked = self.state.achievements.days_tracked,
            "entry saved"
        );

        SaveOutcome {
            entry,
            replaced,
            window_updated,
        }
    }

    /// Rebuild the weekly window when the day has rolled over.
    pub fn refresh_window(&mut self, today: NaiveDate, source: &mut dyn PlaceholderSource) -> bool {
        let rebuilt = self.state.week.refresh(today, source);
        if rebuilt {
            info!(%today, "weekly window rolled over");
        }
        rebuilt
    }

    // ── Resets ───────────────────────────────────────────────────────

    /// Run a reset level. Bulk levels refuse unless `confirmation` is
    /// [`Confirmation::Confirmed`]; refusal leaves state untouched.
    pub fn reset(
        &mut self,
        level: ResetLevel,
        confirmation: Confirmation,
        today: NaiveDate,
        source: &mut dyn PlaceholderSource,
    ) -> Result<TrackerStatus, ResetError> {
        if level.requires_confirmation() && confirmation != Confirmation::Confirmed {
            return Err(ResetError::ConfirmationRequired(level));
        }

        let status = match level {
            ResetLevel::ClearForm => self.clear_form(),
            ResetLevel::ResetToday => self.reset_today(today, source),
            ResetLevel::ClearHistory => {
                self.wipe_history(today, PlaceholderRange::CLEAR_HISTORY, source);
                TrackerStatus::HistoryCleared
            }
            ResetLevel::FactoryReset => {
                self.wipe_history(today, PlaceholderRange::FACTORY_RESET, source);
                self.state.target = PersonalTarget::default();
                self.state.form = FootprintInput::default();
                TrackerStatus::FactoryReset
            }
        };

        info!(%level, %today, "reset complete");
        Ok(status)
    }

    pub fn clear_form(&mut self) -> TrackerStatus {
        self.state.form = FootprintInput::default();
        TrackerStatus::FormCleared
    }

    /// Drop today's entry and re-prime today's weekly slot.
    ///
    /// Achievements are left alone.
    pub fn reset_today(&mut self, today: NaiveDate, source: &mut dyn PlaceholderSource) -> TrackerStatus {
        self.state.form = FootprintInput::default();
        self.state.history.remove_by_date(today);
        self.state.week.reseed_today(today, source);
        TrackerStatus::TodayReset
    }

    pub fn clear_all_history(
        &mut self,
        confirmation: Confirmation,
        today: NaiveDate,
        source: &mut dyn PlaceholderSource,
    ) -> Result<TrackerStatus, ResetError> {
        self.reset(ResetLevel::ClearHistory, confirmation, today, source)
    }

    pub fn factory_reset(
        &mut self,
        confirmation: Confirmation,
        today: NaiveDate,
        source: &mut dyn PlaceholderSource,
    ) -> Result<TrackerStatus, ResetError> {
        self.reset(ResetLevel::FactoryReset, confirmation, today, source)
    }

    fn wipe_history(
        &mut self,
        today: NaiveDate,
        range: PlaceholderRange,
        source: &mut dyn PlaceholderSource,
    ) {
        self.state.history.clear();
        self.state
            .week
            .reset_with_fresh_placeholders(today, range, source);
        self.state.achievements.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekly::FixedPlaceholders;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn tracker(today: NaiveDate) -> Tracker {
        Tracker::new(today, &mut FixedPlaceholders::new(vec![10.0]))
    }

    #[test]
    fn save_writes_ledger_window_and_achievements() {
        let today = day("2024-05-20");
        let mut t = tracker(today);
        t.set_form(FootprintInput::new(0.0, 3.0, DietType::Vegetarian));

        let outcome = t.save_entry(today);

        assert!(!outcome.replaced);
        assert!(outcome.window_updated);
        assert_eq!(t.history().len(), 1);
        assert!((t.week().slots()[6].footprint - 5.36).abs() < 1e-9);
        assert_eq!(t.achievements().days_tracked, 1);
        assert_eq!(t.achievements().green_days, 1);
    }

    #[test]
    fn saving_twice_keeps_one_entry_but_counts_twice() {
        let today = day("2024-05-20");
        let mut t = tracker(today);
        t.save_entry(today);
        t.set_form(FootprintInput::new(40.0, 0.0, DietType::Mixed));
        let outcome = t.save_entry(today);

        assert!(outcome.replaced);
        assert_eq!(t.history().len(), 1);
        assert_eq!(t.history().get(today).unwrap().distance_km, 40.0);
        assert_eq!(t.achievements().days_tracked, 2);
    }

    #[test]
    fn stale_window_still_saves_history() {
        let mut t = tracker(day("2024-05-20"));
        let outcome = t.save_entry(day("2024-05-21"));
        assert!(!outcome.window_updated);
        assert_eq!(t.history().len(), 1);
    }

    #[test]
    fn reset_today_keeps_achievements() {
        let today = day("2024-05-20");
        let mut t = tracker(today);
        t.set_form(FootprintInput::new(5.0, 5.0, DietType::NonVeg));
        t.save_entry(today);

        let status = t.reset_today(today, &mut FixedPlaceholders::new(vec![6.5]));

        assert_eq!(status, TrackerStatus::TodayReset);
        assert!(t.history().is_empty());
        assert_eq!(t.week().slots()[6].footprint, 6.5);
        assert_eq!(t.achievements().days_tracked, 1);
        assert_eq!(*t.form(), FootprintInput::default());
    }

    #[test]
    fn bulk_resets_require_confirmation() {
        let today = day("2024-05-20");
        let mut t = tracker(today);
        t.save_entry(today);
        let before = t.state().clone();

        let err = t
            .clear_all_history(Confirmation::Declined, today, &mut FixedPlaceholders::new(vec![3.0]))
            .unwrap_err();
        assert_eq!(err, ResetError::ConfirmationRequired(ResetLevel::ClearHistory));
        assert_eq!(t.state(), &before);
    }

    #[test]
    fn clear_history_keeps_target_and_form() {
        let today = day("2024-05-20");
        let mut t = tracker(today);
        t.set_target(PersonalTarget::new(9.0).unwrap());
        t.set_form(FootprintInput::new(1.0, 1.0, DietType::Vegetarian));
        t.save_entry(today);

        let status = t
            .clear_all_history(Confirmation::Confirmed, today, &mut FixedPlaceholders::new(vec![3.0, 17.0]))
            .unwrap();

        assert_eq!(status, TrackerStatus::HistoryCleared);
        assert!(t.history().is_empty());
        assert_eq!(t.achievements().days_tracked, 0);
        assert_eq!(t.target().kg(), 9.0);
        assert_eq!(t.form().distance_km, 1.0);
        assert_eq!(t.week().slots()[1].footprint, 17.0);
    }

    #[test]
    fn factory_reset_restores_defaults() {
        let today = day("2024-05-20");
        let mut t = tracker(today);
        t.set_target(PersonalTarget::new(9.0).unwrap());
        t.set_form(FootprintInput::new(1.0, 1.0, DietType::Vegetarian));
        t.save_entry(today);

        t.factory_reset(Confirmation::Confirmed, today, &mut FixedPlaceholders::new(vec![21.0]))
            .unwrap();

        assert!(t.history().is_empty());
        assert_eq!(*t.achievements(), AchievementState::default());
        assert_eq!(t.target(), PersonalTarget::default());
        assert_eq!(*t.form(), FootprintInput::default());
        assert!(t.week().slots().iter().all(|s| s.footprint == 21.0));
    }

    #[test]
    fn clear_form_touches_nothing_else() {
        let today = day("2024-05-20");
        let mut t = tracker(today);
        t.set_form(FootprintInput::new(3.0, 3.0, DietType::NonVeg));
        t.save_entry(today);
        let history = t.history().clone();

        let status = t
            .reset(ResetLevel::ClearForm, Confirmation::Declined, today, &mut FixedPlaceholders::new(vec![]))
            .unwrap();

        assert_eq!(status, TrackerStatus::FormCleared);
        assert_eq!(t.history(), &history);
        assert_eq!(t.achievements().days_tracked, 1);
    }

    #[test]
    fn edit_fields_clamps_garbage() {
        let mut t = tracker(day("2024-05-20"));
        t.edit_fields("oops", "-2", DietType::Vegetarian);
        assert_eq!(t.breakdown().total, 2.9);
        assert!(t.badges().contains(&Badge::CarFreeDay));
    }
}
