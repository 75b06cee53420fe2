//! Seven-day rolling window ending on the day it was last (re)built.
//!
//! The window is a snapshot: it does not advance on its own. On day rollover
//! the caller rebuilds it (see [`WeeklyWindow::refresh`]).

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::placeholder::{PlaceholderRange, PlaceholderSource};
use crate::error::InvariantViolation;

pub const WINDOW_DAYS: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSlot {
    /// Short English weekday name ("Mon", "Tue", ...)
    pub day_label: String,
    pub date: NaiveDate,
    /// kg CO₂; a placeholder until a save targets this date
    pub footprint: f64,
}

impl WeekSlot {
    fn new(date: NaiveDate, footprint: f64) -> Self {
        Self {
            day_label: date.format("%a").to_string(),
            date,
            footprint,
        }
    }
}

/// Exactly seven slots, oldest to newest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<WeekSlot>", into = "Vec<WeekSlot>")]
pub struct WeeklyWindow {
    slots: [WeekSlot; WINDOW_DAYS],
}

impl WeeklyWindow {
    /// Build the window for the week ending `today`, primed with placeholders
    /// from [`PlaceholderRange::INITIAL`].
    pub fn initialize(today: NaiveDate, source: &mut dyn PlaceholderSource) -> Self {
        Self::build(today, PlaceholderRange::INITIAL, source)
    }

    /// Regenerate every slot for the week ending `today`.
    pub fn reset_with_fresh_placeholders(
        &mut self,
        today: NaiveDate,
        range: PlaceholderRange,
        source: &mut dyn PlaceholderSource,
    ) {
        *self = Self::build(today, range, source);
        debug!(%today, ?range, "weekly window reset");
    }

    /// Overwrite today's slot. Returns `false`, leaving the window untouched,
    /// when the window does not contain `today`.
    pub fn record_today(&mut self, today: NaiveDate, footprint: f64) -> bool {
        match self.slot_mut(today) {
            Some(slot) => {
                slot.footprint = footprint;
                true
            }
            None => {
                warn!(%today, last = %self.last_date(), "weekly window is stale; save not reflected");
                false
            }
        }
    }

    /// Re-prime today's slot with a fresh placeholder. Same staleness rule as
    /// [`record_today`](Self::record_today).
    pub fn reseed_today(&mut self, today: NaiveDate, source: &mut dyn PlaceholderSource) -> bool {
        let value = source.sample(PlaceholderRange::INITIAL);
        self.record_today(today, value)
    }

    /// Rebuild the window if it no longer ends on `today`.
    ///
    /// Returns whether a rebuild happened.
    pub fn refresh(&mut self, today: NaiveDate, source: &mut dyn PlaceholderSource) -> bool {
        if self.is_current(today) {
            return false;
        }
        *self = Self::initialize(today, source);
        true
    }

    pub fn is_current(&self, today: NaiveDate) -> bool {
        self.last_date() == today
    }

    pub fn slots(&self) -> &[WeekSlot] {
        &self.slots
    }

    pub fn last_date(&self) -> NaiveDate {
        self.slots[WINDOW_DAYS - 1].date
    }

    pub fn average(&self) -> f64 {
        self.slots.iter().map(|s| s.footprint).sum::<f64>() / WINDOW_DAYS as f64
    }

    pub fn max(&self) -> f64 {
        self.slots
            .iter()
            .map(|s| s.footprint)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    fn slot_mut(&mut self, date: NaiveDate) -> Option<&mut WeekSlot> {
        self.slots.iter_mut().find(|s| s.date == date)
    }

    fn build(today: NaiveDate, range: PlaceholderRange, source: &mut dyn PlaceholderSource) -> Self {
        let slots = std::array::from_fn(|i| {
            let back = (WINDOW_DAYS - 1 - i) as u64;
            let date = today
                .checked_sub_days(Days::new(back))
                .unwrap_or(NaiveDate::MIN);
            WeekSlot::new(date, source.sample(range))
        });
        Self { slots }
    }
}

impl TryFrom<Vec<WeekSlot>> for WeeklyWindow {
    type Error = InvariantViolation;

    fn try_from(list: Vec<WeekSlot>) -> Result<Self, Self::Error> {
        let len = list.len();
        let slots: [WeekSlot; WINDOW_DAYS] = list
            .try_into()
            .map_err(|_| InvariantViolation::WindowLength(len))?;

        for (index, pair) in slots.windows(2).enumerate() {
            if pair[0].date.succ_opt() != Some(pair[1].date) {
                return Err(InvariantViolation::WindowOrder {
                    index: index + 1,
                    date: pair[1].date,
                });
            }
        }
        Ok(Self { slots })
    }
}

impl From<WeeklyWindow> for Vec<WeekSlot> {
    fn from(window: WeeklyWindow) -> Self {
        window.slots.into()
    }
}
