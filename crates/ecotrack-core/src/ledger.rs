//! History ledger: one saved entry per calendar date.
//!
//! Entries are keyed by date, so a second save for the same day replaces the
//! first. Listing is always newest first.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::emission::DietType;
use crate::error::InvariantViolation;

/// A saved day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    /// Total footprint in kg CO₂
    pub footprint: f64,
    pub distance_km: f64,
    pub electricity_kwh: f64,
    pub diet: DietType,
}

/// Date-keyed history. Serialized as a list, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<HistoryEntry>", into = "Vec<HistoryEntry>")]
pub struct HistoryLedger {
    entries: BTreeMap<NaiveDate, HistoryEntry>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `entry.date`.
    ///
    /// Returns the entry it replaced, if any.
    pub fn upsert(&mut self, entry: HistoryEntry) -> Option<HistoryEntry> {
        self.entries.insert(entry.date, entry)
    }

    /// Remove the entry for `date`. Absent dates are not an error.
    pub fn remove_by_date(&mut self, date: NaiveDate) -> Option<HistoryEntry> {
        self.entries.remove(&date)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, date: NaiveDate) -> Option<&HistoryEntry> {
        self.entries.get(&date)
    }

    /// Entries newest first, optionally capped at `limit`.
    pub fn list(&self, limit: Option<usize>) -> Vec<&HistoryEntry> {
        self.iter().take(limit.unwrap_or(usize::MAX)).collect()
    }

    /// Iterate newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.values().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<HistoryEntry>> for HistoryLedger {
    type Error = InvariantViolation;

    fn try_from(list: Vec<HistoryEntry>) -> Result<Self, Self::Error> {
        let mut ledger = HistoryLedger::new();
        for entry in list {
            let date = entry.date;
            if ledger.upsert(entry).is_some() {
                return Err(InvariantViolation::DuplicateDate(date));
            }
        }
        Ok(ledger)
    }
}

impl From<HistoryLedger> for Vec<HistoryEntry> {
    fn from(ledger: HistoryLedger) -> Self {
        ledger.entries.into_values().rev().collect()
    }
}
