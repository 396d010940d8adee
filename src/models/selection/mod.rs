//! Caller-owned set of selected poll dates.
//!
//! The date picker only reads a snapshot of this set and reports add/remove
//! intents; the form state that owns a `DateSelection` applies them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Deduplicated dates kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<NaiveDate>", into = "Vec<NaiveDate>")]
pub struct DateSelection {
    dates: Vec<NaiveDate>,
}

impl DateSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a date. Returns false if it was already selected.
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        if self.contains(&date) {
            return false;
        }
        self.dates.push(date);
        true
    }

    /// Remove a date. Returns false if it was not selected.
    pub fn remove(&mut self, date: &NaiveDate) -> bool {
        match self.dates.iter().position(|d| d == date) {
            Some(idx) => {
                self.dates.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.dates.contains(date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.dates.iter()
    }

    /// Snapshot in insertion order, suitable for `DatePickerOptions::selected`.
    pub fn as_slice(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Chronologically ordered copy for display.
    pub fn sorted(&self) -> Vec<NaiveDate> {
        let mut dates = self.dates.clone();
        dates.sort_unstable();
        dates
    }
}

impl From<Vec<NaiveDate>> for DateSelection {
    fn from(dates: Vec<NaiveDate>) -> Self {
        dates.into_iter().collect()
    }
}

impl From<DateSelection> for Vec<NaiveDate> {
    fn from(selection: DateSelection) -> Self {
        selection.dates
    }
}

impl FromIterator<NaiveDate> for DateSelection {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let dates = iter.into_iter().filter(|d| seen.insert(*d)).collect();
        Self { dates }
    }
}
