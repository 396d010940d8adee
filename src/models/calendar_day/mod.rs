//! A single cell of the month grid.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One day as displayed in the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Day of month, 1-based
    pub day: u32,
    /// Cell belongs to the previous or next month and only pads the week
    pub out_of_month: bool,
    /// Cell equals the caller's "today" reference
    pub today: bool,
    /// Cell is in the selection snapshot
    pub selected: bool,
}

impl CalendarDay {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            day: date.day(),
            out_of_month: false,
            today: false,
            selected: false,
        }
    }

    /// Out-of-month cells are rendered dimmed unless they are selected.
    pub fn is_dimmed(&self) -> bool {
        self.out_of_month && !self.selected
    }
}
