//! Week-start convention for calendar grids.
//!
//! Calendar weeks begin either on Sunday or on Monday. The numeric form
//! (0 = Sunday, 1 = Monday) matches the `first_day_of_week` setting used
//! throughout the views.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// The weekday a calendar week starts on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// The chrono weekday this convention starts on.
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// Numeric `first_day_of_week` form (0 = Sunday, 1 = Monday).
    pub fn as_index(self) -> u8 {
        match self {
            WeekStart::Sunday => 0,
            WeekStart::Monday => 1,
        }
    }

    /// Convert from the numeric `first_day_of_week` form.
    ///
    /// Anything other than 1 is treated as Sunday.
    pub fn from_index(first_day_of_week: u8) -> Self {
        match first_day_of_week {
            1 => WeekStart::Monday,
            0 => WeekStart::Sunday,
            other => {
                log::warn!("Unsupported first day of week {}, using Sunday", other);
                WeekStart::Sunday
            }
        }
    }

    /// Lenient parse used at the edges where the value comes from loosely
    /// typed input. Unknown values fall back to Sunday.
    pub fn from_str_or_default(value: &str) -> Self {
        value.parse().unwrap_or_else(|e: ParseWeekStartError| {
            log::warn!("{}, using Sunday", e);
            WeekStart::Sunday
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeekStart::Sunday => "sunday",
            WeekStart::Monday => "monday",
        }
    }

    /// Weekday names in display order, starting at the week start.
    pub fn day_names(self) -> [&'static str; 7] {
        let offset = self.as_index() as usize;
        std::array::from_fn(|idx| DAY_NAMES[(offset + idx) % 7])
    }

    /// Two-letter column headers ("Mo", "Tu", ...).
    pub fn short_day_names(self) -> [&'static str; 7] {
        self.day_names().map(|name| &name[..2])
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a week start string is neither "sunday" nor "monday".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown week start '{0}' (expected \"sunday\" or \"monday\")")]
pub struct ParseWeekStartError(pub String);

impl FromStr for WeekStart {
    type Err = ParseWeekStartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            "monday" | "mon" => Ok(WeekStart::Monday),
            _ => Err(ParseWeekStartError(s.to_string())),
        }
    }
}

impl From<WeekStart> for Weekday {
    fn from(start: WeekStart) -> Self {
        start.weekday()
    }
}
