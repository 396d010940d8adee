// Settings module
// Date & time preferences that drive how the calendar is laid out

use serde::{Deserialize, Serialize};

use crate::models::week_start::WeekStart;

/// Clock display preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    #[serde(rename = "24h")]
    TwentyFourHour,
}

/// Unknown keys are rejected so a misspelled or stale setting fails loudly
/// instead of being ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Preferences {
    pub week_starts_on: WeekStart,
    pub time_format: TimeFormat,
}
