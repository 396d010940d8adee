//! Month grid generation.

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::models::calendar_day::CalendarDay;
use crate::models::week_start::WeekStart;
use crate::utils::date::{
    first_day_of_month, get_week_end, get_week_start, is_same_month, last_day_of_month,
};

/// Compute the cells shown for the month containing `anchor`.
///
/// The grid starts on the `week_starts_on` day on or before the first of the
/// month and ends on the day before the next week start on or after the last
/// of the month, so its length is always a whole number of weeks. The only
/// exception is the first and last month of chrono's range, where the padding
/// is cut off at `NaiveDate::MIN` / `NaiveDate::MAX`.
pub fn compute_grid(
    anchor: NaiveDate,
    week_starts_on: WeekStart,
    today: NaiveDate,
    selected: &[NaiveDate],
) -> Vec<CalendarDay> {
    let start = get_week_start(first_day_of_month(anchor), week_starts_on);
    let end = get_week_end(last_day_of_month(anchor), week_starts_on);
    let selected: HashSet<NaiveDate> = selected.iter().copied().collect();

    // successors rather than iter_days: the latter never yields NaiveDate::MAX
    std::iter::successors(Some(start), |date| date.succ_opt())
        .take_while(|date| *date <= end)
        .map(|date| CalendarDay {
            out_of_month: !is_same_month(date, anchor),
            today: date == today,
            selected: selected.contains(&date),
            ..CalendarDay::new(date)
        })
        .collect()
}
