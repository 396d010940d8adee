// Date utility functions
// Month and week boundary arithmetic shared by the grid and the picker

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::models::week_start::WeekStart;

pub fn is_same_month(date1: NaiveDate, date2: NaiveDate) -> bool {
    date1.year() == date2.year() && date1.month() == date2.month()
}

pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let first = first_day_of_month(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next_month) => next_month - Duration::days(1),
        // December of the last representable year
        None => NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date),
    }
}

/// Days from the week start to `date`, 0..=6.
fn days_into_week(date: NaiveDate, week_start: WeekStart) -> i64 {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    (weekday - week_start.as_index() as i64 + 7) % 7
}

/// Calculate the start of the week containing the given date.
///
/// Clamped to `NaiveDate::MIN` when the week begins before chrono's range.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `week_start` - Which weekday weeks begin on
pub fn get_week_start(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    date.checked_sub_signed(Duration::days(days_into_week(date, week_start)))
        .unwrap_or(NaiveDate::MIN)
}

/// Last day of the week containing the given date: the day before the next
/// week start. Clamped to `NaiveDate::MAX` at the end of chrono's range.
pub fn get_week_end(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    date.checked_add_signed(Duration::days(6 - days_into_week(date, week_start)))
        .unwrap_or(NaiveDate::MAX)
}

/// First day of the month `months` away from `date`.
///
/// The day component is dropped before shifting so that the 31st of a month
/// never overflows into the month after the target (Jan 31 + 1 month is
/// February, not March). Returns `None` outside chrono's date range.
pub fn shift_month(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let first = first_day_of_month(date);
    let delta = Months::new(months.unsigned_abs());
    if months >= 0 {
        first.checked_add_months(delta)
    } else {
        first.checked_sub_months(delta)
    }
}

/// Display label for the month containing `date`, e.g. "March 2024".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
