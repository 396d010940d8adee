// Property-based tests for month grid generation
// Exercises the grid invariants with random anchors, week starts and selections

use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;
use std::collections::HashSet;

use poll_calendar::services::clock::FixedClock;
use poll_calendar::{compute_grid, DatePicker, DatePickerAction, DatePickerOptions, WeekStart};

fn week_start() -> impl Strategy<Value = WeekStart> {
    prop_oneof![Just(WeekStart::Sunday), Just(WeekStart::Monday)]
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1900..2200i32, 1..=12u32, 1..=31u32).prop_map(|(year, month, day)| {
        // Clamp to the month length instead of rejecting
        (0..4)
            .find_map(|back| NaiveDate::from_ymd_opt(year, month, day - back))
            .unwrap()
    })
}

fn navigate(anchor: NaiveDate, forward: bool) -> NaiveDate {
    let options = DatePickerOptions::new(anchor, WeekStart::Sunday, &FixedClock(anchor), &[]);
    let mut picker = DatePicker::new(options, Vec::new());
    if forward {
        picker.next();
    } else {
        picker.prev();
    }
    match picker.into_events().as_slice() {
        [DatePickerAction::NavigationChange(date)] => *date,
        other => panic!("unexpected actions {:?}", other),
    }
}

proptest! {
    /// Property: grids always hold whole weeks
    #[test]
    fn prop_grid_is_whole_weeks(anchor in any_date(), start in week_start()) {
        let days = compute_grid(anchor, start, anchor, &[]);
        prop_assert_eq!(days.len() % 7, 0);
        prop_assert!(days.len() >= 28 && days.len() <= 42);
    }

    /// Property: first cell is the week start and the day after the last cell is too
    #[test]
    fn prop_grid_bounded_by_week_start(anchor in any_date(), start in week_start()) {
        let days = compute_grid(anchor, start, anchor, &[]);
        let first = days.first().unwrap().date;
        let last = days.last().unwrap().date;
        prop_assert_eq!(first.weekday(), start.weekday());
        prop_assert_eq!((last + Duration::days(1)).weekday(), start.weekday());
        // Padding never covers a whole week
        prop_assert!((anchor.with_day(1).unwrap() - first).num_days() < 7);
    }

    /// Property: each in-month date appears exactly once, flagged in-month
    #[test]
    fn prop_month_dates_appear_once(anchor in any_date(), start in week_start()) {
        let days = compute_grid(anchor, start, anchor, &[]);
        let in_month: Vec<NaiveDate> = days
            .iter()
            .filter(|d| !d.out_of_month)
            .map(|d| d.date)
            .collect();
        let expected: Vec<NaiveDate> = (1..=31)
            .filter_map(|day| NaiveDate::from_ymd_opt(anchor.year(), anchor.month(), day))
            .collect();
        prop_assert_eq!(in_month, expected);
        for day in &days {
            let same_month = day.date.month() == anchor.month() && day.date.year() == anchor.year();
            prop_assert_eq!(day.out_of_month, !same_month);
            prop_assert_eq!(day.day, day.date.day());
        }
    }

    /// Property: exactly the cell equal to today is marked, if it is in range
    #[test]
    fn prop_today_classification(anchor in any_date(), start in week_start(), shift in -60i64..60) {
        let today = anchor + Duration::days(shift);
        let days = compute_grid(anchor, start, today, &[]);
        let marked: Vec<NaiveDate> = days.iter().filter(|d| d.today).map(|d| d.date).collect();
        let in_range = days.first().unwrap().date <= today && today <= days.last().unwrap().date;
        if in_range {
            prop_assert_eq!(marked, vec![today]);
        } else {
            prop_assert!(marked.is_empty());
        }
    }

    /// Property: selected flag equals set membership
    #[test]
    fn prop_selected_matches_membership(
        anchor in any_date(),
        start in week_start(),
        offsets in proptest::collection::vec(-45i64..45, 0..20),
    ) {
        let selected: Vec<NaiveDate> = offsets
            .iter()
            .map(|o| anchor + Duration::days(*o))
            .collect();
        let lookup: HashSet<NaiveDate> = selected.iter().copied().collect();
        let days = compute_grid(anchor, start, anchor, &selected);
        for day in &days {
            prop_assert_eq!(day.selected, lookup.contains(&day.date));
        }
    }

    /// Property: next then prev (and prev then next) returns to the same month
    #[test]
    fn prop_navigation_round_trip(anchor in any_date()) {
        let month = (anchor.year(), anchor.month());
        let there_and_back = navigate(navigate(anchor, true), false);
        prop_assert_eq!((there_and_back.year(), there_and_back.month()), month);
        let back_and_forth = navigate(navigate(anchor, false), true);
        prop_assert_eq!((back_and_forth.year(), back_and_forth.month()), month);
    }

    /// Property: next always lands in the adjacent month, whatever the day of month
    #[test]
    fn prop_next_never_skips_a_month(anchor in any_date()) {
        let next = navigate(anchor, true);
        let expected_month = anchor.month() % 12 + 1;
        prop_assert_eq!(next.month(), expected_month);
        prop_assert_eq!(next.day(), 1);
    }
}

#[cfg(test)]
mod additional_tests {
    use super::*;

    #[test]
    fn test_january_31_next_is_february() {
        for year in [2023, 2024] {
            let next = navigate(NaiveDate::from_ymd_opt(year, 1, 31).unwrap(), true);
            assert_eq!((next.year(), next.month()), (year, 2));
        }
    }

    #[test]
    fn test_march_31_prev_is_february() {
        let prev = navigate(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(), false);
        assert_eq!(prev, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }
}
