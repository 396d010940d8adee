//! Headless date picker for choosing poll dates.
//!
//! The picker is a view over a caller-owned snapshot: the anchor date, the
//! week-start convention, the "today" reference and the current selection.
//! It computes what to display and reports navigation and selection intents
//! through [`DatePickerEvents`]. It never holds or mutates the anchor or the
//! selection itself; the caller applies the reported changes and builds a new
//! picker for the next render.

pub mod grid;

use chrono::NaiveDate;

use crate::models::calendar_day::CalendarDay;
use crate::models::week_start::WeekStart;
use crate::services::clock::Clock;
use crate::utils::date::{month_label, shift_month};

pub use grid::compute_grid;

/// Snapshot of the caller's picker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePickerOptions<'a> {
    /// Any date inside the month to display
    pub date: NaiveDate,
    pub week_starts_on: WeekStart,
    /// Reference for the `today` flag and the target of [`DatePicker::today`]
    pub today: NaiveDate,
    pub selected: &'a [NaiveDate],
}

impl<'a> DatePickerOptions<'a> {
    /// Options anchored on `date`, with "today" read from `clock`.
    pub fn new(
        date: NaiveDate,
        week_starts_on: WeekStart,
        clock: &impl Clock,
        selected: &'a [NaiveDate],
    ) -> Self {
        Self {
            date,
            week_starts_on,
            today: clock.today(),
            selected,
        }
    }
}

/// Callbacks the picker reports user intents through. All default to no-ops.
#[cfg_attr(test, mockall::automock)]
pub trait DatePickerEvents {
    fn on_add_to_selection(&mut self, _date: NaiveDate) {}

    fn on_remove_from_selection(&mut self, _date: NaiveDate) {}

    /// The displayed month should change to the one containing `date`.
    fn on_navigation_change(&mut self, _date: NaiveDate) {}
}

/// An intent reported by the picker, as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePickerAction {
    AddToSelection(NaiveDate),
    RemoveFromSelection(NaiveDate),
    NavigationChange(NaiveDate),
}

/// Collects intents so an event loop can apply them after the picker is done.
impl DatePickerEvents for Vec<DatePickerAction> {
    fn on_add_to_selection(&mut self, date: NaiveDate) {
        self.push(DatePickerAction::AddToSelection(date));
    }

    fn on_remove_from_selection(&mut self, date: NaiveDate) {
        self.push(DatePickerAction::RemoveFromSelection(date));
    }

    fn on_navigation_change(&mut self, date: NaiveDate) {
        self.push(DatePickerAction::NavigationChange(date));
    }
}

/// Ignores every intent (read-only display).
impl DatePickerEvents for () {}

pub struct DatePicker<'a, E: DatePickerEvents> {
    options: DatePickerOptions<'a>,
    events: E,
}

impl<'a, E: DatePickerEvents> DatePicker<'a, E> {
    pub fn new(options: DatePickerOptions<'a>, events: E) -> Self {
        Self { options, events }
    }

    pub fn options(&self) -> &DatePickerOptions<'a> {
        &self.options
    }

    /// Give back the event sink, e.g. to drain collected actions.
    pub fn into_events(self) -> E {
        self.events
    }

    /// Cells for the displayed month, padded to whole weeks.
    pub fn days(&self) -> Vec<CalendarDay> {
        compute_grid(
            self.options.date,
            self.options.week_starts_on,
            self.options.today,
            self.options.selected,
        )
    }

    /// The grid split into rows of seven.
    pub fn weeks(&self) -> Vec<Vec<CalendarDay>> {
        self.days().chunks(7).map(<[CalendarDay]>::to_vec).collect()
    }

    /// "March 2024"
    pub fn label(&self) -> String {
        month_label(self.options.date)
    }

    /// Column headers in display order.
    pub fn days_of_week(&self) -> [&'static str; 7] {
        self.options.week_starts_on.day_names()
    }

    /// Report the first day of the following month.
    pub fn next(&mut self) {
        self.navigate(1);
    }

    /// Report the first day of the preceding month.
    pub fn prev(&mut self) {
        self.navigate(-1);
    }

    /// Report the caller's "today" as the new anchor.
    pub fn today(&mut self) {
        let today = self.options.today;
        log::debug!("Date picker jumping to today ({})", today);
        self.events.on_navigation_change(today);
    }

    pub fn add_to_selection(&mut self, date: NaiveDate) {
        log::debug!("Date picker add {}", date);
        self.events.on_add_to_selection(date);
    }

    pub fn remove_from_selection(&mut self, date: NaiveDate) {
        log::debug!("Date picker remove {}", date);
        self.events.on_remove_from_selection(date);
    }

    /// Click handler for a cell: deselect if selected, select otherwise.
    pub fn toggle(&mut self, day: &CalendarDay) {
        if day.selected {
            self.remove_from_selection(day.date);
        } else {
            self.add_to_selection(day.date);
        }
    }

    fn navigate(&mut self, months: i32) {
        match shift_month(self.options.date, months) {
            Some(anchor) => {
                log::debug!("Date picker navigating to {}", month_label(anchor));
                self.events.on_navigation_change(anchor);
            }
            None => {
                log::warn!(
                    "Cannot move {} month(s) from {}: out of range",
                    months,
                    self.options.date
                );
            }
        }
    }
}
