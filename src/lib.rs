// Poll Calendar Library
// Headless month grid and multi-date selection for picking poll dates

pub mod models;
pub mod services;
pub mod utils;

pub use models::calendar_day::CalendarDay;
pub use models::selection::DateSelection;
pub use models::week_start::WeekStart;
pub use services::date_picker::{
    compute_grid, DatePicker, DatePickerAction, DatePickerEvents, DatePickerOptions,
};
