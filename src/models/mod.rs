// Module exports for models

pub mod calendar_day;
pub mod selection;
pub mod settings;
pub mod week_start;
