// Service module exports

pub mod clock;
pub mod date_picker;
pub mod settings;
