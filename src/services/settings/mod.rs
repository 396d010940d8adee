// Settings service
// Loads date & time preferences from the user's config directory

mod service;

pub use service::SettingsService;
