//! Data models for the command-line front end.

mod settings;

pub use settings::AppSettings;
