//! Terminal rendering for the application.

mod header;
mod notification;
mod suggestions;

pub use header::{view_header, view_help};
pub use notification::{Notification, notify};
pub use suggestions::{view_json, view_suggestions};
