//! Upstream API route handlers and module exports.

mod filters;
pub use filters::fetch_filter_defaults;

mod events;
pub use events::{get_event, list_events};

mod contact;
pub use contact::forward_contact_request;
