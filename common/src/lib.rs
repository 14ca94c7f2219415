//! Common library exports shared between frontend and backend.


pub mod event_listing;
pub mod facet_catalog;
pub mod filter_state;
pub mod filter_validator;
pub mod url_codec;
