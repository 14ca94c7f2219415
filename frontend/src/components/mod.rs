//! Shared UI components and module exports.

pub mod navbar;
pub mod error_boundary;
pub mod suspend_boundary;
pub mod filter_components;
pub mod event_components;
