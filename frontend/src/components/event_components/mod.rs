//! Event listing components and module exports.

pub mod event_card;
pub mod event_list_controls;
