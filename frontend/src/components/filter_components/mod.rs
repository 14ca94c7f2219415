//! Filter panel components and module exports.

pub mod filter_panel;
pub mod location_facet;
pub mod date_facet;
pub mod price_facet;
pub mod language_facet;
pub mod section_title;
