//! Backend library: a thin proxy over the external events API.

pub mod api;
pub mod upstream;
