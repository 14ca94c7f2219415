pub mod events_api;
