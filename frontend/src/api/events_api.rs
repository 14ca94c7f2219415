//! Client API calls for listing, filter-defaults and contact endpoints.

use common::{
    event_listing::{ContactRequest, EventItem, EventListing},
    filter_state::{FilterState, ServerDefaults},
};
use dioxus::prelude::*;




#[server]
pub async fn fetch_filter_defaults() -> Result<ServerDefaults, ServerFnError> {
    let x = backend::api::fetch_filter_defaults().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn fetch_event_page(filter: FilterState, page: u64) -> Result<EventListing, ServerFnError> {
    let x = backend::api::list_events(filter, page).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn fetch_event(event_id: String) -> Result<EventItem, ServerFnError> {
    let x = backend::api::get_event(&event_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn send_contact_request(request: ContactRequest) -> Result<(), ServerFnError> {
    let x = backend::api::forward_contact_request(request).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
