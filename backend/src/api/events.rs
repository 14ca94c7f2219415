//! Event listing and detail endpoints.

use common::event_listing::{EventItem, EventListing};
use common::filter_state::FilterState;
use common::url_codec::{LIST_PAGE_SIZE, build_api_params};

use crate::upstream::get_json;

pub async fn list_events(filter: FilterState, page: u64) -> anyhow::Result<EventListing> {
    let params = build_api_params(&filter, page * LIST_PAGE_SIZE);
    let listing: EventListing = get_json("public", &params).await?;
    tracing::debug!(total = listing.total, page, "listed events");
    Ok(listing)
}

pub async fn get_event(event_id: &str) -> anyhow::Result<EventItem> {
    get_json(&format!("public/{event_id}"), &[]).await
}
