//! Wire models for the public events API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EventItem {
    pub id: String,
    pub title: String,
    pub country: String,
    pub city: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub price: Option<f64>,
    pub currency: String,
    pub language: String,
    pub image_url: Option<String>,
    pub organizer_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EventListing {
    pub events: Vec<EventItem>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

/// The app only forwards contact requests upstream; there is no booking or
/// payment flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContactRequest {
    pub event_id: String,
    pub name: String,
    pub email: String,
    pub message: String,
}
