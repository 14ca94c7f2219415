//! Contact request forwarding. No booking or payment logic lives here.

use common::event_listing::ContactRequest;

use crate::upstream::post_json;

pub async fn forward_contact_request(request: ContactRequest) -> anyhow::Result<()> {
    post_json(&format!("public/{}/contact", request.event_id), &request).await
}
