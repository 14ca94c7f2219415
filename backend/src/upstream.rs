//! Upstream events API client.

use serde::Serialize;
use serde::de::DeserializeOwned;

pub fn upstream_base_url() -> String {
    std::env::var("EVENTS_API_URL").unwrap_or("http://localhost:4000".to_string())
}

/// Product variant served by this deployment. Hostname-based variant
/// selection happens in front of this service, so a single domain suffices
/// here.
pub fn product_domain() -> String {
    std::env::var("PRODUCT_DOMAIN").unwrap_or("retreats".to_string())
}

fn endpoint(path: &str) -> String {
    format!(
        "{}/{}/{}",
        upstream_base_url(),
        product_domain(),
        path.trim_start_matches('/')
    )
}

pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    query: &[(String, String)],
) -> anyhow::Result<T> {
    let url = endpoint(path);
    tracing::debug!(%url, "upstream GET");
    let response = reqwest::Client::new()
        .get(&url)
        .query(query)
        .send()
        .await?
        .error_for_status()?;
    Ok(response.json::<T>().await?)
}

pub async fn post_json<B: Serialize + ?Sized>(path: &str, body: &B) -> anyhow::Result<()> {
    let url = endpoint(path);
    tracing::debug!(%url, "upstream POST");
    reqwest::Client::new()
        .post(&url)
        .json(body)
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}
