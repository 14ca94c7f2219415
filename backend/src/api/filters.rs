//! Filter defaults endpoint: live country list and full price bounds.

use common::filter_state::ServerDefaults;

use crate::upstream::get_json;

pub async fn fetch_filter_defaults() -> anyhow::Result<ServerDefaults> {
    let defaults: ServerDefaults = get_json("public/filters", &[]).await?;
    tracing::debug!(
        countries = defaults.countries.len(),
        price_min = defaults.price_min,
        price_max = defaults.price_max,
        "loaded filter defaults"
    );
    Ok(defaults)
}
