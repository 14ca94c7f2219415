//! Route query segment carrying the listing filter.

use std::fmt::Display;

use dioxus::router::routable::FromQuery;

use common::filter_state::{FilterState, UrlFilterSeed};
use common::url_codec::{decode_filter_query, encode_filter_url};


/// The filter portion of the listing route. Parsing is fail-soft: malformed
/// parameters come back as unset facets, never as an error page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterQuery(pub UrlFilterSeed);

impl FilterQuery {
    /// A fresh filter-panel state seeded from this URL snapshot.
    pub fn seed_state(&self) -> FilterState {
        FilterState::from_url_seed(self.0.clone())
    }
}

impl From<UrlFilterSeed> for FilterQuery {
    fn from(seed: UrlFilterSeed) -> Self {
        FilterQuery(seed)
    }
}

impl FromQuery for FilterQuery {
    fn from_query(query: &str) -> Self {
        FilterQuery(decode_filter_query(query))
    }
}

// Display the query in a way that can be parsed by FromQuery. Navigation
// after "apply" goes through the codec directly, which also handles the
// bare-path collapse; this impl only has to round-trip the parameters.
impl Display for FilterQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let url = encode_filter_url(&self.seed_state());
        write!(f, "{}", url.trim_start_matches('/').trim_start_matches('?'))
    }
}
