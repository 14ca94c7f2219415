//! Bidirectional mapping between the filter state and its canonical URL,
//! plus the listing-API parameter builder.

use std::borrow::Cow;

use chrono::NaiveDate;

use crate::filter_state::{FilterState, UrlFilterSeed};
use crate::filter_validator::is_default_state;


pub const PARAM_COUNTRY: &str = "country";
pub const PARAM_START_DATE_FROM: &str = "start_date_from";
pub const PARAM_START_DATE_TO: &str = "start_date_to";
pub const PARAM_PRICE_MIN: &str = "price_min";
pub const PARAM_PRICE_MAX: &str = "price_max";
pub const PARAM_LANGUAGE: &str = "language";

const DATE_FORMAT: &str = "%Y-%m-%d";

pub const LIST_PAGE_SIZE: u64 = 10;

/// The canonical shareable path for a filter state.
///
/// A default state collapses to the bare path, taking priority over
/// field-by-field emission. Price bounds equal to the cached server default
/// are omitted to keep the URL compact, even though the in-memory state
/// carries a concrete value once the defaults have loaded.
pub fn encode_filter_url(state: &FilterState) -> String {
    if is_default_state(state) {
        return "/".to_string();
    }

    // Stable key order: country, start_date_from, start_date_to, price_min,
    // price_max, language.
    let mut pairs: Vec<(&str, String)> = Vec::new();
    if let Some(location) = &state.location {
        pairs.push((PARAM_COUNTRY, location.clone()));
    }
    let bounds = state.dates.bounds();
    if let Some(from) = bounds.from {
        pairs.push((PARAM_START_DATE_FROM, from.format(DATE_FORMAT).to_string()));
    }
    if let Some(to) = bounds.to {
        pairs.push((PARAM_START_DATE_TO, to.format(DATE_FORMAT).to_string()));
    }
    let server = state.server_price.unwrap_or_default();
    if let Some(min) = state.price.min {
        if server.min != Some(min) {
            pairs.push((PARAM_PRICE_MIN, format_price(min)));
        }
    }
    if let Some(max) = state.price.max {
        if server.max != Some(max) {
            pairs.push((PARAM_PRICE_MAX, format_price(max)));
        }
    }
    if let Some(language) = &state.language {
        pairs.push((PARAM_LANGUAGE, language.clone()));
    }

    if pairs.is_empty() {
        return "/".to_string();
    }
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, &value);
    }
    format!("/?{}", serializer.finish())
}

/// Decode query parameters into a seed for a fresh filter state. Malformed
/// values fail soft to unset; unknown keys are ignored. A period preset is
/// never reconstructed from a URL, it comes back as a plain custom range.
pub fn decode_filter_query(query: &str) -> UrlFilterSeed {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut seed = UrlFilterSeed::default();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            PARAM_COUNTRY => seed.location = non_empty(value),
            PARAM_START_DATE_FROM => seed.date_from = parse_date(&value),
            PARAM_START_DATE_TO => seed.date_to = parse_date(&value),
            PARAM_PRICE_MIN => seed.price_min = parse_price(&value),
            PARAM_PRICE_MAX => seed.price_max = parse_price(&value),
            PARAM_LANGUAGE => seed.language = non_empty(value),
            _ => {}
        }
    }
    seed
}

/// Query parameters for the listing fetch. Unlike the shareable URL this
/// always appends the fixed sort/pagination defaults, and it never feeds
/// back into the address bar.
pub fn build_api_params(state: &FilterState, skip: u64) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = Vec::new();
    if let Some(location) = &state.location {
        params.push((PARAM_COUNTRY.to_string(), location.clone()));
    }
    let bounds = state.dates.bounds();
    if let Some(from) = bounds.from {
        params.push((PARAM_START_DATE_FROM.to_string(), from.format(DATE_FORMAT).to_string()));
    }
    if let Some(to) = bounds.to {
        params.push((PARAM_START_DATE_TO.to_string(), to.format(DATE_FORMAT).to_string()));
    }
    if let Some(min) = state.price.min {
        params.push((PARAM_PRICE_MIN.to_string(), format_price(min)));
    }
    if let Some(max) = state.price.max {
        params.push((PARAM_PRICE_MAX.to_string(), format_price(max)));
    }
    if let Some(language) = &state.language {
        params.push((PARAM_LANGUAGE.to_string(), language.clone()));
    }
    params.push(("sortBy".to_string(), "published_at".to_string()));
    params.push(("sortOrder".to_string(), "desc".to_string()));
    params.push(("limit".to_string(), LIST_PAGE_SIZE.to_string()));
    params.push(("skip".to_string(), skip.to_string()));
    params
}

fn format_price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn parse_price(raw: &str) -> Option<f64> {
    // A non-numeric parameter must decode to None, not NaN, so it cannot
    // leak into the range check as an always-invalid state.
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

fn non_empty(value: Cow<'_, str>) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.into_owned())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_state::{DateSelection, FilterAction, FilterState, PeriodPreset, PriceRange};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn state_with_defaults() -> FilterState {
        let mut state = FilterState::default();
        state.apply(FilterAction::ServerDefaultsArrived {
            price_min: 0.0,
            price_max: 2000.0,
        });
        state
    }

    #[test]
    fn default_state_collapses_to_bare_path() {
        assert_eq!(encode_filter_url(&FilterState::default()), "/");
        assert_eq!(encode_filter_url(&state_with_defaults()), "/");
    }

    #[test]
    fn emits_keys_in_stable_order() {
        let mut state = state_with_defaults();
        state.apply(FilterAction::SetLocation(Some("Portugal".to_string())));
        state.apply(FilterAction::SetDateFrom(Some(date(2027, 4, 1))));
        state.apply(FilterAction::SetDateTo(Some(date(2027, 4, 14))));
        state.apply(FilterAction::SetPriceMin(Some(300.0)));
        state.apply(FilterAction::SetPriceMax(Some(900.0)));
        state.apply(FilterAction::SetLanguage(Some("en".to_string())));

        assert_eq!(
            encode_filter_url(&state),
            "/?country=Portugal&start_date_from=2027-04-01&start_date_to=2027-04-14&price_min=300&price_max=900&language=en"
        );
    }

    #[test]
    fn price_bounds_equal_to_server_default_are_omitted() {
        let mut state = state_with_defaults();
        state.apply(FilterAction::SetPriceMin(Some(0.0)));
        state.apply(FilterAction::SetPriceMax(Some(1500.0)));
        assert_eq!(encode_filter_url(&state), "/?price_max=1500");
    }

    #[test]
    fn half_open_date_range_round_trips() {
        let mut state = state_with_defaults();
        state.apply(FilterAction::SetDateTo(Some(date(2027, 9, 30))));
        let url = encode_filter_url(&state);
        assert_eq!(url, "/?start_date_to=2027-09-30");

        let seed = decode_filter_query(url.trim_start_matches("/?"));
        assert_eq!(seed.date_from, None);
        assert_eq!(seed.date_to, Some(date(2027, 9, 30)));
    }

    #[test]
    fn non_default_state_round_trips_exactly() {
        let mut state = state_with_defaults();
        state.apply(FilterAction::SetLocation(Some("Costa Rica".to_string())));
        state.apply(FilterAction::SetDateFrom(Some(date(2027, 2, 10))));
        state.apply(FilterAction::SetPriceMin(Some(250.5)));
        state.apply(FilterAction::SetLanguage(Some("es".to_string())));

        let url = encode_filter_url(&state);
        let seed = decode_filter_query(url.trim_start_matches("/?"));
        assert_eq!(seed.location.as_deref(), Some("Costa Rica"));
        assert_eq!(seed.date_from, Some(date(2027, 2, 10)));
        assert_eq!(seed.date_to, None);
        assert_eq!(seed.price_min, Some(250.5));
        assert_eq!(seed.price_max, None);
        assert_eq!(seed.language.as_deref(), Some("es"));
    }

    #[test]
    fn values_are_percent_encoded() {
        let mut state = state_with_defaults();
        state.apply(FilterAction::SetLocation(Some("Bosnia & Herzegovina".to_string())));
        let url = encode_filter_url(&state);
        assert_eq!(url, "/?country=Bosnia+%26+Herzegovina");

        let seed = decode_filter_query(url.trim_start_matches("/?"));
        assert_eq!(seed.location.as_deref(), Some("Bosnia & Herzegovina"));
    }

    // Characterization, not a correctness guarantee: a preset selection is
    // lost across a URL round-trip and degrades to a plain custom range.
    #[test]
    fn preset_degrades_to_custom_range_across_url_round_trip() {
        let preset = PeriodPreset {
            name: "Easter week".to_string(),
            start: date(2027, 3, 22),
            end: date(2027, 3, 28),
        };
        let mut state = state_with_defaults();
        state.apply(FilterAction::TogglePreset(preset.clone()));

        let url = encode_filter_url(&state);
        assert_eq!(url, "/?start_date_from=2027-03-22&start_date_to=2027-03-28");

        let decoded = FilterState::from_url_seed(decode_filter_query(url.trim_start_matches("/?")));
        assert_eq!(decoded.dates, DateSelection::Custom(preset.bounds()));
        assert!(decoded.dates.active_preset().is_none());
    }

    #[test]
    fn malformed_params_fail_soft_to_unset() {
        let seed = decode_filter_query(
            "price_min=abc&price_max=NaN&start_date_from=not-a-date&start_date_to=2027-13-40&country=&unknown=1",
        );
        assert_eq!(seed, UrlFilterSeed::default());

        let seed = decode_filter_query("price_min=inf&price_max=1e999");
        assert_eq!(seed.price_min, None);
        assert_eq!(seed.price_max, None);
    }

    #[test]
    fn decode_accepts_a_leading_question_mark() {
        let seed = decode_filter_query("?language=fr");
        assert_eq!(seed.language.as_deref(), Some("fr"));
    }

    #[test]
    fn api_params_always_carry_fixed_sort_and_pagination() {
        let state = state_with_defaults();
        let params = build_api_params(&state, 20);
        let tail: Vec<(String, String)> = params
            .iter()
            .skip(params.len() - 4)
            .cloned()
            .collect();
        assert_eq!(
            tail,
            vec![
                ("sortBy".to_string(), "published_at".to_string()),
                ("sortOrder".to_string(), "desc".to_string()),
                ("limit".to_string(), "10".to_string()),
                ("skip".to_string(), "20".to_string()),
            ]
        );
        // The shareable URL never carries them.
        assert_eq!(encode_filter_url(&state), "/");
    }

    #[test]
    fn api_params_emit_price_even_when_equal_to_server_default() {
        let mut state = state_with_defaults();
        state.apply(FilterAction::SetPriceMin(Some(0.0)));
        let params = build_api_params(&state, 0);
        assert!(params.contains(&("price_min".to_string(), "0".to_string())));
    }

    #[test]
    fn seeded_state_reproduces_example_scenario() {
        // serverDefaults {0, 5000}, URL ?price_min=1000: min stays 1000 and
        // max stays unconstrained after the defaults arrive.
        let seed = decode_filter_query("price_min=1000");
        let mut state = FilterState::from_url_seed(seed);
        assert_eq!(state.price, PriceRange { min: Some(1000.0), max: None });

        state.apply(FilterAction::ServerDefaultsArrived {
            price_min: 0.0,
            price_max: 5000.0,
        });
        assert_eq!(state.price, PriceRange { min: Some(1000.0), max: None });
    }
}
