//! Drives a full filter-panel session through the reducer and the URL codec:
//! seed from a shared URL, let the server defaults arrive late, edit facets,
//! then apply.

use chrono::NaiveDate;
use common::facet_catalog::FacetCatalog;
use common::filter_state::{DateSelection, FilterAction, FilterState, PriceRange};
use common::filter_validator::{is_default_state, price_range_inverted};
use common::url_codec::{build_api_params, decode_filter_query, encode_filter_url};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn shared_url_to_edited_state_to_canonical_url() {
    // A friend shared this URL; the panel opens on it.
    let seed = decode_filter_query("country=Poland&price_min=500&price_max=1000");
    let mut state = FilterState::from_url_seed(seed);
    assert_eq!(state.location.as_deref(), Some("Poland"));
    assert!(!is_default_state(&state));

    // Defaults resolve after seeding; the URL price wins.
    state.apply(FilterAction::ServerDefaultsArrived {
        price_min: 0.0,
        price_max: 2000.0,
    });
    assert_eq!(state.price, PriceRange { min: Some(500.0), max: Some(1000.0) });

    // The user narrows the dates via a catalog preset and switches language.
    let catalog = FacetCatalog::standard();
    let preset = catalog.preset_named("Summer holidays").unwrap().clone();
    state.apply(FilterAction::TogglePreset(preset.clone()));
    state.apply(FilterAction::SetLanguage(Some("en".to_string())));
    assert_eq!(state.dates, DateSelection::Preset(preset));

    // Apply: the canonical URL carries every narrowed facet, in order.
    let url = encode_filter_url(&state);
    assert_eq!(
        url,
        "/?country=Poland&start_date_from=2027-07-01&start_date_to=2027-08-31&price_min=500&price_max=1000&language=en"
    );

    // The listing fetch for the same state carries the fixed defaults.
    let params = build_api_params(&state, 0);
    assert!(params.contains(&("sortBy".to_string(), "published_at".to_string())));
    assert!(params.contains(&("limit".to_string(), "10".to_string())));
}

#[test]
fn invalid_price_session_recovers_through_auto_clear() {
    let mut state = FilterState::default();
    state.apply(FilterAction::ServerDefaultsArrived {
        price_min: 0.0,
        price_max: 3000.0,
    });

    state.apply(FilterAction::SetPriceMin(Some(1200.0)));
    state.apply(FilterAction::SetPriceMax(Some(300.0)));
    assert!(price_range_inverted(&state.price));

    // Exploring another facet flushes the broken range instead of letting it
    // silently block "apply".
    state.apply(FilterAction::SetDateFrom(Some(date(2027, 6, 1))));
    assert!(!price_range_inverted(&state.price));
    assert_eq!(state.price, PriceRange::default());

    let url = encode_filter_url(&state);
    assert_eq!(url, "/?start_date_from=2027-06-01");
}

#[test]
fn clear_all_then_apply_collapses_to_bare_path() {
    let seed = decode_filter_query("country=Spain&language=es&start_date_from=2027-01-10");
    let mut state = FilterState::from_url_seed(seed);
    state.apply(FilterAction::ServerDefaultsArrived {
        price_min: 100.0,
        price_max: 4000.0,
    });

    // "Clear all" does not navigate by itself; the user still has to apply.
    state.apply(FilterAction::ClearAll);
    assert!(is_default_state(&state));
    assert_eq!(state.price, PriceRange { min: Some(100.0), max: Some(4000.0) });
    assert_eq!(encode_filter_url(&state), "/");
}
