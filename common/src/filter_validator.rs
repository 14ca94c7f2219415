//! Pure predicates over the filter state.

use crate::filter_state::{FilterState, PriceRange};


/// Both bounds set and `max < min`. Surfaced inline in the panel; never
/// blocks typing.
pub fn price_range_inverted(price: &PriceRange) -> bool {
    matches!((price.min, price.max), (Some(min), Some(max)) if max < min)
}

/// "No filter applied": location, dates and language unset, and price equal
/// to the server-provided full range. Before the defaults arrive, a fully
/// unset price counts as default. The codec collapses a default state to the
/// bare path.
pub fn is_default_state(state: &FilterState) -> bool {
    if state.location.is_some() || state.language.is_some() || !state.dates.is_unset() {
        return false;
    }
    match state.server_price {
        Some(server) => state.price == server,
        None => state.price == PriceRange::default(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_state::{FilterAction, FilterState};

    #[test]
    fn inverted_range_needs_both_bounds() {
        assert!(price_range_inverted(&PriceRange { min: Some(100.0), max: Some(50.0) }));
        assert!(!price_range_inverted(&PriceRange { min: Some(100.0), max: Some(100.0) }));
        assert!(!price_range_inverted(&PriceRange { min: Some(100.0), max: None }));
        assert!(!price_range_inverted(&PriceRange { min: None, max: Some(50.0) }));
        assert!(!price_range_inverted(&PriceRange::default()));
    }

    #[test]
    fn fresh_state_is_default() {
        assert!(is_default_state(&FilterState::default()));
    }

    #[test]
    fn price_at_server_default_is_default() {
        let mut state = FilterState::default();
        state.apply(FilterAction::ServerDefaultsArrived {
            price_min: 0.0,
            price_max: 2000.0,
        });
        assert!(is_default_state(&state));

        state.apply(FilterAction::SetPriceMax(Some(1500.0)));
        assert!(!is_default_state(&state));

        state.apply(FilterAction::ResetPriceToServer);
        assert!(is_default_state(&state));
    }

    #[test]
    fn any_set_facet_breaks_default() {
        let mut state = FilterState::default();
        state.apply(FilterAction::SetLanguage(Some("de".to_string())));
        assert!(!is_default_state(&state));

        state.apply(FilterAction::SetLanguage(None));
        assert!(is_default_state(&state));
    }
}
