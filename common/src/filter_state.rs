//! Filter state aggregate and its reducer.
//!
//! The filter panel reconciles three sources of truth: URL query parameters,
//! server-provided defaults, and live user edits. All of that goes through
//! one reducer (`FilterState::apply`) so the precedence rules live in a
//! single place instead of being scattered across UI effects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::filter_validator::price_range_inverted;


/// Inclusive travel window. Half-open ranges are legal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Currency-agnostic price bounds. `None` means unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// A named one-click date shortcut (e.g. a holiday window).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodPreset {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PeriodPreset {
    pub fn bounds(&self) -> DateRange {
        DateRange {
            from: Some(self.start),
            to: Some(self.end),
        }
    }
}

/// The date facet as a tagged union: a preset's bounds can never drift out of
/// sync with the selected range, and a manual edit degrades the selection to
/// `Custom` instead of comparing date strings for equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum DateSelection {
    #[default]
    Unset,
    Preset(PeriodPreset),
    Custom(DateRange),
}

impl DateSelection {
    pub fn bounds(&self) -> DateRange {
        match self {
            Self::Unset => DateRange::default(),
            Self::Preset(preset) => preset.bounds(),
            Self::Custom(range) => *range,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn active_preset(&self) -> Option<&PeriodPreset> {
        match self {
            Self::Preset(preset) => Some(preset),
            _ => None,
        }
    }
}

/// Bounds and options that depend on live data, fetched once per panel
/// opening from `GET /{domain}/public/filters`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerDefaults {
    pub countries: Vec<String>,
    pub price_min: f64,
    pub price_max: f64,
}

/// One filter-panel opening's worth of state. Created fresh when the panel
/// opens, seeded from the URL, discarded if the panel closes without "apply".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterState {
    pub location: Option<String>,
    pub dates: DateSelection,
    pub price: PriceRange,
    pub language: Option<String>,
    /// Server default price bounds, cached once the defaults fetch resolves.
    /// Distinguishes "price narrowed by the user" from "price at full range".
    pub server_price: Option<PriceRange>,
    /// True once the URL or the user set either price bound. Blocks the
    /// late-arriving server defaults from overwriting an explicit value.
    pub price_touched: bool,
}

/// Facet values decoded from URL query parameters. Absent fields stay `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UrlFilterSeed {
    pub location: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterAction {
    SetLocation(Option<String>),
    SetDateFrom(Option<NaiveDate>),
    SetDateTo(Option<NaiveDate>),
    /// Select the preset, or clear the date facet if it is already active.
    TogglePreset(PeriodPreset),
    SetPriceMin(Option<f64>),
    SetPriceMax(Option<f64>),
    SetLanguage(Option<String>),
    ServerDefaultsArrived { price_min: f64, price_max: f64 },
    ClearAll,
    ResetPriceToServer,
    ResetPeriod,
}

impl FilterAction {
    /// An edit to a facet other than price. These flush an inverted price
    /// range before committing (see `FilterState::apply`).
    fn edits_other_facet(&self) -> bool {
        matches!(
            self,
            Self::SetLocation(_)
                | Self::SetDateFrom(_)
                | Self::SetDateTo(_)
                | Self::TogglePreset(_)
                | Self::SetLanguage(_)
        )
    }
}

impl FilterState {
    pub fn from_url_seed(seed: UrlFilterSeed) -> Self {
        // A preset is never reconstructed from a URL; date params always
        // produce a plain custom range.
        let dates = match (seed.date_from, seed.date_to) {
            (None, None) => DateSelection::Unset,
            (from, to) => DateSelection::Custom(DateRange { from, to }),
        };
        let price_touched = seed.price_min.is_some() || seed.price_max.is_some();
        Self {
            location: seed.location,
            dates,
            price: PriceRange {
                min: seed.price_min,
                max: seed.price_max,
            },
            language: seed.language,
            server_price: None,
            price_touched,
        }
    }

    pub fn apply(&mut self, action: FilterAction) {
        // UX policy: an inverted price range must not silently block "apply"
        // while the user is exploring other facets, so editing any non-price
        // facet resets the broken range to unconstrained first.
        if action.edits_other_facet() && price_range_inverted(&self.price) {
            self.price = PriceRange::default();
        }

        match action {
            FilterAction::SetLocation(location) => self.location = location,
            FilterAction::SetLanguage(language) => self.language = language,
            FilterAction::SetDateFrom(from) => {
                let mut bounds = self.dates.bounds();
                bounds.from = from;
                self.set_custom_dates(bounds);
            }
            FilterAction::SetDateTo(to) => {
                let mut bounds = self.dates.bounds();
                bounds.to = to;
                self.set_custom_dates(bounds);
            }
            FilterAction::TogglePreset(preset) => {
                if self.dates.active_preset() == Some(&preset) {
                    self.dates = DateSelection::Unset;
                } else {
                    self.dates = DateSelection::Preset(preset);
                }
            }
            FilterAction::SetPriceMin(min) => {
                self.price.min = min;
                self.price_touched = true;
            }
            FilterAction::SetPriceMax(max) => {
                self.price.max = max;
                self.price_touched = true;
            }
            FilterAction::ServerDefaultsArrived { price_min, price_max } => {
                let server = PriceRange {
                    min: Some(price_min),
                    max: Some(price_max),
                };
                self.server_price = Some(server);
                // Precedence: URL > server default > unconstrained. The
                // defaults only seed a price nobody has expressed an opinion
                // about, regardless of whether they arrive before or after
                // URL seeding.
                if !self.price_touched && self.price == PriceRange::default() {
                    self.price = server;
                }
            }
            FilterAction::ClearAll => {
                self.location = None;
                self.language = None;
                self.dates = DateSelection::Unset;
                // Full server range is the meaningful "no price filter"
                // value, distinct from unconstrained.
                self.price = self.server_price.unwrap_or_default();
            }
            FilterAction::ResetPriceToServer => {
                if let Some(server) = self.server_price {
                    self.price = server;
                }
            }
            FilterAction::ResetPeriod => self.dates = DateSelection::Unset,
        }
    }

    fn set_custom_dates(&mut self, bounds: DateRange) {
        if bounds.from.is_none() && bounds.to.is_none() {
            self.dates = DateSelection::Unset;
        } else {
            self.dates = DateSelection::Custom(bounds);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn preset() -> PeriodPreset {
        PeriodPreset {
            name: "Summer holidays".to_string(),
            start: date(2027, 7, 1),
            end: date(2027, 8, 31),
        }
    }

    #[test]
    fn url_price_wins_over_late_server_defaults() {
        let mut state = FilterState::from_url_seed(UrlFilterSeed {
            price_min: Some(500.0),
            price_max: Some(1000.0),
            ..Default::default()
        });
        state.apply(FilterAction::ServerDefaultsArrived {
            price_min: 0.0,
            price_max: 2000.0,
        });
        assert_eq!(state.price, PriceRange { min: Some(500.0), max: Some(1000.0) });
    }

    #[test]
    fn half_set_url_price_blocks_default_seeding() {
        // ?price_min=1000 with server {0, 5000}: the URL wins for the field
        // it set, and default seeding only applies when both bounds are unset.
        let mut state = FilterState::from_url_seed(UrlFilterSeed {
            price_min: Some(1000.0),
            ..Default::default()
        });
        assert_eq!(state.price, PriceRange { min: Some(1000.0), max: None });

        state.apply(FilterAction::ServerDefaultsArrived {
            price_min: 0.0,
            price_max: 5000.0,
        });
        assert_eq!(state.price, PriceRange { min: Some(1000.0), max: None });
    }

    #[test]
    fn untouched_price_seeds_from_server_defaults() {
        let mut state = FilterState::default();
        state.apply(FilterAction::ServerDefaultsArrived {
            price_min: 100.0,
            price_max: 3000.0,
        });
        assert_eq!(state.price, PriceRange { min: Some(100.0), max: Some(3000.0) });
    }

    #[test]
    fn user_edit_before_defaults_arrive_is_kept() {
        let mut state = FilterState::default();
        state.apply(FilterAction::SetPriceMax(Some(800.0)));
        state.apply(FilterAction::ServerDefaultsArrived {
            price_min: 0.0,
            price_max: 2000.0,
        });
        assert_eq!(state.price, PriceRange { min: None, max: Some(800.0) });
    }

    #[test]
    fn inverted_price_is_cleared_when_another_facet_is_edited() {
        // An inverted price range must not silently block "apply" while the
        // user is exploring other facets; it is flushed on the next edit.
        let mut state = FilterState::default();
        state.apply(FilterAction::SetPriceMin(Some(1000.0)));
        state.apply(FilterAction::SetPriceMax(Some(500.0)));

        state.apply(FilterAction::SetLocation(Some("Poland".to_string())));
        assert_eq!(state.price, PriceRange::default());
        assert_eq!(state.location.as_deref(), Some("Poland"));
    }

    #[test]
    fn inverted_price_survives_further_price_edits() {
        // Never block typing: the user may still be fixing the range.
        let mut state = FilterState::default();
        state.apply(FilterAction::SetPriceMin(Some(1000.0)));
        state.apply(FilterAction::SetPriceMax(Some(500.0)));
        state.apply(FilterAction::SetPriceMax(Some(400.0)));
        assert_eq!(state.price, PriceRange { min: Some(1000.0), max: Some(400.0) });
    }

    #[test]
    fn preset_toggle_selects_then_clears() {
        let mut state = FilterState::default();
        state.apply(FilterAction::TogglePreset(preset()));
        assert_eq!(state.dates, DateSelection::Preset(preset()));
        assert_eq!(state.dates.bounds().from, Some(date(2027, 7, 1)));

        // Toggling the same preset again clears the facet, it does not
        // re-apply the bounds.
        state.apply(FilterAction::TogglePreset(preset()));
        assert_eq!(state.dates, DateSelection::Unset);
    }

    #[test]
    fn selecting_a_different_preset_replaces_the_active_one() {
        let other = PeriodPreset {
            name: "Easter week".to_string(),
            start: date(2027, 3, 22),
            end: date(2027, 3, 28),
        };
        let mut state = FilterState::default();
        state.apply(FilterAction::TogglePreset(preset()));
        state.apply(FilterAction::TogglePreset(other.clone()));
        assert_eq!(state.dates, DateSelection::Preset(other));
    }

    #[test]
    fn manual_date_edit_degrades_preset_to_custom() {
        let mut state = FilterState::default();
        state.apply(FilterAction::TogglePreset(preset()));
        state.apply(FilterAction::SetDateFrom(Some(date(2027, 7, 15))));
        assert_eq!(
            state.dates,
            DateSelection::Custom(DateRange {
                from: Some(date(2027, 7, 15)),
                to: Some(date(2027, 8, 31)),
            })
        );
        assert!(state.dates.active_preset().is_none());
    }

    #[test]
    fn clearing_both_date_bounds_unsets_the_facet() {
        let mut state = FilterState::default();
        state.apply(FilterAction::SetDateFrom(Some(date(2027, 5, 1))));
        state.apply(FilterAction::SetDateFrom(None));
        assert_eq!(state.dates, DateSelection::Unset);
    }

    #[test]
    fn reset_period_never_leaves_a_half_cleared_selection() {
        let mut state = FilterState::default();
        state.apply(FilterAction::TogglePreset(preset()));
        state.apply(FilterAction::ResetPeriod);
        assert_eq!(state.dates, DateSelection::Unset);
        assert_eq!(state.dates.bounds(), DateRange::default());
        assert!(state.dates.active_preset().is_none());
    }

    #[test]
    fn clear_all_resets_price_to_server_defaults() {
        let mut state = FilterState::from_url_seed(UrlFilterSeed {
            location: Some("Spain".to_string()),
            language: Some("es".to_string()),
            price_min: Some(700.0),
            ..Default::default()
        });
        state.apply(FilterAction::ServerDefaultsArrived {
            price_min: 0.0,
            price_max: 4000.0,
        });
        state.apply(FilterAction::ClearAll);

        assert_eq!(state.location, None);
        assert_eq!(state.language, None);
        assert_eq!(state.dates, DateSelection::Unset);
        assert_eq!(state.price, PriceRange { min: Some(0.0), max: Some(4000.0) });
    }

    #[test]
    fn clear_all_without_defaults_falls_back_to_unconstrained() {
        let mut state = FilterState::default();
        state.apply(FilterAction::SetPriceMin(Some(50.0)));
        state.apply(FilterAction::ClearAll);
        assert_eq!(state.price, PriceRange::default());
    }

    #[test]
    fn reset_price_to_server_is_a_noop_before_defaults_arrive() {
        let mut state = FilterState::default();
        state.apply(FilterAction::SetPriceMin(Some(50.0)));
        state.apply(FilterAction::ResetPriceToServer);
        assert_eq!(state.price, PriceRange { min: Some(50.0), max: None });

        state.apply(FilterAction::ServerDefaultsArrived {
            price_min: 0.0,
            price_max: 900.0,
        });
        state.apply(FilterAction::ResetPriceToServer);
        assert_eq!(state.price, PriceRange { min: Some(0.0), max: Some(900.0) });
    }
}
