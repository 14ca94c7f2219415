//! Static facet enumerations: languages, price bands, period presets.

use chrono::NaiveDate;

use crate::filter_state::{PeriodPreset, PriceRange};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: &'static str,
    pub display_name: &'static str,
}

/// A quick-pick price chip. `max: None` is an open-ended top band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBand {
    pub min: f64,
    pub max: Option<f64>,
}

impl PriceBand {
    pub fn as_price_range(&self) -> PriceRange {
        PriceRange {
            min: Some(self.min),
            max: self.max,
        }
    }
}

/// Constant selectable data for the filter panel. Constructed once and passed
/// into the components that need it, never read as an ambient global.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetCatalog {
    pub languages: Vec<LanguageOption>,
    pub price_bands: Vec<PriceBand>,
    pub period_presets: Vec<PeriodPreset>,
}

impl FacetCatalog {
    pub fn standard() -> Self {
        Self {
            languages: vec![
                LanguageOption { code: "en", display_name: "English" },
                LanguageOption { code: "de", display_name: "German" },
                LanguageOption { code: "pl", display_name: "Polish" },
                LanguageOption { code: "es", display_name: "Spanish" },
                LanguageOption { code: "fr", display_name: "French" },
                LanguageOption { code: "it", display_name: "Italian" },
            ],
            price_bands: vec![
                PriceBand { min: 0.0, max: Some(500.0) },
                PriceBand { min: 500.0, max: Some(1000.0) },
                PriceBand { min: 1000.0, max: Some(2000.0) },
                PriceBand { min: 2000.0, max: None },
            ],
            period_presets: vec![
                PeriodPreset {
                    name: "Christmas & New Year".to_string(),
                    start: date(2026, 12, 21),
                    end: date(2027, 1, 3),
                },
                PeriodPreset {
                    name: "Easter week".to_string(),
                    start: date(2027, 3, 22),
                    end: date(2027, 3, 28),
                },
                PeriodPreset {
                    name: "Summer holidays".to_string(),
                    start: date(2027, 7, 1),
                    end: date(2027, 8, 31),
                },
            ],
        }
    }

    /// The known band whose bounds equal the current price range, if any.
    /// Used by the panel to decide whether to render a synthesized custom chip.
    pub fn band_matching(&self, price: &PriceRange) -> Option<&PriceBand> {
        self.price_bands
            .iter()
            .find(|band| price.min == Some(band.min) && price.max == band.max)
    }

    pub fn preset_named(&self, name: &str) -> Option<&PeriodPreset> {
        self.period_presets.iter().find(|preset| preset.name == name)
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_matching_requires_exact_bounds() {
        let catalog = FacetCatalog::standard();
        let range = PriceRange { min: Some(500.0), max: Some(1000.0) };
        assert!(catalog.band_matching(&range).is_some());

        let custom = PriceRange { min: Some(500.0), max: Some(999.0) };
        assert!(catalog.band_matching(&custom).is_none());

        let unconstrained = PriceRange::default();
        assert!(catalog.band_matching(&unconstrained).is_none());
    }

    #[test]
    fn open_ended_band_matches_half_open_range() {
        let catalog = FacetCatalog::standard();
        let range = PriceRange { min: Some(2000.0), max: None };
        let band = catalog.band_matching(&range).unwrap();
        assert_eq!(band.min, 2000.0);
        assert_eq!(band.max, None);
    }

    #[test]
    fn preset_lookup_by_name() {
        let catalog = FacetCatalog::standard();
        let preset = catalog.preset_named("Summer holidays").unwrap();
        assert!(preset.start < preset.end);
        assert!(catalog.preset_named("No such period").is_none());
    }
}
