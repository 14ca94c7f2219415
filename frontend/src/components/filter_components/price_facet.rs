//! Price facet section: free bounds, quick-pick bands and the reset to the
//! server-provided full range.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_editor_icons::MdAttachMoney;

use common::facet_catalog::PriceBand;
use common::filter_state::{FilterAction, PriceRange};
use common::filter_validator::price_range_inverted;

use crate::components::filter_components::filter_panel::FilterPanelContext;
use crate::components::filter_components::section_title::FacetSectionTitle;


#[component]
pub fn PriceFacetSection() -> Element {
    let panel = use_context::<FilterPanelContext>();
    let state = panel.state;
    let dispatch = panel.dispatch;
    let defaults = panel.defaults;
    let bands = panel.catalog.price_bands.clone();
    let catalog = panel.catalog.clone();

    let min_value = use_memo(move || format_bound(state.read().price.min));
    let max_value = use_memo(move || format_bound(state.read().price.max));
    // Recomputed on every price change; never blocks typing.
    let inverted = use_memo(move || price_range_inverted(&state.read().price));
    let server_loaded = use_memo(move || matches!(defaults.read().as_ref(), Some(Ok(_))));
    // A set range that matches neither a known band nor the server default
    // gets a synthesized chip so the selection stays visible.
    let custom_range_active = use_memo(move || {
        let state = state.read();
        let price = state.price;
        if price == PriceRange::default() {
            return false;
        }
        if state.server_price == Some(price) {
            return false;
        }
        catalog.band_matching(&price).is_none()
    });

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            FacetSectionTitle { icon: MdAttachMoney, label: "Price" }

            div {
                style: "display: flex; flex-direction: row; gap: 10px; align-items: center;",
                input {
                    r#type: "number",
                    placeholder: "Min",
                    value: "{min_value}",
                    style: "font-size: 14px; padding: 6px; width: 110px; border: 1px solid rgba(0,0,0,0.4); border-radius: 8px;",
                    oninput: move |e| {
                        dispatch(FilterAction::SetPriceMin(parse_bound(&e.value())));
                    },
                }
                span { style: "color: rgba(0,0,0,0.6);", "to" }
                input {
                    r#type: "number",
                    placeholder: "Max",
                    value: "{max_value}",
                    style: "font-size: 14px; padding: 6px; width: 110px; border: 1px solid rgba(0,0,0,0.4); border-radius: 8px;",
                    oninput: move |e| {
                        dispatch(FilterAction::SetPriceMax(parse_bound(&e.value())));
                    },
                }
            }

            if inverted() {
                div {
                    style: "color: darkred; font-size: 13px;",
                    "Max price is below min price"
                }
            }

            div {
                style: "display: flex; flex-direction: row; gap: 8px; flex-wrap: wrap;",
                for band in bands {
                    PriceBandChip { band }
                }
                if custom_range_active() {
                    span {
                        style: "
                            font-size: 13px;
                            border: 2px solid rgba(0,0,255,0.9);
                            border-radius: 1000px;
                            padding: 5px 12px;
                        ",
                        "Custom"
                    }
                }
            }

            if server_loaded() {
                div {
                    style: "display: flex; flex-direction: row;",
                    button {
                        style: "
                            cursor: pointer;
                            font-size: 13px;
                            background: white;
                            border: none;
                            color: rgba(0,0,0,0.6);
                            text-decoration: underline;
                            padding: 0;
                        ",
                        onclick: move |_| {
                            dispatch(FilterAction::ResetPriceToServer);
                        },
                        "Reset to full range"
                    }
                }
            }
        }
    }
}

#[component]
fn PriceBandChip(band: PriceBand) -> Element {
    let panel = use_context::<FilterPanelContext>();
    let state = panel.state;
    let dispatch = panel.dispatch;

    let is_active = use_memo(move || {
        let price = state.read().price;
        price.min == Some(band.min) && price.max == band.max
    });
    let border = use_memo(move || {
        if is_active() { "2px solid rgba(0,0,255,0.9)" } else { "1px solid rgba(0,0,0,0.4)" }
    });
    let label = match band.max {
        Some(max) => format!("{:.0} - {:.0}", band.min, max),
        None => format!("{:.0}+", band.min),
    };

    rsx! {
        button {
            style: "
                cursor: pointer;
                font-size: 13px;
                background: white;
                border: {border()};
                border-radius: 1000px;
                padding: 5px 12px;
            ",
            onclick: move |_| {
                if is_active() {
                    // Clicking the active band toggles back to the default
                    // full range.
                    dispatch(FilterAction::ResetPriceToServer);
                } else {
                    dispatch(FilterAction::SetPriceMin(Some(band.min)));
                    dispatch(FilterAction::SetPriceMax(band.max));
                }
            },
            "{label}"
        }
    }
}

fn format_bound(bound: Option<f64>) -> String {
    match bound {
        Some(value) if value.fract() == 0.0 => format!("{value:.0}"),
        Some(value) => value.to_string(),
        None => String::new(),
    }
}

fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
