//! Country facet section, backed by the server-provided country list.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_communication_icons::MdLocationOn, md_navigation_icons::MdClose}};

use common::filter_state::FilterAction;

use crate::components::filter_components::filter_panel::FilterPanelContext;
use crate::components::filter_components::section_title::FacetSectionTitle;


#[component]
pub fn LocationFacetSection() -> Element {
    let panel = use_context::<FilterPanelContext>();
    let state = panel.state;
    let dispatch = panel.dispatch;
    let defaults = panel.defaults;

    let selected = use_memo(move || state.read().location.clone().unwrap_or_default());
    let countries = use_memo(move || match defaults.read().as_ref() {
        Some(Ok(loaded)) => loaded.countries.clone(),
        _ => Vec::new(),
    });
    let loading = use_memo(move || defaults.read().is_none());

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            FacetSectionTitle { icon: MdLocationOn, label: "Destination" }

            if loading() {
                div {
                    style: "color: rgba(0,0,0,0.5); font-size: 14px;",
                    "Loading destinations..."
                }
            } else {
                select {
                    style: "
                        font-size: 15px;
                        padding: 8px;
                        border: 1px solid rgba(0,0,0,0.4);
                        border-radius: 8px;
                        background: white;
                    ",
                    onchange: move |e| {
                        let value = e.value();
                        let location = if value.is_empty() { None } else { Some(value) };
                        dispatch(FilterAction::SetLocation(location));
                    },
                    option {
                        value: "",
                        selected: selected().is_empty(),
                        "Any country"
                    }
                    for country in countries() {
                        option {
                            value: "{country}",
                            selected: selected() == country,
                            "{country}"
                        }
                    }
                }
            }

            if !selected().is_empty() {
                div {
                    style: "display: flex; flex-direction: row;",
                    button {
                        style: "
                            cursor: pointer;
                            font-size: 13px;
                            background: white;
                            border: 1px solid rgba(0,0,0,0.3);
                            border-radius: 1000px;
                            padding: 4px 10px;
                        ",
                        onclick: move |_| {
                            dispatch(FilterAction::SetLocation(None));
                        },
                        "{selected} "
                        Icon { icon: MdClose, style: "width: 12px; height: 12px; color: rgba(0,0,0,0.7);" }
                    }
                }
            }
        }
    }
}
