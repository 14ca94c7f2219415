//! The filter shell: wires the state store, the defaults loader and the URL
//! codec into the interactive panel.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use common::facet_catalog::FacetCatalog;
use common::filter_state::{FilterAction, FilterState, ServerDefaults};
use common::url_codec::encode_filter_url;

use crate::api::events_api::fetch_filter_defaults;
use crate::components::filter_components::date_facet::DateFacetSection;
use crate::components::filter_components::language_facet::LanguageFacetSection;
use crate::components::filter_components::location_facet::LocationFacetSection;
use crate::components::filter_components::price_facet::PriceFacetSection;
use crate::data_definitions::filter_query::FilterQuery;


#[derive(Clone)]
pub struct FilterPanelContext {
    pub state: ReadSignal<FilterState>,
    /// Every facet edit goes through this, so the reducer's conflict
    /// auto-clear runs before the edit is committed.
    pub dispatch: Callback<FilterAction>,
    pub defaults: ReadSignal<Option<Result<ServerDefaults, ServerFnError>>>,
    pub catalog: FacetCatalog,
}

/// Modal filter panel. Mounted only while open, so the state store and the
/// defaults fetch live exactly as long as one opening; closing without
/// "apply" discards both.
#[component]
pub fn FilterPanel(initial: FilterQuery, onclose: Callback<()>) -> Element {
    let mut state = use_signal(move || initial.seed_state());
    let dispatch = Callback::new(move |action: FilterAction| {
        state.write().apply(action);
    });

    // At most one defaults fetch per opening; re-renders reuse the resource.
    let defaults = use_resource(move || fetch_filter_defaults());
    use_effect(move || {
        if let Some(Ok(loaded)) = defaults.read().as_ref() {
            if state.peek().server_price.is_none() {
                let action = FilterAction::ServerDefaultsArrived {
                    price_min: loaded.price_min,
                    price_max: loaded.price_max,
                };
                state.write().apply(action);
            }
        }
    });

    use_context_provider(|| FilterPanelContext {
        state: state.into(),
        dispatch,
        defaults: defaults.into(),
        catalog: FacetCatalog::standard(),
    });

    let on_apply = move |_| {
        let url = encode_filter_url(&state.peek());
        navigator().push(url.as_str());
        onclose(());
    };

    rsx! {
        div {
            id: "x-filter-panel-backdrop",
            style: "
                position: fixed;
                top: 0px;
                left: 0px;
                z-index: 999;
                background-color: rgba(0,0,0,0.3);
                width: 100%;
                height: 100%;
            ",
            onclick: move |_| {
                onclose(());
            },
        }

        div {
            id: "x-filter-panel",
            style: "
                position: fixed;
                top: 50px;
                left: 50%;
                transform: translateX(-50%);
                background: white;
                width: 520px;
                max-width: calc(100vw - 40px);
                max-height: calc(100vh - 100px);
                overflow-y: auto;
                border: 1px solid rgba(0,0,0,0.5);
                border-radius: 10px;
                padding: 18px;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                z-index: 1000;
                display: flex;
                flex-direction: column;
                gap: 18px;
            ",

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    border-bottom: 1px solid rgba(0,0,0,0.1);
                    padding-bottom: 10px;
                ",
                h2 {
                    style: "font-size: 22px; font-weight: 500; color: #1C212D; margin: 0;",
                    "Filters"
                }
                div { style: "flex-grow: 1;" }
                button {
                    style: "cursor: pointer; background: white; border: none; padding: 4px;",
                    onclick: move |_| {
                        onclose(());
                    },
                    Icon { icon: MdClose, style: "width: 24px; height: 24px; color: rgba(0,0,0,0.7);" }
                }
            }

            DefaultsLoadErrorNotice {}

            LocationFacetSection {}
            DateFacetSection {}
            PriceFacetSection {}
            LanguageFacetSection {}

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    gap: 10px;
                    border-top: 1px solid rgba(0,0,0,0.1);
                    padding-top: 14px;
                ",
                // Clear-all does not navigate; the user still has to apply.
                button {
                    style: "
                        cursor: pointer;
                        background: white;
                        border: 1px solid rgba(0,0,0,0.4);
                        border-radius: 8px;
                        padding: 10px 18px;
                        font-size: 15px;
                    ",
                    onclick: move |_| {
                        dispatch(FilterAction::ClearAll);
                    },
                    "Clear all"
                }
                div { style: "flex-grow: 1;" }
                button {
                    style: "
                        cursor: pointer;
                        background: #1C212D;
                        color: white;
                        border: none;
                        border-radius: 8px;
                        padding: 10px 22px;
                        font-size: 15px;
                    ",
                    onclick: on_apply,
                    "Show results"
                }
            }
        }
    }
}

/// Transport failures while loading the defaults are surfaced inline; the
/// panel stays usable with the facets that do not depend on server data.
#[component]
fn DefaultsLoadErrorNotice() -> Element {
    let panel = use_context::<FilterPanelContext>();
    let defaults = panel.defaults;
    match defaults.read().as_ref() {
        Some(Err(e)) => rsx! {
            div {
                style: "
                    color: darkred;
                    font-size: 14px;
                    border: 1px solid rgba(200,0,0,0.4);
                    border-radius: 6px;
                    padding: 8px;
                ",
                "Could not load filter options: {e}"
            }
        },
        _ => rsx! {},
    }
}
