use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_image_icons::MdTune};

use common::event_listing::EventListing;
use common::filter_validator::is_default_state;

use crate::{
    api::events_api::fetch_event_page,
    components::{
        error_boundary::ComponentErrorDisplay,
        event_components::{event_card::EventCard, event_list_controls::EventListControls},
        filter_components::filter_panel::FilterPanel,
        suspend_boundary::{LoadingIndicator, SuspendWrapper},
    },
    data_definitions::filter_query::FilterQuery,
};


/// Listing page
#[component]
pub fn EventListPage(filters: FilterQuery) -> Element {
    rsx! {
        Title { "Retreat Marketplace: Find your retreat" }
        EventListRootComponent { filters }
    }
}

#[derive(Copy, Clone)]
pub struct EventListState {
    pub listing: ReadSignal<Option<Result<EventListing, ServerFnError>>>,
    pub current_page: ReadSignal<u64>,
    pub set_current_page: Callback<u64>,
}

#[component]
fn EventListRootComponent(filters: ReadSignal<FilterQuery>) -> Element {
    let mut panel_open = use_signal(|| false);
    let mut current_page = use_signal(|| 0_u64);
    let applied_state = use_memo(move || filters.read().seed_state());

    // a new filter URL resets pagination
    use_effect(move || {
        let _ = filters.read();
        current_page.set(0);
    });

    let mut listing = use_resource(move || {
        let state = applied_state.read().clone();
        fetch_event_page(state, *current_page.read())
    });
    // when the applied filters or the page change, restart the listing resource
    use_effect(move || {
        let _ = applied_state.read();
        let _ = current_page.read();
        listing.clear();
        listing.restart();
    });

    let set_current_page = Callback::new(move |page: u64| {
        current_page.set(page);
    });
    use_context_provider(move || EventListState {
        listing: listing.into(),
        current_page: current_page.into(),
        set_current_page,
    });

    let filters_active = use_memo(move || !is_default_state(&applied_state.read()));
    let filter_button_border = use_memo(move || {
        if filters_active() { "2px solid rgba(0,0,255,0.9)" } else { "1px solid rgba(0,0,0,0.5)" }
    });

    rsx! {
        div {
            id: "x-event-list-root-component",
            style: "
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
                background-color: #F5F6F8;
            ",

            div {
                id: "x-event-list-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 12px;
                    height: 76px;
                    width: 100%;
                    padding: 0px 16px;
                ",
                h1 {
                    style: "font-size: 24px; font-weight: 500; color: #1C212D;",
                    "Retreats"
                }
                div { style: "flex-grow: 1;" }
                button {
                    style: "
                        cursor: pointer;
                        display: flex;
                        align-items: center;
                        gap: 6px;
                        border: {filter_button_border()};
                        border-radius: 1000px;
                        background-color: white;
                        padding: 8px 16px;
                        font-size: 15px;
                    ",
                    onclick: move |_| {
                        panel_open.set(true);
                    },
                    Icon { icon: MdTune, style: "width: 20px; height: 20px; color: rgba(0,0,0,0.9);" }
                    "Filters"
                }
            }

            div {
                style: "
                    width: 100%;
                    display: flex;
                    flex-direction: column;
                    flex-grow: 1;
                    max-height: calc(100% - 76px);
                    padding: 0px 8px;
                ",
                EventListControls {}
                div {
                    style: "
                        flex-grow: 1;
                        width: 100%;
                        overflow-y: auto;
                    ",
                    SuspendWrapper {
                        EventListView {}
                    }
                }
            }

            if panel_open() {
                FilterPanel {
                    initial: filters.read().clone(),
                    onclose: move |_| {
                        panel_open.set(false);
                    },
                }
            }
        }
    }
}

#[component]
fn EventListView() -> Element {
    let list_state = use_context::<EventListState>();
    let listing = list_state.listing;
    let listing = listing.read();
    let listing = match listing.as_ref() {
        Some(Err(e)) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Some(Ok(listing)) => listing,
        None => return rsx! { LoadingIndicator {} },
    };

    if listing.events.is_empty() {
        return rsx! {
            div {
                style: "color: rgba(0,0,0,0.6); font-size: 18px; padding: 20px;",
                "No retreats match the current filters."
            }
        };
    }

    rsx! {
        ul {
            id: "x-event-list-wrapper",
            style: "
                width: 100%;
                height: 100%;
                list-style: none;
                padding: 0;
                margin: 0;
            ",
            for event in listing.events.iter().cloned() {
                li {
                    key: "{event.id}",
                    EventCard { event: event.clone() }
                }
            }
        }
    }
}
