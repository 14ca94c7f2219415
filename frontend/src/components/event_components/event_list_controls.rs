//! Result count and pagination controls for the event listing.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, IconShape, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

use crate::pages::event_list_page::EventListState;

#[component]
pub fn EventListControls() -> Element {
    rsx! {
        div {
            id: "x-event-list-title-row",
            style: "
                display: flex;
                flex-direction: row;
                gap: 6px;
                padding: 7px;
                margin: 1px;
                height: 56px;
                width: 100%;
                align-items: center;
            ",
            h1 {
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112); border-bottom: 1px solid rgb(75, 87, 112);",
                EventCountString {}
            }
            // empty space
            div {
                style: "
                flex-grow: 1;"
            }
            PageControls {}
        }
    }
}

#[component]
fn PageControls() -> Element {
    let list_state = use_context::<EventListState>();
    let listing = list_state.listing;
    let current_page = list_state.current_page;
    let set_current_page = list_state.set_current_page;

    let max_pages = use_memo(move || {
        let listing = listing.read();
        let Some(Ok(listing)) = listing.as_ref() else { return 0 };
        if listing.total == 0 || listing.limit == 0 {
            return 0;
        }
        listing.total.div_ceil(listing.limit)
    });
    let selected_page = use_memo(move || {
        let current_page = *current_page.read() + 1;
        current_page.min((*max_pages.read()).max(1))
    });
    let can_go_to_previous_page = use_memo(move || selected_page() > 1);
    let can_go_to_next_page = use_memo(move || selected_page() < *max_pages.read());

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 16px;
            ",
            NavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: !can_go_to_previous_page(),
                onclick: move |_| { set_current_page(current_page() - 1); }
            }
            div {
                style: "
                    font-size: 16px;
                    line-height: 21px;
                    font-weight: 400;
                    background-color: white;
                    border-radius: 2px;
                    border-left: 1px solid rgba(0,0,0,0.1);
                    border-right: 1px solid rgba(0,0,0,0.1);
                    padding: 4px 12px;
                ",
                "{selected_page()}"
                span {
                    style: "color: rgba(0,0,0,0.5);",
                    "/{max_pages().max(1)}"
                }
            }
            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: !can_go_to_next_page(),
                onclick: move |_| { set_current_page(current_page() + 1); }
            }
        }
    }
}

#[component]
pub fn NavigationButton<I: IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 8px;
                padding: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 22px; height: 22px; color: {btn_color};" }
        }
    }
}

#[component]
fn EventCountString() -> Element {
    let list_state = use_context::<EventListState>();
    let listing = list_state.listing;

    match listing.read().as_ref() {
        Some(Err(e)) => rsx! { "! error: {e:?}" },
        Some(Ok(listing)) => rsx! { "{listing.total} retreats found" },
        None => rsx! { "..." },
    }
}
