use dioxus::prelude::*;
use dioxus_free_icons::{Icon, IconShape};

#[component]
pub fn FacetSectionTitle<I: IconShape + Clone + PartialEq + 'static>(icon: I, label: String) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                font-size: 16px;
                font-weight: 500;
                color: #1C212D;
            ",
            Icon { icon: icon, style: "width: 18px; height: 18px; color: rgba(0,0,0,0.8);" }
            "{label}"
        }
    }
}
