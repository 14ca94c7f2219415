//! Event listing card component.

use common::event_listing::EventItem;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdDateRange, md_communication_icons::MdLocationOn, md_social_icons::MdPerson}};

use crate::routes::Route;

#[component]
pub fn EventCard(event: ReadSignal<EventItem>) -> Element {
    let EventItem {
        id,
        title,
        country,
        city,
        start_date,
        end_date,
        price,
        currency,
        language,
        image_url,
        organizer_name,
    } = event.read().clone();

    let dates_txt = match (start_date, end_date) {
        (Some(start), Some(end)) => format!("{} - {}", start.format("%d %b %Y"), end.format("%d %b %Y")),
        (Some(start), None) => format!("from {}", start.format("%d %b %Y")),
        _ => "Dates to be announced".to_string(),
    };
    let price_txt = match price {
        Some(price) => format!("from {price:.0} {currency}"),
        None => "Price on request".to_string(),
    };
    let image = image_url.unwrap_or_default();

    rsx! {
        Link {
            to: Route::EventDetailPage { event_id: id.clone() },
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: stretch;
                    gap: 14px;
                    background: white;
                    border: 1px solid #AAAAAA33;
                    border-radius: 8px;
                    padding: 12px 16px;
                    margin: 8px 8px;
                    width: calc(100% - 16px);
                    box-sizing: border-box;
                    color: #1C212D;
                ",

                if !image.is_empty() {
                    img {
                        src: "{image}",
                        alt: "{title}",
                        style: "width: 140px; height: 100px; object-fit: cover; border-radius: 6px; flex-shrink: 0;",
                    }
                }

                div {
                    style: "display: flex; flex-direction: column; gap: 6px; min-width: 0; flex-grow: 1;",
                    div {
                        style: "font-size: 20px; font-weight: 500; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                        "{title}"
                    }
                    div {
                        style: "display: flex; flex-direction: row; align-items: center; gap: 6px; font-size: 14px; color: rgba(0,0,0,0.7);",
                        Icon { icon: MdLocationOn, style: "width: 16px; height: 16px;" }
                        "{city}, {country}"
                    }
                    div {
                        style: "display: flex; flex-direction: row; align-items: center; gap: 6px; font-size: 14px; color: rgba(0,0,0,0.7);",
                        Icon { icon: MdDateRange, style: "width: 16px; height: 16px;" }
                        "{dates_txt}"
                        span { style: "color: rgba(0,0,0,0.4);", "|" }
                        "{language}"
                    }
                    div {
                        style: "display: flex; flex-direction: row; align-items: center; gap: 6px; font-size: 14px; color: rgba(0,0,0,0.7);",
                        Icon { icon: MdPerson, style: "width: 16px; height: 16px;" }
                        "{organizer_name}"
                    }
                }

                div {
                    style: "display: flex; flex-direction: column; justify-content: flex-end; flex-shrink: 0;",
                    span {
                        style: "font-size: 16px; font-weight: 500;",
                        "{price_txt}"
                    }
                }
            }
        }
    }
}
