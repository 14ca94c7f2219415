use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdDateRange, md_communication_icons::MdLocationOn, md_social_icons::MdPerson}};

use common::event_listing::{ContactRequest, EventItem};

use crate::{
    api::events_api::{fetch_event, send_contact_request},
    components::{error_boundary::ComponentErrorDisplay, suspend_boundary::SuspendWrapper},
};


/// Event detail page
#[component]
pub fn EventDetailPage(event_id: String) -> Element {
    rsx! {
        Title { "Retreat Marketplace: Retreat details" }
        SuspendWrapper {
            EventDetailView { event_id }
        }
    }
}

#[component]
fn EventDetailView(event_id: ReadSignal<String>) -> Element {
    let event = use_resource(move || {
        let id = event_id.read().clone();
        fetch_event(id)
    }).suspend()?.cloned();
    let event = match event {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(event) => event,
    };

    let dates_txt = match (event.start_date, event.end_date) {
        (Some(start), Some(end)) => format!("{} - {}", start.format("%d %b %Y"), end.format("%d %b %Y")),
        (Some(start), None) => format!("from {}", start.format("%d %b %Y")),
        _ => "Dates to be announced".to_string(),
    };
    let price_txt = match event.price {
        Some(price) => format!("from {price:.0} {currency}", currency = event.currency),
        None => "Price on request".to_string(),
    };
    let image = event.image_url.clone().unwrap_or_default();

    rsx! {
        div {
            id: "x-event-detail-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            if !image.is_empty() {
                img {
                    src: "{image}",
                    alt: "{event.title}",
                    style: "width: 100%; max-width: 760px; max-height: 340px; object-fit: cover; border-radius: 16px;",
                }
            }

            h1 {
                style: "font-size: 34px; font-weight: 500; color: #0F172A; margin: 0;",
                "{event.title}"
            }

            div {
                style: "display: flex; flex-direction: row; gap: 24px; font-size: 17px; color: rgba(0,0,0,0.75); flex-wrap: wrap;",
                span {
                    Icon { icon: MdLocationOn, style: "width: 18px; height: 18px;" }
                    " {event.city}, {event.country}"
                }
                span {
                    Icon { icon: MdDateRange, style: "width: 18px; height: 18px;" }
                    " {dates_txt}"
                }
                span {
                    Icon { icon: MdPerson, style: "width: 18px; height: 18px;" }
                    " {event.organizer_name}"
                }
                span {
                    style: "font-weight: 500;",
                    "{price_txt}"
                }
            }

            ContactOrganizerForm { event: event.clone() }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum ContactSendState {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

/// Contact form: the app forwards the request to the organizer through the
/// upstream API, nothing more.
#[component]
fn ContactOrganizerForm(event: EventItem) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut send_state = use_signal(|| ContactSendState::Idle);
    let event_id = event.id.clone();

    let can_send = use_memo(move || {
        !name.read().is_empty()
            && !email.read().is_empty()
            && !message.read().is_empty()
            && *send_state.read() != ContactSendState::Sending
    });

    let on_send = move |_| {
        if !can_send() {
            return;
        }
        let request = ContactRequest {
            event_id: event_id.clone(),
            name: name.peek().clone(),
            email: email.peek().clone(),
            message: message.peek().clone(),
        };
        send_state.set(ContactSendState::Sending);
        spawn(async move {
            match send_contact_request(request).await {
                Ok(()) => send_state.set(ContactSendState::Sent),
                Err(e) => send_state.set(ContactSendState::Failed(e.to_string())),
            }
        });
    };

    let status_txt = use_memo(move || match send_state.read().clone() {
        ContactSendState::Idle => String::new(),
        ContactSendState::Sending => "Sending...".to_string(),
        ContactSendState::Sent => "Request sent. The organizer will get back to you.".to_string(),
        ContactSendState::Failed(e) => format!("Could not send the request: {e}"),
    });

    rsx! {
        div {
            id: "x-contact-organizer-form",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                width: 100%;
                max-width: 520px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 16px;
                padding: 18px;
            ",

            h2 {
                style: "font-size: 22px; font-weight: 500; margin: 0;",
                "Contact the organizer"
            }

            input {
                r#type: "text",
                placeholder: "Your name",
                value: "{name}",
                style: "font-size: 15px; padding: 8px; border: 1px solid rgba(0,0,0,0.4); border-radius: 8px;",
                oninput: move |e| {
                    name.set(e.value());
                },
            }
            input {
                r#type: "email",
                placeholder: "Your email",
                value: "{email}",
                style: "font-size: 15px; padding: 8px; border: 1px solid rgba(0,0,0,0.4); border-radius: 8px;",
                oninput: move |e| {
                    email.set(e.value());
                },
            }
            textarea {
                placeholder: "Your message",
                value: "{message}",
                rows: 5,
                style: "font-size: 15px; padding: 8px; border: 1px solid rgba(0,0,0,0.4); border-radius: 8px; resize: vertical;",
                oninput: move |e| {
                    message.set(e.value());
                },
            }

            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                button {
                    disabled: !can_send(),
                    style: "
                        cursor: pointer;
                        background: #1C212D;
                        color: white;
                        border: none;
                        border-radius: 8px;
                        padding: 10px 22px;
                        font-size: 15px;
                    ",
                    onclick: on_send,
                    "Send request"
                }
                span {
                    style: "font-size: 14px; color: rgba(0,0,0,0.7);",
                    "{status_txt}"
                }
            }
        }
    }
}
