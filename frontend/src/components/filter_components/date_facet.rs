//! Travel-window facet section: free date inputs plus one-click period
//! presets.

use chrono::NaiveDate;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdDateRange;

use common::filter_state::{FilterAction, PeriodPreset};

use crate::components::filter_components::filter_panel::FilterPanelContext;
use crate::components::filter_components::section_title::FacetSectionTitle;


const DATE_FORMAT: &str = "%Y-%m-%d";

#[component]
pub fn DateFacetSection() -> Element {
    let panel = use_context::<FilterPanelContext>();
    let state = panel.state;
    let dispatch = panel.dispatch;
    let presets = panel.catalog.period_presets.clone();

    let bounds = use_memo(move || state.read().dates.bounds());
    let from_value = use_memo(move || format_date(bounds().from));
    let to_value = use_memo(move || format_date(bounds().to));
    let any_date_set = use_memo(move || !state.read().dates.is_unset());

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            FacetSectionTitle { icon: MdDateRange, label: "Travel dates" }

            div {
                style: "display: flex; flex-direction: row; gap: 10px; align-items: center;",
                input {
                    r#type: "date",
                    value: "{from_value}",
                    style: "font-size: 14px; padding: 6px; border: 1px solid rgba(0,0,0,0.4); border-radius: 8px;",
                    oninput: move |e| {
                        dispatch(FilterAction::SetDateFrom(parse_date(&e.value())));
                    },
                }
                span { style: "color: rgba(0,0,0,0.6);", "to" }
                input {
                    r#type: "date",
                    value: "{to_value}",
                    style: "font-size: 14px; padding: 6px; border: 1px solid rgba(0,0,0,0.4); border-radius: 8px;",
                    oninput: move |e| {
                        dispatch(FilterAction::SetDateTo(parse_date(&e.value())));
                    },
                }
            }

            div {
                style: "display: flex; flex-direction: row; gap: 8px; flex-wrap: wrap;",
                for preset in presets {
                    PeriodPresetChip { preset: preset.clone() }
                }
            }

            if any_date_set() {
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
                            dispatch(FilterAction::ResetPeriod);
                        },
                        "Reset dates"
                    }
                }
            }
        }
    }
}

#[component]
fn PeriodPresetChip(preset: PeriodPreset) -> Element {
    let panel = use_context::<FilterPanelContext>();
    let state = panel.state;
    let dispatch = panel.dispatch;

    let chip_preset = preset.clone();
    let is_active = use_memo(move || state.read().dates.active_preset() == Some(&chip_preset));
    let border = use_memo(move || {
        if is_active() { "2px solid rgba(0,0,255,0.9)" } else { "1px solid rgba(0,0,0,0.4)" }
    });

    let toggled = preset.clone();
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
                dispatch(FilterAction::TogglePreset(toggled.clone()));
            },
            "{preset.name}"
        }
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}
