//! Language facet section, backed by the static catalog.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdLanguage;

use common::facet_catalog::LanguageOption;
use common::filter_state::FilterAction;

use crate::components::filter_components::filter_panel::FilterPanelContext;
use crate::components::filter_components::section_title::FacetSectionTitle;


#[component]
pub fn LanguageFacetSection() -> Element {
    let panel = use_context::<FilterPanelContext>();
    let languages = panel.catalog.languages.clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            FacetSectionTitle { icon: MdLanguage, label: "Language" }

            div {
                style: "display: flex; flex-direction: row; gap: 8px; flex-wrap: wrap;",
                for language in languages {
                    LanguageChip { language }
                }
            }
        }
    }
}

#[component]
fn LanguageChip(language: LanguageOption) -> Element {
    let panel = use_context::<FilterPanelContext>();
    let state = panel.state;
    let dispatch = panel.dispatch;

    let is_active = use_memo(move || state.read().language.as_deref() == Some(language.code));
    let border = use_memo(move || {
        if is_active() { "2px solid rgba(0,0,255,0.9)" } else { "1px solid rgba(0,0,0,0.4)" }
    });

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
                let next = if is_active() { None } else { Some(language.code.to_string()) };
                dispatch(FilterAction::SetLanguage(next));
            },
            "{language.display_name}"
        }
    }
}
