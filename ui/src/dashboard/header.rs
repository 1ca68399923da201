use dioxus::prelude::*;

use crate::core::{DashboardEvent, UiState};
use crate::i18n::{label, LabelKey, Language};

use super::dispatch;

#[component]
pub fn DashboardHeader(state: Signal<UiState>) -> Element {
    let language = state().language;

    rsx! {
        header { class: "dashboard-header",
            div { class: "dashboard-header__inner",
                div { class: "dashboard-header__brand",
                    h1 { class: "dashboard-header__title",
                        span { class: "dashboard-header__mark", aria_hidden: "true", "◆" }
                        {label(LabelKey::DashboardTitle, language)}
                    }
                    p { class: "dashboard-header__subtitle", {label(LabelKey::DashboardSubtitle, language)} }
                }

                div {
                    class: "language-switcher",
                    role: "group",
                    aria_label: label(LabelKey::LanguageSwitcherLabel, language),
                    for lang in Language::ALL {
                        button {
                            key: "{lang}",
                            r#type: "button",
                            class: format!(
                                "language-switcher__button {}",
                                if lang == language { "language-switcher__button--active" } else { "" }
                            ),
                            aria_pressed: lang == language,
                            onclick: move |_| dispatch(state, DashboardEvent::LanguageChanged(lang)),
                            "{lang.code().to_uppercase()}"
                        }
                    }
                }
            }
        }
    }
}
