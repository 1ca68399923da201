use dioxus::prelude::*;

use crate::core::snapshot::TODAY;
use crate::i18n::{label, LabelKey, Language};

/// "Today's Metrics" heading, disclaimer and the four headline cards.
#[component]
pub fn MetricCards(language: Language) -> Element {
    let cards = TODAY.cards(language);

    rsx! {
        section { class: "dashboard-today",
            h2 { class: "dashboard-today__heading", {label(LabelKey::TodayHeading, language)} }
            p { class: "dashboard-today__disclaimer", {label(LabelKey::DemoDisclaimer, language)} }

            div { class: "metric-cards",
                for card in cards.into_iter() {
                    div { key: "{card.caption.id()}", class: "metric-card {card.tone.css_class()}",
                        span { class: "metric-card__icon", aria_hidden: "true", "{card.icon}" }
                        strong { class: "metric-card__value", "{card.value}" }
                        span { class: "metric-card__caption", {label(card.caption, language)} }
                    }
                }
            }
        }
    }
}
