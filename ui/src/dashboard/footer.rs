use dioxus::prelude::*;

use crate::i18n::{label, LabelKey, Language};

#[component]
pub fn DashboardFooter(language: Language) -> Element {
    rsx! {
        footer { class: "dashboard-footer",
            p { {label(LabelKey::FooterText, language)} }
        }
    }
}
