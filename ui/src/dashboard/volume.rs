use dioxus::prelude::*;

use crate::charts::BarChart;
use crate::core::{ChartData, DashboardEvent, UiState, Week};
use crate::i18n::{label, LabelKey};

use super::dispatch_option;

/// Weekly training volume card: week select and bar chart.
#[component]
pub fn VolumeCard(state: Signal<UiState>, chart: ChartData) -> Element {
    let UiState { language, week, .. } = state();

    rsx! {
        section { class: "chart-card chart-card--volume",
            div { class: "chart-card__header",
                div { class: "chart-card__heading",
                    h3 { class: "chart-card__title",
                        span { class: "chart-card__icon chart-card__icon--volume", aria_hidden: "true", "▮" }
                        {label(LabelKey::VolumeTitle, language)}
                    }
                    p { class: "chart-card__description", {label(LabelKey::VolumeDescription, language)} }
                }
            }

            div { class: "chart-card__body",
                div { class: "chart-controls",
                    label { class: "visually-hidden", r#for: "volume-week", {label(LabelKey::WeekSelectLabel, language)} }
                    select {
                        id: "volume-week",
                        class: "chart-controls__select",
                        value: "{week.key()}",
                        onchange: move |evt: FormEvent| {
                            dispatch_option(state, &evt.value(), DashboardEvent::WeekChanged)
                        },
                        for option_week in Week::ALL {
                            option {
                                key: "{option_week.key()}",
                                value: option_week.key(),
                                selected: option_week == week,
                                {label(option_week.label_key(), language)}
                            }
                        }
                    }
                }

                BarChart { data: chart, language }
            }
        }
    }
}
