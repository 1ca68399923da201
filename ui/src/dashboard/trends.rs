use dioxus::prelude::*;

use crate::charts::LineChart;
use crate::core::{ChartData, DashboardEvent, MetricFilter, TimeRange, UiState};
use crate::i18n::{label, LabelKey};

use super::{dispatch, dispatch_option};

/// Weight & sleep trend card: range select, metric radio group and line chart.
#[component]
pub fn TrendsCard(state: Signal<UiState>, chart: ChartData) -> Element {
    let UiState {
        language,
        time_range,
        metric_filter,
        ..
    } = state();

    rsx! {
        section { class: "chart-card chart-card--trends",
            div { class: "chart-card__header",
                div { class: "chart-card__heading",
                    h3 { class: "chart-card__title",
                        span { class: "chart-card__icon chart-card__icon--trend", aria_hidden: "true", "↗" }
                        {label(LabelKey::TrendsTitle, language)}
                    }
                    p { class: "chart-card__description", {label(LabelKey::TrendsDescription, language)} }
                }

                div { class: "chart-controls",
                    label { class: "visually-hidden", r#for: "trend-range", {label(LabelKey::RangeSelectLabel, language)} }
                    select {
                        id: "trend-range",
                        class: "chart-controls__select",
                        value: "{time_range.key()}",
                        onchange: move |evt: FormEvent| {
                            dispatch_option(state, &evt.value(), DashboardEvent::RangeChanged)
                        },
                        for range in TimeRange::ALL {
                            option {
                                key: "{range.key()}",
                                value: range.key(),
                                selected: range == time_range,
                                {label(range.label_key(), language)}
                            }
                        }
                    }

                    div {
                        class: "chart-controls__toggle",
                        role: "radiogroup",
                        aria_label: label(LabelKey::FilterGroupLabel, language),
                        for filter in MetricFilter::ALL {
                            input {
                                key: "input-{filter.key()}",
                                r#type: "radio",
                                class: "chart-controls__radio",
                                name: "trend-metric",
                                id: "trend-metric-{filter.key()}",
                                value: filter.key(),
                                checked: filter == metric_filter,
                                onchange: move |_| dispatch(state, DashboardEvent::FilterChanged(filter)),
                            }
                            label {
                                key: "label-{filter.key()}",
                                class: "chart-controls__option",
                                r#for: "trend-metric-{filter.key()}",
                                {label(filter.label_key(), language)}
                            }
                        }
                    }
                }
            }

            div { class: "chart-card__body",
                LineChart { data: chart, language }
            }
        }
    }
}
