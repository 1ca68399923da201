use dioxus::prelude::*;

use crate::core::{select_time_series, select_volume_series, UiState};
use crate::dashboard::{DashboardFooter, DashboardHeader, MetricCards, TrendsCard, VolumeCard};

#[cfg(debug_assertions)]
fn log_dashboard_render(state: &UiState) {
    // Lightweight render trace for diagnosing state refresh issues.
    dioxus::logger::tracing::trace!(?state, "dashboard render");
}

/// The single dashboard page. Owns the UI state; everything below it is a
/// pure function of that state and the static tables.
#[component]
pub fn Dashboard() -> Element {
    let state = use_signal(UiState::initial);

    let trend = use_memo(move || {
        let s = state();
        select_time_series(s.time_range, s.metric_filter, s.language)
    });
    let volume = use_memo(move || {
        let s = state();
        select_volume_series(s.week, s.language)
    });

    let current = state();

    #[cfg(debug_assertions)]
    {
        log_dashboard_render(&current);
    }

    rsx! {
        div { class: "dashboard", lang: current.language.code(),
            DashboardHeader { state }

            main { class: "dashboard__main",
                MetricCards { language: current.language }

                div { class: "dashboard__charts",
                    TrendsCard { state, chart: trend() }
                    VolumeCard { state, chart: volume() }
                }
            }

            DashboardFooter { language: current.language }
        }
    }
}
