//! Dashboard sections. Each control turns its interaction into a
//! [`DashboardEvent`] and hands it to [`dispatch`]; nothing else writes the state.

use std::str::FromStr;

use dioxus::logger::tracing::{debug, error};
use dioxus::prelude::*;

use crate::core::{DashboardEvent, UiState, UnknownOption};

mod cards;
pub use cards::MetricCards;

mod footer;
pub use footer::DashboardFooter;

mod header;
pub use header::DashboardHeader;

mod trends;
pub use trends::TrendsCard;

mod volume;
pub use volume::VolumeCard;

/// Replace the dashboard state with its successor under `event`.
pub(crate) fn dispatch(mut state: Signal<UiState>, event: DashboardEvent) {
    let next = state.peek().apply(event);
    debug!(?event, "dashboard state transition");
    state.set(next);
}

/// State after applying the event `raw` selects, or the parse error.
///
/// On error the caller keeps `current`.
pub(crate) fn apply_option<T>(
    current: UiState,
    raw: &str,
    event: fn(T) -> DashboardEvent,
) -> Result<UiState, UnknownOption>
where
    T: FromStr<Err = UnknownOption>,
{
    let value = raw.parse::<T>()?;
    Ok(current.apply(event(value)))
}

/// Parse a form control value and dispatch the event it selects.
///
/// Values come from our own option lists, so a parse failure is a markup bug:
/// it is logged, asserted in debug builds, and otherwise ignored.
pub(crate) fn dispatch_option<T>(mut state: Signal<UiState>, raw: &str, event: fn(T) -> DashboardEvent)
where
    T: FromStr<Err = UnknownOption>,
{
    let current = *state.peek();
    match apply_option(current, raw, event) {
        Ok(next) => {
            debug!(value = raw, ?next, "dashboard state transition");
            state.set(next);
        }
        Err(err) => {
            error!("{err}");
            debug_assert!(false, "{err}");
        }
    }
}
