//! Shared UI crate for Pulseboard. State, sample data, chart geometry and all
//! views live here; the platform crates only launch [`views::Dashboard`].

use dioxus::prelude::*;

pub mod charts;
pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;

#[cfg(test)]
mod tests;

/// Shared theme stylesheet. Web links it as an asset; desktop inlines the same file.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
