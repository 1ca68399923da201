//! Inline SVG charts for the dashboard.
//!
//! `geometry` holds the maths; `LineChart` and `BarChart` render a
//! [`ChartData`](crate::core::ChartData) produced by the series selector.

pub mod geometry;

mod bar;
pub use bar::BarChart;

mod line;
pub use line::LineChart;

use crate::core::series::{SeriesKind, TrendMetric};

/// Stroke and translucent fill for a line series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LineStyle {
    pub stroke: &'static str,
    pub fill: &'static str,
}

pub(crate) const fn line_style(metric: TrendMetric) -> LineStyle {
    match metric {
        TrendMetric::Weight => LineStyle {
            stroke: "#007bff",
            fill: "rgba(0, 123, 255, 0.1)",
        },
        TrendMetric::Sleep => LineStyle {
            stroke: "#28a745",
            fill: "rgba(40, 167, 69, 0.1)",
        },
    }
}

/// Per-bar (fill, border) colours, cycled by category index.
pub(crate) const BAR_PALETTE: [(&str, &str); 6] = [
    ("rgba(255, 99, 132, 0.8)", "rgba(255, 99, 132, 1)"),
    ("rgba(54, 162, 235, 0.8)", "rgba(54, 162, 235, 1)"),
    ("rgba(255, 205, 86, 0.8)", "rgba(255, 205, 86, 1)"),
    ("rgba(75, 192, 192, 0.8)", "rgba(75, 192, 192, 1)"),
    ("rgba(153, 102, 255, 0.8)", "rgba(153, 102, 255, 1)"),
    ("rgba(255, 159, 64, 0.8)", "rgba(255, 159, 64, 1)"),
];

/// Fraction digits used in point tooltips.
pub(crate) const fn value_decimals(kind: SeriesKind) -> usize {
    match kind {
        SeriesKind::Trend(_) => 1,
        SeriesKind::Volume => 0,
    }
}
