//! Platform-agnostic dashboard logic: state, sample data, series selection and formatting.

pub mod datasets;
pub mod format;
pub mod series;
pub mod snapshot;
pub mod state;

mod error;
pub use error::UnknownOption;

pub use series::{select_time_series, select_volume_series, AxisId, ChartData, ChartSeries};
pub use state::{DashboardEvent, MetricFilter, TimeRange, UiState, Week};
