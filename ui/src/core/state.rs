//! Dashboard UI state and the events that replace it.
//!
//! `UiState` is a small `Copy` value. Controls never mutate it in place; they
//! emit a [`DashboardEvent`] and the dashboard swaps in `state.apply(event)`.

use std::str::FromStr;

use crate::i18n::{LabelKey, Language};

use super::UnknownOption;

/// Window of the weight & sleep trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeRange {
    #[default]
    Last7Days,
    Last30Days,
    Last3Months,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [
        TimeRange::Last7Days,
        TimeRange::Last30Days,
        TimeRange::Last3Months,
    ];

    /// Option value used by the range `<select>`.
    pub const fn key(self) -> &'static str {
        match self {
            TimeRange::Last7Days => "7days",
            TimeRange::Last30Days => "30days",
            TimeRange::Last3Months => "3months",
        }
    }

    pub const fn label_key(self) -> LabelKey {
        match self {
            TimeRange::Last7Days => LabelKey::Range7Days,
            TimeRange::Last30Days => LabelKey::Range30Days,
            TimeRange::Last3Months => LabelKey::Range3Months,
        }
    }
}

impl FromStr for TimeRange {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeRange::ALL
            .into_iter()
            .find(|range| range.key() == s)
            .ok_or_else(|| UnknownOption::new("time range", s))
    }
}

/// Which trend metrics are plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MetricFilter {
    Weight,
    Sleep,
    #[default]
    Both,
}

impl MetricFilter {
    pub const ALL: [MetricFilter; 3] = [MetricFilter::Weight, MetricFilter::Sleep, MetricFilter::Both];

    /// Radio input value / id suffix.
    pub const fn key(self) -> &'static str {
        match self {
            MetricFilter::Weight => "weight",
            MetricFilter::Sleep => "sleep",
            MetricFilter::Both => "both",
        }
    }

    pub const fn label_key(self) -> LabelKey {
        match self {
            MetricFilter::Weight => LabelKey::FilterWeight,
            MetricFilter::Sleep => LabelKey::FilterSleep,
            MetricFilter::Both => LabelKey::FilterBoth,
        }
    }
}

impl FromStr for MetricFilter {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricFilter::ALL
            .into_iter()
            .find(|filter| filter.key() == s)
            .ok_or_else(|| UnknownOption::new("metric filter", s))
    }
}

/// Training week shown by the volume chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Week {
    #[default]
    Week1,
    Week2,
    Week3,
}

impl Week {
    pub const ALL: [Week; 3] = [Week::Week1, Week::Week2, Week::Week3];

    pub const fn key(self) -> &'static str {
        match self {
            Week::Week1 => "week1",
            Week::Week2 => "week2",
            Week::Week3 => "week3",
        }
    }

    pub const fn label_key(self) -> LabelKey {
        match self {
            Week::Week1 => LabelKey::WeekThis,
            Week::Week2 => LabelKey::WeekLast,
            Week::Week3 => LabelKey::WeekLastFour,
        }
    }
}

impl FromStr for Week {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Week::ALL
            .into_iter()
            .find(|week| week.key() == s)
            .ok_or_else(|| UnknownOption::new("week", s))
    }
}

/// Everything the user can choose on the dashboard. Reset on reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UiState {
    pub language: Language,
    pub time_range: TimeRange,
    pub metric_filter: MetricFilter,
    pub week: Week,
}

impl UiState {
    /// Fresh state for a new session, in the platform's preferred language.
    pub fn initial() -> Self {
        Self {
            language: Language::detect(),
            ..Self::default()
        }
    }

    /// Next state after `event`. Each event touches exactly one field.
    #[must_use]
    pub fn apply(self, event: DashboardEvent) -> Self {
        match event {
            DashboardEvent::RangeChanged(time_range) => Self { time_range, ..self },
            DashboardEvent::FilterChanged(metric_filter) => Self {
                metric_filter,
                ..self
            },
            DashboardEvent::WeekChanged(week) => Self { week, ..self },
            DashboardEvent::LanguageChanged(language) => Self { language, ..self },
        }
    }
}

/// Interactions emitted by the dashboard controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    RangeChanged(TimeRange),
    FilterChanged(MetricFilter),
    WeekChanged(Week),
    LanguageChanged(Language),
}
