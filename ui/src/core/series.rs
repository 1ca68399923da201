//! Series selection: turns the current control values into chart-ready data.
//!
//! Selection is a pure lookup. Values are borrowed straight from the static
//! tables in [`super::datasets`]; only display names and category labels are
//! resolved for the requested language.
//!
//! `ChartData` serializes to the shape common line/bar chart libraries expect:
//! ```text
//! { "labels": [...], "datasets": [{ "label": ..., "data": [...], "yAxisID": "y" }] }
//! ```

use serde::Serialize;

use crate::i18n::{label, LabelKey, Language};

use super::datasets::{self, TimeSeriesDataset};
use super::state::{MetricFilter, TimeRange, Week};

/// Vertical axis a series is drawn against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AxisId {
    #[serde(rename = "y")]
    Left,
    #[serde(rename = "y1")]
    Right,
}

/// Metrics plotted on the trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrendMetric {
    Weight,
    Sleep,
}

impl TrendMetric {
    pub const fn label_key(self) -> LabelKey {
        match self {
            TrendMetric::Weight => LabelKey::SeriesWeight,
            TrendMetric::Sleep => LabelKey::SeriesSleep,
        }
    }

    pub fn values(self, data: &TimeSeriesDataset) -> &'static [f64] {
        match self {
            TrendMetric::Weight => data.weight,
            TrendMetric::Sleep => data.sleep,
        }
    }
}

/// Which table a series came from; the chart components pick colours from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    Trend(TrendMetric),
    Volume,
}

/// Series-to-axis assignment for each trend filter.
///
/// Weight (~70 kg) and sleep (~8 h) only share the chart when both are shown,
/// and then sleep moves to its own right-hand axis.
pub const fn axis_assignments(filter: MetricFilter) -> &'static [(TrendMetric, AxisId)] {
    match filter {
        MetricFilter::Weight => &[(TrendMetric::Weight, AxisId::Left)],
        MetricFilter::Sleep => &[(TrendMetric::Sleep, AxisId::Left)],
        MetricFilter::Both => &[
            (TrendMetric::Weight, AxisId::Left),
            (TrendMetric::Sleep, AxisId::Right),
        ],
    }
}

/// A named, ordered numeric sequence paired with a display axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    #[serde(rename = "label")]
    pub name: String,
    #[serde(rename = "data")]
    pub values: &'static [f64],
    #[serde(rename = "yAxisID")]
    pub axis: AxisId,
    #[serde(skip)]
    pub kind: SeriesKind,
}

/// Vertical axis configuration derived from the selected series.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub id: AxisId,
    pub title: String,
    /// Whether the axis draws horizontal grid lines across the plot area.
    pub grid: bool,
    pub begin_at_zero: bool,
}

/// A labeled value, as shown in a point tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricPoint<'a> {
    pub label: &'a str,
    pub value: f64,
}

/// Shared category axis plus the series drawn over it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    #[serde(rename = "datasets")]
    pub series: Vec<ChartSeries>,
    #[serde(skip)]
    axes: Vec<Axis>,
}

impl ChartData {
    fn new(labels: Vec<String>, series: Vec<ChartSeries>, axes: Vec<Axis>) -> Self {
        debug_assert!(!labels.is_empty(), "chart has no categories");
        for s in &series {
            debug_assert_eq!(
                s.values.len(),
                labels.len(),
                "series `{}` is not aligned with its labels",
                s.name
            );
        }
        Self {
            labels,
            series,
            axes,
        }
    }

    /// Axes in use, left first.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn axis(&self, id: AxisId) -> Option<&Axis> {
        self.axes.iter().find(|axis| axis.id == id)
    }

    /// Series drawn against `id`.
    pub fn series_on(&self, id: AxisId) -> impl Iterator<Item = &ChartSeries> {
        self.series.iter().filter(move |s| s.axis == id)
    }

    /// `series` values paired with their category labels.
    pub fn points<'a>(&'a self, series: &'a ChartSeries) -> impl Iterator<Item = MetricPoint<'a>> {
        self.labels
            .iter()
            .zip(series.values.iter())
            .map(|(label, &value)| MetricPoint {
                label: label.as_str(),
                value,
            })
    }
}

fn localize(keys: &[LabelKey], language: Language) -> Vec<String> {
    keys.iter().map(|&key| label(key, language)).collect()
}

/// Weight and/or sleep over `range`, as chosen by `filter`.
pub fn select_time_series(range: TimeRange, filter: MetricFilter, language: Language) -> ChartData {
    let data = datasets::time_series(range);

    let series: Vec<ChartSeries> = axis_assignments(filter)
        .iter()
        .map(|&(metric, axis)| ChartSeries {
            name: label(metric.label_key(), language),
            values: metric.values(data),
            axis,
            kind: SeriesKind::Trend(metric),
        })
        .collect();

    let axes = series
        .iter()
        .map(|s| Axis {
            id: s.axis,
            title: s.name.clone(),
            grid: s.axis == AxisId::Left,
            begin_at_zero: false,
        })
        .collect();

    ChartData::new(localize(data.labels, language), series, axes)
}

/// Minutes per muscle group for `week`.
pub fn select_volume_series(week: Week, language: Language) -> ChartData {
    let data = datasets::volume(week);

    let series = vec![ChartSeries {
        name: label(LabelKey::SeriesVolume, language),
        values: data.values,
        axis: AxisId::Left,
        kind: SeriesKind::Volume,
    }];
    let axes = vec![Axis {
        id: AxisId::Left,
        title: label(LabelKey::AxisMinutes, language),
        grid: true,
        begin_at_zero: true,
    }];

    ChartData::new(localize(data.labels, language), series, axes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn both_returns_weight_and_sleep_for_every_range() {
        for range in TimeRange::ALL {
            let table = datasets::time_series(range);
            let chart = select_time_series(range, MetricFilter::Both, Language::En);

            assert_eq!(chart.series.len(), 2);
            assert_eq!(chart.labels.len(), table.labels.len());
            for s in &chart.series {
                assert_eq!(s.values.len(), chart.labels.len());
            }
            assert!(std::ptr::eq(chart.series[0].values, table.weight));
            assert!(std::ptr::eq(chart.series[1].values, table.sleep));
        }
    }

    #[test]
    fn single_filters_return_only_the_requested_metric() {
        for range in TimeRange::ALL {
            let weight = select_time_series(range, MetricFilter::Weight, Language::En);
            assert_eq!(weight.series.len(), 1);
            assert_eq!(weight.series[0].kind, SeriesKind::Trend(TrendMetric::Weight));

            let sleep = select_time_series(range, MetricFilter::Sleep, Language::En);
            assert_eq!(sleep.series.len(), 1);
            assert_eq!(sleep.series[0].kind, SeriesKind::Trend(TrendMetric::Sleep));
        }
    }

    #[test]
    fn both_splits_metrics_across_two_axes() {
        let chart = select_time_series(TimeRange::Last7Days, MetricFilter::Both, Language::En);
        assert_eq!(chart.series[0].axis, AxisId::Left);
        assert_eq!(chart.series[1].axis, AxisId::Right);

        let ids: Vec<_> = chart.axes().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![AxisId::Left, AxisId::Right]);
        assert_eq!(chart.axis(AxisId::Left).unwrap().title, "Weight (kg)");
        assert_eq!(chart.axis(AxisId::Right).unwrap().title, "Sleep (hours)");
        assert!(chart.axis(AxisId::Left).unwrap().grid);
        assert!(!chart.axis(AxisId::Right).unwrap().grid);
    }

    #[test]
    fn sleep_alone_uses_the_left_axis() {
        let chart = select_time_series(TimeRange::Last30Days, MetricFilter::Sleep, Language::En);
        assert_eq!(chart.series[0].axis, AxisId::Left);
        assert_eq!(chart.axes().len(), 1);
        assert_eq!(chart.axes()[0].title, "Sleep (hours)");
        assert!(chart.axis(AxisId::Right).is_none());
    }

    #[test]
    fn seven_day_example() {
        let chart = select_time_series(TimeRange::Last7Days, MetricFilter::Both, Language::En);
        assert_eq!(
            chart.labels,
            vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        );
        assert_eq!(chart.series[0].name, "Weight (kg)");
        assert_eq!(
            chart.series[0].values,
            &[72.5, 72.3, 72.1, 72.4, 72.2, 72.0, 71.8]
        );
        assert_eq!(chart.series[1].name, "Sleep (hours)");
        assert_eq!(chart.series[1].values, &[7.5, 8.2, 6.8, 7.9, 8.1, 7.3, 8.5]);
    }

    #[test]
    fn week_one_example() {
        let chart = select_volume_series(Week::Week1, Language::En);
        assert_eq!(
            chart.labels,
            vec!["Chest", "Back", "Legs", "Shoulders", "Arms", "Core"]
        );
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].values, &[120.0, 150.0, 180.0, 90.0, 100.0, 60.0]);
    }

    #[test]
    fn every_week_yields_one_series_of_six() {
        for week in Week::ALL {
            let chart = select_volume_series(week, Language::En);
            assert_eq!(chart.series.len(), 1);
            assert_eq!(chart.series[0].values.len(), 6);
            assert!(std::ptr::eq(chart.series[0].values, datasets::volume(week).values));

            let axis = chart.axis(AxisId::Left).unwrap();
            assert!(axis.begin_at_zero);
            assert_eq!(axis.title, "Minutes");
        }
    }

    #[test]
    fn selection_is_idempotent() {
        for range in TimeRange::ALL {
            for filter in MetricFilter::ALL {
                assert_eq!(
                    select_time_series(range, filter, Language::Fr),
                    select_time_series(range, filter, Language::Fr)
                );
            }
        }
        for week in Week::ALL {
            assert_eq!(
                select_volume_series(week, Language::En),
                select_volume_series(week, Language::En)
            );
        }
    }

    #[test]
    fn language_changes_names_but_not_values() {
        let en = select_time_series(TimeRange::Last3Months, MetricFilter::Both, Language::En);
        let fr = select_time_series(TimeRange::Last3Months, MetricFilter::Both, Language::Fr);

        assert_eq!(fr.series[0].name, "Poids (kg)");
        assert_eq!(fr.series[1].name, "Sommeil (heures)");
        assert_eq!(fr.labels, vec!["Mois 1", "Mois 2", "Mois 3"]);
        for (a, b) in en.series.iter().zip(fr.series.iter()) {
            assert_eq!(a.values, b.values);
            assert_eq!(a.axis, b.axis);
        }
    }

    #[test]
    fn points_pair_labels_with_values() {
        let chart = select_volume_series(Week::Week2, Language::En);
        let points: Vec<_> = chart.points(&chart.series[0]).collect();
        assert_eq!(points.len(), 6);
        assert_eq!(points[2], MetricPoint { label: "Legs", value: 200.0 });
    }

    #[test]
    fn serializes_to_chart_config_shape() {
        let chart = select_time_series(TimeRange::Last3Months, MetricFilter::Both, Language::En);
        let value = serde_json::to_value(&chart).unwrap();
        assert_eq!(
            value,
            json!({
                "labels": ["Month 1", "Month 2", "Month 3"],
                "datasets": [
                    { "label": "Weight (kg)", "data": [73.5, 72.8, 71.9], "yAxisID": "y" },
                    { "label": "Sleep (hours)", "data": [7.6, 7.8, 8.0], "yAxisID": "y1" }
                ]
            })
        );
    }
}
