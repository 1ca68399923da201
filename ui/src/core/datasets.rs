//! Fixed sample tables behind the two charts.

use crate::i18n::LabelKey;

use super::state::{TimeRange, Week};

/// Index-aligned weight and sleep readings over one time range.
#[derive(Debug, PartialEq)]
pub struct TimeSeriesDataset {
    pub labels: &'static [LabelKey],
    /// Kilograms.
    pub weight: &'static [f64],
    /// Hours.
    pub sleep: &'static [f64],
}

/// Minutes trained per muscle group for one week.
#[derive(Debug, PartialEq)]
pub struct VolumeDataset {
    pub labels: &'static [LabelKey],
    pub values: &'static [f64],
}

const DAYS: &[LabelKey] = &[
    LabelKey::DayMon,
    LabelKey::DayTue,
    LabelKey::DayWed,
    LabelKey::DayThu,
    LabelKey::DayFri,
    LabelKey::DaySat,
    LabelKey::DaySun,
];

const WEEKS: &[LabelKey] = &[
    LabelKey::PeriodWeek1,
    LabelKey::PeriodWeek2,
    LabelKey::PeriodWeek3,
    LabelKey::PeriodWeek4,
];

const MONTHS: &[LabelKey] = &[
    LabelKey::PeriodMonth1,
    LabelKey::PeriodMonth2,
    LabelKey::PeriodMonth3,
];

/// Muscle groups in chart order.
pub const MUSCLE_GROUPS: &[LabelKey] = &[
    LabelKey::MuscleChest,
    LabelKey::MuscleBack,
    LabelKey::MuscleLegs,
    LabelKey::MuscleShoulders,
    LabelKey::MuscleArms,
    LabelKey::MuscleCore,
];

static LAST_7_DAYS: TimeSeriesDataset = TimeSeriesDataset {
    labels: DAYS,
    weight: &[72.5, 72.3, 72.1, 72.4, 72.2, 72.0, 71.8],
    sleep: &[7.5, 8.2, 6.8, 7.9, 8.1, 7.3, 8.5],
};

static LAST_30_DAYS: TimeSeriesDataset = TimeSeriesDataset {
    labels: WEEKS,
    weight: &[72.8, 72.4, 72.1, 71.9],
    sleep: &[7.8, 7.5, 7.9, 8.1],
};

static LAST_3_MONTHS: TimeSeriesDataset = TimeSeriesDataset {
    labels: MONTHS,
    weight: &[73.5, 72.8, 71.9],
    sleep: &[7.6, 7.8, 8.0],
};

static WEEK_1: VolumeDataset = VolumeDataset {
    labels: MUSCLE_GROUPS,
    values: &[120.0, 150.0, 180.0, 90.0, 100.0, 60.0],
};

static WEEK_2: VolumeDataset = VolumeDataset {
    labels: MUSCLE_GROUPS,
    values: &[135.0, 140.0, 200.0, 85.0, 110.0, 75.0],
};

static WEEK_3: VolumeDataset = VolumeDataset {
    labels: MUSCLE_GROUPS,
    values: &[110.0, 160.0, 170.0, 95.0, 95.0, 80.0],
};

pub fn time_series(range: TimeRange) -> &'static TimeSeriesDataset {
    match range {
        TimeRange::Last7Days => &LAST_7_DAYS,
        TimeRange::Last30Days => &LAST_30_DAYS,
        TimeRange::Last3Months => &LAST_3_MONTHS,
    }
}

pub fn volume(week: Week) -> &'static VolumeDataset {
    match week {
        Week::Week1 => &WEEK_1,
        Week::Week2 => &WEEK_2,
        Week::Week3 => &WEEK_3,
    }
}
