//! Today's headline readings shown in the metric cards.

use crate::i18n::{LabelKey, Language};

use super::format;

/// Card accent, mapped to a CSS modifier by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTone {
    Danger,
    Primary,
    Info,
    Warning,
}

impl CardTone {
    pub const fn css_class(self) -> &'static str {
        match self {
            CardTone::Danger => "metric-card--danger",
            CardTone::Primary => "metric-card--primary",
            CardTone::Info => "metric-card--info",
            CardTone::Warning => "metric-card--warning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TodaySnapshot {
    pub heart_rate_bpm: u32,
    pub steps: u64,
    pub sleep_hours: f64,
    pub calories: u64,
}

pub const TODAY: TodaySnapshot = TodaySnapshot {
    heart_rate_bpm: 72,
    steps: 8547,
    sleep_hours: 7.2,
    calories: 2340,
};

/// One rendered card: icon glyph, formatted value, caption.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub icon: &'static str,
    pub tone: CardTone,
    pub value: String,
    pub caption: LabelKey,
}

impl TodaySnapshot {
    /// Cards in display order, values formatted for `language`.
    pub fn cards(&self, language: Language) -> [MetricCard; 4] {
        [
            MetricCard {
                icon: "♥",
                tone: CardTone::Danger,
                value: format::format_bpm(self.heart_rate_bpm),
                caption: LabelKey::MetricHeartRate,
            },
            MetricCard {
                icon: "⚡",
                tone: CardTone::Primary,
                value: format::format_integer(self.steps, language),
                caption: LabelKey::MetricSteps,
            },
            MetricCard {
                icon: "☾",
                tone: CardTone::Info,
                value: format::format_hours(self.sleep_hours, language),
                caption: LabelKey::MetricSleep,
            },
            MetricCard {
                icon: "🔥",
                tone: CardTone::Warning,
                value: format::format_integer(self.calories, language),
                caption: LabelKey::MetricCalories,
            },
        ]
    }
}
