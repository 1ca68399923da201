//! Internationalization (i18n) support for `pulseboard-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `unic-langid` (language tags)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/pulseboard-ui.ftl   (fallback/reference)
//!   fr-FR/pulseboard-ui.ftl   (additional locale)
//! ```
//!
//! The dashboard only ever speaks the two languages in [`Language`], and the
//! active one lives in the dashboard state rather than in a global loader.
//! Each language therefore gets its own lazily built `FluentLanguageLoader`,
//! and lookups take the language explicitly:
//! ```ignore
//! use ui::i18n::{label, Language, LabelKey};
//! let title = label(LabelKey::DashboardTitle, Language::Fr);
//! ```
//!
//! Every label the view renders is a [`LabelKey`] variant, so a key without a
//! message id fails to compile. Missing translations are caught by the locale
//! tests (`ui/tests/i18n_missing_keys.rs` and `src/tests/i18n_completeness.rs`).
//!
//! Platform notes:
//! - Desktop: initial language from `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: initial language from `WebLanguageRequester` (`navigator.languages`).
//! - Assets are always embedded on WASM (`debug-embed` in the target-specific dependency section).
use std::fmt;
use std::str::FromStr;

use dioxus::logger::tracing::{info, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::UnknownOption;

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "pulseboard-ui";

/// Tag of the fallback locale folder.
const FALLBACK_TAG: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Display languages offered by the dashboard switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Fr];

    /// Short code shown on the switcher buttons and used as the `lang` attribute.
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// Locale folder holding this language's messages.
    pub const fn tag(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Fr => "fr-FR",
        }
    }

    /// First supported language among the user's preferences, English otherwise.
    pub fn from_requested(requested: &[LanguageIdentifier]) -> Self {
        requested
            .iter()
            .find_map(|id| {
                Language::ALL
                    .into_iter()
                    .find(|lang| lang.code() == id.language.as_str())
            })
            .unwrap_or_default()
    }

    /// Initial language for a fresh dashboard, taken from the platform locale list.
    pub fn detect() -> Self {
        Self::from_requested(&requested_languages())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| UnknownOption::new("language", s))
    }
}

/// Every piece of static text the dashboard renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    DashboardTitle,
    DashboardSubtitle,
    LanguageSwitcherLabel,
    TodayHeading,
    DemoDisclaimer,
    MetricHeartRate,
    MetricSteps,
    MetricSleep,
    MetricCalories,
    TrendsTitle,
    TrendsDescription,
    RangeSelectLabel,
    Range7Days,
    Range30Days,
    Range3Months,
    FilterGroupLabel,
    FilterWeight,
    FilterSleep,
    FilterBoth,
    SeriesWeight,
    SeriesSleep,
    VolumeTitle,
    VolumeDescription,
    WeekSelectLabel,
    WeekThis,
    WeekLast,
    WeekLastFour,
    SeriesVolume,
    AxisMinutes,
    DayMon,
    DayTue,
    DayWed,
    DayThu,
    DayFri,
    DaySat,
    DaySun,
    PeriodWeek1,
    PeriodWeek2,
    PeriodWeek3,
    PeriodWeek4,
    PeriodMonth1,
    PeriodMonth2,
    PeriodMonth3,
    MuscleChest,
    MuscleBack,
    MuscleLegs,
    MuscleShoulders,
    MuscleArms,
    MuscleCore,
    FooterText,
}

impl LabelKey {
    pub const ALL: [LabelKey; 50] = [
        LabelKey::DashboardTitle,
        LabelKey::DashboardSubtitle,
        LabelKey::LanguageSwitcherLabel,
        LabelKey::TodayHeading,
        LabelKey::DemoDisclaimer,
        LabelKey::MetricHeartRate,
        LabelKey::MetricSteps,
        LabelKey::MetricSleep,
        LabelKey::MetricCalories,
        LabelKey::TrendsTitle,
        LabelKey::TrendsDescription,
        LabelKey::RangeSelectLabel,
        LabelKey::Range7Days,
        LabelKey::Range30Days,
        LabelKey::Range3Months,
        LabelKey::FilterGroupLabel,
        LabelKey::FilterWeight,
        LabelKey::FilterSleep,
        LabelKey::FilterBoth,
        LabelKey::SeriesWeight,
        LabelKey::SeriesSleep,
        LabelKey::VolumeTitle,
        LabelKey::VolumeDescription,
        LabelKey::WeekSelectLabel,
        LabelKey::WeekThis,
        LabelKey::WeekLast,
        LabelKey::WeekLastFour,
        LabelKey::SeriesVolume,
        LabelKey::AxisMinutes,
        LabelKey::DayMon,
        LabelKey::DayTue,
        LabelKey::DayWed,
        LabelKey::DayThu,
        LabelKey::DayFri,
        LabelKey::DaySat,
        LabelKey::DaySun,
        LabelKey::PeriodWeek1,
        LabelKey::PeriodWeek2,
        LabelKey::PeriodWeek3,
        LabelKey::PeriodWeek4,
        LabelKey::PeriodMonth1,
        LabelKey::PeriodMonth2,
        LabelKey::PeriodMonth3,
        LabelKey::MuscleChest,
        LabelKey::MuscleBack,
        LabelKey::MuscleLegs,
        LabelKey::MuscleShoulders,
        LabelKey::MuscleArms,
        LabelKey::MuscleCore,
        LabelKey::FooterText,
    ];

    /// Fluent message id backing this key.
    pub const fn id(self) -> &'static str {
        match self {
            LabelKey::DashboardTitle => "dashboard-title",
            LabelKey::DashboardSubtitle => "dashboard-subtitle",
            LabelKey::LanguageSwitcherLabel => "language-switcher-label",
            LabelKey::TodayHeading => "today-heading",
            LabelKey::DemoDisclaimer => "demo-disclaimer",
            LabelKey::MetricHeartRate => "metric-heart-rate",
            LabelKey::MetricSteps => "metric-steps",
            LabelKey::MetricSleep => "metric-sleep",
            LabelKey::MetricCalories => "metric-calories",
            LabelKey::TrendsTitle => "trends-title",
            LabelKey::TrendsDescription => "trends-description",
            LabelKey::RangeSelectLabel => "range-select-label",
            LabelKey::Range7Days => "range-7-days",
            LabelKey::Range30Days => "range-30-days",
            LabelKey::Range3Months => "range-3-months",
            LabelKey::FilterGroupLabel => "filter-group-label",
            LabelKey::FilterWeight => "filter-weight",
            LabelKey::FilterSleep => "filter-sleep",
            LabelKey::FilterBoth => "filter-both",
            LabelKey::SeriesWeight => "series-weight",
            LabelKey::SeriesSleep => "series-sleep",
            LabelKey::VolumeTitle => "volume-title",
            LabelKey::VolumeDescription => "volume-description",
            LabelKey::WeekSelectLabel => "week-select-label",
            LabelKey::WeekThis => "week-this",
            LabelKey::WeekLast => "week-last",
            LabelKey::WeekLastFour => "week-last-four",
            LabelKey::SeriesVolume => "series-volume",
            LabelKey::AxisMinutes => "axis-minutes",
            LabelKey::DayMon => "day-mon",
            LabelKey::DayTue => "day-tue",
            LabelKey::DayWed => "day-wed",
            LabelKey::DayThu => "day-thu",
            LabelKey::DayFri => "day-fri",
            LabelKey::DaySat => "day-sat",
            LabelKey::DaySun => "day-sun",
            LabelKey::PeriodWeek1 => "period-week-1",
            LabelKey::PeriodWeek2 => "period-week-2",
            LabelKey::PeriodWeek3 => "period-week-3",
            LabelKey::PeriodWeek4 => "period-week-4",
            LabelKey::PeriodMonth1 => "period-month-1",
            LabelKey::PeriodMonth2 => "period-month-2",
            LabelKey::PeriodMonth3 => "period-month-3",
            LabelKey::MuscleChest => "muscle-chest",
            LabelKey::MuscleBack => "muscle-back",
            LabelKey::MuscleLegs => "muscle-legs",
            LabelKey::MuscleShoulders => "muscle-shoulders",
            LabelKey::MuscleArms => "muscle-arms",
            LabelKey::MuscleCore => "muscle-core",
            LabelKey::FooterText => "footer-text",
        }
    }
}

static EN_LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Language::En));
static FR_LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Language::Fr));

fn build_loader(language: Language) -> FluentLanguageLoader {
    let fallback: LanguageIdentifier = FALLBACK_TAG
        .parse()
        .expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);

    let requested: LanguageIdentifier = language
        .tag()
        .parse()
        .expect("valid language identifier");
    match i18n_embed::select(&loader, &Localizations, &[requested]) {
        Ok(_) => info!(language = language.tag(), "loaded localization bundle"),
        Err(err) => warn!(
            language = language.tag(),
            "failed selecting language ({err}); continuing with fallback"
        ),
    }
    loader
}

fn loader(language: Language) -> &'static FluentLanguageLoader {
    match language {
        Language::En => &EN_LOADER,
        Language::Fr => &FR_LOADER,
    }
}

/// Resolve `key` to display text in `language`.
pub fn label(key: LabelKey, language: Language) -> String {
    loader(language).get(key.id())
}

/// Whether `language`'s own bundle defines `key`.
///
/// Every loader also carries the en-US fallback bundle, so this reads the
/// embedded `.ftl` source for `language` instead of asking the loader.
pub fn has_translation(key: LabelKey, language: Language) -> bool {
    let path = format!("{}/{DOMAIN}.ftl", language.tag());
    Localizations::get(&path)
        .and_then(|file| {
            std::str::from_utf8(&file.data)
                .ok()
                .map(|source| defines_message(source, key.id()))
        })
        .unwrap_or(false)
}

/// Whether a Fluent source has a top-level `id = ...` message definition.
fn defines_message(source: &str, id: &str) -> bool {
    source
        .lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .filter_map(|line| line.split_once('='))
        .any(|(name, _)| name.trim_end() == id)
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
