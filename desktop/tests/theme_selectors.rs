#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The dashboard components emit these class names; dropping or renaming one in
`ui/assets/theme/main.css` leaves that part of the page unstyled without any
compile error. A substring check is enough as an early warning.

When a component's markup changes, adjust REQUIRED_SELECTORS alongside it.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".visually-hidden",
    ".dashboard__main",
    ".dashboard__charts",
    // Header & language switcher
    ".dashboard-header",
    ".dashboard-header__title",
    ".dashboard-header__subtitle",
    ".language-switcher__button",
    ".language-switcher__button--active",
    // Today's metrics
    ".dashboard-today__heading",
    ".dashboard-today__disclaimer",
    ".metric-cards",
    ".metric-card",
    ".metric-card__value",
    ".metric-card__caption",
    ".metric-card--danger",
    ".metric-card--primary",
    ".metric-card--info",
    ".metric-card--warning",
    // Chart cards & controls
    ".chart-card",
    ".chart-card__header",
    ".chart-card__body",
    ".chart-controls",
    ".chart-controls__select",
    ".chart-controls__radio:checked + .chart-controls__option",
    // SVG charts
    ".chart__svg",
    ".chart__legend",
    ".chart__legend-swatch",
    ".chart__grid line",
    ".chart__axis-title",
    ".chart__tip",
    ".chart__hover:hover .chart__tip",
    // Footer
    ".dashboard-footer",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 3_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars); \
         did the file get truncated or its path change?"
    );
}

#[test]
fn tone_modifiers_share_the_accent_variable() {
    for tone in ["danger", "primary", "info", "warning"] {
        let selector = format!(".metric-card--{tone} {{");
        let start = THEME_CSS
            .find(&selector)
            .unwrap_or_else(|| panic!("missing {selector}"));
        let block = &THEME_CSS[start..];
        let end = block.find('}').unwrap_or(block.len());
        assert!(
            block[..end].contains("--metric-accent"),
            "{selector} does not set --metric-accent"
        );
    }
}
