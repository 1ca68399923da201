use dioxus::prelude::*;

use crate::core::format::format_decimal;
use crate::core::series::{AxisId, ChartData};
use crate::i18n::Language;

use super::geometry::{band, bar_rect, Frame, LinearScale, Rect};
use super::{value_decimals, BAR_PALETTE};

const FRAME: Frame = Frame {
    width: 420.0,
    height: 300.0,
    pad_left: 60.0,
    pad_right: 12.0,
    pad_top: 16.0,
    pad_bottom: 36.0,
};

const MAX_TICKS: usize = 6;
const BAR_RADIUS: f64 = 8.0;
const BAR_BORDER: f64 = 2.0;

#[derive(Clone, PartialEq)]
struct BarLayout {
    rect: Rect,
    center: f64,
    label: String,
    fill: &'static str,
    stroke: &'static str,
    tip: String,
}

/// Vertical bar chart for a single series; one colour per category, no legend.
#[component]
pub fn BarChart(data: ChartData, language: Language) -> Element {
    let (left, right) = (FRAME.plot_left(), FRAME.plot_right());
    let (top, bottom) = (FRAME.plot_top(), FRAME.plot_bottom());

    let axis = data.axis(AxisId::Left).cloned();
    let begin_at_zero = axis.as_ref().map(|a| a.begin_at_zero).unwrap_or(true);
    let axis_title = axis.map(|a| a.title).unwrap_or_default();

    let Some(series) = data.series.first() else {
        return rsx! {
            div { class: "chart chart--bar" }
        };
    };

    let scale = LinearScale::nice(series.values, MAX_TICKS, begin_at_zero);
    let decimals = value_decimals(series.kind);
    let count = data.labels.len();

    let bars: Vec<BarLayout> = data
        .points(series)
        .enumerate()
        .map(|(i, p)| {
            let slot = band(i, count, left, right);
            let (fill, stroke) = BAR_PALETTE[i % BAR_PALETTE.len()];
            BarLayout {
                rect: bar_rect(slot, p.value, &scale, top, bottom, BAR_RADIUS),
                center: slot.center,
                label: p.label.to_string(),
                fill,
                stroke,
                tip: format!("{}: {}", p.label, format_decimal(p.value, decimals, language)),
            }
        })
        .collect();

    let ticks: Vec<(f64, String)> = scale
        .ticks()
        .into_iter()
        .map(|t| {
            (
                scale.project(t, top, bottom),
                format_decimal(t, scale.decimals, language),
            )
        })
        .collect();

    let mid_y = (top + bottom) / 2.0;
    let title_x = 14.0;
    let series_name = series.name.clone();

    rsx! {
        div { class: "chart chart--bar",
            svg {
                class: "chart__svg",
                view_box: FRAME.view_box(),
                preserve_aspect_ratio: "xMidYMid meet",
                role: "img",
                "aria-label": "{series_name}",

                g { class: "chart__grid",
                    for (y, _) in ticks.iter() {
                        line { x1: left, x2: right, y1: *y, y2: *y }
                    }
                }
                g { class: "chart__ticks chart__ticks--left",
                    for (y, tick_label) in ticks.iter() {
                        text { x: left - 8.0, y: *y, text_anchor: "end", dominant_baseline: "middle", "{tick_label}" }
                    }
                }
                text {
                    class: "chart__axis-title",
                    x: title_x,
                    y: mid_y,
                    text_anchor: "middle",
                    transform: "rotate(-90 {title_x} {mid_y})",
                    "{axis_title}"
                }

                for bar in bars.iter() {
                    g { key: "{bar.label}", class: "chart__hover",
                        rect {
                            class: "chart__bar",
                            x: bar.rect.x,
                            y: bar.rect.y,
                            width: bar.rect.width,
                            height: bar.rect.height,
                            rx: bar.rect.radius,
                            fill: bar.fill,
                            stroke: bar.stroke,
                            stroke_width: BAR_BORDER,
                        }
                        text { class: "chart__tip", x: bar.center, y: bar.rect.y - 8.0, text_anchor: "middle", "{bar.tip}" }
                        text { class: "chart__category", x: bar.center, y: bottom + 22.0, text_anchor: "middle", "{bar.label}" }
                    }
                }
            }
        }
    }
}
