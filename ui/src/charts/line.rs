use dioxus::prelude::*;

use crate::core::format::format_decimal;
use crate::core::series::{AxisId, ChartData, SeriesKind};
use crate::i18n::Language;

use super::geometry::{area_path, point_x, spline_path, Frame, LinearScale, Point};
use super::{line_style, value_decimals};

const FRAME: Frame = Frame {
    width: 720.0,
    height: 300.0,
    pad_left: 68.0,
    pad_right: 68.0,
    pad_top: 16.0,
    pad_bottom: 36.0,
};

const TENSION: f64 = 0.4;
const MAX_TICKS: usize = 6;
const POINT_RADIUS: f64 = 3.5;

#[derive(Clone, PartialEq)]
struct AxisLayout {
    id: AxisId,
    title: String,
    grid: bool,
    scale: LinearScale,
}

#[derive(Clone, PartialEq)]
struct TickMark {
    y: f64,
    text: String,
    grid: bool,
}

#[derive(Clone, PartialEq)]
struct SeriesLayout {
    name: String,
    stroke: &'static str,
    fill: &'static str,
    line: String,
    area: String,
    points: Vec<(Point, String)>,
}

/// Smoothed, filled line chart with one or two value axes.
#[component]
pub fn LineChart(data: ChartData, language: Language) -> Element {
    let (left, right) = (FRAME.plot_left(), FRAME.plot_right());
    let (top, bottom) = (FRAME.plot_top(), FRAME.plot_bottom());

    let axes: Vec<AxisLayout> = data
        .axes()
        .iter()
        .map(|axis| {
            let values: Vec<f64> = data
                .series_on(axis.id)
                .flat_map(|s| s.values.iter().copied())
                .collect();
            AxisLayout {
                id: axis.id,
                title: axis.title.clone(),
                grid: axis.grid,
                scale: LinearScale::nice(&values, MAX_TICKS, axis.begin_at_zero),
            }
        })
        .collect();

    let ticks_for = |side: AxisId| -> Vec<TickMark> {
        axes.iter()
            .filter(|a| a.id == side)
            .flat_map(|a| {
                a.scale.ticks().into_iter().map(move |t| TickMark {
                    y: a.scale.project(t, top, bottom),
                    text: format_decimal(t, a.scale.decimals, language),
                    grid: a.grid,
                })
            })
            .collect()
    };
    let left_ticks = ticks_for(AxisId::Left);
    let right_ticks = ticks_for(AxisId::Right);

    let count = data.labels.len();
    let x_labels: Vec<(f64, String)> = data
        .labels
        .iter()
        .enumerate()
        .map(|(i, l)| (point_x(i, count, left, right), l.clone()))
        .collect();

    let series: Vec<SeriesLayout> = data
        .series
        .iter()
        .filter_map(|s| {
            let SeriesKind::Trend(metric) = s.kind else {
                return None;
            };
            let scale = axes.iter().find(|a| a.id == s.axis)?.scale;
            let style = line_style(metric);
            let decimals = value_decimals(s.kind);
            let points: Vec<(Point, String)> = data
                .points(s)
                .enumerate()
                .map(|(i, p)| {
                    let at = Point {
                        x: point_x(i, count, left, right),
                        y: scale.project(p.value, top, bottom),
                    };
                    let tip = format!(
                        "{} · {}: {}",
                        p.label,
                        s.name,
                        format_decimal(p.value, decimals, language)
                    );
                    (at, tip)
                })
                .collect();
            let nodes: Vec<Point> = points.iter().map(|(p, _)| *p).collect();
            Some(SeriesLayout {
                name: s.name.clone(),
                stroke: style.stroke,
                fill: style.fill,
                line: spline_path(&nodes, TENSION),
                area: area_path(&nodes, TENSION, bottom),
                points,
            })
        })
        .collect();

    let left_title = axes.iter().find(|a| a.id == AxisId::Left).map(|a| a.title.clone());
    let right_title = axes.iter().find(|a| a.id == AxisId::Right).map(|a| a.title.clone());
    let mid_y = (top + bottom) / 2.0;
    let left_title_x = 16.0;
    let right_title_x = FRAME.width - 16.0;

    rsx! {
        div { class: "chart chart--line",
            ul { class: "chart__legend",
                for s in series.iter() {
                    li { key: "{s.name}", class: "chart__legend-item",
                        span { class: "chart__legend-swatch", style: "background:{s.fill};border-color:{s.stroke}" }
                        span { class: "chart__legend-label", "{s.name}" }
                    }
                }
            }
            svg {
                class: "chart__svg",
                view_box: FRAME.view_box(),
                preserve_aspect_ratio: "xMidYMid meet",
                role: "img",

                g { class: "chart__grid",
                    for t in left_ticks.iter().filter(|t| t.grid) {
                        line { x1: left, x2: right, y1: t.y, y2: t.y }
                    }
                }

                g { class: "chart__ticks chart__ticks--left",
                    for t in left_ticks.iter() {
                        text { x: left - 8.0, y: t.y, text_anchor: "end", dominant_baseline: "middle", "{t.text}" }
                    }
                }
                g { class: "chart__ticks chart__ticks--right",
                    for t in right_ticks.iter() {
                        text { x: right + 8.0, y: t.y, text_anchor: "start", dominant_baseline: "middle", "{t.text}" }
                    }
                }
                g { class: "chart__ticks chart__ticks--x",
                    for (x, l) in x_labels.iter() {
                        text { x: *x, y: bottom + 22.0, text_anchor: "middle", "{l}" }
                    }
                }

                if let Some(title) = left_title {
                    text {
                        class: "chart__axis-title",
                        x: left_title_x,
                        y: mid_y,
                        text_anchor: "middle",
                        transform: "rotate(-90 {left_title_x} {mid_y})",
                        "{title}"
                    }
                }
                if let Some(title) = right_title {
                    text {
                        class: "chart__axis-title",
                        x: right_title_x,
                        y: mid_y,
                        text_anchor: "middle",
                        transform: "rotate(90 {right_title_x} {mid_y})",
                        "{title}"
                    }
                }

                for s in series.iter() {
                    g { key: "{s.name}", class: "chart__series",
                        path { class: "chart__area", d: "{s.area}", fill: s.fill, stroke: "none" }
                        path { class: "chart__line", d: "{s.line}", fill: "none", stroke: s.stroke }
                        for (p, tip) in s.points.iter() {
                            g { class: "chart__hover",
                                circle { class: "chart__point", cx: p.x, cy: p.y, r: POINT_RADIUS, fill: s.stroke }
                                text { class: "chart__tip", x: p.x, y: p.y - 10.0, text_anchor: "middle", "{tip}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
