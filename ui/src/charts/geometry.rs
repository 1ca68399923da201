//! Pure chart geometry: scales, category positions, paths and bars.
//!
//! Everything here works in SVG user units and is independent of Dioxus, so
//! the components in this module only have to turn these numbers into markup.

const EPSILON: f64 = 1e-9;

/// Outer size of a chart and the padding reserved for axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    pub pad_top: f64,
    pub pad_bottom: f64,
}

impl Frame {
    pub fn plot_left(&self) -> f64 {
        self.pad_left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.pad_right
    }

    pub fn plot_top(&self) -> f64 {
        self.pad_top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.pad_bottom
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Linear value axis snapped to "nice" bounds (1, 2 or 5 × 10ⁿ steps).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Fraction digits needed to print a tick without noise.
    pub decimals: usize,
}

fn nice_step(raw: f64) -> f64 {
    let exponent = raw.log10().floor();
    let magnitude = 10f64.powi(exponent as i32);
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

impl LinearScale {
    /// Fit a scale around `values` with at most `max_ticks` ticks.
    pub fn nice(values: &[f64], max_ticks: usize, begin_at_zero: bool) -> Self {
        let finite = values.iter().copied().filter(|v| v.is_finite());
        let (mut lo, mut hi) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if lo > hi {
            lo = 0.0;
            hi = 1.0;
        }
        if begin_at_zero {
            lo = lo.min(0.0);
            hi = hi.max(0.0);
        }
        if (hi - lo).abs() < EPSILON {
            let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.05 };
            lo -= pad;
            hi += pad;
        }

        let intervals = max_ticks.max(2) - 1;
        let step = nice_step((hi - lo) / intervals as f64);
        let decimals = if step >= 1.0 {
            0
        } else {
            (-step.log10().floor()) as usize
        };
        let min = round_to((lo / step + EPSILON).floor() * step, decimals);
        let max = round_to((hi / step - EPSILON).ceil() * step, decimals);

        Self {
            min,
            max,
            step,
            decimals,
        }
    }

    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as usize + 1;
        (0..count)
            .map(|i| round_to(self.min + i as f64 * self.step, self.decimals))
            .collect()
    }

    /// Map `value` onto the vertical span `top..bottom` (larger values higher).
    pub fn project(&self, value: f64, top: f64, bottom: f64) -> f64 {
        let span = self.max - self.min;
        if span.abs() < EPSILON {
            return bottom;
        }
        bottom - (value - self.min) / span * (bottom - top)
    }
}

/// Horizontal position of point `index` when categories sit on the plot edges.
pub fn point_x(index: usize, count: usize, left: f64, right: f64) -> f64 {
    if count <= 1 {
        (left + right) / 2.0
    } else {
        left + index as f64 * (right - left) / (count - 1) as f64
    }
}

/// Share of a category slot given to the bar group, and of the group to the bar.
const CATEGORY_PERCENT: f64 = 0.8;
const BAR_PERCENT: f64 = 0.9;

/// Horizontal extent of one bar inside its category slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub x: f64,
    pub width: f64,
    pub center: f64,
}

pub fn band(index: usize, count: usize, left: f64, right: f64) -> Band {
    let slot = (right - left) / count.max(1) as f64;
    let width = slot * CATEGORY_PERCENT * BAR_PERCENT;
    let center = left + slot * (index as f64 + 0.5);
    Band {
        x: center - width / 2.0,
        width,
        center,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
}

/// Bar rising from the scale's zero line (or its floor) to `value`.
pub fn bar_rect(band: Band, value: f64, scale: &LinearScale, top: f64, bottom: f64, radius: f64) -> Rect {
    let base = scale.project(0f64.clamp(scale.min, scale.max), top, bottom);
    let tip = scale.project(value, top, bottom);
    let (y, height) = if tip <= base {
        (tip, base - tip)
    } else {
        (base, tip - base)
    };
    Rect {
        x: band.x,
        y,
        width: band.width,
        height,
        radius: radius.min(band.width / 2.0).min(height / 2.0),
    }
}

/// Cubic Bézier control points around `current`, given its neighbours.
fn control_points(prev: Point, current: Point, next: Point, tension: f64) -> (Point, Point) {
    let d01 = ((current.x - prev.x).powi(2) + (current.y - prev.y).powi(2)).sqrt();
    let d12 = ((next.x - current.x).powi(2) + (next.y - current.y).powi(2)).sqrt();
    let total = d01 + d12;
    let (s01, s12) = if total > 0.0 {
        (d01 / total, d12 / total)
    } else {
        (0.0, 0.0)
    };
    let fa = tension * s01;
    let fb = tension * s12;
    let dx = next.x - prev.x;
    let dy = next.y - prev.y;
    (
        Point {
            x: current.x - fa * dx,
            y: current.y - fa * dy,
        },
        Point {
            x: current.x + fb * dx,
            y: current.y + fb * dy,
        },
    )
}

/// Smooth SVG path through `points`; `tension` 0 draws straight segments.
pub fn spline_path(points: &[Point], tension: f64) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };
    let mut d = format!("M{:.2},{:.2}", first.x, first.y);
    if points.len() == 1 {
        return d;
    }

    let last = points.len() - 1;
    let controls: Vec<(Point, Point)> = (0..points.len())
        .map(|i| {
            let prev = points[i.saturating_sub(1)];
            let next = points[(i + 1).min(last)];
            control_points(prev, points[i], next, tension)
        })
        .collect();

    for i in 1..points.len() {
        let (_, out) = controls[i - 1];
        let (inc, _) = controls[i];
        let p = points[i];
        d.push_str(&format!(
            " C{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
            out.x, out.y, inc.x, inc.y, p.x, p.y
        ));
    }
    d
}

/// `spline_path` closed down to `baseline`, for filled areas under a line.
pub fn area_path(points: &[Point], tension: f64, baseline: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    format!(
        "{} L{:.2},{:.2} L{:.2},{:.2} Z",
        spline_path(points, tension),
        last.x,
        baseline,
        first.x,
        baseline
    )
}
