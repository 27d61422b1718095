//! SVG geometry for the overview charts.
//!
//! Only coordinates and labels are computed here; `templates/charts.html`
//! turns them into markup, so every label goes through template escaping.

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::Serialize;
use spacebio_analytics::{CountBucket, YearCount};

pub const WIDTH: f64 = 480.0;
pub const HEIGHT: f64 = 260.0;
const PAD: f64 = 36.0;

const PALETTE: [&str; 8] = [
    "#3b82f6", "#8b5cf6", "#ec4899", "#f59e0b", "#10b981", "#06b6d4", "#f97316", "#6366f1",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
    pub year: i32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub path: String,
    pub points: Vec<LinePoint>,
    pub y_max: usize,
}

/// Publications per year, left to right in ascending year order.
pub fn line_chart(years: &[YearCount]) -> LineChart {
    let y_max = years.iter().map(|y| y.count).max().unwrap_or(0);
    let plot_w = WIDTH - 2.0 * PAD;
    let plot_h = HEIGHT - 2.0 * PAD;
    let step = if years.len() > 1 { plot_w / (years.len() - 1) as f64 } else { 0.0 };

    let points: Vec<LinePoint> = years
        .iter()
        .enumerate()
        .map(|(i, y)| {
            let x = if years.len() == 1 { WIDTH / 2.0 } else { PAD + step * i as f64 };
            let frac = if y_max == 0 { 0.0 } else { y.count as f64 / y_max as f64 };
            LinePoint { x: round1(x), y: round1(HEIGHT - PAD - frac * plot_h), year: y.year, count: y.count }
        })
        .collect();

    let path = points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}{} {}", if i == 0 { "M" } else { "L" }, p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");

    LineChart { path, points, y_max }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub value: usize,
    pub color: &'static str,
}

/// One bar per bucket for the first `limit` buckets.
pub fn bar_chart(buckets: &[CountBucket], limit: usize) -> Vec<Bar> {
    let shown = &buckets[..buckets.len().min(limit)];
    let max = shown.iter().map(|b| b.value).max().unwrap_or(0);
    if shown.is_empty() || max == 0 {
        return Vec::new();
    }

    let plot_h = HEIGHT - 2.0 * PAD;
    let slot = (WIDTH - 2.0 * PAD) / shown.len() as f64;
    let width = slot * 0.7;

    shown
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let height = b.value as f64 / max as f64 * plot_h;
            Bar {
                x: round1(PAD + slot * i as f64 + (slot - width) / 2.0),
                y: round1(HEIGHT - PAD - height),
                width: round1(width),
                height: round1(height),
                label: b.name.clone(),
                value: b.value,
                color: PALETTE[i % PALETTE.len()],
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub path: String,
    /// `"<name> <percent>%"`, percent rounded to a whole number.
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
    pub color: &'static str,
}

/// Pie slices clockwise from twelve o'clock, in bucket order.
pub fn pie_chart(buckets: &[CountBucket]) -> Vec<Slice> {
    let total: usize = buckets.iter().map(|b| b.value).sum();
    if total == 0 {
        return Vec::new();
    }

    let (cx, cy) = (WIDTH / 2.0, HEIGHT / 2.0);
    let r = HEIGHT / 2.0 - PAD / 2.0;
    let mut start = -FRAC_PI_2;

    buckets
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let frac = b.value as f64 / total as f64;
            let end = start + frac * TAU;
            let path = if b.value == total {
                // a single arc cannot close on itself
                format!(
                    "M{} {} A{r} {r} 0 1 1 {} {} A{r} {r} 0 1 1 {} {} Z",
                    round1(cx), round1(cy - r), round1(cx), round1(cy + r), round1(cx), round1(cy - r),
                    r = round1(r)
                )
            } else {
                let large = if end - start > std::f64::consts::PI { 1 } else { 0 };
                format!(
                    "M{} {} L{} {} A{r} {r} 0 {} 1 {} {} Z",
                    round1(cx), round1(cy),
                    round1(cx + r * start.cos()), round1(cy + r * start.sin()),
                    large,
                    round1(cx + r * end.cos()), round1(cy + r * end.sin()),
                    r = round1(r)
                )
            };
            let mid = (start + end) / 2.0;
            let slice = Slice {
                path,
                label: format!("{} {}%", b.name, (frac * 100.0).round()),
                label_x: round1(cx + r * 1.1 * mid.cos()),
                label_y: round1(cy + r * 1.1 * mid.sin()),
                color: PALETTE[i % PALETTE.len()],
            };
            start = end;
            slice
        })
        .collect()
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
