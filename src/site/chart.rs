//! Inline SVG charts.
//!
//! Just enough charting for the dashboard: a line chart for series over
//! time and proportional horizontal bars for shares of a whole.
#![expect(
    clippy::cast_precision_loss,
    reason = "Chart coordinates only need to be approximately right"
)]
use std::fmt::Write as _;

use super::html::escape;

/// Drawing area width in SVG user units
const WIDTH: f64 = 600.0;
/// Drawing area height
const HEIGHT: f64 = 240.0;
/// Room for axis labels
const PADDING: f64 = 32.0;

/// A labelled value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    /// Axis label
    pub label: String,
    /// Plotted value
    pub value: u64,
}

impl Point {
    /// Create a point
    pub fn new<S: Into<String>>(label: S, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Line chart of `points`, left to right. An empty series renders a placeholder.
#[must_use]
pub fn line_chart(title: &str, points: &[Point], color: &str) -> String {
    if points.is_empty() {
        return format!(
            r#"<p class="chart-empty">No data for {}</p>"#,
            escape(title)
        );
    }
    let max = points.iter().map(|point| point.value).max().unwrap_or(0).max(1);
    let step = if points.len() > 1 {
        (WIDTH - 2.0 * PADDING) / (points.len() - 1) as f64
    } else {
        0.0
    };
    let coords: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(idx, point)| {
            let x = PADDING + step * idx as f64;
            let y = HEIGHT - PADDING - (point.value as f64 / max as f64) * (HEIGHT - 2.0 * PADDING);
            (x, y)
        })
        .collect();

    let mut svg = format!(
        r#"<svg class="chart" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="{}">"#,
        escape(title)
    );
    let _ = write!(
        svg,
        r#"<line x1="{PADDING}" y1="{y}" x2="{x2}" y2="{y}" stroke="currentColor" stroke-opacity="0.2"/>"#,
        y = HEIGHT - PADDING,
        x2 = WIDTH - PADDING,
    );
    let path: Vec<String> = coords
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect();
    let _ = write!(
        svg,
        r#"<polyline fill="none" stroke="{color}" stroke-width="2" points="{}"/>"#,
        path.join(" ")
    );
    for ((x, y), point) in coords.iter().zip(points) {
        let _ = write!(
            svg,
            r#"<circle cx="{x:.1}" cy="{y:.1}" r="3" fill="{color}"><title>{}: {}</title></circle><text x="{x:.1}" y="{label_y}" font-size="10" text-anchor="middle">{}</text>"#,
            escape(&point.label),
            point.value,
            escape(&point.label),
            label_y = HEIGHT - PADDING / 3.0,
        );
    }
    svg.push_str("</svg>");
    svg
}

/// One bar of a [`bar_list`]
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Label left of the bar
    pub label: String,
    /// Value right of the bar
    pub value: u64,
    /// Share of the whole, 0 to 100
    pub percentage: f64,
}

/// Horizontal bars sized by share of the whole, coloured from `palette` in turn.
#[must_use]
pub fn bar_list(bars: &[Bar], palette: &[&str]) -> String {
    if bars.is_empty() {
        return r#"<p class="chart-empty">No data</p>"#.to_owned();
    }
    let mut html = String::from(r#"<ul class="bars">"#);
    for (idx, bar) in bars.iter().enumerate() {
        let color = palette
            .get(idx % palette.len().max(1))
            .copied()
            .unwrap_or("currentColor");
        let width = bar.percentage.clamp(0.0, 100.0);
        let _ = write!(
            html,
            r#"<li><span class="bar-label">{}</span><span class="bar-track"><span class="bar-fill" style="width:{width:.1}%;background:{color}"></span></span><span class="bar-value">{} ({:.1}%)</span></li>"#,
            escape(&bar.label),
            bar.value,
            bar.percentage,
        );
    }
    html.push_str("</ul>");
    html
}

/// Bars for parts that have no precomputed percentage.
#[must_use]
pub fn bars_from_parts(parts: &[Point]) -> Vec<Bar> {
    let total: u64 = parts.iter().map(|part| part.value).sum();
    parts
        .iter()
        .map(|part| Bar {
            label: part.label.clone(),
            value: part.value,
            percentage: if total == 0 {
                0.0
            } else {
                part.value as f64 / total as f64 * 100.0
            },
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_line_chart_when_empty_expect_placeholder() {
        let cut = line_chart("Downloads", &[], "#000");
        assert!(cut.contains("No data for Downloads"));
        assert!(!cut.contains("<svg"));
    }

    #[test]
    fn test_line_chart_expect_one_marker_per_point_and_escaped_labels() {
        let points = vec![Point::new("v1<beta>", 1), Point::new("v2", 4)];
        let cut = line_chart("Trend", &points, "#8B5CF6");
        assert_eq!(cut.matches("<circle").count(), 2);
        assert!(cut.contains("v1&lt;beta&gt;"));
        assert!(!cut.contains("v1<beta>"));
    }

    #[test]
    fn test_line_chart_when_single_point_expect_no_nan() {
        let cut = line_chart("One", &[Point::new("v1", 0)], "#000");
        assert!(!cut.contains("NaN"));
    }

    #[test]
    fn test_bars_from_parts_expect_shares() {
        let cut = bars_from_parts(&[Point::new("Anime", 25), Point::new("Manga", 15), Point::new("Movies", 0)]);
        assert!((cut[0].percentage - 62.5).abs() < 1e-9);
        assert!((cut[1].percentage - 37.5).abs() < 1e-9);
        assert!(cut[2].percentage.abs() < f64::EPSILON);
    }

    #[test]
    fn test_bar_list_expect_item_per_bar() {
        let bars = bars_from_parts(&[Point::new("Android APK", 3), Point::new("iOS IPA", 1)]);
        let cut = bar_list(&bars, &["#111", "#222"]);
        assert_eq!(cut.matches("<li>").count(), 2);
        assert!(cut.contains("width:75.0%;background:#111"));
    }
}
