//! SVG line chart: one curve per algorithm, shared axes, legend on the right.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::bench::Series;
use crate::{BenchError, Result};

pub const X_LABEL: &str = "Number of values";
pub const Y_LABEL: &str = "Time (seconds)";

const PALETTE: [&str; 6] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b",
];
const TICKS: usize = 5;

const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 170.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;

pub struct LineChart<'a> {
    title: String,
    series: &'a [Series],
    width: u32,
    height: u32,
}

/// Inclusive numeric range mapped onto one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Range {
    min: f64,
    max: f64,
}

impl Range {
    fn span(&self) -> f64 {
        self.max - self.min
    }

    fn tick(&self, i: usize) -> f64 {
        self.min + self.span() * i as f64 / TICKS as f64
    }
}

impl<'a> LineChart<'a> {
    pub fn new(series: &'a [Series]) -> Self {
        Self {
            title: String::new(),
            series,
            width: 800,
            height: 500,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    fn plot_width(&self) -> f64 {
        (f64::from(self.width) - MARGIN_LEFT - MARGIN_RIGHT).max(1.0)
    }

    fn plot_height(&self) -> f64 {
        (f64::from(self.height) - MARGIN_TOP - MARGIN_BOTTOM).max(1.0)
    }

    /// X range over all input lengths. A single length is centred unless
    /// that would push the axis below zero.
    fn x_range(&self) -> Range {
        let xs = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.input_len as f64));
        let (min, max) = xs.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
            (lo.min(x), hi.max(x))
        });
        if !min.is_finite() {
            return Range { min: 0.0, max: 1.0 };
        }
        if min == max {
            let pad = if min == 0.0 { 1.0 } else { min };
            return Range {
                min: (min - pad).max(0.0),
                max: max + pad,
            };
        }
        Range { min, max }
    }

    /// Y range from zero to a little above the slowest mean.
    fn y_range(&self) -> Range {
        let max = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.mean_secs))
            .filter(|y| y.is_finite())
            .fold(0.0_f64, f64::max);
        Range {
            min: 0.0,
            max: if max > 0.0 { max * 1.1 } else { 1.0 },
        }
    }

    fn project(&self, x: f64, y: f64, xr: Range, yr: Range) -> (f64, f64) {
        let px = MARGIN_LEFT + (x - xr.min) / xr.span() * self.plot_width();
        let py = MARGIN_TOP + self.plot_height() - (y - yr.min) / yr.span() * self.plot_height();
        (px, py)
    }

    pub fn to_svg(&self) -> String {
        let (w, h) = (self.width, self.height);
        let (pw, ph) = (self.plot_width(), self.plot_height());
        let xr = self.x_range();
        let yr = self.y_range();
        let bottom = MARGIN_TOP + ph;
        let right = MARGIN_LEFT + pw;

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="12">"#
        );
        let _ = writeln!(svg, r#"<rect width="{w}" height="{h}" fill="white"/>"#);

        if !self.title.is_empty() {
            let _ = writeln!(
                svg,
                r#"<text x="{:.1}" y="28" text-anchor="middle" font-size="16">{}</text>"#,
                MARGIN_LEFT + pw / 2.0,
                xml_escape(&self.title)
            );
        }

        // Gridlines and tick labels
        for i in 0..=TICKS {
            let (gx, _) = self.project(xr.tick(i), 0.0, xr, yr);
            let (_, gy) = self.project(xr.min, yr.tick(i), xr, yr);
            let _ = writeln!(
                svg,
                r##"<line x1="{gx:.1}" y1="{MARGIN_TOP:.1}" x2="{gx:.1}" y2="{bottom:.1}" stroke="#e0e0e0"/>"##
            );
            let _ = writeln!(
                svg,
                r#"<text x="{gx:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
                bottom + 18.0,
                format_count(xr.tick(i))
            );
            let _ = writeln!(
                svg,
                r##"<line x1="{MARGIN_LEFT:.1}" y1="{gy:.1}" x2="{right:.1}" y2="{gy:.1}" stroke="#e0e0e0"/>"##
            );
            let _ = writeln!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" text-anchor="end">{}</text>"#,
                MARGIN_LEFT - 8.0,
                gy + 4.0,
                format_seconds(yr.tick(i))
            );
        }

        // Axes
        let _ = writeln!(
            svg,
            r#"<rect x="{MARGIN_LEFT:.1}" y="{MARGIN_TOP:.1}" width="{pw:.1}" height="{ph:.1}" fill="none" stroke="black"/>"#
        );
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
            MARGIN_LEFT + pw / 2.0,
            f64::from(h) - 15.0,
            X_LABEL
        );
        let _ = writeln!(
            svg,
            r#"<text x="20" y="{:.1}" text-anchor="middle" transform="rotate(-90 20 {:.1})">{}</text>"#,
            MARGIN_TOP + ph / 2.0,
            MARGIN_TOP + ph / 2.0,
            Y_LABEL
        );

        // Curves
        for (idx, s) in self.series.iter().enumerate() {
            let color = PALETTE[idx % PALETTE.len()];
            let coords: Vec<(f64, f64)> = s
                .points
                .iter()
                .map(|p| self.project(p.input_len as f64, p.mean_secs, xr, yr))
                .collect();

            if coords.len() > 1 {
                let pts: Vec<String> = coords
                    .iter()
                    .map(|(x, y)| format!("{x:.1},{y:.1}"))
                    .collect();
                let _ = writeln!(
                    svg,
                    r#"<polyline points="{}" fill="none" stroke="{color}" stroke-width="2"/>"#,
                    pts.join(" ")
                );
            }
            for (x, y) in &coords {
                let _ = writeln!(
                    svg,
                    r#"<circle cx="{x:.1}" cy="{y:.1}" r="3.5" fill="{color}"/>"#
                );
            }
        }

        // Legend
        let lx = right + 20.0;
        for (idx, s) in self.series.iter().enumerate() {
            let color = PALETTE[idx % PALETTE.len()];
            let ly = MARGIN_TOP + 10.0 + idx as f64 * 20.0;
            let _ = writeln!(
                svg,
                r#"<line x1="{lx:.1}" y1="{ly:.1}" x2="{:.1}" y2="{ly:.1}" stroke="{color}" stroke-width="2"/>"#,
                lx + 24.0
            );
            let _ = writeln!(
                svg,
                r#"<text x="{:.1}" y="{:.1}">{}</text>"#,
                lx + 30.0,
                ly + 4.0,
                xml_escape(&s.label)
            );
        }

        svg.push_str("</svg>\n");
        svg
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_svg()).map_err(|source| BenchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), series = self.series.len(), "wrote chart");
        Ok(())
    }
}

fn format_count(x: f64) -> String {
    format!("{}", x.round() as i64)
}

fn format_seconds(y: f64) -> String {
    if y == 0.0 {
        "0".to_string()
    } else if y >= 0.01 {
        format!("{y:.3}")
    } else {
        format!("{y:.2e}")
    }
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::Point;

    fn series(label: &str, pts: &[(usize, f64)]) -> Series {
        Series {
            label: label.to_string(),
            points: pts
                .iter()
                .map(|&(input_len, mean_secs)| Point {
                    input_len,
                    mean_secs,
                })
                .collect(),
        }
    }

    #[test]
    fn chart_has_axis_labels_and_legend() {
        let data = vec![
            series("quicksort", &[(100, 0.001), (200, 0.002)]),
            series("mergesort", &[(100, 0.0015), (200, 0.003)]),
        ];
        let svg = LineChart::new(&data).with_title("Demo").to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(">Number of values</text>"));
        assert!(svg.contains(">Time (seconds)</text>"));
        assert!(svg.contains(">quicksort</text>"));
        assert!(svg.contains(">mergesort</text>"));
        assert!(svg.contains(">Demo</text>"));
        assert_eq!(svg.matches("<polyline").count(), 2);
        assert_eq!(svg.matches("<circle").count(), 4);
    }

    #[test]
    fn single_point_is_drawn_as_marker() {
        let data = vec![series("bubblesort", &[(1000, 0.05)])];
        let svg = LineChart::new(&data).to_svg();
        assert_eq!(svg.matches("<polyline").count(), 0);
        assert_eq!(svg.matches("<circle").count(), 1);
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
    }

    #[test]
    fn empty_chart_still_renders_axes() {
        let data: Vec<Series> = vec![];
        let svg = LineChart::new(&data).to_svg();
        assert!(svg.contains(X_LABEL));
        assert!(svg.contains(Y_LABEL));
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn points_stay_inside_plot_area() {
        let data = vec![series("mergesort", &[(10, 0.0), (1000, 0.2)])];
        let chart = LineChart::new(&data).with_size(600, 400);
        let (xr, yr) = (chart.x_range(), chart.y_range());
        for p in &data[0].points {
            let (x, y) = chart.project(p.input_len as f64, p.mean_secs, xr, yr);
            assert!((MARGIN_LEFT..=MARGIN_LEFT + chart.plot_width()).contains(&x));
            assert!((MARGIN_TOP..=MARGIN_TOP + chart.plot_height()).contains(&y));
        }
    }

    #[test]
    fn zero_length_axis_has_no_negative_ticks() {
        let data = vec![series("quicksort", &[(0, 0.0)])];
        let chart = LineChart::new(&data);
        let xr = chart.x_range();
        assert_eq!(xr.min, 0.0);
        assert!(xr.max > 0.0);

        let svg = chart.to_svg();
        assert!(!svg.contains(">-"));
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn labels_are_escaped() {
        let data = vec![series("a<b & c", &[(1, 0.1)])];
        let svg = LineChart::new(&data).to_svg();
        assert!(svg.contains("a&lt;b &amp; c"));
    }

    #[test]
    fn seconds_format() {
        assert_eq!(format_seconds(0.0), "0");
        assert_eq!(format_seconds(0.125), "0.125");
        assert_eq!(format_seconds(0.00012), "1.20e-4");
    }

    #[test]
    fn write_creates_file() {
        let data = vec![series("quicksort", &[(10, 0.01)])];
        let path = std::env::temp_dir().join(format!(
            "sortbench-chart-{}.svg",
            uuid::Uuid::new_v4()
        ));
        LineChart::new(&data).write(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("quicksort"));
        std::fs::remove_file(&path).ok();
    }
}
