//! Inline SVG charts
//!
//! Each chart scales its own data into a fixed viewBox; the browser
//! stretches the SVG to the card width.

use std::f64::consts::PI;

use maud::{html, Markup};

use crate::fixtures::{ServiceCost, SpendPoint};

pub const PRIMARY: &str = "hsl(211 100% 45%)";
pub const FORECAST: &str = "hsl(217 91% 59%)";

/// Slice colours for the cost-driver pie, cycled by index.
pub const PALETTE: [&str; 5] = [
    "hsl(211 100% 45%)",
    "hsl(217 91% 59%)",
    "hsl(215 60% 55%)",
    "hsl(210 60% 60%)",
    "hsl(205 70% 50%)",
];

const WIDTH: f64 = 600.0;
const PAD_LEFT: f64 = 48.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 10.0;
const PAD_BOTTOM: f64 = 24.0;
const GRID_LINES: u64 = 4;

/// Round an axis maximum up to a readable step.
pub fn nice_ceiling(max: u64) -> u64 {
    if max == 0 {
        return 1;
    }
    let magnitude = 10u64.pow((max as f64).log10().floor() as u32);
    let step = (magnitude / 2).max(1);
    max.div_ceil(step) * step
}

fn coord(v: f64) -> String {
    format!("{:.1}", v)
}

/// Linear mapping from data space into the plot area.
struct Plot {
    height: f64,
    count: usize,
    y_max: u64,
}

impl Plot {
    fn new(height: f64, count: usize, data_max: u64) -> Self {
        Self {
            height,
            count,
            y_max: nice_ceiling(data_max),
        }
    }

    fn inner_width(&self) -> f64 {
        WIDTH - PAD_LEFT - PAD_RIGHT
    }

    fn inner_height(&self) -> f64 {
        self.height - PAD_TOP - PAD_BOTTOM
    }

    fn baseline(&self) -> f64 {
        self.height - PAD_BOTTOM
    }

    fn x(&self, i: usize) -> f64 {
        if self.count <= 1 {
            return PAD_LEFT + self.inner_width() / 2.0;
        }
        PAD_LEFT + self.inner_width() * i as f64 / (self.count - 1) as f64
    }

    fn y(&self, value: u64) -> f64 {
        self.baseline() - self.inner_height() * value as f64 / self.y_max as f64
    }

    fn frame(&self, label: &str, body: Markup) -> Markup {
        html! {
            svg class="chart" viewBox=(format!("0 0 {} {}", WIDTH, self.height))
                role="img" aria-label=(label) {
                (body)
            }
        }
    }

    fn grid(&self) -> Markup {
        html! {
            @for step in 0..=GRID_LINES {
                @let value = self.y_max * step / GRID_LINES;
                @let y = self.y(value);
                line class="grid" x1=(coord(PAD_LEFT)) y1=(coord(y))
                    x2=(coord(WIDTH - PAD_RIGHT)) y2=(coord(y)) stroke-dasharray="3 3" {}
                text class="tick" x=(coord(PAD_LEFT - 6.0)) y=(coord(y + 4.0)) text-anchor="end" {
                    (value)
                }
            }
        }
    }

    /// X labels, thinned so they do not overlap.
    fn x_labels(&self, points: &[SpendPoint]) -> Markup {
        let every = (self.count / 8).max(1);
        html! {
            @for (i, point) in points.iter().enumerate().filter(|(i, _)| i % every == 0) {
                text class="tick" x=(coord(self.x(i))) y=(coord(self.height - 6.0))
                    text-anchor="middle" {
                    (point.date)
                }
            }
        }
    }

    fn polyline(&self, points: &[SpendPoint]) -> String {
        points
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{:.1},{:.1}", self.x(i), self.y(p.spend)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn max_spend(points: &[SpendPoint]) -> u64 {
    points.iter().map(|p| p.spend).max().unwrap_or(0)
}

/// Filled area chart of actual spend.
pub fn area_chart(points: &[SpendPoint], height: f64, label: &str) -> Markup {
    let plot = Plot::new(height, points.len(), max_spend(points));
    let line = plot.polyline(points);
    let fill = match points.len() {
        0 => String::new(),
        n => format!(
            "{:.1},{:.1} {} {:.1},{:.1}",
            plot.x(0),
            plot.baseline(),
            line,
            plot.x(n - 1),
            plot.baseline()
        ),
    };

    plot.frame(
        label,
        html! {
            defs {
                linearGradient id="actual" x1="0" y1="0" x2="0" y2="1" {
                    stop offset="5%" stop-color=(PRIMARY) stop-opacity="0.5" {}
                    stop offset="95%" stop-color=(PRIMARY) stop-opacity="0" {}
                }
            }
            (plot.grid())
            @if !points.is_empty() {
                polygon fill="url(#actual)" points=(fill) {}
                polyline fill="none" stroke=(PRIMARY) stroke-width="2" points=(line) {}
            }
            (plot.x_labels(points))
        },
    )
}

/// Dashed line chart of forecast spend.
pub fn line_chart(points: &[SpendPoint], height: f64, label: &str) -> Markup {
    let plot = Plot::new(height, points.len(), max_spend(points));
    plot.frame(
        label,
        html! {
            (plot.grid())
            @if !points.is_empty() {
                polyline fill="none" stroke=(FORECAST) stroke-width="2" stroke-dasharray="5 5"
                    points=(plot.polyline(points)) {}
            }
            (plot.x_labels(points))
        },
    )
}

/// Vertical bars, one per service.
pub fn bar_chart(costs: &[ServiceCost], height: f64, label: &str) -> Markup {
    let data_max = costs.iter().map(|c| c.cost).max().unwrap_or(0);
    let plot = Plot::new(height, costs.len(), data_max);
    let slot = plot.inner_width() / costs.len().max(1) as f64;
    let bar_width = slot * 0.6;

    plot.frame(
        label,
        html! {
            (plot.grid())
            @for (i, cost) in costs.iter().enumerate() {
                @let centre = PAD_LEFT + slot * (i as f64 + 0.5);
                @let top = plot.y(cost.cost);
                rect fill=(PRIMARY) x=(coord(centre - bar_width / 2.0)) y=(coord(top))
                    width=(coord(bar_width)) height=(coord(plot.baseline() - top)) {
                    title { (cost.service) ": " (cost.cost) }
                }
                text class="tick" x=(coord(centre)) y=(coord(height - 6.0)) text-anchor="middle" {
                    (cost.service)
                }
            }
        },
    )
}

/// Point on a circle, angle measured clockwise from twelve o'clock.
fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// SVG path for one pie slice.
fn slice_path(cx: f64, cy: f64, r: f64, start: f64, sweep: f64) -> String {
    let (x1, y1) = polar(cx, cy, r, start);
    let (x2, y2) = polar(cx, cy, r, start + sweep);
    let large = if sweep > PI { 1 } else { 0 };
    format!("M{cx},{cy} L{x1:.2},{y1:.2} A{r},{r} 0 {large} 1 {x2:.2},{y2:.2} Z")
}

/// Pie of cost share with a legend underneath.
pub fn pie_chart(costs: &[ServiceCost], label: &str) -> Markup {
    let (cx, cy, r) = (150.0, 110.0, 100.0);
    let total: u64 = costs.iter().map(|c| c.cost).sum();

    let mut slices = Vec::with_capacity(costs.len());
    let mut start = 0.0;
    if total > 0 {
        for cost in costs {
            let sweep = 2.0 * PI * cost.cost as f64 / total as f64;
            slices.push(slice_path(cx, cy, r, start, sweep));
            start += sweep;
        }
    }

    html! {
        svg class="chart" viewBox=(format!("0 0 300 {}", 230 + costs.len() * 18))
            role="img" aria-label=(label) {
            @if costs.len() == 1 && total > 0 {
                circle cx=(coord(cx)) cy=(coord(cy)) r=(coord(r)) fill=(PALETTE[0]) {}
            } @else {
                @for (i, (cost, d)) in costs.iter().zip(&slices).enumerate() {
                    path fill=(PALETTE[i % PALETTE.len()]) d=(d) {
                        title { (cost.service) ": " (cost.cost) }
                    }
                }
            }
            @for (i, cost) in costs.iter().enumerate() {
                @let y = 232 + i * 18;
                rect x="40" y=(y - 9) width="10" height="10" fill=(PALETTE[i % PALETTE.len()]) {}
                text class="tick" x="56" y=(y) { (cost.service) " (" (cost.cost) ")" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn series(spends: &[u64]) -> Vec<SpendPoint> {
        let start = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        spends
            .iter()
            .enumerate()
            .map(|(i, s)| SpendPoint::new(start + Days::new(i as u64), *s))
            .collect()
    }

    fn costs() -> Vec<ServiceCost> {
        vec![
            ServiceCost {
                service: "A & B".to_string(),
                cost: 300,
            },
            ServiceCost {
                service: "C".to_string(),
                cost: 100,
            },
        ]
    }

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(0), 1);
        assert_eq!(nice_ceiling(7), 7);
        assert_eq!(nice_ceiling(1021), 1500);
        assert_eq!(nice_ceiling(4200), 4500);
        assert_eq!(nice_ceiling(5000), 5000);
    }

    #[test]
    fn test_area_chart_plots_every_point() {
        let svg = area_chart(&series(&[800, 900, 1000]), 256.0, "Actual").into_string();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("url(#actual)"));
        assert!(svg.contains("10-01"));
        let polyline = svg.split("<polyline").nth(1).unwrap();
        let points = polyline.split("points=\"").nth(1).unwrap().split('"').next().unwrap();
        assert_eq!(points.split(' ').count(), 3);
    }

    #[test]
    fn test_line_chart_is_dashed() {
        let svg = line_chart(&series(&[1021, 1030]), 160.0, "Forecast").into_string();
        assert!(svg.contains("stroke-dasharray=\"5 5\""));
    }

    #[test]
    fn test_empty_series_renders_frame() {
        let svg = area_chart(&[], 256.0, "Actual").into_string();
        assert!(!svg.contains("<polyline"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_bar_chart_escapes_labels() {
        let svg = bar_chart(&costs(), 320.0, "By service").into_string();
        assert_eq!(svg.matches("<rect").count(), 2);
        assert!(svg.contains("A &amp; B"));
        assert!(!svg.contains("A & B"));
    }

    #[test]
    fn test_pie_chart_slices_and_legend() {
        let svg = pie_chart(&costs(), "Drivers").into_string();
        assert_eq!(svg.matches("<path").count(), 2);
        assert!(svg.contains(PALETTE[0]));
        assert!(svg.contains(PALETTE[1]));
        // 300 of 400 is more than half the circle
        assert!(svg.contains(" 0 1 1 "));
    }
}
