//! Drawing through plotters' SVG backend.
//!
//! Each function draws into an in-memory SVG document and, alongside it,
//! records the geometry it drew as a [`Surface`], so the picture can be
//! inspected without parsing the SVG.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};
use plotters::coord::combinators::{BindKeyPoints, IntoLogRange};
use plotters::coord::ranged1d::Ranged;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};

use super::surface::{Axis, Marker, Orientation, Surface, Tick};
use crate::config::ChartConfig;
use crate::data::Point;
use crate::error::LoadError;
use crate::scale::time::{format_instant, instant, key_points};
use crate::scale::{format_tick, Scales, Zone};

/// Marker fill.
const MARKER_COLOR: RGBColor = RGBColor(70, 130, 180);

/// Size of placeholder text, in pixels.
const TEXT_SIZE: f64 = 10.0;

/// Draw the loading placeholder described by `surface`.
pub fn placeholder(config: &ChartConfig, surface: &Surface) -> Result<String, LoadError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, pixel_size(config)).into_drawing_area();
        root.fill(&WHITE)?;
        if let Some(ref placeholder) = surface.placeholder {
            let (left, top) = origin(config);
            root.draw(&Text::new(
                placeholder.text.clone(),
                (
                    left + placeholder.x.round() as i32,
                    top + placeholder.y.round() as i32,
                ),
                FontDesc::new(FontFamily::SansSerif, TEXT_SIZE, FontStyle::Normal),
            ))?;
        }
        root.present()?;
    }
    Ok(svg)
}

/// Draw both axes and one circle per point.
pub fn scatter(
    config: &ChartConfig,
    scales: &Scales,
    points: &[Point],
) -> Result<(Surface, String), LoadError> {
    match scales.x.zone() {
        Zone::Utc => scatter_in(&Utc, config, scales, points),
        Zone::Local => scatter_in(&Local, config, scales, points),
    }
}

fn scatter_in<Tz>(
    tz: &Tz,
    config: &ChartConfig,
    scales: &Scales,
    points: &[Point],
) -> Result<(Surface, String), LoadError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let (x0, x1) = scales.x.extent();
    let (y0, y1) = scales.y.extent();
    let x_range = instant(tz, x0)..instant(tz, x1);
    let x_ticks = key_points(x_range.clone(), config.ticks);

    let mut surface = Surface::loading(config);
    surface.placeholder = None;
    let (left, top) = origin(config);
    let (left, top) = (f64::from(left), f64::from(top));

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, pixel_size(config)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin_top(pixels(config.margin.top))
            .margin_right(pixels(config.margin.right))
            .x_label_area_size(pixels(config.margin.bottom))
            .y_label_area_size(pixels(config.margin.left))
            .build_cartesian_2d(
                x_range.with_key_points(x_ticks.clone()),
                (y0..y1).log_scale(),
            )?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(config.ticks)
            .y_labels(config.ticks)
            .x_label_formatter(&|t| format_instant(t, &config.time_format))
            .y_label_formatter(&|v| format_tick(*v))
            .x_desc(config.x_label.as_str())
            .y_desc(config.y_label.as_str())
            .draw()?;

        let coords: Vec<(DateTime<Tz>, f64)> = points
            .iter()
            .map(|p| (instant(tz, p.time_ms), scales.y.position(p.latency_ms)))
            .collect();
        let radius = config.marker_radius.round().max(1.0) as u32;
        chart.draw_series(
            coords
                .iter()
                .map(|c| Circle::new(c.clone(), radius, MARKER_COLOR.filled())),
        )?;

        surface.markers = coords
            .iter()
            .map(|c| {
                let (cx, cy) = chart.backend_coord(c);
                Marker {
                    cx: f64::from(cx) - left,
                    cy: f64::from(cy) - top,
                    r: config.marker_radius,
                }
            })
            .collect();

        let x_ticks: Vec<Tick> = x_ticks
            .iter()
            .map(|t| Tick {
                value: t.timestamp_millis() as f64,
                offset: f64::from(chart.backend_coord(&(t.clone(), y0)).0) - left,
                label: format_instant(t, &config.time_format),
            })
            .collect();
        let start = instant(tz, x0);
        let y_ticks: Vec<Tick> = chart
            .as_coord_spec()
            .y_spec()
            .key_points(config.ticks)
            .into_iter()
            .map(|v| Tick {
                value: v,
                offset: f64::from(chart.backend_coord(&(start.clone(), v)).1) - top,
                label: format_tick(v),
            })
            .collect();

        surface.x_axis = Some(Axis {
            orientation: Orientation::Bottom,
            title: config.x_label.clone(),
            length: config.plot_width(),
            ticks: x_ticks,
        });
        surface.y_axis = Some(Axis {
            orientation: Orientation::Left,
            title: config.y_label.clone(),
            length: config.plot_height(),
            ticks: y_ticks,
        });

        root.present()?;
    }
    Ok((surface, svg))
}

fn pixels(v: f64) -> u32 {
    v.max(0.0).round() as u32
}

fn pixel_size(config: &ChartConfig) -> (u32, u32) {
    (pixels(config.width), pixels(config.height))
}

/// Top-left corner of the plot area on the backend.
fn origin(config: &ChartConfig) -> (i32, i32) {
    (
        pixels(config.margin.left) as i32,
        pixels(config.margin.top) as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{to_points, Sample};

    fn utc_config() -> ChartConfig {
        ChartConfig {
            timezone: Zone::Utc,
            ..ChartConfig::default()
        }
    }

    fn near(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1.0
    }

    #[test]
    fn test_placeholder_svg() {
        let config = ChartConfig::default();
        let svg = placeholder(&config, &Surface::loading(&config)).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="1280""#));
        assert!(svg.contains(r#"height="720""#));
        assert!(svg.contains("Loading..."));
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn test_scatter_draws_one_circle_per_point() {
        let config = utc_config();
        let points = to_points(&[
            Sample::new(0, 1_000_000),
            Sample::new(500_000_000, 1_500_000),
            Sample::new(1_000_000_000, 2_000_000),
        ]);
        let scales = Scales::fit(&config, &points);
        let (surface, svg) = scatter(&config, &scales, &points).unwrap();

        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains("Time"));
        assert!(svg.contains("Latency (ms)"));
        assert!(!svg.contains("Loading..."));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(surface.markers.len(), 3);
    }

    #[test]
    fn test_markers_span_the_plot_area() {
        let config = utc_config();
        let points = to_points(&[Sample::new(0, 1_000_000), Sample::new(1_000_000_000, 2_000_000)]);
        let scales = Scales::fit(&config, &points);
        let (surface, _) = scatter(&config, &scales, &points).unwrap();

        let first = surface.markers[0];
        let last = surface.markers[1];
        assert!(near(first.cx, 0.0), "{:?}", first);
        assert!(near(first.cy, 670.0), "{:?}", first);
        assert!(near(last.cx, 1200.0), "{:?}", last);
        assert!(near(last.cy, 0.0), "{:?}", last);
        assert_eq!(first.r, 1.5);
    }

    #[test]
    fn test_axis_ticks() {
        let config = utc_config();
        let points = to_points(&[Sample::new(0, 1_000_000), Sample::new(60_000_000_000, 100_000_000)]);
        let scales = Scales::fit(&config, &points);
        let (surface, _) = scatter(&config, &scales, &points).unwrap();

        let x = surface.x_axis.unwrap();
        assert_eq!(x.ticks[0].label, "00:00:00");
        assert!(near(x.ticks[0].offset, 0.0));
        assert!(x.ticks.iter().all(|t| t.label.starts_with("00:0")));
        assert!(x.ticks.windows(2).all(|w| w[0].offset < w[1].offset));

        let y = surface.y_axis.unwrap();
        let ten = y.ticks.iter().find(|t| t.label == "10").unwrap();
        assert!(near(ten.offset, 335.0), "{:?}", ten);
    }

    #[test]
    fn test_zero_latency_drawn_on_bottom_edge() {
        let config = utc_config();
        let points = to_points(&[Sample::new(0, 5), Sample::new(1, 0), Sample::new(2, 10)]);
        let scales = Scales::fit(&config, &points);
        let (surface, svg) = scatter(&config, &scales, &points).unwrap();

        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(near(surface.markers[1].cy, 670.0));
    }
}
