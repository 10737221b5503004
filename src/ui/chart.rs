//! Scatterplot view.
//!
//! The terminal chart widget only has linear axes, so latencies are plotted
//! as `log10(ms)` and the y labels are converted back to milliseconds.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::app::App;
use crate::chart::Chart as LatencyChart;
use crate::data::Domain;

/// Padding applied to a degenerate time domain, in milliseconds.
const TIME_PAD_MS: f64 = 500.0;
/// Padding applied to a degenerate latency domain, in decades.
const DECADE_PAD: f64 = 0.5;

/// Chart data projected for the terminal widget.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    /// `(time_ms, log10(latency_ms))` per sample.
    pub points: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
}

impl PlotData {
    /// Project a rendered chart. Returns `None` before the chart has data.
    pub fn from_chart(chart: &LatencyChart) -> Option<Self> {
        let scales = chart.scales()?;
        let config = chart.config();

        let x_bounds = pad(scales.x.domain(), TIME_PAD_MS);
        let y_domain = scales.y.domain();
        let y_bounds = pad(
            Domain::new(y_domain.min.log10(), y_domain.max.log10()),
            DECADE_PAD,
        );

        let points = chart
            .points()
            .iter()
            .map(|p| {
                // Non-positive latencies sit on the bottom edge, as in the SVG.
                let y = if p.latency_ms > 0.0 {
                    p.latency_ms.log10()
                } else {
                    y_bounds[0]
                };
                (p.time_ms, y)
            })
            .collect();

        let x_mid = (x_bounds[0] + x_bounds[1]) / 2.0;
        let x_labels = [x_bounds[0], x_mid, x_bounds[1]]
            .iter()
            .map(|&ms| scales.x.tick_label(ms, &config.time_format))
            .collect();

        let y_mid = (y_bounds[0] + y_bounds[1]) / 2.0;
        let y_labels = [y_bounds[0], y_mid, y_bounds[1]]
            .iter()
            .map(|&exp| format_latency(10f64.powf(exp)))
            .collect();

        Some(Self {
            points,
            x_bounds,
            y_bounds,
            x_labels,
            y_labels,
        })
    }
}

fn pad(domain: Domain, amount: f64) -> [f64; 2] {
    if domain.is_degenerate() || !domain.span().is_finite() {
        [domain.min - amount, domain.min + amount]
    } else {
        [domain.min, domain.max]
    }
}

/// Compact latency label in milliseconds.
pub fn format_latency(ms: f64) -> String {
    if ms >= 100.0 {
        format!("{:.0}", ms)
    } else if ms >= 1.0 {
        format!("{:.2}", ms)
    } else {
        format!("{:.2e}", ms)
    }
}

/// Render the chart area: placeholder while loading or failed, scatterplot
/// once rendered.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" Latency ", app.theme.header))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.axis));

    let Some(data) = PlotData::from_chart(&app.chart) else {
        render_placeholder(frame, app, block, area);
        return;
    };

    let config = app.chart.config();
    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Scatter)
        .style(Style::default().fg(app.theme.marker))
        .data(&data.points);

    let axis_style = Style::default().fg(app.theme.axis);
    let x_axis = Axis::default()
        .title(config.x_label.clone())
        .style(axis_style)
        .bounds(data.x_bounds)
        .labels(data.x_labels.iter().map(|l| Line::from(l.clone())));
    let y_axis = Axis::default()
        .title(config.y_label.clone())
        .style(axis_style)
        .bounds(data.y_bounds)
        .labels(data.y_labels.iter().map(|l| Line::from(l.clone())));

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}

fn render_placeholder(frame: &mut Frame, app: &App, block: Block, area: Rect) {
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    let text = Paragraph::new(app.chart.config().loading_text.clone())
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme.loading).add_modifier(Modifier::BOLD));
    frame.render_widget(text, middle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartConfig;
    use crate::data::Sample;
    use crate::scale::Zone;

    fn utc_chart(samples: &[Sample]) -> LatencyChart {
        let mut chart = LatencyChart::initialize(ChartConfig {
            timezone: Zone::Utc,
            ..ChartConfig::default()
        });
        chart.render(samples);
        chart
    }

    #[test]
    fn test_no_plot_data_while_loading() {
        let chart = LatencyChart::initialize(ChartConfig::default());
        assert!(PlotData::from_chart(&chart).is_none());
    }

    #[test]
    fn test_plot_data_uses_log_latency() {
        let chart = utc_chart(&[Sample::new(0, 1_000_000), Sample::new(60_000_000_000, 100_000_000)]);
        let data = PlotData::from_chart(&chart).unwrap();

        assert_eq!(data.points, vec![(0.0, 0.0), (60_000.0, 2.0)]);
        assert_eq!(data.x_bounds, [0.0, 60_000.0]);
        assert_eq!(data.y_bounds, [0.0, 2.0]);
        assert_eq!(data.x_labels, vec!["00:00:00", "00:00:30", "00:01:00"]);
        assert_eq!(data.y_labels, vec!["1.00", "10.00", "100"]);
    }

    #[test]
    fn test_single_sample_is_padded() {
        let chart = utc_chart(&[Sample::new(1_000_000_000, 1_000_000)]);
        let data = PlotData::from_chart(&chart).unwrap();
        assert_eq!(data.x_bounds, [500.0, 1500.0]);
        assert_eq!(data.y_bounds, [-0.5, 0.5]);
    }

    #[test]
    fn test_zero_latency_on_bottom_edge() {
        let chart = utc_chart(&[Sample::new(0, 0), Sample::new(1_000_000_000, 10_000_000)]);
        let data = PlotData::from_chart(&chart).unwrap();
        assert_eq!(data.points[0].1, data.y_bounds[0]);
    }

    #[test]
    fn test_format_latency() {
        assert_eq!(format_latency(250.0), "250");
        assert_eq!(format_latency(2.5), "2.50");
        assert_eq!(format_latency(0.005), "5.00e-3");
    }
}
