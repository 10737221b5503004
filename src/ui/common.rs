//! Common UI components shared across views.
//!
//! This module contains the header bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::chart::ChartState;

/// Render the header bar with the resource and a data summary.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.chart.state();
    let mut spans = vec![
        Span::styled(" ● ", app.theme.state_style(state)),
        Span::styled("LATENCY SCATTER ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::raw(app.source_description()),
    ];

    if let Some(scales) = app.chart.scales() {
        let config = app.chart.config();
        let x = scales.x.domain();
        let y = scales.y.domain();
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("{}", app.chart.points().len()),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" samples │ "));
        spans.push(Span::raw(format!(
            "{} → {}",
            scales.x.tick_label(x.min, &config.time_format),
            scales.x.tick_label(x.max, &config.time_format)
        )));
        spans.push(Span::raw(format!(" │ {}–{} ms", y.min, y.max)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Status bar text for the current state.
pub fn status_text(app: &App) -> String {
    if let Some(msg) = app.get_status_message() {
        return format!(" {} ", msg);
    }
    match app.chart.state() {
        ChartState::Loading => " Loading... | q:quit".to_string(),
        ChartState::Rendered => {
            let elapsed = app
                .loaded_at
                .map(|t| t.elapsed().as_secs_f64())
                .unwrap_or_default();
            format!(
                " Loaded {:.1}s ago | r:reload e:export ?:help q:quit",
                elapsed
            )
        }
        // The load error itself only goes to the log.
        ChartState::Failed => " Failed | r:retry q:quit".to_string(),
    }
}

/// Render the status bar at the bottom.
///
/// Shows load state and controls. Also displays temporary status messages.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let style = if app.get_status_message().is_some() {
        Style::default().fg(app.theme.highlight)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };

    let paragraph = Paragraph::new(status_text(app)).style(style);
    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the chart.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from("  r         Reload data"),
        Line::from("  e         Export to SVG"),
        Line::from("  ?         Toggle help"),
        Line::from("  q / Esc   Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 36u16.min(area.width.saturating_sub(4));
    let help_height = 10u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
