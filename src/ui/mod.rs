//! Terminal UI rendering using ratatui.
//!
//! ## Submodules
//!
//! - [`chart`]: The scatterplot itself, or the loading placeholder
//! - [`common`]: Shared components (header, status bar, help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │                                      │
//! │ Chart (chart::render)                │
//! │                                      │
//! ├──────────────────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlay rendered on top:
//!    - common::render_help
//! ```

pub mod chart;
pub mod common;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Minimum terminal size for usable display
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 10;

/// Draw one frame of the viewer.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Check for minimum terminal size
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let top = (area.height / 2).saturating_sub(2);
        let centered = Rect::new(0, top, area.width, 5u16.min(area.height - top));
        frame.render_widget(paragraph, centered);
        return;
    }

    let [header, content, status] = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Min(6),    // Chart
        Constraint::Length(1), // Status bar
    ])
    .areas(area);

    common::render_header(frame, app, header);
    chart::render(frame, app, content);
    common::render_status_bar(frame, app, status);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartConfig;
    use crate::data::Sample;
    use crate::source::Resource;
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> App {
        App::with_theme(
            Resource::parse("/nonexistent/latencies.json").unwrap(),
            ChartConfig::default(),
            tokio::runtime::Handle::current(),
            Theme::dark(),
        )
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[tokio::test]
    async fn test_draw_loading_placeholder() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let text = screen(&terminal);
        assert!(text.contains("Loading..."));
        assert!(text.contains("LATENCY SCATTER"));
    }

    #[tokio::test]
    async fn test_draw_rendered_chart() {
        let mut app = app();
        app.chart.settle(Ok(vec![
            Sample::new(0, 1_000_000),
            Sample::new(1_000_000_000, 2_000_000),
        ]));
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let text = screen(&terminal);
        assert!(!text.contains("Loading..."));
        assert!(text.contains("2 samples"));
    }

    #[tokio::test]
    async fn test_draw_failed_shows_only_placeholder() {
        let mut app = app();
        app.chart.settle(Err(crate::error::LoadError::Http {
            resource: "http://localhost/latencies.json".to_string(),
            message: "status 503".to_string(),
        }));
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let text = screen(&terminal);
        assert!(text.contains("Loading..."));
        assert!(text.contains("Failed"));
        assert!(!text.contains("status 503"));
    }

    #[tokio::test]
    async fn test_draw_too_small() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        assert!(screen(&terminal).contains("Terminal too small"));
    }

    #[tokio::test]
    async fn test_help_overlay() {
        let mut app = app();
        app.toggle_help();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        assert!(screen(&terminal).contains("Keyboard Shortcuts"));
    }
}
