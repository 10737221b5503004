//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::chart::ChartState;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color of the sample markers.
    pub marker: Color,
    /// Color for axes and their labels.
    pub axis: Color,
    /// Color for the loading placeholder.
    pub loading: Color,
    /// Color for a successfully rendered chart.
    pub rendered: Color,
    /// Color for a failed load.
    pub failed: Color,
    /// Style for titles.
    pub header: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            marker: Color::LightBlue,
            axis: Color::Gray,
            loading: Color::Yellow,
            rendered: Color::Green,
            failed: Color::Red,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            marker: Color::Blue,
            axis: Color::DarkGray,
            loading: Color::Yellow,
            rendered: Color::Green,
            failed: Color::Red,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get style for a chart state
    pub fn state_style(&self, state: ChartState) -> Style {
        match state {
            ChartState::Loading => Style::default().fg(self.loading),
            ChartState::Rendered => Style::default().fg(self.rendered),
            ChartState::Failed => Style::default().fg(self.failed).add_modifier(Modifier::BOLD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_styles_differ() {
        let theme = Theme::dark();
        assert_ne!(
            theme.state_style(ChartState::Loading),
            theme.state_style(ChartState::Failed)
        );
        assert_eq!(theme.state_style(ChartState::Rendered).fg, Some(Color::Green));
    }
}
