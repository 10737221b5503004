//! Backend-independent description of what a chart draws.
//!
//! Coordinates of axes, ticks, markers and the placeholder are relative to
//! the plot area, which sits at `translate` inside the outer surface.

use crate::config::ChartConfig;

/// Which side of the plot area an axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Data value at the tick (milliseconds).
    pub value: f64,
    /// Pixel offset along the axis.
    pub offset: f64,
    /// Empty when the tick is drawn without a label.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub orientation: Orientation,
    pub title: String,
    /// Pixel length of the axis line.
    pub length: f64,
    pub ticks: Vec<Tick>,
}

/// One circle per sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

/// The "Loading..." text shown until data arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// The drawing surface of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    /// Outer width including margins.
    pub width: f64,
    /// Outer height including margins.
    pub height: f64,
    /// Offset of the plot area inside the surface.
    pub translate: (f64, f64),
    pub plot_width: f64,
    pub plot_height: f64,
    pub placeholder: Option<Placeholder>,
    pub x_axis: Option<Axis>,
    pub y_axis: Option<Axis>,
    pub markers: Vec<Marker>,
}

impl Surface {
    /// An empty surface showing only the loading placeholder.
    pub fn loading(config: &ChartConfig) -> Self {
        let plot_width = config.plot_width();
        let plot_height = config.plot_height();
        Self {
            width: config.width,
            height: config.height,
            translate: (config.margin.left, config.margin.top),
            plot_width,
            plot_height,
            placeholder: Some(Placeholder {
                text: config.loading_text.clone(),
                x: plot_width / 2.0,
                y: plot_height / 2.0,
            }),
            x_axis: None,
            y_axis: None,
            markers: Vec::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.placeholder.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_surface() {
        let surface = Surface::loading(&ChartConfig::default());
        assert_eq!((surface.width, surface.height), (1280.0, 720.0));
        assert_eq!(surface.translate, (60.0, 20.0));
        let placeholder = surface.placeholder.as_ref().unwrap();
        assert_eq!(placeholder.text, "Loading...");
        assert_eq!((placeholder.x, placeholder.y), (600.0, 335.0));
        assert!(surface.markers.is_empty());
        assert!(surface.x_axis.is_none() && surface.y_axis.is_none());
    }
}
