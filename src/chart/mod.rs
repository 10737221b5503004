//! The chart renderer.
//!
//! A [`Chart`] is one-shot: it starts out [`ChartState::Loading`] with a
//! placeholder on its surface, and settles exactly once into either
//! [`ChartState::Rendered`] (axes and markers drawn) or
//! [`ChartState::Failed`] (placeholder left in place, one warning logged).
//!
//! Drawing goes through plotters' SVG backend; the [`Surface`] records what
//! was drawn.
//!
//! ```text
//!              render(samples)
//!   Loading ───────────────────▶ Rendered
//!      │
//!      │ fail(LoadError)
//!      ▼
//!   Failed
//! ```
//!
//! # Example
//!
//! ```
//! use latency_scatter::{Chart, ChartConfig, Sample};
//!
//! let mut chart = Chart::initialize(ChartConfig::default());
//! chart.render(&[Sample::new(0, 1_000_000), Sample::new(1_000_000_000, 2_000_000)]);
//! assert_eq!(chart.surface().markers.len(), 2);
//! let svg = chart.to_svg();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod html;
pub mod plot;
pub mod surface;

pub use surface::{Axis, Marker, Orientation, Placeholder, Surface, Tick};

use tracing::{debug, warn};

use crate::config::ChartConfig;
use crate::data::{to_points, Point, Sample};
use crate::error::LoadError;
use crate::scale::Scales;
use crate::source::Resource;

/// Lifecycle of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartState {
    Loading,
    Rendered,
    Failed,
}

impl ChartState {
    pub fn label(&self) -> &'static str {
        match self {
            ChartState::Loading => "Loading",
            ChartState::Rendered => "Rendered",
            ChartState::Failed => "Failed",
        }
    }
}

/// A latency scatterplot and its drawing surface.
#[derive(Debug, Clone)]
pub struct Chart {
    config: ChartConfig,
    state: ChartState,
    surface: Surface,
    scales: Option<Scales>,
    points: Vec<Point>,
    error: Option<String>,
    svg: String,
}

impl Chart {
    /// Create the surface and show the loading placeholder.
    pub fn initialize(config: ChartConfig) -> Self {
        let surface = Surface::loading(&config);
        let svg = plot::placeholder(&config, &surface).unwrap_or_else(|e| {
            warn!(kind = e.kind(), "{}", e);
            String::new()
        });
        Self {
            config,
            state: ChartState::Loading,
            surface,
            scales: None,
            points: Vec::new(),
            error: None,
            svg,
        }
    }

    /// Resolve `uri`, fetch it, and settle the chart.
    pub async fn load(&mut self, uri: &str) -> ChartState {
        match Resource::parse(uri) {
            Ok(resource) => self.load_resource(&resource).await,
            Err(e) => {
                self.fail(e);
                self.state
            }
        }
    }

    /// Fetch an already resolved resource and settle the chart.
    pub async fn load_resource(&mut self, resource: &Resource) -> ChartState {
        debug!(resource = %resource.description(), "loading chart data");
        let result = resource.load().await;
        self.settle(result)
    }

    /// Settle the chart with the outcome of a fetch.
    pub fn settle(&mut self, result: Result<Vec<Sample>, LoadError>) -> ChartState {
        match result {
            Ok(samples) => self.render(&samples),
            Err(e) => self.fail(e),
        }
        self.state
    }

    /// Draw axes and one marker per sample, replacing the placeholder.
    pub fn render(&mut self, samples: &[Sample]) {
        if self.state != ChartState::Loading {
            debug!(state = self.state.label(), "chart already settled, ignoring render");
            return;
        }

        let points = to_points(samples);
        let scales = Scales::fit(&self.config, &points);
        let (surface, svg) = match plot::scatter(&self.config, &scales, &points) {
            Ok(drawn) => drawn,
            Err(e) => {
                self.fail(e);
                return;
            }
        };

        debug!(
            markers = surface.markers.len(),
            x_min = scales.x.domain().min,
            x_max = scales.x.domain().max,
            y_min = scales.y.domain().min,
            y_max = scales.y.domain().max,
            "rendered chart"
        );

        self.surface = surface;
        self.svg = svg;
        self.scales = Some(scales);
        self.points = points;
        self.state = ChartState::Rendered;
    }

    /// Record a load failure. The surface keeps its placeholder.
    pub fn fail(&mut self, error: LoadError) {
        if self.state != ChartState::Loading {
            debug!(state = self.state.label(), "chart already settled, ignoring failure");
            return;
        }
        warn!(kind = error.kind(), "{}", error);
        self.error = Some(error.to_string());
        self.state = ChartState::Failed;
    }

    pub fn state(&self) -> ChartState {
        self.state
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Scales fitted by the last render, if any.
    pub fn scales(&self) -> Option<&Scales> {
        self.scales.as_ref()
    }

    /// Samples in milliseconds, in input order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The load error message, if the chart failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The drawn chart as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        self.svg.clone()
    }

    /// The drawn chart embedded in an HTML host document.
    pub fn to_html(&self) -> String {
        html::to_html(&self.svg)
    }
}
