//! Terminal viewer state.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::info;

use crate::chart::{Chart, ChartState};
use crate::config::ChartConfig;
use crate::source::{PendingLoad, Resource};
use crate::ui::Theme;

/// How long a status message stays visible.
const STATUS_TTL: Duration = Duration::from_secs(3);

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    // Data source
    resource: Resource,
    runtime: tokio::runtime::Handle,
    pending: Option<PendingLoad>,

    pub chart: Chart,
    pub loaded_at: Option<Instant>,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create the viewer and start fetching `resource` on `runtime`.
    pub fn new(resource: Resource, config: ChartConfig, runtime: tokio::runtime::Handle) -> Self {
        Self::with_theme(resource, config, runtime, Theme::auto_detect())
    }

    /// Like [`App::new`] with an explicit theme.
    pub fn with_theme(
        resource: Resource,
        config: ChartConfig,
        runtime: tokio::runtime::Handle,
        theme: Theme,
    ) -> Self {
        let pending = PendingLoad::spawn(&runtime, resource.clone());
        Self {
            running: true,
            show_help: false,
            resource,
            runtime,
            pending: Some(pending),
            chart: Chart::initialize(config),
            loaded_at: None,
            theme,
            status_message: None,
        }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> String {
        self.resource.description()
    }

    /// True while the fetch is still in flight.
    pub fn is_loading(&self) -> bool {
        self.chart.state() == ChartState::Loading
    }

    /// Check whether the fetch finished and settle the chart if so.
    ///
    /// Returns true on the call that settled the chart.
    pub fn poll_load(&mut self) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };
        let Some(result) = pending.poll() else {
            return false;
        };
        self.pending = None;
        self.chart.settle(result);
        self.loaded_at = Some(Instant::now());
        true
    }

    /// Drop the current chart and fetch the resource again.
    pub fn reload(&mut self) {
        info!(resource = %self.resource.description(), "reloading");
        let config = self.chart.config().clone();
        self.chart = Chart::initialize(config);
        self.loaded_at = None;
        self.pending = Some(PendingLoad::spawn(&self.runtime, self.resource.clone()));
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < STATUS_TTL {
                return Some(msg);
            }
        }
        None
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Write the current surface to an SVG file.
    pub fn export_svg(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.chart.to_svg())?;
        Ok(())
    }
}
