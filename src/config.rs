//! Chart configuration.
//!
//! Settings are layered with the `config` crate: built-in defaults, an
//! optional file, then `LATENCY_SCATTER_*` environment variables. Nested
//! keys use a double underscore, e.g. `LATENCY_SCATTER_MARGIN__LEFT=80`.

use std::path::Path;

use anyhow::{bail, Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::scale::{is_valid_time_format, Zone};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "LATENCY_SCATTER";

/// Space reserved around the plot area for axes, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 30.0,
            left: 60.0,
        }
    }
}

/// Everything the renderer needs to lay out a chart.
///
/// `width` and `height` are the outer size of the surface; the plot area is
/// what remains after the margins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    /// Radius of each sample marker.
    pub marker_radius: f64,
    pub x_label: String,
    pub y_label: String,
    /// strftime pattern for time ticks.
    pub time_format: String,
    pub timezone: Zone,
    /// Placeholder shown until the data arrives.
    pub loading_text: String,
    /// Approximate number of ticks per axis.
    pub ticks: usize,
    /// Default tracing filter for the binary.
    pub log_level: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            margin: Margin::default(),
            marker_radius: 1.5,
            x_label: "Time".to_string(),
            y_label: "Latency (ms)".to_string(),
            time_format: "%H:%M:%S".to_string(),
            timezone: Zone::default(),
            loading_text: "Loading...".to_string(),
            ticks: 10,
            log_level: "info".to_string(),
        }
    }
}

impl ChartConfig {
    /// Load configuration from an optional file plus the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| match path {
                Some(p) => format!("Failed to load config from {}", p.display()),
                None => "Failed to load config from environment".to_string(),
            })?;

        let chart: ChartConfig = config.try_deserialize()?;
        chart.validate()?;
        Ok(chart)
    }

    /// Reject layouts that leave no room to plot.
    pub fn validate(&self) -> Result<()> {
        if self.plot_width() <= 0.0 || self.plot_height() <= 0.0 {
            bail!(
                "Chart {}x{} leaves no plot area inside margins {:?}",
                self.width,
                self.height,
                self.margin
            );
        }
        if self.marker_radius.is_nan() || self.marker_radius <= 0.0 {
            bail!("Marker radius must be positive, got {}", self.marker_radius);
        }
        if !is_valid_time_format(&self.time_format) {
            bail!("Invalid time format: {}", self.time_format);
        }
        Ok(())
    }

    /// Width of the plot area inside the margins.
    pub fn plot_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Height of the plot area inside the margins.
    pub fn plot_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    /// Serializes tests that read or write `LATENCY_SCATTER_*` variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Run `f` with `key=value` set, removing it afterwards.
    fn with_env<T>(key: &str, value: &str, f: impl FnOnce() -> T) -> T {
        std::env::set_var(key, value);
        let result = f();
        std::env::remove_var(key);
        result
    }

    #[test]
    fn test_defaults() {
        let c = ChartConfig::default();
        assert_eq!(c.plot_width(), 1200.0);
        assert_eq!(c.plot_height(), 670.0);
        assert_eq!(c.marker_radius, 1.5);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
width = 800
timezone = "utc"
[margin]
left = 80
"#
        )
        .unwrap();

        let c = ChartConfig::load(Some(file.path())).unwrap();
        assert_eq!(c.width, 800.0);
        assert_eq!(c.height, 720.0);
        assert_eq!(c.margin.left, 80.0);
        assert_eq!(c.margin.top, 20.0);
        assert_eq!(c.timezone, Zone::Utc);
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let c = with_env("LATENCY_SCATTER_MARGIN__LEFT", "80", || {
            with_env("LATENCY_SCATTER_TIMEZONE", "utc", || ChartConfig::load(None))
        })
        .unwrap();

        assert_eq!(c.margin.left, 80.0);
        assert_eq!(c.margin.right, 20.0);
        assert_eq!(c.timezone, Zone::Utc);
        assert_eq!(c.width, 1280.0);
    }

    #[test]
    fn test_environment_overrides_file() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
height = 600
[margin]
left = 40
"#
        )
        .unwrap();

        let c = with_env("LATENCY_SCATTER_MARGIN__LEFT", "80", || {
            ChartConfig::load(Some(file.path()))
        })
        .unwrap();
        assert_eq!(c.margin.left, 80.0);
        assert_eq!(c.height, 600.0);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = ChartConfig::load(Some(Path::new("/nonexistent/chart.toml"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/chart.toml"));
    }

    #[test]
    fn test_validate_rejects_margins_larger_than_chart() {
        let c = ChartConfig {
            width: 50.0,
            ..ChartConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_time_format() {
        let c = ChartConfig {
            time_format: "%H %".to_string(),
            ..ChartConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_unknown_extension_fails() {
        let file = NamedTempFile::new().unwrap();
        assert!(ChartConfig::load(Some(file.path())).is_err());
    }
}
