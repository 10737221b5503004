//! Axis scales.
//!
//! - [`TimeScale`]: epoch milliseconds on the x-axis, read in a [`Zone`]
//! - [`LogScale`]: base-10 logarithmic latency on the y-axis
//!
//! A scale owns its domain and knows which span of values the axis covers;
//! mapping onto pixels is left to the plotters coordinate system built from
//! that span. [`Scales::fit`] builds both from a [`ChartConfig`] and a set of
//! points. Nothing here is global: every chart owns its own pair.

pub mod log;
pub mod time;

pub use self::log::{format_tick, LogScale, DEFAULT_LATENCY_DOMAIN};
pub use self::time::{is_valid_time_format, TimeScale, Zone, DEFAULT_TIME_DOMAIN};

use crate::config::ChartConfig;
use crate::data::{x_domain, y_domain, Point};

/// The x and y scales of one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scales {
    pub x: TimeScale,
    pub y: LogScale,
}

impl Scales {
    /// Fit both scales to the points, falling back to the default domains
    /// when an axis has nothing to show.
    pub fn fit(config: &ChartConfig, points: &[Point]) -> Self {
        let x = TimeScale::new(
            x_domain(points).unwrap_or(DEFAULT_TIME_DOMAIN),
            config.timezone,
        );
        let y = LogScale::new(y_domain(points).unwrap_or(DEFAULT_LATENCY_DOMAIN));
        Self { x, y }
    }
}
