//! Latency samples and their millisecond projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Nanoseconds per millisecond.
pub const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// One `(timestamp, latency)` measurement, both in nanoseconds.
///
/// On the wire a sample is a two-element JSON array. Any JSON number is
/// accepted and kept as-is, fractions included:
///
/// ```
/// use latency_scatter::Sample;
///
/// let samples: Vec<Sample> = serde_json::from_str("[[0, 1000000], [1000000000, 0.5]]").unwrap();
/// assert_eq!(samples[1].timestamp, 1e9);
/// assert_eq!(samples[1].latency, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Sample {
    /// Nanoseconds since the Unix epoch.
    pub timestamp: f64,
    /// Latency in nanoseconds.
    pub latency: f64,
}

impl From<(f64, f64)> for Sample {
    fn from((timestamp, latency): (f64, f64)) -> Self {
        Self { timestamp, latency }
    }
}

impl From<Sample> for (f64, f64) {
    fn from(s: Sample) -> Self {
        (s.timestamp, s.latency)
    }
}

impl Sample {
    /// A sample from whole nanoseconds.
    pub fn new(timestamp: i64, latency: i64) -> Self {
        Self {
            timestamp: timestamp as f64,
            latency: latency as f64,
        }
    }

    /// Convert both fields to milliseconds.
    pub fn to_point(&self) -> Point {
        Point {
            time_ms: self.timestamp / NANOS_PER_MILLI,
            latency_ms: self.latency / NANOS_PER_MILLI,
        }
    }
}

/// A sample projected into milliseconds, ready for scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Milliseconds since the Unix epoch.
    pub time_ms: f64,
    /// Latency in milliseconds.
    pub latency_ms: f64,
}

impl Point {
    /// The timestamp as a UTC date-time, if it is representable.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.time_ms.floor() as i64)
    }
}

/// Project a slice of samples into milliseconds, preserving order.
pub fn to_points(samples: &[Sample]) -> Vec<Point> {
    samples.iter().map(Sample::to_point).collect()
}
