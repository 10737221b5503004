//! Axis domain computation.
//!
//! The y-axis deliberately skips falsy latencies (zero and NaN). Whether the
//! exclusion is meant to filter "no latency" sentinels or is an accident of
//! a truthiness check is unresolved, so the behavior is kept as observed and
//! only applies to the y-domain. Those samples are still plotted.

use super::sample::Point;

/// An inclusive `[min, max]` range of input values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the domain.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when every value maps onto the same point.
    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }
}

/// Inclusive extent of the given values, ignoring NaN.
///
/// Returns `None` when no value remains.
pub fn extent<I>(values: I) -> Option<Domain>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some(Domain::new(v, v)),
            Some(d) => Some(Domain::new(d.min.min(v), d.max.max(v))),
        })
}

/// Domain of the time axis, in milliseconds.
pub fn x_domain(points: &[Point]) -> Option<Domain> {
    extent(points.iter().map(|p| p.time_ms))
}

/// Domain of the latency axis, in milliseconds, skipping falsy latencies.
pub fn y_domain(points: &[Point]) -> Option<Domain> {
    extent(
        points
            .iter()
            .map(|p| p.latency_ms)
            .filter(|&v| is_truthy(v)),
    )
}

/// Numeric truthiness: zero and NaN are falsy.
pub fn is_truthy(v: f64) -> bool {
    v != 0.0 && !v.is_nan()
}
