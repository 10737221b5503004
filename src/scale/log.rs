//! Base-10 logarithmic latency axis.

use crate::data::Domain;

/// Domain used when no sample has a usable latency.
pub const DEFAULT_LATENCY_DOMAIN: Domain = Domain { min: 1.0, max: 10.0 };

/// Significant digits kept in tick labels.
const LABEL_DIGITS: i32 = 6;

/// The y-axis of a chart: a latency domain in milliseconds, drawn on a
/// logarithmic scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale {
    domain: Domain,
}

impl LogScale {
    pub fn new(domain: Domain) -> Self {
        Self { domain }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Span drawn on the axis.
    ///
    /// A logarithm needs positive bounds: a non-positive minimum is replaced
    /// by a decade below the maximum, and a domain without a positive maximum
    /// falls back to the default. A degenerate domain is widened one decade
    /// up, so its single value lands on the bottom edge.
    pub fn extent(&self) -> (f64, f64) {
        let Domain { min, max } = self.domain;
        if !(max > 0.0) || !max.is_finite() {
            return (DEFAULT_LATENCY_DOMAIN.min, DEFAULT_LATENCY_DOMAIN.max);
        }
        let min = if min > 0.0 { min } else { max / 10.0 };
        if min >= max {
            (min, min * 10.0)
        } else {
            (min, max)
        }
    }

    /// The value a latency is drawn at. Values without a logarithm sit on
    /// the bottom edge.
    pub fn position(&self, latency: f64) -> f64 {
        let (lo, _) = self.extent();
        if latency > lo {
            latency
        } else {
            lo
        }
    }
}

/// Decimal rendering of a tick value, rounded to a few significant digits.
pub fn format_tick(v: f64) -> String {
    if v == 0.0 || !v.is_finite() {
        return format!("{}", v);
    }
    let decimals = (LABEL_DIGITS - 1 - v.abs().log10().floor() as i32).max(0) as usize;
    let s = format!("{:.*}", decimals, v);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
