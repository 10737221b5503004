//! Time axis: domain, zone and tick placement.

use std::fmt::{Display, Write};
use std::ops::Range;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Duration, Local, Offset, TimeZone, Utc};
use plotters::coord::ranged1d::Ranged;
use plotters::coord::types::RangedDateTime;
use serde::{Deserialize, Serialize};

use crate::data::{Domain, NANOS_PER_MILLI};

/// Shortest span drawn on the time axis, in milliseconds.
const MIN_SPAN_MS: f64 = 1_000.0;

/// Tick steps from here up are aligned on calendar dates rather than on
/// wall-clock time.
const DATE_STEP_SECS: i64 = 23 * 3600;

/// Domain used when there is nothing to plot: 2000-01-01 to 2000-01-02 UTC.
pub const DEFAULT_TIME_DOMAIN: Domain = Domain {
    min: 946_684_800_000.0,
    max: 946_771_200_000.0,
};

/// Time zone used for tick alignment and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    #[default]
    Local,
    Utc,
}

impl Zone {
    /// Format an epoch-millisecond instant.
    pub fn format(&self, ms: f64, fmt: &str) -> String {
        match self {
            Zone::Utc => format_instant(&instant(&Utc, ms), fmt),
            Zone::Local => format_instant(&instant(&Local, ms), fmt),
        }
    }
}

/// Check that a strftime-style pattern is well formed.
pub fn is_valid_time_format(fmt: &str) -> bool {
    !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
}

/// The instant `ms` milliseconds after the epoch, in `tz`.
pub fn instant<Tz: TimeZone>(tz: &Tz, ms: f64) -> DateTime<Tz> {
    tz.timestamp_nanos((ms * NANOS_PER_MILLI) as i64)
}

/// Format an instant; a broken format string yields an empty label.
pub fn format_instant<Tz>(t: &DateTime<Tz>, fmt: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    match write!(out, "{}", t.format(fmt)) {
        Ok(()) => out,
        Err(_) => String::new(),
    }
}

/// The x-axis of a chart: a time domain in epoch milliseconds plus the zone
/// ticks are read in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain: Domain,
    zone: Zone,
}

impl TimeScale {
    pub fn new(domain: Domain, zone: Zone) -> Self {
        Self { domain, zone }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Span drawn on the axis. A degenerate domain is widened to the right,
    /// so its single instant lands on the left edge.
    pub fn extent(&self) -> (f64, f64) {
        let Domain { min, max } = self.domain;
        if self.domain.is_degenerate() || !self.domain.span().is_finite() {
            (min, min + MIN_SPAN_MS)
        } else {
            (min, max)
        }
    }

    /// Label for an instant using the scale's time zone.
    pub fn tick_label(&self, ms: f64, fmt: &str) -> String {
        self.zone.format(ms, fmt)
    }
}

/// Roughly `count` tick instants across `range`.
///
/// Sub-day ticks are laid out at a fixed step from the wall-clock time of the
/// range start; they are shifted back onto the wall-clock grid wherever the
/// zone's UTC offset differs from the one at the start.
pub fn key_points<Tz: TimeZone>(range: Range<DateTime<Tz>>, count: usize) -> Vec<DateTime<Tz>> {
    let start_offset = range.start.offset().fix().local_minus_utc();
    let ticks = RangedDateTime::from(range).key_points(count);
    realign(ticks, start_offset)
}

/// Undo the wall-clock drift of evenly spaced ticks whose UTC offset moved
/// away from `start_offset` (seconds east of UTC).
pub fn realign<Tz: TimeZone>(ticks: Vec<DateTime<Tz>>, start_offset: i32) -> Vec<DateTime<Tz>> {
    let step = match ticks.as_slice() {
        [a, b, ..] => (b.clone() - a.clone()).num_seconds(),
        _ => return ticks,
    };
    if step <= 0 || step >= DATE_STEP_SECS {
        return ticks;
    }
    ticks
        .into_iter()
        .map(|t| {
            let drift = i64::from(t.offset().fix().local_minus_utc() - start_offset) % step;
            t - Duration::seconds(drift)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike};

    fn utc_scale(min: f64, max: f64) -> TimeScale {
        TimeScale::new(Domain::new(min, max), Zone::Utc)
    }

    #[test]
    fn test_extent() {
        assert_eq!(utc_scale(0.0, 1000.0).extent(), (0.0, 1000.0));
        assert_eq!(utc_scale(42.0, 42.0).extent(), (42.0, 1042.0));
    }

    #[test]
    fn test_label_format() {
        let s = utc_scale(0.0, 1.0);
        // 2015-07-14 13:45:30 UTC
        assert_eq!(s.tick_label(1_436_881_530_000.0, "%H:%M:%S"), "13:45:30");
        assert_eq!(format_instant(&instant(&Utc, 1500.0), "%S%.3f"), "01.500");
    }

    #[test]
    fn test_time_format_validation() {
        assert!(is_valid_time_format("%H:%M:%S"));
        assert!(!is_valid_time_format("%H %"));
        assert_eq!(Zone::Utc.format(0.0, "%H %"), "");
    }

    #[test]
    fn test_key_points_within_range() {
        let range = instant(&Utc, 0.0)..instant(&Utc, 60_000.0);
        let ticks = key_points(range.clone(), 10);
        assert!(ticks.len() >= 2);
        assert!(ticks.iter().all(|t| range.contains(t)));
        assert_eq!(format_instant(&ticks[0], "%H:%M:%S"), "00:00:00");
    }

    #[test]
    fn test_realign_across_offset_change() {
        let winter = FixedOffset::east_opt(3600).unwrap();
        let summer = FixedOffset::east_opt(7200).unwrap();
        let start = Utc.with_ymd_and_hms(2024, 3, 30, 23, 0, 0).unwrap();
        // Three-hourly ticks; the clocks go forward between the first two.
        let ticks = vec![
            start.with_timezone(&winter),
            (start + Duration::hours(3)).with_timezone(&summer),
            (start + Duration::hours(6)).with_timezone(&summer),
        ];
        assert_eq!(ticks[1].hour(), 4);

        let hours: Vec<u32> = realign(ticks, 3600).iter().map(|t| t.hour()).collect();
        assert_eq!(hours, vec![0, 3, 6]);
    }

    #[test]
    fn test_realign_keeps_steps_dividing_the_shift() {
        let winter = FixedOffset::east_opt(3600).unwrap();
        let summer = FixedOffset::east_opt(7200).unwrap();
        let start = Utc.with_ymd_and_hms(2024, 3, 31, 0, 45, 0).unwrap();
        let ticks = vec![
            start.with_timezone(&winter),
            (start + Duration::minutes(15)).with_timezone(&summer),
        ];
        assert_eq!(realign(ticks.clone(), 3600), ticks);
    }
}
