//! Latency data model.
//!
//! ## Submodules
//!
//! - [`sample`]: The [`Sample`] wire type and its millisecond [`Point`] projection
//! - [`domain`]: Extent computation for both axes, including the falsy-latency rule
//!
//! ## Data Flow
//!
//! ```text
//! [[ts_ns, latency_ns], ...]   (raw JSON)
//!        │
//!        ▼
//! Vec<Sample> ──to_points()──▶ Vec<Point> (milliseconds)
//!                                  │
//!                                  ├──▶ x_domain()
//!                                  └──▶ y_domain() (falsy latencies skipped)
//! ```

pub mod domain;
pub mod sample;

pub use domain::{extent, is_truthy, x_domain, y_domain, Domain};
pub use sample::{to_points, Point, Sample, NANOS_PER_MILLI};
