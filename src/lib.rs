// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # latency-scatter
//!
//! Scatterplots of latency measurements over time.
//!
//! The input is a JSON array of `[timestamp, latency]` pairs, both in
//! nanoseconds. Each pair becomes one marker on a chart whose x-axis is time
//! (`HH:MM:SS`) and whose y-axis is latency in milliseconds on a logarithmic
//! scale. Charts are written as SVG, wrapped in an HTML page, or shown in an
//! interactive terminal viewer.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │ source  │───▶│   data   │───▶│  scale  │───▶│  chart  │ │
//! │  │ (fetch) │    │ (samples)│    │ (x, y)  │    │(surface)│ │
//! │  └─────────┘    └──────────┘    └─────────┘    └────┬────┘ │
//! │                                                     │      │
//! │                                     SVG / HTML ◀────┤      │
//! │                                                     ▼      │
//! │                                              ┌──────────┐  │
//! │                                              │ app + ui │  │
//! │                                              │  (TUI)   │  │
//! │                                              └──────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`source`]**: Resolves a resource URI (path, `file://`, `http(s)://`, `-`)
//!   and loads it with a single awaited call
//! - **[`data`]**: The [`Sample`] type, millisecond conversion, and axis domains
//! - **[`scale`]**: Time and logarithmic axis domains, ticks placed by plotters
//! - **[`chart`]**: The one-shot [`Chart`] state machine, drawn with plotters' SVG
//!   backend and described by its [`Surface`]
//! - **[`app`]** / **[`ui`]**: Terminal viewer built on ratatui
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Render latencies.json to scatterplot.svg
//! latency-scatter latencies.json
//!
//! # Fetch over HTTP and write an HTML page
//! latency-scatter http://localhost:8000/latencies.json --html -o chart.html
//!
//! # Interactive terminal viewer
//! latency-scatter latencies.json --view
//! ```
//!
//! ### As a library
//!
//! ```no_run
//! use latency_scatter::{Chart, ChartConfig, ChartState};
//!
//! # tokio_test::block_on(async {
//! let mut chart = Chart::initialize(ChartConfig::default());
//! if chart.load("latencies.json").await == ChartState::Rendered {
//!     std::fs::write("scatterplot.svg", chart.to_svg()).unwrap();
//! }
//! # });
//! ```

pub mod app;
pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod scale;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use chart::{Chart, ChartState, Marker, Surface};
pub use config::{ChartConfig, Margin};
pub use data::{Domain, Point, Sample};
pub use error::LoadError;
pub use scale::{LogScale, Scales, TimeScale, Zone};
pub use source::{load, Resource};
