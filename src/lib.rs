//! morris-chart: typed tables to Morris.js chart configuration.
//!
//! A [`Chart`] wraps a table, picks an axis column and emits the object passed
//! to `Morris.Area`, `Morris.Bar`, `Morris.Line` or `Morris.Donut`.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{Chart, ChartConfig, ChartKind, ChartOptions, ChartSettings};
pub use error::{ChartError, ChartResult};
