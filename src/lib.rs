//! progress-charts: static line+points charts on resizable surfaces.
//!
//! Layout is computed into a backend-agnostic `RenderFrame`; backends (a
//! headless validator, Cairo, GTK) only paint what they are given. Charts are
//! redrawn in full on every call, so the same inputs always give the same
//! picture.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{LineChartConfig, LineChartRenderer, LineChartStyle, render_line_chart};
pub use error::{ChartError, ChartResult, InvalidChartInput};
