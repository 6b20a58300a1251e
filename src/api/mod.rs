mod axis_label_format;
mod chart_config;
mod chart_style;
mod line_chart_renderer;
pub mod presets;
mod resize_coordinator;

pub use axis_label_format::format_value_label;
pub use chart_config::{
    CHART_SET_JSON_SCHEMA_V1, ChartSet, ChartSetJsonContractV1, LineChartConfig,
};
pub use chart_style::LineChartStyle;
pub use line_chart_renderer::{LineChartRenderer, render_line_chart};
pub use resize_coordinator::{ContainerSize, ResizeCoordinator, ResizeReport};
