pub mod layout;
pub mod line_series;
pub mod scale;
pub mod types;

pub use layout::PlotArea;
pub use line_series::{ChartInput, project_points, sampled_label_indices};
pub use scale::ValueRange;
pub use types::{PlotPoint, Viewport};
