use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Visual constants of a line chart.
///
/// Defaults reproduce the progress dashboard look: 40px padding, five grid
/// divisions, grey 11px axis text and a near-black 2px line with 4px markers.
/// The struct is serializable so chart sets can carry a style override.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineChartStyle {
    pub padding_px: f64,
    /// Number of bands between horizontal grid lines; one more line than this
    /// is drawn.
    pub grid_divisions: u32,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub axis_label_color: Color,
    pub axis_label_font_size_px: f64,
    /// Gap between the right edge of value labels and the plot's left edge.
    pub value_label_gap_px: f64,
    /// Baseline shift applied to value labels so they sit centered on their row.
    pub value_label_baseline_offset_px: f64,
    pub value_label_precision: u8,
    /// Distance from the surface bottom to the baseline of x-axis labels.
    pub category_label_bottom_offset_px: f64,
    /// Draw every n-th x-axis label, starting at index 0.
    pub category_label_stride: usize,
    pub line_color: Color,
    pub line_width: f64,
    pub marker_color: Color,
    pub marker_radius_px: f64,
}

impl Default for LineChartStyle {
    fn default() -> Self {
        let ink = Color::rgb8(0x1d, 0x1d, 0x1f);
        Self {
            padding_px: 40.0,
            grid_divisions: 5,
            grid_line_color: Color::rgb8(0xf0, 0xf0, 0xf0),
            grid_line_width: 1.0,
            axis_label_color: Color::rgb8(0x99, 0x99, 0x99),
            axis_label_font_size_px: 11.0,
            value_label_gap_px: 10.0,
            value_label_baseline_offset_px: 4.0,
            value_label_precision: 1,
            category_label_bottom_offset_px: 15.0,
            category_label_stride: 2,
            line_color: ink,
            line_width: 2.0,
            marker_color: ink,
            marker_radius_px: 4.0,
        }
    }
}

impl LineChartStyle {
    #[must_use]
    pub fn with_padding(mut self, padding_px: f64) -> Self {
        self.padding_px = padding_px;
        self
    }

    #[must_use]
    pub fn with_grid_divisions(mut self, grid_divisions: u32) -> Self {
        self.grid_divisions = grid_divisions;
        self
    }

    #[must_use]
    pub fn with_category_label_stride(mut self, stride: usize) -> Self {
        self.category_label_stride = stride;
        self
    }

    #[must_use]
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self.marker_color = color;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        require_non_negative(self.padding_px, "padding_px")?;
        require_positive(self.grid_line_width, "grid_line_width")?;
        require_positive(self.axis_label_font_size_px, "axis_label_font_size_px")?;
        require_finite(self.value_label_gap_px, "value_label_gap_px")?;
        require_finite(
            self.value_label_baseline_offset_px,
            "value_label_baseline_offset_px",
        )?;
        require_finite(
            self.category_label_bottom_offset_px,
            "category_label_bottom_offset_px",
        )?;
        require_positive(self.line_width, "line_width")?;
        require_positive(self.marker_radius_px, "marker_radius_px")?;

        if self.grid_divisions == 0 {
            return Err(ChartError::InvalidData(
                "grid_divisions must be >= 1".to_owned(),
            ));
        }
        if self.category_label_stride == 0 {
            return Err(ChartError::InvalidData(
                "category_label_stride must be >= 1".to_owned(),
            ));
        }
        if self.value_label_precision > 12 {
            return Err(ChartError::InvalidData(
                "value_label_precision must be <= 12".to_owned(),
            ));
        }

        for color in [
            self.grid_line_color,
            self.axis_label_color,
            self.line_color,
            self.marker_color,
        ] {
            color.validate()?;
        }
        Ok(())
    }
}

fn require_finite(value: f64, field: &str) -> ChartResult<()> {
    if !value.is_finite() {
        return Err(ChartError::InvalidData(format!("{field} must be finite")));
    }
    Ok(())
}

fn require_non_negative(value: f64, field: &str) -> ChartResult<()> {
    require_finite(value, field)?;
    if value < 0.0 {
        return Err(ChartError::InvalidData(format!("{field} must be >= 0")));
    }
    Ok(())
}

fn require_positive(value: f64, field: &str) -> ChartResult<()> {
    require_finite(value, field)?;
    if value <= 0.0 {
        return Err(ChartError::InvalidData(format!("{field} must be > 0")));
    }
    Ok(())
}
