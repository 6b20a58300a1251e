use crate::core::{PlotPoint, ValueRange, Viewport};
use crate::error::{ChartError, ChartResult};

/// Inner plot rectangle left after insetting a viewport by a uniform padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Insets `viewport` by `padding` on every side.
    ///
    /// Fails when the padding leaves no room to plot, which would otherwise
    /// flip the vertical axis and produce mirrored geometry.
    pub fn inset(viewport: Viewport, padding: f64) -> ChartResult<Self> {
        let invalid = ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        };
        if !viewport.is_valid() {
            return Err(invalid);
        }

        let width = f64::from(viewport.width) - padding * 2.0;
        let height = f64::from(viewport.height) - padding * 2.0;
        if width <= 0.0 || height <= 0.0 {
            return Err(invalid);
        }

        Ok(Self {
            left: padding,
            top: padding,
            width,
            height,
        })
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Horizontal distance between neighbouring samples of a series of `len`.
    ///
    /// Callers guarantee `len >= 2`.
    #[must_use]
    pub fn x_step(self, len: usize) -> f64 {
        self.width / (len - 1) as f64
    }

    #[must_use]
    pub fn x_at(self, index: usize, step: f64) -> f64 {
        self.left + step * index as f64
    }

    #[must_use]
    pub fn y_for_value(self, value: f64, range: ValueRange) -> f64 {
        self.top + range.value_to_offset_from_top(value, self.height)
    }

    /// Y of horizontal grid row `row` when the plot is cut into `divisions`.
    #[must_use]
    pub fn grid_row_y(self, row: u32, divisions: u32) -> f64 {
        self.top + (self.height / f64::from(divisions)) * f64::from(row)
    }

    #[must_use]
    pub fn point(self, index: usize, step: f64, value: f64, range: ValueRange) -> PlotPoint {
        PlotPoint::new(self.x_at(index, step), self.y_for_value(value, range))
    }
}
