use crate::error::InvalidChartInput;

/// Caller-declared value extent mapped onto the plot's vertical span.
///
/// The range is independent of the data: samples outside it are still
/// projected, they simply land outside the plot rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    min: f64,
    max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Result<Self, InvalidChartInput> {
        if !min.is_finite() || !max.is_finite() {
            return Err(InvalidChartInput::NonFiniteRange);
        }
        if min >= max {
            return Err(InvalidChartInput::DegenerateRange { min, max });
        }
        if !(max - min).is_finite() {
            return Err(InvalidChartInput::NonFiniteRange);
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Value shown on grid row `row` of `divisions`, walking from `max` (row 0)
    /// down to `min` (row `divisions`).
    #[must_use]
    pub fn value_at_division(self, row: u32, divisions: u32) -> f64 {
        self.max - (self.span() / f64::from(divisions)) * f64::from(row)
    }

    /// Maps `value` onto a vertical pixel span of `extent_px`, measured upward
    /// from the bottom edge. Returns the offset from the top edge.
    #[must_use]
    pub fn value_to_offset_from_top(self, value: f64, extent_px: f64) -> f64 {
        let scale = extent_px / self.span();
        extent_px - (value - self.min) * scale
    }
}
