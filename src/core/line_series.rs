use crate::core::{PlotArea, PlotPoint, ValueRange};
use crate::error::InvalidChartInput;

/// Series, labels and value range for one chart, checked together.
///
/// Construction is the only place the render preconditions are enforced;
/// everything downstream can divide by `len - 1` and by the range span.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInput {
    values: Vec<f64>,
    labels: Vec<String>,
    range: ValueRange,
}

impl ChartInput {
    pub fn new<L>(
        values: Vec<f64>,
        labels: Vec<L>,
        range_min: f64,
        range_max: f64,
    ) -> Result<Self, InvalidChartInput>
    where
        L: Into<String>,
    {
        if values.len() != labels.len() {
            return Err(InvalidChartInput::LengthMismatch {
                series: values.len(),
                labels: labels.len(),
            });
        }
        if values.len() < 2 {
            return Err(InvalidChartInput::SeriesTooShort { len: values.len() });
        }
        if let Some(index) = values.iter().position(|value| !value.is_finite()) {
            return Err(InvalidChartInput::NonFiniteSample { index });
        }
        let range = ValueRange::new(range_min, range_max)?;

        Ok(Self {
            values,
            labels: labels.into_iter().map(Into::into).collect(),
            range,
        })
    }

    /// Borrowing variant used by the slice-based render entry point.
    pub fn from_slices<S>(
        values: &[f64],
        labels: &[S],
        range_min: f64,
        range_max: f64,
    ) -> Result<Self, InvalidChartInput>
    where
        S: AsRef<str>,
    {
        Self::new(
            values.to_vec(),
            labels
                .iter()
                .map(|label| label.as_ref().to_owned())
                .collect::<Vec<String>>(),
            range_min,
            range_max,
        )
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn range(&self) -> ValueRange {
        self.range
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Never true for a constructed input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Projects every sample of `input` into pixel space inside `area`.
///
/// Out-of-range samples are projected past the plot edges, not clamped.
/// A sample so far outside a narrow range that its pixel position overflows
/// is rejected.
pub fn project_points(
    input: &ChartInput,
    area: PlotArea,
) -> Result<Vec<PlotPoint>, InvalidChartInput> {
    let step = area.x_step(input.len());
    input
        .values()
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let point = area.point(index, step, *value, input.range());
            if point.x.is_finite() && point.y.is_finite() {
                Ok(point)
            } else {
                Err(InvalidChartInput::SampleOutOfScale { index })
            }
        })
        .collect()
}

/// Indices whose labels are drawn on the x axis: every `stride`-th one,
/// starting at 0. The trailing label is not forced in.
pub fn sampled_label_indices(len: usize, stride: usize) -> impl Iterator<Item = usize> {
    (0..len).step_by(stride.max(1))
}
