use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart input: {0}")]
    InvalidChartInput(#[from] InvalidChartInput),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("chart `{0}` is already registered")]
    DuplicateChart(String),

    #[error("chart `{0}` is not registered")]
    UnknownChart(String),
}

/// Caller-side mistakes in the series/labels/range triple handed to a render.
///
/// These are reported before any drawing happens, so a rejected render never
/// leaves a half-painted surface behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidChartInput {
    #[error("series has {series} samples but {labels} labels were given")]
    LengthMismatch { series: usize, labels: usize },

    #[error("series needs at least 2 samples, got {len}")]
    SeriesTooShort { len: usize },

    #[error("value range must satisfy min < max, got min={min}, max={max}")]
    DegenerateRange { min: f64, max: f64 },

    #[error("sample {index} is not finite")]
    NonFiniteSample { index: usize },

    #[error("value range bounds and their span must be finite")]
    NonFiniteRange,

    #[error("sample {index} projects outside the representable pixel space")]
    SampleOutOfScale { index: usize },
}
