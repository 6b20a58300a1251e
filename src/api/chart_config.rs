use serde::{Deserialize, Serialize};

use crate::core::ChartInput;
use crate::error::{ChartError, ChartResult};

use super::LineChartStyle;

pub const CHART_SET_JSON_SCHEMA_V1: u32 = 1;

/// Everything needed to draw one chart, passed explicitly into each render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    pub id: String,
    pub series: Vec<f64>,
    pub labels: Vec<String>,
    pub range_min: f64,
    pub range_max: f64,
}

impl LineChartConfig {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        series: Vec<f64>,
        labels: Vec<String>,
        range_min: f64,
        range_max: f64,
    ) -> Self {
        Self {
            id: id.into(),
            series,
            labels,
            range_min,
            range_max,
        }
    }

    /// Checks the render preconditions and produces the validated input.
    pub fn to_input(&self) -> ChartResult<ChartInput> {
        Ok(ChartInput::from_slices(
            &self.series,
            &self.labels,
            self.range_min,
            self.range_max,
        )?)
    }
}

/// A group of charts sharing one style, as loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSet {
    #[serde(default)]
    pub style: LineChartStyle,
    pub charts: Vec<LineChartConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSetJsonContractV1 {
    pub schema_version: u32,
    #[serde(flatten)]
    pub chart_set: ChartSet,
}

impl ChartSet {
    #[must_use]
    pub fn new(style: LineChartStyle, charts: Vec<LineChartConfig>) -> Self {
        Self { style, charts }
    }

    /// Validates the style, every chart's inputs and id uniqueness.
    pub fn validate(&self) -> ChartResult<()> {
        self.style.validate()?;
        for (index, chart) in self.charts.iter().enumerate() {
            chart.to_input()?;
            if self.charts[..index].iter().any(|other| other.id == chart.id) {
                return Err(ChartError::DuplicateChart(chart.id.clone()));
            }
        }
        Ok(())
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSetJsonContractV1 {
            schema_version: CHART_SET_JSON_SCHEMA_V1,
            chart_set: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart set contract v1: {e}"))
        })
    }

    /// Parses either a versioned contract or a bare JSON array of charts.
    ///
    /// The result is validated before it is returned.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart set json payload: {e}"))
        })?;
        let chart_set = if value.is_array() {
            let charts: Vec<LineChartConfig> = serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse chart list json payload: {e}"))
            })?;
            Self::new(LineChartStyle::default(), charts)
        } else {
            let payload: ChartSetJsonContractV1 = serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse chart set json payload: {e}"))
            })?;
            if payload.schema_version != CHART_SET_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidData(format!(
                    "unsupported chart set schema version: {}",
                    payload.schema_version
                )));
            }
            payload.chart_set
        };

        chart_set.validate()?;
        Ok(chart_set)
    }
}
