//! Reference charts of the athlete progress dashboard.
//!
//! Both charts cover the eleven months from July to May. Their value ranges
//! are declared, not derived from the samples.

use chrono::Month;

use super::LineChartConfig;

pub const JUMP_CHART_ID: &str = "jump";
pub const DASH_CHART_ID: &str = "dash";

const JUMP_SERIES: [f64; 11] = [
    14.5, 14.8, 15.2, 15.1, 15.6, 15.9, 16.3, 16.8, 17.1, 17.5, 18.2,
];
const DASH_SERIES: [f64; 11] = [
    4.45, 4.42, 4.38, 4.40, 4.35, 4.37, 4.42, 4.38, 4.35, 4.30, 4.33,
];

/// Three-letter English month abbreviations, `count` of them, starting at
/// `first` and wrapping past December.
#[must_use]
pub fn month_labels(first: Month, count: usize) -> Vec<String> {
    std::iter::successors(Some(first), |month| Some(month.succ()))
        .take(count)
        .map(|month| month.name()[..3].to_owned())
        .collect()
}

/// Jump performance, plotted on a 13..19 scale.
#[must_use]
pub fn jump_chart() -> LineChartConfig {
    LineChartConfig::new(
        JUMP_CHART_ID,
        JUMP_SERIES.to_vec(),
        month_labels(Month::July, JUMP_SERIES.len()),
        13.0,
        19.0,
    )
}

/// Dash time, plotted on a 4.2..4.5 scale.
#[must_use]
pub fn dash_chart() -> LineChartConfig {
    LineChartConfig::new(
        DASH_CHART_ID,
        DASH_SERIES.to_vec(),
        month_labels(Month::July, DASH_SERIES.len()),
        4.2,
        4.5,
    )
}

#[must_use]
pub fn dashboard_charts() -> Vec<LineChartConfig> {
    vec![jump_chart(), dash_chart()]
}
