use progress_charts::ChartError;
use progress_charts::api::{
    CHART_SET_JSON_SCHEMA_V1, ChartSet, LineChartConfig, LineChartStyle, presets,
};
use progress_charts::render::Color;

#[test]
fn chart_set_contract_v1_carries_schema_version_and_charts() {
    let chart_set = ChartSet::new(LineChartStyle::default(), presets::dashboard_charts());
    let json = chart_set.to_json_contract_v1_pretty().expect("serialize");

    let value: serde_json::Value = serde_json::from_str(&json).expect("json");
    assert_eq!(value["schema_version"], CHART_SET_JSON_SCHEMA_V1);
    assert_eq!(value["charts"][0]["id"], "jump");
    assert_eq!(value["charts"][1]["range_min"], 4.2);
    assert_eq!(value["style"]["line_color"], "#1d1d1f");
    assert_eq!(value["style"]["grid_line_color"], "#f0f0f0");

    let parsed = ChartSet::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, chart_set);
}

#[test]
fn bare_chart_list_uses_default_style() {
    let json = r#"[
        {"id": "sprint", "series": [1.0, 2.0, 3.0], "labels": ["a", "b", "c"],
         "range_min": 0.0, "range_max": 4.0}
    ]"#;
    let parsed = ChartSet::from_json_compat_str(json).expect("parse");
    assert_eq!(parsed.style, LineChartStyle::default());
    assert_eq!(parsed.charts.len(), 1);
    assert_eq!(parsed.charts[0].id, "sprint");
}

#[test]
fn partial_style_override_keeps_other_defaults() {
    let json = r##"{
        "schema_version": 1,
        "style": {"line_color": "#ff0000", "padding_px": 24.0},
        "charts": [
            {"id": "x", "series": [1.0, 2.0], "labels": ["a", "b"],
             "range_min": 0.0, "range_max": 4.0}
        ]
    }"##;
    let parsed = ChartSet::from_json_compat_str(json).expect("parse");
    assert_eq!(parsed.style.line_color, Color::rgb(1.0, 0.0, 0.0));
    assert_eq!(parsed.style.padding_px, 24.0);
    assert_eq!(parsed.style.marker_radius_px, 4.0);
    assert_eq!(parsed.style.grid_divisions, 5);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let json = r#"{"schema_version": 7, "charts": []}"#;
    let err = ChartSet::from_json_compat_str(json).expect_err("version");
    assert!(matches!(err, ChartError::InvalidData(message) if message.contains("7")));
}

#[test]
fn malformed_colors_and_invalid_charts_are_rejected() {
    let bad_color = r#"{"schema_version": 1, "style": {"line_color": "red"}, "charts": []}"#;
    assert!(matches!(
        ChartSet::from_json_compat_str(bad_color),
        Err(ChartError::InvalidData(_))
    ));

    let inverted_range = r#"[
        {"id": "x", "series": [1.0, 2.0], "labels": ["a", "b"],
         "range_min": 5.0, "range_max": 1.0}
    ]"#;
    assert!(matches!(
        ChartSet::from_json_compat_str(inverted_range),
        Err(ChartError::InvalidChartInput(_))
    ));
}

#[test]
fn bare_chart_list_reports_the_broken_element() {
    let missing_labels = r#"[
        {"id": "x", "series": [1.0, 2.0], "range_min": 0.0, "range_max": 4.0}
    ]"#;
    let err = ChartSet::from_json_compat_str(missing_labels).expect_err("missing labels");
    match err {
        ChartError::InvalidData(message) => {
            assert!(message.contains("chart list"), "{message}");
            assert!(message.contains("labels"), "{message}");
            assert!(!message.contains("sequence"), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn duplicate_chart_ids_are_rejected() {
    let chart = LineChartConfig::new(
        "same",
        vec![1.0, 2.0],
        vec!["a".into(), "b".into()],
        0.0,
        3.0,
    );
    let chart_set = ChartSet::new(LineChartStyle::default(), vec![chart.clone(), chart]);
    let err = chart_set.validate().expect_err("duplicate");
    assert!(matches!(err, ChartError::DuplicateChart(id) if id == "same"));
}
