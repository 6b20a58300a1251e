use progress_charts::api::LineChartRenderer;
use progress_charts::core::{ChartInput, Viewport};
use progress_charts::render::{NullRenderer, TextHAlign};
use proptest::prelude::*;

proptest! {
    #[test]
    fn valid_inputs_always_produce_a_valid_frame(
        values in proptest::collection::vec(-1_000.0f64..1_000.0, 2..64),
        range_min in -500.0f64..500.0,
        range_span in 0.001f64..1_000.0,
        width in 81u32..2_000,
        height in 81u32..2_000,
    ) {
        let labels: Vec<String> = (0..values.len()).map(|i| format!("L{i}")).collect();
        let input = ChartInput::new(values.clone(), labels, range_min, range_min + range_span)
            .expect("valid input");

        let chart = LineChartRenderer::default();
        let mut surface = NullRenderer::new(Viewport::new(width, height));
        chart.render(&mut surface, &input).expect("render");

        let frame = surface.last_frame.clone().expect("frame");
        prop_assert_eq!(frame.lines.len(), 6);
        prop_assert_eq!(frame.circles.len(), values.len());
        prop_assert_eq!(frame.polylines.len(), 1);
        prop_assert_eq!(frame.polylines[0].segment_count(), values.len() - 1);

        let category_count = frame
            .texts
            .iter()
            .filter(|text| text.h_align == TextHAlign::Center)
            .count();
        prop_assert_eq!(category_count, values.len().div_ceil(2));

        let step = (f64::from(width) - 80.0) / (values.len() - 1) as f64;
        for (index, circle) in frame.circles.iter().enumerate() {
            prop_assert!((circle.center_x - (40.0 + step * index as f64)).abs() <= 1e-9);
        }
        let last = frame.circles.last().expect("last marker");
        prop_assert!((last.center_x - (f64::from(width) - 40.0)).abs() <= 1e-6);

        chart.render(&mut surface, &input).expect("second render");
        prop_assert_eq!(surface.last_frame.as_ref(), Some(&frame));
    }

    #[test]
    fn markers_keep_value_order_vertically(
        low in -100.0f64..100.0,
        delta in 0.001f64..100.0,
    ) {
        let input = ChartInput::new(
            vec![low, low + delta],
            vec!["a", "b"],
            -200.0,
            200.0,
        )
        .expect("valid input");
        let frame = LineChartRenderer::default()
            .build_frame(Viewport::new(400, 300), &input)
            .expect("frame");

        // Larger values sit higher on the surface, i.e. at smaller y.
        prop_assert!(frame.circles[1].center_y < frame.circles[0].center_y);
    }

    #[test]
    fn short_or_mismatched_series_are_always_rejected(
        values in proptest::collection::vec(-10.0f64..10.0, 0..8),
        label_count in 0usize..8,
    ) {
        prop_assume!(values.len() < 2 || values.len() != label_count);
        let labels: Vec<String> = (0..label_count).map(|i| i.to_string()).collect();
        prop_assert!(ChartInput::new(values, labels, 0.0, 1.0).is_err());
    }
}
