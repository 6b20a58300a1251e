use tracing::{debug, trace};

use crate::core::{ChartInput, PlotArea, Viewport, project_points, sampled_label_indices};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, LinePrimitive, PolylinePrimitive, RenderFrame, Surface, TextHAlign,
    TextPrimitive,
};

use super::{LineChartStyle, format_value_label};

/// Stateless line+points chart painter.
///
/// The renderer owns only its style; every call builds a complete frame from
/// its arguments, so it can be shared between charts and called repeatedly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineChartRenderer {
    style: LineChartStyle,
}

impl LineChartRenderer {
    pub fn new(style: LineChartStyle) -> ChartResult<Self> {
        style.validate()?;
        Ok(Self { style })
    }

    #[must_use]
    pub fn style(&self) -> &LineChartStyle {
        &self.style
    }

    /// Lays out the full chart for a surface of size `viewport`.
    pub fn build_frame(&self, viewport: Viewport, input: &ChartInput) -> ChartResult<RenderFrame> {
        let style = &self.style;
        let area = PlotArea::inset(viewport, style.padding_px)?;
        let mut frame = RenderFrame::new(viewport);

        self.append_grid(&mut frame, area);
        self.append_value_labels(&mut frame, area, input);
        self.append_category_labels(&mut frame, viewport, area, input);

        let points = project_points(input, area)?;
        frame.circles.extend(points.iter().map(|point| {
            CirclePrimitive::new(point.x, point.y, style.marker_radius_px, style.marker_color)
        }));
        frame.polylines.push(PolylinePrimitive::new(
            points,
            style.line_width,
            style.line_color,
        ));

        trace!(
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            circles = frame.circles.len(),
            "built line chart frame"
        );
        Ok(frame)
    }

    /// Repaints `surface` with `input` at the surface's current size.
    ///
    /// Nothing is drawn when the layout fails; the surface keeps its previous
    /// contents in that case.
    pub fn render<S>(&self, surface: &mut S, input: &ChartInput) -> ChartResult<()>
    where
        S: Surface + ?Sized,
    {
        let viewport = surface.viewport();
        debug!(
            width = viewport.width,
            height = viewport.height,
            samples = input.len(),
            range_min = input.range().min(),
            range_max = input.range().max(),
            "render line chart"
        );
        let frame = self.build_frame(viewport, input)?;
        surface.render(&frame)
    }

    fn append_grid(&self, frame: &mut RenderFrame, area: PlotArea) {
        let style = &self.style;
        for row in 0..=style.grid_divisions {
            let y = area.grid_row_y(row, style.grid_divisions);
            frame.lines.push(LinePrimitive::new(
                area.left,
                y,
                area.right(),
                y,
                style.grid_line_width,
                style.grid_line_color,
            ));
        }
    }

    fn append_value_labels(&self, frame: &mut RenderFrame, area: PlotArea, input: &ChartInput) {
        let style = &self.style;
        let range = input.range();
        let x = area.left - style.value_label_gap_px;
        for row in 0..=style.grid_divisions {
            let value = range.value_at_division(row, style.grid_divisions);
            let y = area.grid_row_y(row, style.grid_divisions) + style.value_label_baseline_offset_px;
            frame.texts.push(TextPrimitive::new(
                format_value_label(value, style.value_label_precision),
                x,
                y,
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Right,
            ));
        }
    }

    fn append_category_labels(
        &self,
        frame: &mut RenderFrame,
        viewport: Viewport,
        area: PlotArea,
        input: &ChartInput,
    ) {
        let style = &self.style;
        let step = area.x_step(input.len());
        let y = f64::from(viewport.height) - style.category_label_bottom_offset_px;
        for index in sampled_label_indices(input.len(), style.category_label_stride) {
            frame.texts.push(TextPrimitive::new(
                input.labels()[index].as_str(),
                area.x_at(index, step),
                y,
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Center,
            ));
        }
    }
}

/// Validates the inputs and repaints `surface` using the default style.
///
/// This is the one-call entry point for hosts that do not keep a configured
/// `LineChartRenderer` around.
pub fn render_line_chart<S, L>(
    surface: &mut S,
    series: &[f64],
    labels: &[L],
    range_min: f64,
    range_max: f64,
) -> ChartResult<()>
where
    S: Surface + ?Sized,
    L: AsRef<str>,
{
    let input = ChartInput::from_slices(series, labels, range_min, range_max)?;
    LineChartRenderer::default().render(surface, &input)
}
