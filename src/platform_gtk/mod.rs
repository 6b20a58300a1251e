use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk::glib::SignalHandlerId;
use gtk::prelude::*;
use tracing::{debug, warn};

use crate::api::{LineChartConfig, LineChartRenderer};
use crate::core::{ChartInput, Viewport};
use crate::error::ChartResult;
use crate::render::{CairoContextRenderer, CairoRenderer};

struct GtkChartState {
    chart_renderer: LineChartRenderer,
    backend: CairoRenderer,
    input: ChartInput,
}

impl GtkChartState {
    fn draw(&mut self, context: &gtk::cairo::Context, width: i32, height: i32) -> ChartResult<()> {
        let viewport = Viewport::new(width.max(0).unsigned_abs(), height.max(0).unsigned_abs());
        let frame = self.chart_renderer.build_frame(viewport, &self.input)?;
        self.backend.render_on_cairo_context(context, &frame)
    }
}

/// Hosts one line chart inside a `gtk4::DrawingArea`.
///
/// The widget allocation plays the role of the chart container: every draw
/// lays the chart out at the current allocation. While resize tracking is
/// attached, size changes queue a redraw.
pub struct GtkLineChart {
    area: gtk::DrawingArea,
    state: Rc<RefCell<GtkChartState>>,
    resize_handler: Option<SignalHandlerId>,
}

impl GtkLineChart {
    pub fn new(chart_renderer: LineChartRenderer, config: &LineChartConfig) -> ChartResult<Self> {
        let state = Rc::new(RefCell::new(GtkChartState {
            chart_renderer,
            backend: CairoRenderer::new(1, 1)?,
            input: config.to_input()?,
        }));

        let area = gtk::DrawingArea::new();
        area.set_hexpand(true);
        area.set_vexpand(true);

        let draw_state = Rc::clone(&state);
        let chart_id = config.id.clone();
        area.set_draw_func(move |_area, context, width, height| {
            if let Err(err) = draw_state.borrow_mut().draw(context, width, height) {
                warn!(chart = %chart_id, width, height, error = %err, "gtk chart draw failed");
            }
        });

        let mut chart = Self {
            area,
            state,
            resize_handler: None,
        };
        chart.attach_resize();
        Ok(chart)
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Swaps the plotted data and schedules a redraw.
    pub fn set_config(&mut self, config: &LineChartConfig) -> ChartResult<()> {
        let input = config.to_input()?;
        self.state.borrow_mut().input = input;
        self.area.queue_draw();
        Ok(())
    }

    pub fn attach_resize(&mut self) {
        if self.resize_handler.is_some() {
            return;
        }
        let handler = self.area.connect_resize(|area, width, height| {
            debug!(width, height, "gtk chart resized");
            area.queue_draw();
        });
        self.resize_handler = Some(handler);
    }

    pub fn detach_resize(&mut self) {
        if let Some(handler) = self.resize_handler.take() {
            self.area.disconnect(handler);
        }
    }

    #[must_use]
    pub fn is_resize_attached(&self) -> bool {
        self.resize_handler.is_some()
    }
}

impl Drop for GtkLineChart {
    fn drop(&mut self) {
        self.detach_resize();
    }
}
