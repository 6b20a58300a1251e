use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::{ChartInput, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Surface;

use super::{LineChartConfig, LineChartRenderer};

/// Something whose current on-screen size can be measured, typically the
/// container a chart surface is laid out in.
pub trait ContainerSize {
    fn measure(&self) -> Viewport;
}

impl<F> ContainerSize for F
where
    F: Fn() -> Viewport,
{
    fn measure(&self) -> Viewport {
        self()
    }
}

impl ContainerSize for Viewport {
    fn measure(&self) -> Viewport {
        *self
    }
}

struct ChartSlot<S> {
    input: ChartInput,
    container: Box<dyn ContainerSize>,
    surface: S,
}

/// Outcome of one resize pass.
#[derive(Debug, Default)]
pub struct ResizeReport {
    pub rendered: Vec<String>,
    pub failed: Vec<(String, ChartError)>,
}

impl ResizeReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Keeps chart surfaces sized to their containers and redrawn.
///
/// The host forwards its resize notifications to `handle_resize`; the
/// coordinator decides whether they are acted on (`attach`/`detach`).
/// Charts are processed in registration order.
pub struct ResizeCoordinator<S> {
    renderer: LineChartRenderer,
    slots: IndexMap<String, ChartSlot<S>>,
    attached: bool,
}

impl<S: Surface> ResizeCoordinator<S> {
    #[must_use]
    pub fn new(renderer: LineChartRenderer) -> Self {
        Self {
            renderer,
            slots: IndexMap::new(),
            attached: false,
        }
    }

    /// Adds a chart. Its inputs are validated now so a bad config is reported
    /// to the caller instead of on every resize.
    pub fn register(
        &mut self,
        config: &LineChartConfig,
        container: impl ContainerSize + 'static,
        surface: S,
    ) -> ChartResult<()> {
        if self.slots.contains_key(&config.id) {
            return Err(ChartError::DuplicateChart(config.id.clone()));
        }
        let input = config.to_input()?;
        debug!(chart = %config.id, samples = input.len(), "register chart");
        self.slots.insert(
            config.id.clone(),
            ChartSlot {
                input,
                container: Box::new(container),
                surface,
            },
        );
        Ok(())
    }

    /// Removes a chart and hands its surface back.
    pub fn unregister(&mut self, id: &str) -> ChartResult<S> {
        self.slots
            .shift_remove(id)
            .map(|slot| slot.surface)
            .ok_or_else(|| ChartError::UnknownChart(id.to_owned()))
    }

    /// Starts acting on resize notifications and performs the initial draw.
    pub fn attach(&mut self) -> ResizeReport {
        self.attached = true;
        debug!(charts = self.slots.len(), "resize coordinator attached");
        self.redraw_all()
    }

    /// Stops acting on resize notifications. Surfaces keep their last frame.
    pub fn detach(&mut self) {
        self.attached = false;
        debug!("resize coordinator detached");
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Measures every container, resizes its surface and redraws the chart.
    ///
    /// A failing chart is reported and logged; the remaining charts are still
    /// drawn. Does nothing while detached.
    pub fn handle_resize(&mut self) -> ResizeReport {
        if !self.attached {
            return ResizeReport::default();
        }
        self.redraw_all()
    }

    #[must_use]
    pub fn surface(&self, id: &str) -> Option<&S> {
        self.slots.get(id).map(|slot| &slot.surface)
    }

    pub fn chart_ids(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn redraw_all(&mut self) -> ResizeReport {
        let mut report = ResizeReport::default();
        for (id, slot) in &mut self.slots {
            let viewport = slot.container.measure();
            let outcome = slot
                .surface
                .resize(viewport)
                .and_then(|()| self.renderer.render(&mut slot.surface, &slot.input));
            match outcome {
                Ok(()) => report.rendered.push(id.clone()),
                Err(err) => {
                    warn!(
                        chart = %id,
                        width = viewport.width,
                        height = viewport.height,
                        error = %err,
                        "skipping chart redraw"
                    );
                    report.failed.push((id.clone(), err));
                }
            }
        }
        report
    }
}
