use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer, Surface};

/// Headless surface used by tests and by hosts that only need geometry.
///
/// It still validates every frame and keeps the last one it was handed, so
/// callers can inspect exactly what a pixel backend would have painted.
#[derive(Debug, Clone)]
pub struct NullRenderer {
    viewport: Viewport,
    pub render_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_circle_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl NullRenderer {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            render_count: 0,
            last_line_count: 0,
            last_text_count: 0,
            last_circle_count: 0,
            last_frame: None,
        }
    }
}

impl Default for NullRenderer {
    fn default() -> Self {
        Self::new(Viewport::new(300, 150))
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_line_count = frame.lines.len();
        self.last_text_count = frame.texts.len();
        self.last_circle_count = frame.circles.len();
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}

impl Surface for NullRenderer {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.viewport = viewport;
        Ok(())
    }
}
