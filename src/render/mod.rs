mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PolylinePrimitive, TextHAlign, TextPrimitive,
};

use crate::core::Viewport;
use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from chart layout. Every call is a full
/// repaint: the backend clears its target before drawing the frame.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

/// Drawing target with caller-controlled pixel dimensions.
pub trait Surface: Renderer {
    fn viewport(&self) -> Viewport;

    /// Changes the pixel size of the target. Contents after a resize are
    /// unspecified until the next `render`.
    fn resize(&mut self, viewport: Viewport) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
