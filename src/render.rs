//! Render sink boundary.

use crate::mesh::ClothMesh;
use crate::texture::TextureHandle;

/// Everything a renderer needs to draw one cloth frame.
#[derive(Clone, Debug)]
pub struct ClothFrame<'a> {
    pub mesh: &'a ClothMesh,
    pub texture: TextureHandle,
    /// Texture name, for diagnostics.
    pub texture_name: &'a str,
}

/// Consumes one cloth frame per rendered frame.
///
/// Implementations own the graphics API. Both faces are expected to be
/// drawn: the cloth does not cull.
pub trait RenderSink {
    fn draw(&mut self, frame: &ClothFrame<'_>);
}

impl<R: RenderSink + ?Sized> RenderSink for &mut R {
    fn draw(&mut self, frame: &ClothFrame<'_>) {
        (**self).draw(frame)
    }
}

/// Sink that discards frames, for headless simulation.
pub struct NullRenderSink;

impl RenderSink for NullRenderSink {
    fn draw(&mut self, _frame: &ClothFrame<'_>) {}
}
