//! Drawing-surface collaborator.

use glam::DVec2;

/// Primitive drawing operations the render pass needs from its host.
///
/// The viewport is fixed for the session: the startup path queries
/// `size` once and hands it to `WorldConfig`; after that a surface only
/// receives draw calls. Coordinates are game units with the origin at
/// the top-left, y growing downward.
pub trait Surface {
    /// Viewport extents, constant for the life of the surface.
    fn size(&self) -> DVec2;

    /// Blank the given rectangle.
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    /// Fill the given rectangle.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
}
