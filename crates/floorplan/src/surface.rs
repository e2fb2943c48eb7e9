use plansmith_types::{Color, Rect};

/// Text styling for label drawing. Text is always centered horizontally
/// on its anchor point; `y` is the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub bold: bool,
    pub color: Color,
}

/// A minimal 2D drawing target for the floor-plan layout algorithm.
///
/// Implementations own the raster (or vector) state; the algorithm only
/// issues draw calls in paint order. A surface instance is not safe to
/// share between in-flight renders.
pub trait DrawingSurface {
    fn fill_rect(&mut self, rect: Rect, color: &Color);

    fn stroke_rect(&mut self, rect: Rect, color: &Color, width: f32);

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: &Color, width: f32);

    /// Draw `content` centered at `(x, y)`, rotated by `rotate_deg`
    /// degrees around the anchor point.
    fn text(&mut self, x: f32, y: f32, content: &str, style: &TextStyle, rotate_deg: f32);
}
