use thiserror::Error;

#[derive(Error, Debug)]
pub enum FloorPlanError {
    /// No usable drawing surface: pixmap allocation failed or the
    /// composed SVG was rejected by the rasterizer. Fatal, not retried.
    #[error("Drawing surface unavailable: {0}")]
    Configuration(String),
    #[error("PNG encoding error: {0}")]
    Encode(String),
}
