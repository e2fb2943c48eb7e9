use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    /// The input surface has a zero pixel dimension; scaling it would
    /// divide by zero. Fatal, not retried.
    #[error("Invalid render surface: {width}x{height} px")]
    InvalidSurface { width: u32, height: u32 },
    #[error("Image encoding error: {0}")]
    Image(String),
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<lopdf::Error> for ExportError {
    fn from(err: lopdf::Error) -> Self {
        ExportError::Pdf(err.to_string())
    }
}

impl From<image::ImageError> for ExportError {
    fn from(err: image::ImageError) -> Self {
        ExportError::Image(err.to_string())
    }
}
