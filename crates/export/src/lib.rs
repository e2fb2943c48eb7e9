//! Paginated PDF export.
//!
//! Takes an already-rasterized document surface and a page geometry and
//! produces a multi-page PDF: the surface is scaled to the usable content
//! width, carved into page-height bands, and each band is embedded as a
//! JPEG image XObject at the page's margin origin. Content that fits a
//! single page skips the band carving entirely.

mod error;
mod exporter;
mod page;
mod paginate;
mod surface;
mod writer;

pub use error::ExportError;
pub use exporter::{ExportOptions, PdfExporter};
pub use page::{Orientation, PageGeometry, PageSize};
pub use paginate::{plan_pages, PageSlice};
pub use surface::RenderSurface;
pub use writer::PdfWriter;
