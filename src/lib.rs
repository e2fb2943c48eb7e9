//! # plansmith
//!
//! Rendering core for a small-business estimating application:
//! - **floorplan**: room measurement lists -> scaled floor-plan PNGs
//! - **export**: rasterized document surfaces -> paginated PDFs
//!
//! Persistence, auth, and page composition live with the hosting
//! application; this library only ever returns bytes and data URLs. The
//! one filesystem capability is [`save_artifact`], the explicit stand-in
//! for a browser download.

// Re-export member crates
pub use plansmith_export as export;
pub use plansmith_floorplan as floorplan;
pub use plansmith_measure as measure;
pub use plansmith_types as types;

pub mod artifact;
pub mod error;

pub use artifact::{floor_plan_filename, save_artifact};
pub use error::PlanError;

// Re-export the common entry points
pub use plansmith_export::{ExportOptions, PdfExporter, RenderSurface};
pub use plansmith_floorplan::{render_floor_plan, FloorPlanImage};
pub use plansmith_measure::{parse_measurements, total_square_footage, Measurement};
pub use plansmith_types::{Color, Rect, Size};
