//! Floor-plan diagram generation.
//!
//! Turns an ordered list of room measurements into a scaled 2D diagram:
//! a one-foot grid, one outlined pastel rectangle per room stacked
//! vertically, dimension and area labels, and a total-area caption.
//!
//! The layout algorithm draws against the [`DrawingSurface`] trait so it
//! can be exercised headlessly; the shipped backend composes SVG and
//! rasterizes it with `resvg` into a PNG.

mod error;
mod plan;
mod raster;
mod surface;
mod svg;

pub use error::FloorPlanError;
pub use plan::{draw_floor_plan, plan_size, PADDING, PIXELS_PER_FOOT};
pub use raster::{render_floor_plan, FloorPlanImage};
pub use surface::{DrawingSurface, TextStyle};
pub use svg::SvgSurface;
