//! Headless rasterization of the composed SVG into a PNG artifact.

use crate::error::FloorPlanError;
use crate::plan::{draw_floor_plan, plan_size};
use crate::svg::SvgSurface;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::debug;
use once_cell::sync::Lazy;
use plansmith_measure::Measurement;
use std::sync::Arc;

// System font discovery is expensive; the database is immutable after
// load and shared across renders.
static SYSTEM_FONTS: Lazy<Arc<usvg::fontdb::Database>> = Lazy::new(|| {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    Arc::new(db)
});

/// A rendered floor-plan diagram: PNG bytes plus pixel dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorPlanImage {
    width: u32,
    height: u32,
    png: Vec<u8>,
}

impl FloorPlanImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    pub fn into_png_bytes(self) -> Vec<u8> {
        self.png
    }

    /// `data:image/png;base64,...` form consumed by image tags.
    pub fn to_data_url(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }
}

/// Render a measurement list to a floor-plan PNG.
///
/// Deterministic: structurally equal lists produce byte-identical output.
/// An empty list yields a minimal valid canvas with a zero total caption.
pub fn render_floor_plan(measurements: &[Measurement]) -> Result<FloorPlanImage, FloorPlanError> {
    let size = plan_size(measurements);
    let mut surface = SvgSurface::new(size);
    draw_floor_plan(&mut surface, measurements);
    let svg = surface.finish();
    debug!(
        "rasterizing floor plan: {} rooms, {}x{} canvas",
        measurements.len(),
        size.width,
        size.height
    );

    let mut options = usvg::Options::default();
    options.fontdb = SYSTEM_FONTS.clone();
    let tree = usvg::Tree::from_str(&svg, &options)
        .map_err(|e| FloorPlanError::Configuration(format!("composed SVG rejected: {e}")))?;

    let width = size.width.ceil() as u32;
    let height = size.height.ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        FloorPlanError::Configuration(format!("failed to allocate {width}x{height} pixmap"))
    })?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::default(),
        &mut pixmap.as_mut(),
    );

    let png = pixmap
        .encode_png()
        .map_err(|e| FloorPlanError::Encode(e.to_string()))?;
    Ok(FloorPlanImage { width, height, png })
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    #[test]
    fn empty_list_renders_minimal_canvas() {
        let image = render_floor_plan(&[]).unwrap();
        assert_eq!((image.width(), image.height()), (120, 120));
        assert_eq!(&image.png_bytes()[..8], &PNG_MAGIC);
    }

    #[test]
    fn render_is_deterministic() {
        let rooms = vec![
            Measurement::new("Kitchen", "10", "12"),
            Measurement::new("Bedroom", "8", "9"),
        ];
        let first = render_floor_plan(&rooms).unwrap();
        let second = render_floor_plan(&rooms).unwrap();
        assert_eq!(first.png_bytes(), second.png_bytes());
    }

    #[test]
    fn data_url_is_png_prefixed() {
        let image = render_floor_plan(&[Measurement::new("Kitchen", "10", "12")]).unwrap();
        let url = image.to_data_url();
        assert!(url.starts_with("data:image/png;base64,"));
        // PNG magic survives the round trip
        let decoded = STANDARD.decode(&url["data:image/png;base64,".len()..]).unwrap();
        assert_eq!(&decoded[..8], &PNG_MAGIC);
    }
}
