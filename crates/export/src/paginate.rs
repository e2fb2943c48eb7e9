//! Pure pagination arithmetic: carving a tall surface into page bands.

use crate::page::PageGeometry;

/// One page's worth of content: a vertical band of the source surface and
/// the physical height it occupies on the page.
///
/// `source_y_px`/`source_height_px` are fractional; the exporter rounds to
/// whole pixel rows when cropping. Across a plan the bands tile the full
/// surface height with no gap or overlap beyond rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSlice {
    pub source_y_px: f32,
    pub source_height_px: f32,
    pub height_mm: f32,
}

/// Plan the page bands for a surface scaled to the usable content width.
///
/// The surface keeps its aspect ratio: scaled to `usable_width_mm`, its
/// total content height is `usable_width * height / width`. Content that
/// fits the usable page height (boundary inclusive) produces exactly one
/// full-surface slice; taller content is carved into page-height bands
/// from the top.
pub fn plan_pages(width_px: u32, height_px: u32, geometry: &PageGeometry) -> Vec<PageSlice> {
    let aspect_ratio = height_px as f32 / width_px as f32;
    let content_height_mm = geometry.usable_width_mm() * aspect_ratio;
    let usable_height_mm = geometry.usable_height_mm();

    if content_height_mm <= usable_height_mm {
        return vec![PageSlice {
            source_y_px: 0.0,
            source_height_px: height_px as f32,
            height_mm: content_height_mm,
        }];
    }

    // A remainder smaller than half a source pixel cannot crop to a
    // whole row; absorb it instead of emitting an empty trailing band.
    // This also swallows float noise in the mm arithmetic.
    let px_per_mm = height_px as f32 / content_height_mm;
    let mut slices = Vec::new();
    let mut consumed_mm = 0.0f32;
    let mut remaining_mm = content_height_mm;
    while remaining_mm * px_per_mm > 0.5 {
        let band_mm = usable_height_mm.min(remaining_mm);
        slices.push(PageSlice {
            source_y_px: consumed_mm * px_per_mm,
            source_height_px: band_mm * px_per_mm,
            height_mm: band_mm,
        });
        consumed_mm += band_mm;
        remaining_mm -= band_mm;
    }
    slices
}
