//! Export pipeline: plan pages, crop and encode bands, assemble the PDF.

use crate::error::ExportError;
use crate::page::{Orientation, PageGeometry, PageSize};
use crate::paginate::plan_pages;
use crate::surface::RenderSurface;
use crate::writer::PdfWriter;
use image::codecs::jpeg::JpegEncoder;
use image::{imageops, RgbImage, RgbaImage};
use log::debug;
use plansmith_types::Rect;
use serde::{Deserialize, Serialize};
use std::io::Cursor;

fn default_margin() -> f32 {
    10.0
}

fn default_quality() -> u8 {
    90
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    pub page_size: PageSize,
    pub orientation: Orientation,
    pub margin_mm: f32,
    /// JPEG quality for embedded page bands, `1..=100`.
    pub jpeg_quality: u8,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            orientation: Orientation::default(),
            margin_mm: default_margin(),
            jpeg_quality: default_quality(),
        }
    }
}

/// Splits a render surface into page bands and assembles the PDF bytes.
pub struct PdfExporter {
    options: ExportOptions,
}

impl PdfExporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    pub fn export(&self, surface: &RenderSurface) -> Result<Vec<u8>, ExportError> {
        let geometry = PageGeometry::new(
            self.options.page_size,
            self.options.orientation,
            self.options.margin_mm,
        );
        let slices = plan_pages(surface.width_px(), surface.height_px(), &geometry);
        debug!(
            "exporting {}x{} px surface as {} page(s)",
            surface.width_px(),
            surface.height_px(),
            slices.len()
        );

        let mut writer = PdfWriter::new(geometry.width_mm, geometry.height_mm);
        let placement = |height_mm: f32| {
            Rect::new(
                geometry.margin_mm,
                geometry.margin_mm,
                geometry.usable_width_mm(),
                height_mm,
            )
        };

        if let [single] = slices.as_slice() {
            // Single-page fast path: the whole surface goes in uncropped.
            let jpeg = encode_jpeg(surface.image(), self.options.jpeg_quality)?;
            writer.add_image_page(
                &jpeg,
                surface.width_px(),
                surface.height_px(),
                placement(single.height_mm),
            )?;
        } else {
            let surface_height = surface.height_px();
            for slice in &slices {
                // Round band edges to whole rows; adjacent slices share
                // the rounded boundary, so the crops tile exactly.
                let top = slice.source_y_px.round() as u32;
                let bottom = (slice.source_y_px + slice.source_height_px)
                    .round()
                    .min(surface_height as f32) as u32;
                let band: RgbaImage = imageops::crop_imm(
                    surface.image(),
                    0,
                    top,
                    surface.width_px(),
                    bottom - top,
                )
                .to_image();
                let jpeg = encode_jpeg(&band, self.options.jpeg_quality)?;
                writer.add_image_page(
                    &jpeg,
                    surface.width_px(),
                    bottom - top,
                    placement(slice.height_mm),
                )?;
            }
        }

        writer.finish()
    }
}

/// Flatten to RGB (JPEG has no alpha channel) and encode at the given
/// quality.
fn encode_jpeg(image: &RgbaImage, quality: u8) -> Result<Vec<u8>, ExportError> {
    let rgb: RgbImage = RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let p = image.get_pixel(x, y);
        image::Rgb([p[0], p[1], p[2]])
    });
    let mut bytes = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(Cursor::new(&mut bytes), quality);
    encoder.encode_image(&rgb)?;
    Ok(bytes)
}
