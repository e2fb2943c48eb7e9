use lopdf::Document as LopdfDocument;
use plansmith::{ExportOptions, Measurement, PdfExporter, RenderSurface};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around an exported PDF with helper methods.
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Pixel heights of every embedded image XObject.
    pub fn image_heights_px(&self) -> Vec<i64> {
        self.doc
            .objects
            .values()
            .filter_map(|obj| match obj {
                lopdf::Object::Stream(s)
                    if s.dict
                        .get(b"Subtype")
                        .and_then(|o| o.as_name())
                        .map(|n| n == b"Image")
                        .unwrap_or(false) =>
                {
                    s.dict.get(b"Height").ok()?.as_i64().ok()
                }
                _ => None,
            })
            .collect()
    }

    /// MediaBox (width, height) of the first page, in points.
    pub fn first_page_size_pt(&self) -> (f32, f32) {
        let (_, page_id) = self.doc.get_pages().into_iter().next().unwrap();
        let page = self.doc.get_dictionary(page_id).unwrap();
        let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
        (
            media_box[2].as_float().unwrap(),
            media_box[3].as_float().unwrap(),
        )
    }
}

#[allow(dead_code)]
pub fn rooms() -> Vec<Measurement> {
    vec![
        Measurement::new("Kitchen", "10", "12"),
        Measurement::new("Bedroom", "8", "9"),
    ]
}

/// A synthetic render surface with per-row color variation so band crops
/// are distinguishable.
#[allow(dead_code)]
pub fn gradient_surface(width: u32, height: u32) -> RenderSurface {
    let image = image::RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([(y % 251) as u8, (x % 251) as u8, 128, 255])
    });
    RenderSurface::new(image).expect("non-degenerate surface")
}

#[allow(dead_code)]
pub fn export_pdf(
    surface: &RenderSurface,
    options: ExportOptions,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = PdfExporter::new(options).export(surface)?;
    GeneratedPdf::from_bytes(bytes)
}
