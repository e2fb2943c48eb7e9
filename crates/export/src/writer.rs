//! Minimal lopdf document builder: one JPEG image per page.

use crate::error::ExportError;
use crate::page::mm_to_pt;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use plansmith_types::Rect;
use std::io::Cursor;

/// Builds a PDF where every page carries a single image XObject placed in
/// the page's content box. Page size is fixed at construction; images are
/// supplied as encoded JPEG data (embedded as DCTDecode streams, never
/// re-encoded).
pub struct PdfWriter {
    doc: Document,
    pages_id: ObjectId,
    page_ids: Vec<ObjectId>,
    page_width_pt: f32,
    page_height_pt: f32,
}

impl PdfWriter {
    pub fn new(page_width_mm: f32, page_height_mm: f32) -> Self {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            page_ids: Vec::new(),
            page_width_pt: mm_to_pt(page_width_mm),
            page_height_pt: mm_to_pt(page_height_mm),
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Append a page holding `jpeg` at `placement_mm`, measured from the
    /// page's top-left corner in millimeters.
    pub fn add_image_page(
        &mut self,
        jpeg: &[u8],
        px_width: u32,
        px_height: u32,
        placement_mm: Rect,
    ) -> Result<(), ExportError> {
        let image_id = self.doc.add_object(
            Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => px_width as i64,
                    "Height" => px_height as i64,
                    "ColorSpace" => "DeviceRGB",
                    "BitsPerComponent" => 8,
                    "Filter" => "DCTDecode",
                },
                jpeg.to_vec(),
            )
            .with_compression(false),
        );
        let resources_id = self.doc.add_object(dictionary! {
            "XObject" => dictionary! { "Im0" => image_id },
        });

        // PDF user space has its origin at the bottom-left; placement is
        // given from the top.
        let width_pt = mm_to_pt(placement_mm.width);
        let height_pt = mm_to_pt(placement_mm.height);
        let x_pt = mm_to_pt(placement_mm.x);
        let y_pt = self.page_height_pt - mm_to_pt(placement_mm.y) - height_pt;

        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        width_pt.into(),
                        0.into(),
                        0.into(),
                        height_pt.into(),
                        x_pt.into(),
                        y_pt.into(),
                    ],
                ),
                Operation::new("Do", vec!["Im0".into()]),
                Operation::new("Q", vec![]),
            ],
        };
        let content_id = self
            .doc
            .add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                self.page_width_pt.into(),
                self.page_height_pt.into(),
            ],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        self.page_ids.push(page_id);
        Ok(())
    }

    /// Write the page tree and catalog and serialize the document.
    pub fn finish(mut self) -> Result<Vec<u8>, ExportError> {
        let kids: Vec<Object> = self
            .page_ids
            .iter()
            .map(|id| Object::Reference(*id))
            .collect();
        let count = kids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        self.doc.save_to(&mut Cursor::new(&mut bytes))?;
        Ok(bytes)
    }
}
