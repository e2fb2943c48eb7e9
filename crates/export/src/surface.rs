use crate::error::ExportError;
use image::RgbaImage;

/// An already-rasterized bitmap of a document region.
///
/// Construction validates that both pixel dimensions are non-zero; the
/// pagination math divides by the surface width.
#[derive(Debug, Clone)]
pub struct RenderSurface {
    image: RgbaImage,
}

impl RenderSurface {
    pub fn new(image: RgbaImage) -> Result<Self, ExportError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(ExportError::InvalidSurface { width, height });
        }
        Ok(Self { image })
    }

    pub fn width_px(&self) -> u32 {
        self.image.width()
    }

    pub fn height_px(&self) -> u32 {
        self.image.height()
    }

    pub(crate) fn image(&self) -> &RgbaImage {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_width() {
        let err = RenderSurface::new(RgbaImage::new(0, 100)).unwrap_err();
        assert!(matches!(
            err,
            ExportError::InvalidSurface { width: 0, height: 100 }
        ));
    }

    #[test]
    fn rejects_zero_height() {
        let err = RenderSurface::new(RgbaImage::new(640, 0)).unwrap_err();
        assert!(matches!(
            err,
            ExportError::InvalidSurface { width: 640, height: 0 }
        ));
    }

    #[test]
    fn accepts_normal_bitmap() {
        let surface = RenderSurface::new(RgbaImage::new(640, 480)).unwrap();
        assert_eq!((surface.width_px(), surface.height_px()), (640, 480));
    }
}
