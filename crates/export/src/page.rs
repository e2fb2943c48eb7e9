//! Physical page dimensions and margins.

use serde::{Deserialize, Serialize};

const PT_PER_MM: f32 = 72.0 / 25.4;

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    /// Portrait dimensions in millimeters. Fixed ISO/ANSI lookup.
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::Letter => (215.9, 279.4),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// A resolved page: physical size plus a uniform margin on all sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_mm: f32,
}

impl PageGeometry {
    pub fn new(size: PageSize, orientation: Orientation, margin_mm: f32) -> Self {
        let (w, h) = size.dimensions_mm();
        let (width_mm, height_mm) = match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        };
        Self { width_mm, height_mm, margin_mm }
    }

    /// Content box width: page width minus both margins.
    pub fn usable_width_mm(&self) -> f32 {
        self.width_mm - 2.0 * self.margin_mm
    }

    /// Content box height: page height minus both margins.
    pub fn usable_height_mm(&self) -> f32 {
        self.height_mm - 2.0 * self.margin_mm
    }
}
