//! SVG-composing [`DrawingSurface`] backend.

use crate::surface::{DrawingSurface, TextStyle};
use plansmith_types::{Color, Rect, Size};

/// Accumulates SVG elements in paint order; [`SvgSurface::finish`] wraps
/// them into a standalone document ready for rasterization.
pub struct SvgSurface {
    size: Size,
    body: String,
}

impl SvgSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            body: String::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.2}\" height=\"{h:.2}\" viewBox=\"0 0 {w:.2} {h:.2}\">{body}</svg>",
            w = self.size.width,
            h = self.size.height,
            body = self.body,
        )
    }
}

impl DrawingSurface for SvgSurface {
    fn fill_rect(&mut self, rect: Rect, color: &Color) {
        self.body.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            color.to_css(),
        ));
    }

    fn stroke_rect(&mut self, rect: Rect, color: &Color, width: f32) {
        self.body.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{:.2}\"/>",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            color.to_css(),
            width,
        ));
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: &Color, width: f32) {
        self.body.push_str(&format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{:.2}\"/>",
            x1,
            y1,
            x2,
            y2,
            color.to_css(),
            width,
        ));
    }

    fn text(&mut self, x: f32, y: f32, content: &str, style: &TextStyle, rotate_deg: f32) {
        let weight = if style.bold { " font-weight=\"bold\"" } else { "" };
        let transform = if rotate_deg != 0.0 {
            format!(" transform=\"rotate({rotate_deg:.2} {x:.2} {y:.2})\"")
        } else {
            String::new()
        };
        self.body.push_str(&format!(
            "<text x=\"{x:.2}\" y=\"{y:.2}\" font-family=\"sans-serif\" font-size=\"{size:.2}\"{weight} fill=\"{fill}\" text-anchor=\"middle\"{transform}>{content}</text>",
            size = style.size,
            fill = style.color.to_css(),
            content = escape_xml(content),
        ));
    }
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
