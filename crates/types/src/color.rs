#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self { r: 0, g: 0, b: 0, a: 1.0 }
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Convert an HSL triple (hue in degrees, saturation and lightness in
    /// `0..=1`) to RGB. Used for the per-room pastel wash palette.
    pub fn from_hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        let h = hue.rem_euclid(360.0);
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = lightness - c / 2.0;

        let (r1, g1, b1) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self {
            r: ((r1 + m) * 255.0).round() as u8,
            g: ((g1 + m) * 255.0).round() as u8,
            b: ((b1 + m) * 255.0).round() as u8,
            a: alpha,
        }
    }

    /// CSS serialization for SVG attributes: `rgb(..)` for opaque colors,
    /// `rgba(..)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a == 1.0 {
            format!("rgb({},{},{})", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsla_pastel_wash() {
        // hsla(0, 70%, 95%, 0.5) as the first room wash color
        let c = Color::from_hsla(0.0, 0.7, 0.95, 0.5);
        assert_eq!((c.r, c.g, c.b), (251, 233, 233));
        assert_eq!(c.a, 0.5);

        // The hue wheel wraps: 360 == 0
        let wrapped = Color::from_hsla(360.0, 0.7, 0.95, 0.5);
        assert_eq!((wrapped.r, wrapped.g, wrapped.b), (251, 233, 233));

        let green = Color::from_hsla(120.0, 0.7, 0.95, 0.5);
        assert_eq!((green.r, green.g, green.b), (233, 251, 233));
    }

    #[test]
    fn css_serialization() {
        assert_eq!(Color::rgb(30, 41, 59).to_css(), "rgb(30,41,59)");
        assert_eq!(
            Color::rgb(30, 41, 59).with_alpha(0.5).to_css(),
            "rgba(30,41,59,0.5)"
        );
    }

    #[test]
    fn default_is_opaque_black() {
        assert_eq!(Color::default(), Color::rgb(0, 0, 0));
    }
}
