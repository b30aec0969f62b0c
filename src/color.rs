// Simple color struct, created from an unsigned 32 representing RRGGBBAA.
// Alpha is kept as a float so computed opacities reach the canvas unrounded.

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Color {
    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let alpha = (num as u8) as f64 / 255.0;

        Color { r, g, b, alpha }
    }

    /// Same hue with the alpha replaced by `opacity` (clamped to 0..=1).
    pub fn with_opacity(self, opacity: f64) -> Color {
        Color {
            alpha: opacity.max(0.0).min(1.0),
            ..self
        }
    }

    pub fn opacity(&self) -> f64 {
        self.alpha
    }

    /// CSS `rgba()` string usable as a canvas fill or stroke style.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
    }
}
