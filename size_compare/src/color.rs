//! Display colors

/// 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Build from a `0xRRGGBB` literal
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Normalized sRGB components with the given alpha
    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            alpha,
        ]
    }

    /// Linear components for an sRGB render target
    pub fn to_linear_rgba(self, alpha: f32) -> [f32; 4] {
        let [r, g, b, a] = self.to_rgba(alpha);
        [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a]
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_hex() {
        let sun = Rgb::from_hex(0xFDB813);
        assert_eq!(sun, Rgb { r: 0xFD, g: 0xB8, b: 0x13 });
    }

    #[test]
    fn test_linear_endpoints() {
        let white = Rgb::from_hex(0xFFFFFF).to_linear_rgba(0.5);
        assert_relative_eq!(white[0], 1.0, epsilon = 1e-6);
        assert_relative_eq!(white[3], 0.5);

        let black = Rgb::from_hex(0x000000).to_linear_rgba(1.0);
        assert_eq!(black[..3], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_linear_is_darker_than_srgb_midtones() {
        let grey = Rgb::from_hex(0x808080);
        assert!(grey.to_linear_rgba(1.0)[0] < grey.to_rgba(1.0)[0]);
    }
}
