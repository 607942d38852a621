//! Track color assignment.
//!
//! New tracks get a hue by stepping the golden angle (137.508°) per draw,
//! which spreads successive hues around the color wheel without a lookup
//! table. The palette is a plain counter, so color sequences are
//! deterministic and tests can pin exact hues by seeding the draw index.

/// Golden angle in degrees.
const GOLDEN_ANGLE: f32 = 137.508;

/// Saturation applied to every track color, in percent.
const SATURATION: f32 = 100.0;

/// Lightness applied to every track color, in percent.
const LIGHTNESS: f32 = 50.0;

/// An HSL color token. Formats as a CSS color string for canvas renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue in degrees, [0, 360)
    pub h: f32,
    /// Saturation in percent
    pub s: f32,
    /// Lightness in percent
    pub l: f32,
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Deterministic color source stepping the golden angle on each draw.
#[derive(Debug, Clone, Default)]
pub struct GoldenAnglePalette {
    draw: u32,
}

impl GoldenAnglePalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the sequence at a given draw index. Useful for pinning exact
    /// hues in tests.
    pub fn with_start(draw: u32) -> Self {
        Self { draw }
    }

    /// Produce the next track color and advance the sequence.
    pub fn next_color(&mut self) -> Hsl {
        let h = (self.draw as f32 * GOLDEN_ANGLE).rem_euclid(360.0);
        self.draw += 1;
        Hsl {
            h,
            s: SATURATION,
            l: LIGHTNESS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_angle_sequence() {
        let mut palette = GoldenAnglePalette::new();
        assert_eq!(palette.next_color().h, 0.0);
        assert!((palette.next_color().h - 137.508).abs() < 1e-3);
        assert!((palette.next_color().h - 275.016).abs() < 1e-3);
        // draw 3 wraps: 412.524 mod 360
        assert!((palette.next_color().h - 52.524).abs() < 1e-3);
    }

    #[test]
    fn test_seeded_palette_is_reproducible() {
        let mut a = GoldenAnglePalette::with_start(7);
        let mut b = GoldenAnglePalette::with_start(7);
        for _ in 0..10 {
            assert_eq!(a.next_color(), b.next_color());
        }
    }

    #[test]
    fn test_hue_stays_in_range() {
        let mut palette = GoldenAnglePalette::new();
        for _ in 0..1000 {
            let c = palette.next_color();
            assert!((0.0..360.0).contains(&c.h));
            assert_eq!(c.s, 100.0);
            assert_eq!(c.l, 50.0);
        }
    }

    #[test]
    fn test_css_formatting() {
        let c = Hsl {
            h: 0.0,
            s: 100.0,
            l: 50.0,
        };
        assert_eq!(c.to_string(), "hsl(0, 100%, 50%)");
    }
}
