use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{BRUSH_COLOR_SATURATION, BRUSH_COLOR_VALUE};

/// 8-bit RGB display colour of a solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts hue/saturation/value, each in `[0, 1]`, to RGB.
    #[must_use]
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let h = hue.rem_euclid(1.0) * 6.0;
        let s = saturation.clamp(0.0, 1.0);
        let v = value.clamp(0.0, 1.0);
        let c = v * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = v - c;
        let (r, g, b) = match h {
            h if h < 1.0 => (c, x, 0.0),
            h if h < 2.0 => (x, c, 0.0),
            h if h < 3.0 => (0.0, c, x),
            h if h < 4.0 => (0.0, x, c),
            h if h < 5.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        Self::new(channel(r + m), channel(g + m), channel(b + m))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Golden-ratio conjugate; stepping the hue by it spreads consecutive
/// colours evenly around the wheel.
const HUE_STEP: f64 = 0.618_033_988_749_895;

/// Hands out visually distinct brush colours.
///
/// The starting hue and a small per-colour jitter come from a seeded PCG
/// generator, so a fixed seed reproduces the same sequence.
#[derive(Debug, Clone)]
pub struct Palette {
    rng: Pcg32,
    hue: f64,
}

impl Palette {
    /// Creates a palette with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let hue = rng.random::<f64>();
        Self { rng, hue }
    }

    /// Creates a palette seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random::<u64>())
    }

    /// Returns the next brush colour.
    pub fn next_color(&mut self) -> Color {
        let jitter = (self.rng.random::<f64>() - 0.5) * 0.1;
        self.hue = (self.hue + HUE_STEP + jitter).rem_euclid(1.0);
        Color::from_hsv(self.hue, BRUSH_COLOR_SATURATION, BRUSH_COLOR_VALUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsv_primaries() {
        assert_eq!(Color::from_hsv(0.0, 1.0, 1.0), Color::new(255, 0, 0));
        assert_eq!(Color::from_hsv(1.0 / 3.0, 1.0, 1.0), Color::new(0, 255, 0));
        assert_eq!(Color::from_hsv(2.0 / 3.0, 1.0, 1.0), Color::new(0, 0, 255));
        assert_eq!(Color::from_hsv(0.5, 0.0, 1.0), Color::new(255, 255, 255));
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Palette::seeded(7);
        let mut b = Palette::seeded(7);
        for _ in 0..16 {
            assert_eq!(a.next_color(), b.next_color());
        }
    }

    #[test]
    fn consecutive_colors_differ() {
        let mut palette = Palette::seeded(42);
        let colors: Vec<Color> = (0..8).map(|_| palette.next_color()).collect();
        for pair in colors.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }
}
