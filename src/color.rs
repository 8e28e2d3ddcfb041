//! Block colors
//!
//! Colors are sRGB RGBA floats, the same layout the vertex buffer uses.

use rand::Rng;
use serde::{Deserialize, Serialize};

pub type Rgba = [f32; 4];

/// Convert a `#RRGGBB` literal into RGBA at compile time
pub const fn hex(rgb: u32) -> Rgba {
    [
        ((rgb >> 16) & 0xFF) as f32 / 255.0,
        ((rgb >> 8) & 0xFF) as f32 / 255.0,
        (rgb & 0xFF) as f32 / 255.0,
        1.0,
    ]
}

/// Named colors for game elements
pub mod colors {
    use super::{Rgba, hex};

    /// Moving block color outside rainbow mode
    pub const CLASSIC_BLOCK: Rgba = hex(0x4CAF50);
    pub const SKY_TOP: Rgba = hex(0x87CEEB);
    pub const SKY_BOTTOM: Rgba = hex(0x98FB98);
    pub const SHADOW: Rgba = [0.0, 0.0, 0.0, 0.3];
    pub const HIGHLIGHT: Rgba = [1.0, 1.0, 1.0, 0.3];
    pub const BORDER: Rgba = [0.0, 0.0, 0.0, 0.2];
    pub const SCORE_TEXT: Rgba = [0.0, 0.0, 0.0, 0.7];

    pub const PALETTE: [Rgba; 7] = [
        hex(0xFF6B6B),
        hex(0x4ECDC4),
        hex(0x45B7D1),
        hex(0x96CEB4),
        hex(0xFFEAA7),
        hex(0xDDA0DD),
        hex(0x98D8C8),
    ];
}

/// HSL (hue in degrees, saturation/lightness 0-1) to RGBA
pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Rgba {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m, 1.0]
}

/// Hue cycling at 250 degrees per second
pub fn rainbow_hue(time_ms: f64) -> f32 {
    ((time_ms * 0.005 * 50.0) % 360.0) as f32
}

/// Where a block gets its color from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColorMode {
    /// Always the same color
    Fixed(Rgba),
    /// Uniform pick from the palette
    RandomPalette,
    /// Hue rotating with wall-clock time
    TimeBasedHue,
}

impl ColorMode {
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R, time_ms: f64) -> Rgba {
        match self {
            ColorMode::Fixed(color) => *color,
            ColorMode::RandomPalette => colors::PALETTE[rng.random_range(0..colors::PALETTE.len())],
            ColorMode::TimeBasedHue => hsl(rainbow_hue(time_ms), 0.7, 0.6),
        }
    }

    /// Color to draw a block with, without drawing from the RNG.
    /// Random picks keep the block's stored color so it does not flicker.
    pub fn display(&self, stored: Rgba, time_ms: f64) -> Rgba {
        match self {
            ColorMode::Fixed(color) => *color,
            ColorMode::RandomPalette => stored,
            ColorMode::TimeBasedHue => hsl(rainbow_hue(time_ms), 0.7, 0.6),
        }
    }
}

/// Color policy for a run, selected by the rainbow toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ColorScheme {
    #[default]
    Classic,
    Rainbow,
}

impl ColorScheme {
    pub fn from_rainbow(rainbow: bool) -> Self {
        if rainbow {
            ColorScheme::Rainbow
        } else {
            ColorScheme::Classic
        }
    }

    /// Color stored on a freshly spawned moving block
    pub fn spawn_mode(&self) -> ColorMode {
        match self {
            ColorScheme::Classic => ColorMode::Fixed(colors::CLASSIC_BLOCK),
            ColorScheme::Rainbow => ColorMode::RandomPalette,
        }
    }

    /// Display override for the moving block (None = show its stored color)
    pub fn moving_override(&self) -> Option<ColorMode> {
        match self {
            ColorScheme::Classic => None,
            ColorScheme::Rainbow => Some(ColorMode::TimeBasedHue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn close(a: Rgba, b: Rgba) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 0.01)
    }

    #[test]
    fn test_hex() {
        assert_eq!(hex(0xFF0000), [1.0, 0.0, 0.0, 1.0]);
        assert!(close(hex(0x4CAF50), [0.298, 0.686, 0.314, 1.0]));
    }

    #[test]
    fn test_hsl_primaries() {
        assert!(close(hsl(0.0, 1.0, 0.5), [1.0, 0.0, 0.0, 1.0]));
        assert!(close(hsl(120.0, 1.0, 0.5), [0.0, 1.0, 0.0, 1.0]));
        assert!(close(hsl(240.0, 1.0, 0.5), [0.0, 0.0, 1.0, 1.0]));
        // Wraps past 360
        assert!(close(hsl(480.0, 1.0, 0.5), hsl(120.0, 1.0, 0.5)));
    }

    #[test]
    fn test_rainbow_hue_range() {
        for t in [0.0, 1000.0, 1440.0, 123_456.7] {
            let h = rainbow_hue(t);
            assert!((0.0..360.0).contains(&h));
        }
        assert!((rainbow_hue(1000.0) - 250.0).abs() < 0.001);
    }

    #[test]
    fn test_random_palette_stays_in_palette() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..50 {
            let c = ColorMode::RandomPalette.pick(&mut rng, 0.0);
            assert!(colors::PALETTE.contains(&c));
        }
    }

    #[test]
    fn test_scheme_modes() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(
            ColorScheme::Classic.spawn_mode().pick(&mut rng, 0.0),
            colors::CLASSIC_BLOCK
        );
        assert_eq!(ColorScheme::Classic.moving_override(), None);
        assert_eq!(
            ColorScheme::Rainbow.moving_override(),
            Some(ColorMode::TimeBasedHue)
        );
        assert_eq!(ColorScheme::from_rainbow(true), ColorScheme::Rainbow);
    }

    #[test]
    fn test_display_keeps_stored_random_color() {
        let stored = colors::PALETTE[3];
        assert_eq!(ColorMode::RandomPalette.display(stored, 500.0), stored);
        assert_eq!(
            ColorMode::TimeBasedHue.display(stored, 0.0),
            hsl(0.0, 0.7, 0.6)
        );
    }
}
