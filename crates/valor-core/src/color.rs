//! RGBA colours as consumed by a 2D canvas (`rgba(r, g, b, a)` strings).

use rand::Rng;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same channels with a replaced alpha.
    #[inline]
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// CSS colour string, e.g. `rgba(147, 51, 234, 0.4)`.
    pub fn css(&self) -> String {
        self.to_string()
    }

    /// Magenta-leaning dot colour: high red and blue, almost no green.
    pub fn random_particle<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.gen_range(155..255),
            g: rng.gen_range(0..50),
            b: rng.gen_range(155..255),
            a: rng.gen_range(0.3..1.0),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub const TRAIL_BLACK: Rgba = Rgba::rgb(0, 0, 0);

// Connection line palette
pub const CONNECTION_PALETTE: [Rgba; 5] = [
    Rgba::rgb(147, 51, 234), // purple
    Rgba::rgb(139, 92, 246), // light purple
    Rgba::rgb(168, 85, 247), // medium purple
    Rgba::rgb(217, 70, 239), // pink-purple
    Rgba::rgb(79, 70, 229),  // indigo
];

/// Index into [`CONNECTION_PALETTE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteIndex(pub u8);

impl PaletteIndex {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(0..CONNECTION_PALETTE.len()) as u8)
    }

    #[inline]
    pub fn color(self) -> Rgba {
        CONNECTION_PALETTE[self.0 as usize % CONNECTION_PALETTE.len()]
    }
}
