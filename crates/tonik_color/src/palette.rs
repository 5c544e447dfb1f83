//! Tonal palettes
//!
//! A tonal palette is a continuous lightness ramp for one color role. It
//! stores only the chroma vector (a*, b*) of its seed; querying a tone
//! produces the color with that chroma at the requested CIELAB lightness.

use crate::argb::Argb;
use crate::lab::Lab;

/// A continuous tonal ramp queryable at discrete tone stops.
///
/// Tones are nominally 0–100 but are deliberately not validated: callers
/// may pass any value, and out-of-range tones resolve through gamut
/// clamping (large negative tones bottom out at black, large positive
/// ones at white).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TonalPalette {
    a: f64,
    b: f64,
}

impl TonalPalette {
    /// Palette with an explicit chroma vector.
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Palette carrying the seed color's full chroma.
    pub fn from_seed(seed: Argb) -> Self {
        let lab = Lab::from_argb(seed);
        Self { a: lab.a, b: lab.b }
    }

    /// Chroma magnitude of this palette.
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Same hue, chroma scaled by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            a: self.a * factor,
            b: self.b * factor,
        }
    }

    /// Same hue, chroma clamped to at most `max`.
    ///
    /// An achromatic palette (zero chroma vector) stays achromatic.
    pub fn with_max_chroma(self, max: f64) -> Self {
        let chroma = self.chroma();
        if chroma <= max || chroma < f64::EPSILON {
            self
        } else {
            self.scaled(max / chroma)
        }
    }

    /// Chroma vector rotated by `degrees` in the a*/b* plane.
    pub fn hue_rotated(self, degrees: f64) -> Self {
        let theta = degrees.to_radians();
        let (sin, cos) = theta.sin_cos();
        Self {
            a: self.a * cos - self.b * sin,
            b: self.a * sin + self.b * cos,
        }
    }

    /// Resolve the palette at a tone stop.
    ///
    /// The tone sets CIELAB lightness directly; the chroma vector is held
    /// fixed and the result is clamped into the sRGB gamut.
    pub fn tone(&self, tone: i64) -> Argb {
        Lab {
            l: tone as f64,
            a: self.a,
            b: self.b,
        }
        .to_argb(0xFF)
    }
}
