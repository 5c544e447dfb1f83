//! CIELAB conversion (sRGB, D65 illuminant)
//!
//! Tonal palettes vary lightness (L*) while holding the chroma vector
//! (a*, b*) fixed, so the only colorimetric machinery the theming system
//! needs is a round trip between sRGB and CIELAB.

use crate::argb::Argb;

// D65 reference white.
const XN: f64 = 0.95047;
const YN: f64 = 1.00000;
const ZN: f64 = 1.08883;

/// A CIELAB color.
///
/// `l` is lightness in 0–100; `a` and `b` are the chroma axes. Values
/// outside the sRGB gamut are clamped on conversion back to [`Argb`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    pub fn from_argb(color: Argb) -> Self {
        let r = channel_to_linear(color.r);
        let g = channel_to_linear(color.g);
        let b = channel_to_linear(color.b);

        // sRGB -> XYZ, standard D65 matrix
        let x = 0.4124564 * r + 0.3575761 * g + 0.1804375 * b;
        let y = 0.2126729 * r + 0.7151522 * g + 0.0721750 * b;
        let z = 0.0193339 * r + 0.1191920 * g + 0.9503041 * b;

        let fx = forward(x / XN);
        let fy = forward(y / YN);
        let fz = forward(z / ZN);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Convert back to sRGB with the given alpha, clamping out-of-gamut
    /// channels.
    pub fn to_argb(self, alpha: u8) -> Argb {
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        let x = XN * inverse(fx);
        let y = YN * inverse(fy);
        let z = ZN * inverse(fz);

        // XYZ -> linear RGB, standard D65 matrix
        let r = 3.2404542 * x - 1.5371385 * y - 0.4985314 * z;
        let g = -0.9692660 * x + 1.8760108 * y + 0.0415560 * z;
        let b = 0.0556434 * x - 0.2040259 * y + 1.0572252 * z;

        Argb {
            a: alpha,
            r: linear_to_channel(r),
            g: linear_to_channel(g),
            b: linear_to_channel(b),
        }
    }

    /// Chroma magnitude, the euclidean length of (a*, b*).
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }
}

fn channel_to_linear(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_channel(c: f64) -> u8 {
    let c = c.clamp(0.0, 1.0);
    let s = if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    };
    (s * 255.0).round() as u8
}

fn forward(t: f64) -> f64 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

fn inverse(t: f64) -> f64 {
    if t > 0.206896 {
        t * t * t
    } else {
        (t - 16.0 / 116.0) / 7.787
    }
}
