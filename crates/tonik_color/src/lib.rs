//! Tonik color primitives
//!
//! This crate provides the colorimetric foundation for the Tonik theming
//! system:
//!
//! - [`Argb`]: a 32-bit ARGB color with hex parsing and formatting
//! - [`Lab`]: CIELAB conversion (D65 illuminant) used for tonal ramps
//! - [`TonalPalette`]: a continuous lightness ramp for one color role,
//!   queryable at discrete tone stops
//!
//! Tones map directly onto CIELAB lightness (L*), so `palette.tone(0)` is
//! black, `palette.tone(100)` is white, and intermediate tones keep the
//! palette's chroma direction while varying only lightness.
//!
//! # Example
//!
//! ```rust
//! use tonik_color::{Argb, TonalPalette};
//!
//! let seed = Argb::from_hex("#FF6750A4").unwrap();
//! let palette = TonalPalette::from_seed(seed);
//!
//! let mid = palette.tone(50);
//! assert_eq!(mid.a, 0xFF);
//! ```

mod argb;
mod error;
mod lab;
mod palette;

pub use argb::Argb;
pub use error::ColorError;
pub use lab::Lab;
pub use palette::TonalPalette;
