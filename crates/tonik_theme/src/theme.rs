//! Theme derivation
//!
//! Builds the full theme structure from a single seed color: six tonal
//! palettes plus a light and a dark scheme resolved from the standard
//! light/dark tone table.

use indexmap::IndexMap;
use tonik_color::{Argb, TonalPalette};

use crate::scheme::{Scheme, Schemes};

/// A derived color theme: the seed, both schemes, and the tonal palettes.
///
/// The palette map preserves insertion order; derived themes carry the six
/// standard palettes, but callers may construct a [`Theme`] with any
/// palette set.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub source: Argb,
    pub schemes: Schemes,
    pub palettes: IndexMap<String, TonalPalette>,
}

/// The six standard palettes derived from one seed.
struct CorePalettes {
    primary: TonalPalette,
    secondary: TonalPalette,
    tertiary: TonalPalette,
    neutral: TonalPalette,
    neutral_variant: TonalPalette,
    error: TonalPalette,
}

impl CorePalettes {
    fn from_seed(seed: Argb) -> Self {
        let primary = TonalPalette::from_seed(seed);
        Self {
            primary,
            secondary: primary.scaled(1.0 / 3.0),
            tertiary: primary.hue_rotated(60.0).scaled(0.5),
            neutral: primary.with_max_chroma(4.0),
            neutral_variant: primary.with_max_chroma(8.0),
            // Fixed red ramp, independent of the seed hue.
            error: TonalPalette::new(55.0, 36.0),
        }
    }
}

/// Derive a theme from a hex seed color string.
///
/// Returns `None` when the seed is empty or fails to parse; an invalid
/// seed skips derivation rather than failing.
pub fn derive_theme(hex_seed: &str) -> Option<Theme> {
    if hex_seed.is_empty() {
        return None;
    }

    match Argb::from_hex(hex_seed) {
        Ok(source) => Some(theme_from_source_color(source)),
        Err(err) => {
            tracing::debug!(seed = hex_seed, %err, "skipping theme derivation");
            None
        }
    }
}

/// Derive the full theme structure from a parsed seed color.
///
/// Pure and deterministic: the same seed always produces the same theme.
pub fn theme_from_source_color(source: Argb) -> Theme {
    let core = CorePalettes::from_seed(source);

    let schemes = Schemes {
        light: light_scheme(&core),
        dark: dark_scheme(&core),
    };

    let mut palettes = IndexMap::with_capacity(6);
    palettes.insert("primary".to_string(), core.primary);
    palettes.insert("secondary".to_string(), core.secondary);
    palettes.insert("tertiary".to_string(), core.tertiary);
    palettes.insert("neutral".to_string(), core.neutral);
    palettes.insert("neutralVariant".to_string(), core.neutral_variant);
    palettes.insert("error".to_string(), core.error);

    Theme {
        source,
        schemes,
        palettes,
    }
}

fn light_scheme(p: &CorePalettes) -> Scheme {
    Scheme {
        primary: p.primary.tone(40),
        on_primary: p.primary.tone(100),
        primary_container: p.primary.tone(90),
        on_primary_container: p.primary.tone(10),
        secondary: p.secondary.tone(40),
        on_secondary: p.secondary.tone(100),
        secondary_container: p.secondary.tone(90),
        on_secondary_container: p.secondary.tone(10),
        tertiary: p.tertiary.tone(40),
        on_tertiary: p.tertiary.tone(100),
        tertiary_container: p.tertiary.tone(90),
        on_tertiary_container: p.tertiary.tone(10),
        error: p.error.tone(40),
        on_error: p.error.tone(100),
        error_container: p.error.tone(90),
        on_error_container: p.error.tone(10),
        background: p.neutral.tone(99),
        on_background: p.neutral.tone(10),
        surface: p.neutral.tone(99),
        on_surface: p.neutral.tone(10),
        surface_variant: p.neutral_variant.tone(90),
        on_surface_variant: p.neutral_variant.tone(30),
        outline: p.neutral_variant.tone(50),
        outline_variant: p.neutral_variant.tone(80),
        shadow: p.neutral.tone(0),
        scrim: p.neutral.tone(0),
        inverse_surface: p.neutral.tone(20),
        inverse_on_surface: p.neutral.tone(95),
        inverse_primary: p.primary.tone(80),
    }
}

fn dark_scheme(p: &CorePalettes) -> Scheme {
    Scheme {
        primary: p.primary.tone(80),
        on_primary: p.primary.tone(20),
        primary_container: p.primary.tone(30),
        on_primary_container: p.primary.tone(90),
        secondary: p.secondary.tone(80),
        on_secondary: p.secondary.tone(20),
        secondary_container: p.secondary.tone(30),
        on_secondary_container: p.secondary.tone(90),
        tertiary: p.tertiary.tone(80),
        on_tertiary: p.tertiary.tone(20),
        tertiary_container: p.tertiary.tone(30),
        on_tertiary_container: p.tertiary.tone(90),
        error: p.error.tone(80),
        on_error: p.error.tone(20),
        error_container: p.error.tone(30),
        on_error_container: p.error.tone(90),
        background: p.neutral.tone(10),
        on_background: p.neutral.tone(90),
        surface: p.neutral.tone(10),
        on_surface: p.neutral.tone(90),
        surface_variant: p.neutral_variant.tone(30),
        on_surface_variant: p.neutral_variant.tone(80),
        outline: p.neutral_variant.tone(60),
        outline_variant: p.neutral_variant.tone(30),
        shadow: p.neutral.tone(0),
        scrim: p.neutral.tone(0),
        inverse_surface: p.neutral.tone(90),
        inverse_on_surface: p.neutral.tone(20),
        inverse_primary: p.primary.tone(40),
    }
}
