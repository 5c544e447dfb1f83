//! Color schemes
//!
//! A scheme resolves the fixed set of named color roles to concrete colors
//! for one brightness mode. Role names are kept as the camelCase source
//! identifiers; the style projection kebab-cases them on the way out.

use tonik_color::Argb;

/// A named set of color roles resolved for one brightness mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheme {
    pub primary: Argb,
    pub on_primary: Argb,
    pub primary_container: Argb,
    pub on_primary_container: Argb,
    pub secondary: Argb,
    pub on_secondary: Argb,
    pub secondary_container: Argb,
    pub on_secondary_container: Argb,
    pub tertiary: Argb,
    pub on_tertiary: Argb,
    pub tertiary_container: Argb,
    pub on_tertiary_container: Argb,
    pub error: Argb,
    pub on_error: Argb,
    pub error_container: Argb,
    pub on_error_container: Argb,
    pub background: Argb,
    pub on_background: Argb,
    pub surface: Argb,
    pub on_surface: Argb,
    pub surface_variant: Argb,
    pub on_surface_variant: Argb,
    pub outline: Argb,
    pub outline_variant: Argb,
    pub shadow: Argb,
    pub scrim: Argb,
    pub inverse_surface: Argb,
    pub inverse_on_surface: Argb,
    pub inverse_primary: Argb,
}

impl Scheme {
    /// Number of color roles in a scheme.
    pub const ROLE_COUNT: usize = 29;

    /// All roles as `(source identifier, color)` pairs, in declaration
    /// order. This order is the emission order of the style projection.
    pub fn roles(&self) -> [(&'static str, Argb); Self::ROLE_COUNT] {
        [
            ("primary", self.primary),
            ("onPrimary", self.on_primary),
            ("primaryContainer", self.primary_container),
            ("onPrimaryContainer", self.on_primary_container),
            ("secondary", self.secondary),
            ("onSecondary", self.on_secondary),
            ("secondaryContainer", self.secondary_container),
            ("onSecondaryContainer", self.on_secondary_container),
            ("tertiary", self.tertiary),
            ("onTertiary", self.on_tertiary),
            ("tertiaryContainer", self.tertiary_container),
            ("onTertiaryContainer", self.on_tertiary_container),
            ("error", self.error),
            ("onError", self.on_error),
            ("errorContainer", self.error_container),
            ("onErrorContainer", self.on_error_container),
            ("background", self.background),
            ("onBackground", self.on_background),
            ("surface", self.surface),
            ("onSurface", self.on_surface),
            ("surfaceVariant", self.surface_variant),
            ("onSurfaceVariant", self.on_surface_variant),
            ("outline", self.outline),
            ("outlineVariant", self.outline_variant),
            ("shadow", self.shadow),
            ("scrim", self.scrim),
            ("inverseSurface", self.inverse_surface),
            ("inverseOnSurface", self.inverse_on_surface),
            ("inversePrimary", self.inverse_primary),
        ]
    }
}

/// Light and dark resolutions of the same theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schemes {
    pub light: Scheme,
    pub dark: Scheme,
}
