//! CSS custom property projection
//!
//! Flattens a derived theme into the two custom-property families the
//! presentation layer consumes:
//!
//! - system colors: `--md-sys-color-<kebab-role>[<suffix>]`
//! - reference palettes: `--md-ref-palette-<kebab-palette>-<kebab-palette><tone>`
//!
//! Insertion order is part of the contract: unsuffixed roles first (in
//! scheme role order), then dark-suffixed roles, then light-suffixed
//! roles, then palette tones (palette order x tone order).

use indexmap::IndexMap;

use crate::options::ThemeOptions;
use crate::scheme::Scheme;
use crate::theme::Theme;

/// Ordered map of CSS custom property name to color string.
pub type CssProperties = IndexMap<String, String>;

/// Kebab-case a camelCase identifier: a hyphen at every lower-to-upper
/// letter boundary, then lowercase.
///
/// `primaryContainer` becomes `primary-container`, `onSurfaceVariant`
/// becomes `on-surface-variant`.
pub fn kebab_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev_lower = false;
    for ch in input.chars() {
        if prev_lower && ch.is_ascii_uppercase() {
            out.push('-');
        }
        prev_lower = ch.is_ascii_lowercase();
        out.push(ch.to_ascii_lowercase());
    }
    out
}

/// Project a theme into its CSS custom properties.
///
/// Returns `None` when no theme has been derived yet. Pure and
/// deterministic: identical inputs produce identical maps, including key
/// insertion order.
pub fn project_style(theme: Option<&Theme>, options: &ThemeOptions) -> Option<CssProperties> {
    let theme = theme?;

    let mut properties = CssProperties::new();

    let scheme = if options.is_dark_mode_enabled.unwrap_or(true) {
        &theme.schemes.dark
    } else {
        &theme.schemes.light
    };
    push_scheme(&mut properties, scheme, "");

    if options.brightness_suffix.unwrap_or(false) {
        push_scheme(&mut properties, &theme.schemes.dark, "-dark");
        push_scheme(&mut properties, &theme.schemes.light, "-light");
    }

    let tones = match &options.palette_tones {
        Some(tones) if !tones.is_empty() => tones,
        _ => return Some(properties),
    };

    for (name, palette) in &theme.palettes {
        let key = kebab_case(name);
        for &tone in tones {
            properties.insert(
                format!("--md-ref-palette-{key}-{key}{tone}"),
                palette.tone(tone).to_hex(),
            );
        }
    }

    Some(properties)
}

fn push_scheme(properties: &mut CssProperties, scheme: &Scheme, suffix: &str) {
    for (role, color) in scheme.roles() {
        properties.insert(
            format!("--md-sys-color-{}{suffix}", kebab_case(role)),
            color.to_hex(),
        );
    }
}
