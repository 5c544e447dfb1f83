//! Theme options and right-biased merging

use serde::{Deserialize, Serialize};

/// Partial theme options.
///
/// Every field is optional so option sets can be layered: caller options
/// merge over application defaults, which merge over the built-in
/// defaults. `None` means "unset, fall through to the layer below";
/// `Some(false)` is an explicit value and overrides a `true` default.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOptions {
    /// Seed color as a hex string (`#RRGGBB` or `#AARRGGBB`).
    pub hex_source_color: Option<String>,
    /// Select the dark scheme for the unsuffixed system color properties.
    pub is_dark_mode_enabled: Option<bool>,
    /// Additionally emit every role from both schemes, suffixed `-dark`
    /// and `-light`.
    pub brightness_suffix: Option<bool>,
    /// Tone stops to emit as reference palette properties. Empty or unset
    /// emits none.
    pub palette_tones: Option<Vec<i64>>,
}

impl ThemeOptions {
    /// Built-in defaults: a white seed with dark mode enabled.
    pub fn defaults() -> Self {
        Self {
            hex_source_color: Some("#FFFFFFFF".to_string()),
            is_dark_mode_enabled: Some(true),
            brightness_suffix: None,
            palette_tones: None,
        }
    }

    /// Right-biased merge: explicit (`Some`) fields of `self` win, unset
    /// (`None`) fields fall through to `defaults`.
    pub fn merge_over(self, defaults: &Self) -> Self {
        Self {
            hex_source_color: self
                .hex_source_color
                .or_else(|| defaults.hex_source_color.clone()),
            is_dark_mode_enabled: self.is_dark_mode_enabled.or(defaults.is_dark_mode_enabled),
            brightness_suffix: self.brightness_suffix.or(defaults.brightness_suffix),
            palette_tones: self.palette_tones.or_else(|| defaults.palette_tones.clone()),
        }
    }
}
