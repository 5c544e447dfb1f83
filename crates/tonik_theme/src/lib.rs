//! Tonik theme engine
//!
//! Derives a structured color theme from a single seed color and projects
//! it into a flat, ordered map of CSS custom properties.
//!
//! # Overview
//!
//! The pipeline has two pure stages:
//!
//! 1. **Derivation** ([`derive_theme`]): seed color string → [`Theme`],
//!    a light/dark [`Scheme`] pair plus the six standard tonal palettes.
//!    An empty or unparseable seed yields no theme rather than an error.
//! 2. **Projection** ([`project_style`]): [`Theme`] + [`ThemeOptions`] →
//!    [`CssProperties`], the `--md-sys-color-*` and `--md-ref-palette-*`
//!    custom properties in a deterministic insertion order.
//!
//! # Example
//!
//! ```rust
//! use tonik_theme::{derive_theme, project_style, ThemeOptions};
//!
//! let theme = derive_theme("#FF6750A4");
//! let options = ThemeOptions {
//!     palette_tones: Some(vec![20, 50, 80]),
//!     ..ThemeOptions::default()
//! };
//!
//! let style = project_style(theme.as_ref(), &options).unwrap();
//! assert!(style.contains_key("--md-sys-color-primary"));
//! assert!(style.contains_key("--md-ref-palette-primary-primary50"));
//! ```

mod options;
mod scheme;
mod style;
mod theme;

pub use options::ThemeOptions;
pub use scheme::{Scheme, Schemes};
pub use style::{kebab_case, project_style, CssProperties};
pub use theme::{derive_theme, theme_from_source_color, Theme};
