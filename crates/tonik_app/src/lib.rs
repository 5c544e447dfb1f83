//! Tonik application layer
//!
//! Composes the route-bound preference store with caller-supplied theme
//! defaults: [`AppTheme`] owns the merged option set, back-fills the store
//! once at startup, and exposes the derived theme and its CSS projection
//! as values that recompute when the underlying preferences change.
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, RwLock};
//! use tonik_app::AppTheme;
//! use tonik_route::{MemoryAddress, RouteStore};
//! use tonik_theme::ThemeOptions;
//!
//! let address = Arc::new(RwLock::new(MemoryAddress::default()));
//! let store = Arc::new(RouteStore::new(address));
//!
//! let app_theme = AppTheme::new(store, ThemeOptions {
//!     hex_source_color: Some("#FF6750A4".to_string()),
//!     ..ThemeOptions::default()
//! });
//!
//! let style = app_theme.style().unwrap();
//! assert!(style.contains_key("--md-sys-color-primary"));
//! ```

mod config;
mod theme;

pub use config::{AppConfig, ConfigError};
pub use theme::AppTheme;
