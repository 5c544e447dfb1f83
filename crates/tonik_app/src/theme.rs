//! Theme orchestration
//!
//! `AppTheme` wires caller defaults into the route-bound preference store
//! and keeps the derived theme in step with it. The store is the
//! authority once it holds a value; the merged defaults only seed it and
//! fill the gaps while it is empty.

use std::sync::{Arc, Mutex};

use tonik_route::{AddressState, Clock, RouteStore, SystemClock};
use tonik_theme::{derive_theme, project_style, CssProperties, Theme, ThemeOptions};

/// Derived-theme cache keyed by the effective seed string.
#[derive(Default)]
struct ThemeCache {
    seed: Option<String>,
    theme: Option<Theme>,
}

/// The theme orchestrator.
///
/// Reads flow store-first: `theme()` and `theme_options()` consult the
/// live preference store and fall back to the merged defaults only where
/// the store holds nothing.
pub struct AppTheme<A: AddressState, C: Clock = SystemClock> {
    store: Arc<RouteStore<A, C>>,
    merged: ThemeOptions,
    cache: Mutex<ThemeCache>,
}

impl<A: AddressState, C: Clock> AppTheme<A, C> {
    /// Merge `options` over the built-in defaults and seed the store.
    ///
    /// Back-filling is one-time: fields the store already holds are left
    /// alone, and from then on the store wins. The dark-mode back-fill
    /// triggers whenever the store reads falsy (an explicit `mode=light`
    /// included), mirroring the bound-field semantics.
    pub fn new(store: Arc<RouteStore<A, C>>, options: ThemeOptions) -> Self {
        let merged = options.merge_over(&ThemeOptions::defaults());

        let seed_empty = store.seed_color().map_or(true, |c| c.is_empty());
        if seed_empty {
            if let Some(seed) = merged.hex_source_color.as_deref() {
                tracing::debug!(seed, "seeding store from merged defaults");
                store.set_seed_color(Some(seed));
            }
        }

        if !store.dark_mode_enabled() {
            store.set_dark_mode_enabled(merged.is_dark_mode_enabled.unwrap_or(true));
        }

        Self {
            store,
            merged,
            cache: Mutex::new(ThemeCache::default()),
        }
    }

    /// The preference store this orchestrator is bound to.
    pub fn store(&self) -> &Arc<RouteStore<A, C>> {
        &self.store
    }

    /// Seed color the derivation currently uses: the store's committed
    /// value when it holds one, otherwise the merged default.
    pub fn effective_seed(&self) -> Option<String> {
        match self.store.seed_color() {
            Some(color) if !color.is_empty() => Some(color),
            _ => self.merged.hex_source_color.clone(),
        }
    }

    /// The derived theme. Recomputed only when the effective seed
    /// changes; `None` while no usable seed exists.
    pub fn theme(&self) -> Option<Theme> {
        let seed = self.effective_seed();

        let mut cache = self.cache.lock().unwrap();
        if cache.seed != seed {
            cache.theme = seed.as_deref().and_then(derive_theme);
            cache.seed = seed;
        }
        cache.theme.clone()
    }

    /// The live, authoritative option set: merged defaults with the seed
    /// color and dark-mode flag overridden by current store values.
    pub fn theme_options(&self) -> ThemeOptions {
        let mut options = self.merged.clone();
        options.hex_source_color = self.effective_seed();
        options.is_dark_mode_enabled = Some(self.store.dark_mode_enabled());
        options
    }

    /// CSS projection of the current theme under the current options.
    pub fn style(&self) -> Option<CssProperties> {
        project_style(self.theme().as_ref(), &self.theme_options())
    }

    /// Toggle between the light and dark scheme.
    ///
    /// Declared for API completeness; not wired up yet. Calling it is a
    /// no-op and never fails.
    pub fn toggle_theme_mode(&self) {
        tracing::trace!("toggle_theme_mode called; mode toggling is not wired up yet");
    }
}
