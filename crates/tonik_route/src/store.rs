//! The synchronized preference store

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use crate::address::{AddressState, QueryMap};
use crate::clock::{Clock, SystemClock};
use crate::debounce::DebounceWindow;

/// Quiet gap after the last staged write before a flush fires.
pub const FLUSH_QUIET_PERIOD: Duration = Duration::from_millis(100);

/// Ceiling on how long a continuous write burst can defer its flush.
pub const FLUSH_MAX_WAIT: Duration = Duration::from_millis(500);

const QUERY_COLOR: &str = "color";
const QUERY_MODE: &str = "mode";
const PARAM_NAME: &str = "name";

#[derive(Debug, Default)]
struct Pending {
    writes: QueryMap,
    window: DebounceWindow,
}

/// Reactive store binding three preference fields to the address state.
///
/// Getters read the live, committed address state; staged-but-unflushed
/// writes are deliberately invisible until the debounced flush commits
/// them. Setters share one pending-write buffer and one debounce window,
/// so sibling fields changed within a quiet period land in a single
/// query replacement.
pub struct RouteStore<A: AddressState, C: Clock = SystemClock> {
    address: Arc<RwLock<A>>,
    clock: C,
    pending: Mutex<Pending>,
    revision: AtomicU64,
}

impl<A: AddressState> RouteStore<A> {
    pub fn new(address: Arc<RwLock<A>>) -> Self {
        Self::with_clock(address, SystemClock)
    }
}

impl<A: AddressState, C: Clock> RouteStore<A, C> {
    pub fn with_clock(address: Arc<RwLock<A>>, clock: C) -> Self {
        Self {
            address,
            clock,
            pending: Mutex::new(Pending::default()),
            revision: AtomicU64::new(0),
        }
    }

    // ========== Bound fields ==========

    /// Committed seed color, from the `color` query parameter.
    pub fn seed_color(&self) -> Option<String> {
        self.address.read().unwrap().query(QUERY_COLOR)
    }

    /// Stage the seed color (`None` stages an empty string).
    pub fn set_seed_color(&self, value: Option<&str>) {
        self.stage(QUERY_COLOR, value.unwrap_or(""));
    }

    /// Committed dark-mode flag. Dark unless the `mode` parameter is
    /// literally `"light"`; an absent parameter means dark.
    pub fn dark_mode_enabled(&self) -> bool {
        self.address.read().unwrap().query(QUERY_MODE).as_deref() != Some("light")
    }

    pub fn set_dark_mode_enabled(&self, enabled: bool) {
        self.stage(QUERY_MODE, if enabled { "dark" } else { "light" });
    }

    /// Committed workspace name, from the `name` path parameter. Defaults
    /// to the empty string.
    pub fn workspace_name(&self) -> String {
        self.address
            .read()
            .unwrap()
            .path_param(PARAM_NAME)
            .unwrap_or_default()
    }

    pub fn set_workspace_name(&self, name: &str) {
        self.stage(PARAM_NAME, name);
    }

    // ========== Flush discipline ==========

    /// Pump the debounce window: commit the pending buffer if a flush is
    /// due. Returns whether a commit happened.
    pub fn tick(&self) -> bool {
        let now = self.clock.now();
        {
            let pending = self.pending.lock().unwrap();
            if !pending.window.due(now, FLUSH_QUIET_PERIOD, FLUSH_MAX_WAIT) {
                return false;
            }
        }
        self.flush_now()
    }

    /// Commit the pending buffer immediately, bypassing the debounce
    /// window. Returns whether a commit happened.
    pub fn flush_now(&self) -> bool {
        let staged = {
            let mut pending = self.pending.lock().unwrap();
            pending.window.clear();
            if pending.writes.is_empty() {
                return false;
            }
            std::mem::take(&mut pending.writes)
        };

        let mut address = self.address.write().unwrap();

        // Merge over the live query so unrelated parameters survive;
        // the staged buffer wins on conflicts.
        let mut query = address.query_map();
        for (key, value) in &staged {
            query.insert(key.clone(), value.clone());
        }

        match address.replace_query(query) {
            Ok(()) => {
                let revision = self.revision.fetch_add(1, Ordering::SeqCst) + 1;
                tracing::debug!(revision, count = staged.len(), "flushed staged preferences");
                true
            }
            Err(err) => {
                drop(address);
                tracing::warn!(%err, "address update failed, keeping staged writes");
                // Writes staged after the take stay newer than the failed
                // batch, so only backfill keys that are not re-staged.
                let mut pending = self.pending.lock().unwrap();
                for (key, value) in staged {
                    pending.writes.entry(key).or_insert(value);
                }
                let now = self.clock.now();
                pending.window.record(now);
                false
            }
        }
    }

    /// Whether any writes are staged and awaiting a flush.
    pub fn has_pending(&self) -> bool {
        let pending = self.pending.lock().unwrap();
        !pending.writes.is_empty() || pending.window.is_open()
    }

    /// Monotonic counter bumped on every committed flush. Derived values
    /// key their caches off this.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }

    fn stage(&self, key: &str, value: &str) {
        let now = self.clock.now();
        let mut pending = self.pending.lock().unwrap();
        pending.writes.insert(key.to_string(), value.to_string());
        pending.window.record(now);
        tracing::trace!(key, value, "staged preference write");
    }
}
