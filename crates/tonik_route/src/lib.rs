//! Tonik route-bound preference store
//!
//! User preferences (seed color, dark mode, workspace name) live in the
//! address bar: the URL query is their canonical storage. This crate binds
//! them to a [`RouteStore`] whose getters read the live address state and
//! whose setters stage writes into a shared pending buffer that is flushed
//! back in one coalesced, debounced update.
//!
//! # Model
//!
//! Execution is single-threaded and cooperative, in the same spirit as the
//! rest of Tonik: setters only stage, and the owner pumps [`RouteStore::tick`]
//! to let a due flush commit through the [`AddressState`] collaborator.
//! Writes staged within one quiet period (100 ms) collapse into a single
//! query replacement; a burst of writes with no quiet gap is force-flushed
//! after 500 ms.
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, RwLock};
//! use tonik_route::{MemoryAddress, RouteStore};
//!
//! let address = Arc::new(RwLock::new(MemoryAddress::default()));
//! let store = RouteStore::new(Arc::clone(&address));
//!
//! store.set_seed_color(Some("#AABBCCDD"));
//! store.set_dark_mode_enabled(false);
//!
//! // Nothing committed yet; the flush fires from `tick` once the quiet
//! // period elapses.
//! assert_eq!(store.seed_color(), None);
//! ```

mod address;
mod clock;
mod debounce;
mod store;

pub use address::{AddressError, AddressState, MemoryAddress, QueryMap};
pub use clock::{Clock, ManualClock, SystemClock};
pub use store::{RouteStore, FLUSH_MAX_WAIT, FLUSH_QUIET_PERIOD};
