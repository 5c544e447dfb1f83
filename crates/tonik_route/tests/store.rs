use std::sync::{Arc, RwLock};
use std::time::Duration;

use pretty_assertions::assert_eq;
use tonik_route::{
    AddressError, AddressState, ManualClock, MemoryAddress, QueryMap, RouteStore,
    FLUSH_MAX_WAIT, FLUSH_QUIET_PERIOD,
};

type SharedAddress<A> = Arc<RwLock<A>>;

fn store_with_clock() -> (
    RouteStore<MemoryAddress, ManualClock>,
    SharedAddress<MemoryAddress>,
    ManualClock,
) {
    let address = Arc::new(RwLock::new(MemoryAddress::default()));
    let clock = ManualClock::start();
    let store = RouteStore::with_clock(Arc::clone(&address), clock.clone());
    (store, address, clock)
}

#[test]
fn getters_read_only_committed_state() {
    let (store, _address, clock) = store_with_clock();

    store.set_seed_color(Some("#AABBCCDD"));

    // The staged value is invisible before the flush lands.
    assert_eq!(store.seed_color(), None);
    assert!(store.has_pending());

    clock.advance(FLUSH_QUIET_PERIOD);
    assert!(store.tick());
    assert_eq!(store.seed_color().as_deref(), Some("#AABBCCDD"));
    assert!(!store.has_pending());
}

#[test]
fn tick_before_the_quiet_period_does_not_flush() {
    let (store, address, clock) = store_with_clock();

    store.set_seed_color(Some("#112233"));
    clock.advance(Duration::from_millis(50));
    assert!(!store.tick());
    assert_eq!(address.read().unwrap().replace_count(), 0);
}

#[test]
fn sibling_writes_in_one_quiet_period_flush_as_one_update() {
    let (store, address, clock) = store_with_clock();

    store.set_seed_color(Some("#AABBCCDD"));
    clock.advance(Duration::from_millis(30));
    store.set_workspace_name("atelier");

    clock.advance(FLUSH_QUIET_PERIOD);
    assert!(store.tick());

    let address = address.read().unwrap();
    assert_eq!(address.replace_count(), 1);
    assert_eq!(address.query("color").as_deref(), Some("#AABBCCDD"));
    assert_eq!(address.query("name").as_deref(), Some("atelier"));
}

#[test]
fn flush_preserves_unrelated_query_parameters() {
    let (store, address, clock) = store_with_clock();
    address
        .write()
        .unwrap()
        .set_query_param("utm_source", "newsletter");

    store.set_dark_mode_enabled(false);
    clock.advance(FLUSH_QUIET_PERIOD);
    assert!(store.tick());

    let address = address.read().unwrap();
    assert_eq!(address.query("utm_source").as_deref(), Some("newsletter"));
    assert_eq!(address.query("mode").as_deref(), Some("light"));
}

#[test]
fn last_write_to_the_same_key_wins() {
    let (store, address, clock) = store_with_clock();

    store.set_seed_color(Some("#111111"));
    clock.advance(Duration::from_millis(10));
    store.set_seed_color(Some("#222222"));

    clock.advance(FLUSH_QUIET_PERIOD);
    assert!(store.tick());

    let address = address.read().unwrap();
    assert_eq!(address.replace_count(), 1);
    assert_eq!(address.query("color").as_deref(), Some("#222222"));
}

#[test]
fn continuous_writes_are_forced_out_at_the_max_wait_ceiling() {
    let (store, address, clock) = store_with_clock();

    // A write every 50 ms: the quiet period never elapses.
    for i in 0..10 {
        store.set_workspace_name(&format!("draft-{i}"));
        assert!(!store.tick());
        clock.advance(Duration::from_millis(50));
    }

    // 500 ms since the burst opened: the ceiling forces the flush even
    // though the last write was only 50 ms ago.
    assert!(store.tick());
    let address = address.read().unwrap();
    assert_eq!(address.replace_count(), 1);
    assert_eq!(address.query("name").as_deref(), Some("draft-9"));

    // Sanity-check the constants the scenario depends on.
    assert_eq!(FLUSH_QUIET_PERIOD, Duration::from_millis(100));
    assert_eq!(FLUSH_MAX_WAIT, Duration::from_millis(500));
}

#[test]
fn dark_mode_defaults_to_true_when_mode_is_absent() {
    let (store, address, _clock) = store_with_clock();
    assert!(store.dark_mode_enabled());

    address.write().unwrap().set_query_param("mode", "dark");
    assert!(store.dark_mode_enabled());

    // Any value other than the literal "light" still means dark.
    address.write().unwrap().set_query_param("mode", "midnight");
    assert!(store.dark_mode_enabled());

    address.write().unwrap().set_query_param("mode", "light");
    assert!(!store.dark_mode_enabled());
}

#[test]
fn workspace_name_reads_the_path_parameter() {
    let (store, address, _clock) = store_with_clock();
    assert_eq!(store.workspace_name(), "");

    address.write().unwrap().set_path_param("name", "atelier");
    assert_eq!(store.workspace_name(), "atelier");
}

#[test]
fn unset_seed_color_stages_an_empty_string() {
    let (store, address, clock) = store_with_clock();
    address.write().unwrap().set_query_param("color", "#DEADBE");

    store.set_seed_color(None);
    clock.advance(FLUSH_QUIET_PERIOD);
    assert!(store.tick());

    assert_eq!(store.seed_color().as_deref(), Some(""));
    assert_eq!(address.read().unwrap().replace_count(), 1);
}

#[test]
fn revision_advances_once_per_committed_flush() {
    let (store, _address, clock) = store_with_clock();
    assert_eq!(store.revision(), 0);

    store.set_seed_color(Some("#111111"));
    store.set_workspace_name("a");
    clock.advance(FLUSH_QUIET_PERIOD);
    assert!(store.tick());
    assert_eq!(store.revision(), 1);

    store.set_workspace_name("b");
    clock.advance(FLUSH_QUIET_PERIOD);
    assert!(store.tick());
    assert_eq!(store.revision(), 2);
}

/// Address state that rejects a configurable number of commits.
#[derive(Default)]
struct FlakyAddress {
    inner: MemoryAddress,
    failures_left: usize,
}

impl AddressState for FlakyAddress {
    fn query(&self, key: &str) -> Option<String> {
        self.inner.query(key)
    }

    fn query_map(&self) -> QueryMap {
        self.inner.query_map()
    }

    fn path_param(&self, key: &str) -> Option<String> {
        self.inner.path_param(key)
    }

    fn replace_query(&mut self, query: QueryMap) -> Result<(), AddressError> {
        if self.failures_left > 0 {
            self.failures_left -= 1;
            return Err(AddressError::Rejected("navigation cancelled".to_string()));
        }
        self.inner.replace_query(query)
    }
}

#[test]
fn failed_commit_keeps_the_buffer_for_the_next_tick() {
    let address = Arc::new(RwLock::new(FlakyAddress {
        failures_left: 1,
        ..FlakyAddress::default()
    }));
    let clock = ManualClock::start();
    let store = RouteStore::with_clock(Arc::clone(&address), clock.clone());

    store.set_seed_color(Some("#ABCDEF"));
    clock.advance(FLUSH_QUIET_PERIOD);

    // First attempt fails; nothing committed, buffer retained.
    assert!(!store.tick());
    assert_eq!(store.seed_color(), None);
    assert!(store.has_pending());
    assert_eq!(store.revision(), 0);

    // Next due tick retries and lands.
    clock.advance(FLUSH_QUIET_PERIOD);
    assert!(store.tick());
    assert_eq!(store.seed_color().as_deref(), Some("#ABCDEF"));
    assert_eq!(store.revision(), 1);
}
