//! Address-state collaborator
//!
//! The router/navigation subsystem is external; the store only needs to
//! read query and path parameters and atomically replace the query.

use indexmap::IndexMap;
use thiserror::Error;

/// Ordered query-parameter map.
pub type QueryMap = IndexMap<String, String>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("address update rejected: {0}")]
    Rejected(String),
}

/// The externally-owned address state the store synchronizes with.
pub trait AddressState {
    /// Read a single query parameter.
    fn query(&self, key: &str) -> Option<String>;

    /// Snapshot of the full query, in parameter order.
    fn query_map(&self) -> QueryMap;

    /// Read a path parameter (e.g. the workspace name segment).
    fn path_param(&self, key: &str) -> Option<String>;

    /// Atomically replace the whole query, leaving the path untouched.
    fn replace_query(&mut self, query: QueryMap) -> Result<(), AddressError>;
}

/// In-process address state, used by tests and headless embedding.
#[derive(Clone, Debug, Default)]
pub struct MemoryAddress {
    query: QueryMap,
    params: IndexMap<String, String>,
    replace_count: usize,
}

impl MemoryAddress {
    /// Pre-populate a query parameter.
    pub fn set_query_param(&mut self, key: &str, value: &str) {
        self.query.insert(key.to_string(), value.to_string());
    }

    /// Pre-populate a path parameter.
    pub fn set_path_param(&mut self, key: &str, value: &str) {
        self.params.insert(key.to_string(), value.to_string());
    }

    /// Number of `replace_query` commits observed.
    pub fn replace_count(&self) -> usize {
        self.replace_count
    }
}

impl AddressState for MemoryAddress {
    fn query(&self, key: &str) -> Option<String> {
        self.query.get(key).cloned()
    }

    fn query_map(&self) -> QueryMap {
        self.query.clone()
    }

    fn path_param(&self, key: &str) -> Option<String> {
        self.params.get(key).cloned()
    }

    fn replace_query(&mut self, query: QueryMap) -> Result<(), AddressError> {
        self.query = query;
        self.replace_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_swaps_query_and_keeps_path() {
        let mut address = MemoryAddress::default();
        address.set_query_param("color", "#112233");
        address.set_path_param("name", "atelier");

        let mut next = QueryMap::new();
        next.insert("mode".to_string(), "light".to_string());
        address.replace_query(next).unwrap();

        assert_eq!(address.query("color"), None);
        assert_eq!(address.query("mode").as_deref(), Some("light"));
        assert_eq!(address.path_param("name").as_deref(), Some("atelier"));
        assert_eq!(address.replace_count(), 1);
    }
}
