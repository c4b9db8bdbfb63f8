//! Registry of mock queues.
//!
//! `MockRegistry` owns every queue and entry. Queues are reachable two ways:
//! by (method, path) for serving, and by id for targeted removal. Both indexes
//! are kept in lockstep: an id is present exactly while its queue is live.

use crate::mocks::queue::MockQueue;
use crate::types::entry::{MockEntry, MockResponse};
use crate::types::id::MockId;
use crate::types::method::STANDARD_METHODS;
use std::collections::HashMap;
use std::fmt::Write as _;

/// Paths registered for one method, kept in insertion order.
#[derive(Debug, Clone, Default)]
struct PathTable {
    order: Vec<String>,
    queues: HashMap<String, MockQueue>,
}

impl PathTable {
    fn get_mut(&mut self, path: &str) -> Option<&mut MockQueue> {
        self.queues.get_mut(path)
    }

    fn insert(&mut self, path: &str, queue: MockQueue) {
        if self.queues.insert(path.to_owned(), queue).is_none() {
            self.order.push(path.to_owned());
        }
    }

    fn remove(&mut self, path: &str) -> Option<MockQueue> {
        let removed = self.queues.remove(path)?;
        self.order.retain(|p| p != path);
        Some(removed)
    }
}

/// Diagnostic listing of one method and its registered paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSummary {
    pub method: String,
    pub paths: Vec<String>,
}

/// In-memory store of mock queues keyed by method and path.
#[derive(Debug, Clone)]
pub struct MockRegistry {
    /// Methods in listing order: the standard five, then custom verbs as first seen
    methods: Vec<String>,
    /// Method -> path -> queue
    by_method_and_path: HashMap<String, PathTable>,
    /// Queue id -> (method, path)
    by_id: HashMap<MockId, (String, String)>,
}

impl MockRegistry {
    /// Create an empty registry seeded with the standard methods.
    pub fn new() -> Self {
        Self {
            methods: STANDARD_METHODS.iter().map(|m| m.to_string()).collect(),
            by_method_and_path: STANDARD_METHODS
                .iter()
                .map(|m| (m.to_string(), PathTable::default()))
                .collect(),
            by_id: HashMap::new(),
        }
    }

    /// Append `entry` to the queue for (method, path), creating the queue if needed.
    ///
    /// Returns the queue id. A fresh id is only allocated when the queue is created.
    pub fn register(&mut self, method: &str, path: &str, entry: MockEntry) -> MockId {
        if !self.by_method_and_path.contains_key(method) {
            tracing::debug!(method, "registering custom method");
            self.methods.push(method.to_owned());
            self.by_method_and_path
                .insert(method.to_owned(), PathTable::default());
        }
        let table = self
            .by_method_and_path
            .entry(method.to_owned())
            .or_default();

        if let Some(queue) = table.get_mut(path) {
            queue.push(entry);
            tracing::debug!(
                mock_id = %queue.id(),
                method,
                path,
                queued = queue.len(),
                "appended mock entry"
            );
            return queue.id();
        }

        let id = MockId::next();
        table.insert(path, MockQueue::new(id, entry));
        self.by_id.insert(id, (method.to_owned(), path.to_owned()));
        tracing::debug!(mock_id = %id, method, path, "created mock queue");
        id
    }

    /// Serve the next pending response for (method, path).
    ///
    /// Returns `None` when nothing is registered. When the served entry was the
    /// last one in its queue, the queue and its id are dropped in the same call.
    pub fn consume(&mut self, method: &str, path: &str) -> Option<MockResponse> {
        let table = self.by_method_and_path.get_mut(method)?;
        let queue = table.get_mut(path)?;
        let response = queue.consume();

        if queue.is_empty() {
            let id = queue.id();
            table.remove(path);
            self.by_id.remove(&id);
            tracing::debug!(mock_id = %id, method, path, "mock queue exhausted");
        }

        response
    }

    /// Drop the queue with the given id. Unknown ids are ignored.
    pub fn remove_by_id(&mut self, id: MockId) {
        let Some((method, path)) = self.by_id.remove(&id) else {
            tracing::debug!(mock_id = %id, "reset of unknown mock id ignored");
            return;
        };
        if let Some(table) = self.by_method_and_path.get_mut(&method) {
            table.remove(&path);
        }
        tracing::debug!(mock_id = %id, %method, %path, "mock queue removed");
    }

    /// Clear every queue. Custom methods are forgotten; ids keep increasing.
    pub fn reset_all(&mut self) {
        *self = Self::new();
        tracing::debug!("all mocks reset");
    }

    /// Methods with their currently registered paths, in listing order.
    pub fn list_summary(&self) -> Vec<MethodSummary> {
        self.methods
            .iter()
            .map(|method| MethodSummary {
                method: method.clone(),
                paths: self
                    .by_method_and_path
                    .get(method)
                    .map(|t| t.order.clone())
                    .unwrap_or_default(),
            })
            .collect()
    }

    /// Plain-text listing: `METHOD:` per method, ` path` per registered path.
    pub fn format_summary(&self) -> String {
        let mut out = String::new();
        for summary in self.list_summary() {
            let _ = writeln!(out, "{}:", summary.method);
            for path in summary.paths {
                let _ = writeln!(out, " {}", path);
            }
        }
        out
    }

    /// Look up the (method, path) a live queue is registered under.
    #[cfg(test)]
    fn location_of(&self, id: MockId) -> Option<(&str, &str)> {
        self.by_id
            .get(&id)
            .map(|(method, path)| (method.as_str(), path.as_str()))
    }

    /// Number of live queues.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Methods registered beyond the standard five.
    #[cfg(test)]
    fn custom_methods(&self) -> impl Iterator<Item = &str> {
        self.methods
            .iter()
            .map(String::as_str)
            .filter(|m| !STANDARD_METHODS.contains(m))
    }
}

impl Default for MockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::entry::UseLimit;
    use rstest::rstest;

    fn entry(body: &'static str, limit: u32) -> MockEntry {
        MockEntry::new(
            MockResponse::new(
                200,
                vec![("content-type".into(), "application/json".into())],
                body,
            ),
            UseLimit::from_count(limit),
        )
    }

    /// Every live queue has an id entry and every id entry points at a live queue.
    fn assert_indexes_consistent(registry: &MockRegistry) {
        let mut live = 0;
        for (method, table) in &registry.by_method_and_path {
            assert_eq!(table.order.len(), table.queues.len());
            for (path, queue) in &table.queues {
                assert_eq!(
                    registry.location_of(queue.id()),
                    Some((method.as_str(), path.as_str()))
                );
                live += 1;
            }
        }
        assert_eq!(live, registry.by_id.len());
    }

    #[rstest]
    #[case("GET", "/never")]
    #[case("COPY", "/api")]
    #[case("POST", "")]
    fn test_consume_unregistered_is_none(#[case] method: &str, #[case] path: &str) {
        let mut registry = MockRegistry::new();
        assert_eq!(registry.consume(method, path), None);
    }

    #[rstest]
    fn test_register_then_consume_once() {
        let mut registry = MockRegistry::new();
        registry.register("GET", "/api", entry(r#"{"mock":"data"}"#, 1));

        let response = registry.consume("GET", "/api").expect("Should be mocked");
        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"mock":"data"}"#);
        assert_eq!(response.header("Content-Type"), Some("application/json"));

        assert_eq!(registry.consume("GET", "/api"), None);
        assert!(registry.is_empty());
        assert_indexes_consistent(&registry);
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(10)]
    fn test_limit_serves_same_entry_n_times(#[case] limit: u32) {
        let mut registry = MockRegistry::new();
        registry.register("GET", "/api", entry("same", limit));

        for _ in 0..limit {
            let response = registry.consume("GET", "/api").expect("Should be mocked");
            assert_eq!(response.body, "same");
        }
        assert_eq!(registry.consume("GET", "/api"), None);
    }

    #[rstest]
    fn test_queueing_serves_entries_in_order() {
        let mut registry = MockRegistry::new();
        let first = registry.register("GET", "/api", entry("A", 1));
        let second = registry.register("GET", "/api", entry("B", 1));
        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);

        assert_eq!(registry.consume("GET", "/api").map(|r| r.body), Some("A".into()));
        assert_eq!(registry.consume("GET", "/api").map(|r| r.body), Some("B".into()));
        assert_eq!(registry.consume("GET", "/api"), None);
        assert_indexes_consistent(&registry);
    }

    #[rstest]
    fn test_new_queue_after_expiry_gets_new_id() {
        let mut registry = MockRegistry::new();
        let first = registry.register("GET", "/api", entry("A", 1));
        registry.consume("GET", "/api");
        let second = registry.register("GET", "/api", entry("B", 1));
        assert!(second > first);
    }

    #[rstest]
    fn test_method_is_part_of_the_key() {
        let mut registry = MockRegistry::new();
        registry.register("POST", "/api", entry("posted", 1));

        assert_eq!(registry.consume("GET", "/api"), None);
        assert_eq!(registry.consume("PUT", "/api"), None);
        assert_eq!(
            registry.consume("POST", "/api").map(|r| r.body),
            Some("posted".into())
        );
    }

    #[rstest]
    fn test_remove_by_id_only_touches_target() {
        let mut registry = MockRegistry::new();
        let id = registry.register("GET", "/api", entry("A", 1));
        registry.register("GET", "/api2", entry("B", 1));

        registry.remove_by_id(id);

        assert_eq!(registry.consume("GET", "/api"), None);
        assert_eq!(registry.consume("GET", "/api2").map(|r| r.body), Some("B".into()));
        assert_indexes_consistent(&registry);
    }

    #[rstest]
    fn test_remove_by_unknown_id_is_noop() {
        let mut registry = MockRegistry::new();
        let id = registry.register("GET", "/api", entry("A", 2));
        registry.consume("GET", "/api");
        registry.consume("GET", "/api");

        registry.remove_by_id(id);
        registry.remove_by_id(MockId::next());

        assert!(registry.is_empty());
        assert_eq!(registry.format_summary(), MockRegistry::new().format_summary());
        assert_indexes_consistent(&registry);
    }

    #[rstest]
    fn test_reset_all_is_idempotent() {
        let mut registry = MockRegistry::new();
        registry.register("GET", "/api", entry("A", 1));
        registry.register("COPY", "/api", entry("B", 1));

        registry.reset_all();
        let once = registry.format_summary();
        registry.reset_all();

        assert_eq!(registry.format_summary(), once);
        assert!(registry.is_empty());
        assert_eq!(registry.custom_methods().count(), 0);
        assert_eq!(registry.consume("GET", "/api"), None);
    }

    #[rstest]
    fn test_reset_all_does_not_reuse_ids() {
        let mut registry = MockRegistry::new();
        let before = registry.register("GET", "/api", entry("A", 1));
        registry.reset_all();
        let after = registry.register("GET", "/api", entry("A", 1));
        assert!(after > before);
    }

    #[rstest]
    fn test_format_summary_single_get() {
        let mut registry = MockRegistry::new();
        registry.register("GET", "/api", entry("A", 1));
        assert_eq!(
            registry.format_summary(),
            "GET:\n /api\nPUT:\nPOST:\nPATCH:\nDELETE:\n"
        );
    }

    #[rstest]
    fn test_list_summary_orders_custom_methods_and_paths_by_insertion() {
        let mut registry = MockRegistry::new();
        registry.register("PURGE", "/cache", entry("A", 1));
        registry.register("GET", "/b", entry("B", 1));
        registry.register("GET", "/a", entry("C", 1));
        registry.register("COPY", "/x", entry("D", 1));

        let summary = registry.list_summary();
        let methods: Vec<_> = summary.iter().map(|s| s.method.as_str()).collect();
        assert_eq!(
            methods,
            vec!["GET", "PUT", "POST", "PATCH", "DELETE", "PURGE", "COPY"]
        );
        assert_eq!(summary[0].paths, vec!["/b", "/a"]);
        assert_eq!(summary[5].paths, vec!["/cache"]);
        assert_eq!(
            registry.custom_methods().collect::<Vec<_>>(),
            vec!["PURGE", "COPY"]
        );
    }

    #[rstest]
    fn test_custom_method_is_servable() {
        let mut registry = MockRegistry::new();
        registry.register("COPY", "/api", entry("copied", 1));
        assert_eq!(registry.consume("GET", "/api"), None);
        assert_eq!(
            registry.consume("COPY", "/api").map(|r| r.body),
            Some("copied".into())
        );
    }

    #[rstest]
    fn test_exhausted_path_leaves_listing() {
        let mut registry = MockRegistry::new();
        registry.register("GET", "/api", entry("A", 1));
        registry.consume("GET", "/api");
        assert_eq!(
            registry.format_summary(),
            "GET:\nPUT:\nPOST:\nPATCH:\nDELETE:\n"
        );
    }
}
