//! In-memory paste storage.

use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// Process-lifetime mapping from generated ids to paste text.
///
/// A single mutex guards the whole map; each operation holds the lock only
/// for the duration of the map access itself, never across a request.
#[derive(Debug, Default)]
pub struct PasteStore {
    entries: Mutex<HashMap<String, String>>,
}

impl PasteStore {
    /// Construct an empty store.
    ///
    /// # Returns
    /// A new [`PasteStore`] with no entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `text` under a freshly generated id.
    ///
    /// Ids are random UUIDv4 strings. Collision probability is treated as
    /// zero, so there is no detection retry loop.
    ///
    /// # Arguments
    /// - `text`: Paste content, stored verbatim. Caller validates
    ///   non-emptiness.
    ///
    /// # Returns
    /// The generated id.
    pub fn create(&self, text: String) -> String {
        let id = Uuid::new_v4().to_string();
        let mut entries = self.lock_entries();
        entries.insert(id.clone(), text);
        id
    }

    /// Look up the text stored under `id`.
    ///
    /// # Arguments
    /// - `id`: Paste identifier.
    ///
    /// # Returns
    /// The stored text, or `None` when the id is unknown. Absence is never
    /// an error.
    pub fn get(&self, id: &str) -> Option<String> {
        self.lock_entries().get(id).cloned()
    }

    fn lock_entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned lock only means another thread panicked mid-operation;
        // the map itself is still a valid HashMap, so recover it.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::PasteStore;

    #[test]
    fn create_then_get_round_trips_text() {
        let store = PasteStore::new();
        let id = store.create("Hello, World!".to_string());
        assert!(!id.is_empty());
        assert_eq!(store.get(&id).as_deref(), Some("Hello, World!"));
    }

    #[test]
    fn identical_text_gets_distinct_ids() {
        let store = PasteStore::new();
        let first = store.create("same".to_string());
        let second = store.create("same".to_string());
        assert_ne!(first, second);
        assert_eq!(store.get(&first).as_deref(), Some("same"));
        assert_eq!(store.get(&second).as_deref(), Some("same"));
    }

    #[test]
    fn unknown_id_returns_none() {
        let store = PasteStore::new();
        store.create("something".to_string());
        assert_eq!(store.get("nonexistent-id"), None);
    }

    #[test]
    fn stored_text_is_not_transformed() {
        let store = PasteStore::new();
        let text = "  leading space, unicode ✓, trailing newline\n";
        let id = store.create(text.to_string());
        assert_eq!(store.get(&id).as_deref(), Some(text));
    }

    #[test]
    fn concurrent_creates_all_land() {
        use std::sync::Arc;

        let store = Arc::new(PasteStore::new());
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let store = store.clone();
                std::thread::spawn(move || store.create(format!("paste-{}", n)))
            })
            .collect();

        let ids: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for (n, id) in ids.iter().enumerate() {
            assert_eq!(store.get(id).as_deref(), Some(format!("paste-{}", n).as_str()));
        }
    }
}
