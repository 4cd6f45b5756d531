use std::collections::HashMap;
use std::sync::Mutex;

/// Best-effort key-value memoization store, keyed by canonical URL.
///
/// No TTL and no eviction policy: entries stay until the process ends
/// or the owner clears them. The contract only promises that `get`
/// may return absent, never that it must, so a bounded policy could
/// be added later without breaking callers. Writes are
/// last-write-wins with no ordering tied to request issuance.
#[derive(Debug, Default)]
pub struct Cache<V> {
    store: Mutex<HashMap<String, V>>,
}

impl<V: Clone> Cache<V> {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
        }
    }

    /// Non-blocking lookup; absent means "go fetch", never triggers
    /// a fetch itself.
    pub fn get(&self, key: &str) -> Option<V> {
        self.store.lock().unwrap().get(key).cloned()
    }

    pub fn put(&self, key: &str, value: V) {
        self.store.lock().unwrap().insert(key.to_string(), value);
    }

    pub fn remove(&self, key: &str) -> Option<V> {
        self.store.lock().unwrap().remove(key)
    }

    pub fn clear(&self) {
        self.store.lock().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.store.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().unwrap().is_empty()
    }
}
