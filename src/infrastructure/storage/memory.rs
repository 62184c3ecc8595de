use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::key_value_store::KeyValueStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Process-local store. Nothing survives a restart.
#[derive(Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, String>>,
    writes: AtomicUsize,
    fail_writes: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `set` calls so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Make every following `set` fail with a storage error
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Storage(format!(
                "Write rejected for key {}",
                key
            )));
        }
        self.entries().insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn remove(&self, key: &str) -> DomainResult<()> {
        self.entries().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    #[test]
    fn test_set_get_remove() {
        let store = InMemoryStore::new();
        block_on(store.set("agents", "[]")).unwrap();
        assert_eq!(block_on(store.get("agents")).unwrap().as_deref(), Some("[]"));
        assert_eq!(store.write_count(), 1);

        block_on(store.remove("agents")).unwrap();
        assert!(block_on(store.get("agents")).unwrap().is_none());
    }

    #[test]
    fn test_failing_writes_keep_previous_value() {
        let store = InMemoryStore::new();
        block_on(store.set("theme", "light")).unwrap();

        store.fail_writes(true);
        assert!(block_on(store.set("theme", "dark")).is_err());
        assert_eq!(
            block_on(store.get("theme")).unwrap().as_deref(),
            Some("light")
        );
        assert_eq!(store.write_count(), 1);
    }
}
