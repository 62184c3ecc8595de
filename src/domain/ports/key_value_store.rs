use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Flat string key/value namespace the stores persist their snapshots into.
///
/// Every `set` replaces the previous value for the key in full.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> DomainResult<()>;

    /// Remove `key`; removing an absent key is not an error
    async fn remove(&self, key: &str) -> DomainResult<()>;
}

/// Keys under which the three persisted values live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub tickets: String,
    pub agents: String,
    pub theme: String,
}

impl StorageKeys {
    /// Keys prefixed with `namespace:`; an empty namespace keeps the bare names
    pub fn with_namespace(namespace: &str) -> Self {
        let key = |name: &str| {
            if namespace.is_empty() {
                name.to_string()
            } else {
                format!("{}:{}", namespace, name)
            }
        };

        Self {
            tickets: key("tickets"),
            agents: key("agents"),
            theme: key("theme"),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::with_namespace("")
    }
}
