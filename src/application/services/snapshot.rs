use crate::domain::errors::DomainResult;
use crate::domain::ports::key_value_store::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Outcome of reading a persisted collection at startup
#[derive(Debug)]
pub enum Snapshot<T> {
    Loaded(Vec<T>),
    Missing,
    /// A value was stored but did not decode; it is left in place until the
    /// next write replaces it
    Unreadable(String),
}

pub async fn read_snapshot<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> DomainResult<Snapshot<T>> {
    let Some(raw) = store.get(key).await? else {
        return Ok(Snapshot::Missing);
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) => Ok(Snapshot::Loaded(items)),
        Err(e) => Ok(Snapshot::Unreadable(e.to_string())),
    }
}

/// Encode and write a full collection. Nothing is written if encoding fails.
pub async fn write_snapshot<T: Serialize + Sync>(
    store: &dyn KeyValueStore,
    key: &str,
    items: &[T],
) -> DomainResult<()> {
    let encoded = serde_json::to_string(items)?;
    store.set(key, &encoded).await?;
    tracing::debug!("Persisted {} records under {}", items.len(), key);
    Ok(())
}
