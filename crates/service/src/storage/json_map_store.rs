use std::{collections::HashMap, hash::Hash, path::PathBuf, sync::Arc};
use tokio::{fs, sync::RwLock};
use tracing::warn;

use crate::errors::ServiceError;

/// Generic key-value map store, optionally backed by a JSON file.
///
/// Keeps a `HashMap<K, V>` in memory. When a file path is configured every
/// write is flushed to disk before returning, so a completed write is durable.
#[derive(Clone)]
pub struct JsonMapStore<K, V> {
    inner: Arc<RwLock<HashMap<K, V>>>,
    file_path: Option<PathBuf>,
}

impl<K, V> JsonMapStore<K, V>
where
    K: Eq + Hash + serde::Serialize + serde::de::DeserializeOwned + Clone,
    V: serde::Serialize + serde::de::DeserializeOwned + Clone,
{
    /// Initialize the store from a path. Creates the file with an empty map if
    /// missing; an existing file that does not parse is an error and is left
    /// untouched on disk.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let map: HashMap<K, V> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ServiceError::store(format!("unreadable store file {}: {e}", file_path.display()))
            })?,
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                return Err(ServiceError::store(format!("cannot read {}: {e}", file_path.display())));
            }
            Err(_) => {
                let empty: HashMap<K, V> = HashMap::new();
                fs::write(&file_path, serde_json::to_vec(&empty).map_err(ServiceError::store)?)
                    .await
                    .map_err(ServiceError::store)?;
                empty
            }
        };

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(map)), file_path: Some(file_path) }))
    }

    /// Store that never touches disk.
    pub fn in_memory() -> Arc<Self> {
        Arc::new(Self { inner: Arc::new(RwLock::new(HashMap::new())), file_path: None })
    }

    async fn save(&self, map: &HashMap<K, V>) -> Result<(), ServiceError> {
        let Some(path) = &self.file_path else { return Ok(()) };
        let data = serde_json::to_vec(map).map_err(ServiceError::store)?;
        fs::write(path, data).await.map_err(ServiceError::store)?;
        Ok(())
    }

    /// List all values, in map order.
    pub async fn values(&self) -> Vec<V> {
        let map = self.inner.read().await;
        map.values().cloned().collect()
    }

    /// Get value by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Insert or update a value by key and persist.
    pub async fn insert(&self, key: K, value: V) -> Result<(), ServiceError> {
        self.insert_many(vec![(key, value)]).await
    }

    /// Insert or update several entries, persisting once.
    ///
    /// The write lock is held across the flush so concurrent writers cannot
    /// interleave a stale snapshot onto disk. The in-memory map only changes
    /// after the flush succeeds.
    pub async fn insert_many(&self, entries: Vec<(K, V)>) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        let mut next = map.clone();
        next.extend(entries);
        if let Err(e) = self.save(&next).await {
            warn!(error = %e, "store flush failed; write discarded");
            return Err(e);
        }
        *map = next;
        Ok(())
    }
}
