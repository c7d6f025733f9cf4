use std::{path::Path, sync::Arc};

use async_trait::async_trait;
use models::Document;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::storage::json_map_store::JsonMapStore;

/// Storage-access collaborator for one collection.
///
/// Every call is a suspension point; failures surface as `ServiceError::Store`.
#[async_trait]
pub trait Repository<E: Document>: Send + Sync {
    async fn list(&self) -> Result<Vec<E>, ServiceError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<E>, ServiceError>;
    /// Upsert; assigns an id when the entity has none.
    async fn save(&self, entity: E) -> Result<E, ServiceError>;
    async fn save_all(&self, entities: Vec<E>) -> Result<Vec<E>, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
}

pub type SharedRepository<E> = Arc<dyn Repository<E>>;

/// Document repository keyed by id, over a [`JsonMapStore`].
pub struct DocumentRepository<E> {
    store: Arc<JsonMapStore<String, E>>,
}

impl<E: Document> DocumentRepository<E> {
    pub fn in_memory() -> Self {
        Self { store: JsonMapStore::in_memory() }
    }

    /// File-backed repository at `<data_dir>/<collection>.json`.
    pub async fn open(data_dir: &Path) -> Result<Self, ServiceError> {
        let path = data_dir.join(format!("{}.json", E::COLLECTION));
        Ok(Self { store: JsonMapStore::new(path).await? })
    }

    fn assign_id(entity: &mut E) -> String {
        match entity.id() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => {
                let id = Uuid::new_v4().simple().to_string();
                entity.set_id(id.clone());
                id
            }
        }
    }
}

#[async_trait]
impl<E: Document> Repository<E> for DocumentRepository<E> {
    async fn list(&self) -> Result<Vec<E>, ServiceError> {
        Ok(self.store.values().await)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<E>, ServiceError> {
        Ok(self.store.get(&id.to_string()).await)
    }

    async fn save(&self, mut entity: E) -> Result<E, ServiceError> {
        let id = Self::assign_id(&mut entity);
        self.store.insert(id, entity.clone()).await?;
        Ok(entity)
    }

    async fn save_all(&self, entities: Vec<E>) -> Result<Vec<E>, ServiceError> {
        let saved: Vec<E> = entities
            .into_iter()
            .map(|mut e| {
                Self::assign_id(&mut e);
                e
            })
            .collect();
        let entries = saved
            .iter()
            .filter_map(|e| e.id().map(|id| (id.to_string(), e.clone())))
            .collect();
        self.store.insert_many(entries).await?;
        Ok(saved)
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(self.store.len().await as u64)
    }
}
