//! Repository doubles for tests that need to observe writes.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use models::Document;

use crate::errors::ServiceError;
use crate::repository::{DocumentRepository, Repository};

/// In-memory repository that records every write it receives.
pub struct CountingRepository<E> {
    inner: DocumentRepository<E>,
    saves: AtomicUsize,
    saved: Mutex<Vec<E>>,
}

impl<E: Document> CountingRepository<E> {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: DocumentRepository::in_memory(),
            saves: AtomicUsize::new(0),
            saved: Mutex::new(Vec::new()),
        })
    }

    /// Insert fixtures without counting them as writes.
    pub async fn seed(&self, entities: Vec<E>) -> Result<Vec<E>, ServiceError> {
        self.inner.save_all(entities).await
    }

    /// Number of `save`/`save_all` calls so far.
    pub fn save_calls(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Entities passed to `save`/`save_all`, in call order.
    pub fn saved(&self) -> Vec<E> {
        self.saved.lock().map(|s| s.clone()).unwrap_or_default()
    }

    fn record(&self, entities: &[E]) {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut saved) = self.saved.lock() {
            saved.extend_from_slice(entities);
        }
    }
}

#[async_trait]
impl<E: Document> Repository<E> for CountingRepository<E> {
    async fn list(&self) -> Result<Vec<E>, ServiceError> {
        self.inner.list().await
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<E>, ServiceError> {
        self.inner.get_by_id(id).await
    }

    async fn save(&self, entity: E) -> Result<E, ServiceError> {
        self.record(std::slice::from_ref(&entity));
        self.inner.save(entity).await
    }

    async fn save_all(&self, entities: Vec<E>) -> Result<Vec<E>, ServiceError> {
        self.record(&entities);
        self.inner.save_all(entities).await
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        self.inner.count().await
    }
}

/// Repository whose every call fails, standing in for an unreachable store.
pub struct UnavailableRepository;

#[async_trait]
impl<E: Document> Repository<E> for UnavailableRepository {
    async fn list(&self) -> Result<Vec<E>, ServiceError> {
        Err(ServiceError::store("connection refused"))
    }

    async fn get_by_id(&self, _id: &str) -> Result<Option<E>, ServiceError> {
        Err(ServiceError::store("connection refused"))
    }

    async fn save(&self, _entity: E) -> Result<E, ServiceError> {
        Err(ServiceError::store("connection refused"))
    }

    async fn save_all(&self, _entities: Vec<E>) -> Result<Vec<E>, ServiceError> {
        Err(ServiceError::store("connection refused"))
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Err(ServiceError::store("connection refused"))
    }
}
