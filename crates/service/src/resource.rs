use tracing::{debug, info, instrument};

use models::Document;

use crate::errors::ServiceError;
use crate::repository::SharedRepository;

/// CRUD + partial-update contract for one collection.
///
/// Holds no state besides the repository handle; concurrent `replace`/`patch`
/// calls on the same id are not coordinated and the last write wins.
pub struct ResourceService<E: Document> {
    repo: SharedRepository<E>,
}

impl<E: Document> ResourceService<E> {
    pub fn new(repo: SharedRepository<E>) -> Self { Self { repo } }

    pub fn repository(&self) -> &SharedRepository<E> { &self.repo }

    /// All documents in store order. An empty collection is not an error.
    pub async fn list(&self) -> Result<Vec<E>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<E, ServiceError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(E::COLLECTION, id))
    }

    /// Persist every payload as a new document; payload ids are discarded.
    /// Returns how many documents were stored.
    #[instrument(skip_all, fields(collection = E::COLLECTION))]
    pub async fn create(&self, payloads: Vec<E>) -> Result<usize, ServiceError> {
        let fresh: Vec<E> = payloads
            .into_iter()
            .map(|mut e| {
                e.clear_id();
                e
            })
            .collect();
        let saved = self.repo.save_all(fresh).await?;
        info!(count = saved.len(), "documents created");
        Ok(saved.len())
    }

    /// Overwrite the document at `id` with `payload`, whatever was stored before.
    #[instrument(skip(self, payload), fields(collection = E::COLLECTION))]
    pub async fn replace(&self, id: &str, mut payload: E) -> Result<E, ServiceError> {
        payload.set_id(id.to_string());
        let saved = self.repo.save(payload).await?;
        info!("document replaced");
        Ok(saved)
    }

    /// Apply the present fields of `patch` to the stored document.
    ///
    /// The stored document is fetched first; missing ids fail with `NotFound`.
    /// Only the fetched document is ever written, and only when at least one
    /// field actually changed. Otherwise the fetched document is returned as is.
    #[instrument(skip(self, patch), fields(collection = E::COLLECTION))]
    pub async fn patch(&self, id: &str, patch: E::Patch) -> Result<E, ServiceError> {
        let mut found = self.get_by_id(id).await?;
        if !found.apply_patch(patch) {
            debug!("patch changes nothing; write skipped");
            return Ok(found);
        }
        let saved = self.repo.save(found).await?;
        info!("document patched");
        Ok(saved)
    }
}
