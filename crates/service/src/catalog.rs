use std::{path::Path, sync::Arc};

use models::{Category, Vendor};

use crate::errors::ServiceError;
use crate::repository::{DocumentRepository, SharedRepository};
use crate::resource::ResourceService;

/// The two collections served by the API, each behind its own repository.
#[derive(Clone)]
pub struct Catalog {
    pub categories: Arc<ResourceService<Category>>,
    pub vendors: Arc<ResourceService<Vendor>>,
}

impl Catalog {
    pub fn from_repositories(categories: SharedRepository<Category>, vendors: SharedRepository<Vendor>) -> Self {
        Self {
            categories: Arc::new(ResourceService::new(categories)),
            vendors: Arc::new(ResourceService::new(vendors)),
        }
    }

    pub fn in_memory() -> Self {
        Self::from_repositories(
            Arc::new(DocumentRepository::<Category>::in_memory()),
            Arc::new(DocumentRepository::<Vendor>::in_memory()),
        )
    }

    /// File-backed collections under `data_dir`, or in-memory when `None`.
    pub async fn open(data_dir: Option<&Path>) -> Result<Self, ServiceError> {
        let Some(dir) = data_dir else { return Ok(Self::in_memory()) };
        Ok(Self::from_repositories(
            Arc::new(DocumentRepository::<Category>::open(dir).await?),
            Arc::new(DocumentRepository::<Vendor>::open(dir).await?),
        ))
    }
}
