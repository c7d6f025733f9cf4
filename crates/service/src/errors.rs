use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("store unavailable: {0}")]
    Store(String),
}

impl ServiceError {
    pub fn not_found(collection: &str, id: &str) -> Self {
        Self::NotFound(format!("{collection}/{id} not found"))
    }

    pub fn store(e: impl std::fmt::Display) -> Self { Self::Store(e.to_string()) }
}
