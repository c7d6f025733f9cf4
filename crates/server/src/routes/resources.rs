//! Generic CRUD + patch handlers, mounted once per collection.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use models::Document;
use service::resource::ResourceService;

use crate::errors::ApiError;

type Resource<E> = State<Arc<ResourceService<E>>>;

/// POST body: a JSON array of documents or a single document.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

pub fn router<E: Document>(service: Arc<ResourceService<E>>) -> Router {
    Router::new()
        .route("/", get(list::<E>).post(create::<E>))
        .route("/:id", get(get_by_id::<E>).put(replace::<E>).patch(patch::<E>))
        .with_state(service)
}

pub async fn list<E: Document>(State(svc): Resource<E>) -> Result<Json<Vec<E>>, ApiError> {
    Ok(Json(svc.list().await?))
}

pub async fn get_by_id<E: Document>(State(svc): Resource<E>, Path(id): Path<String>) -> Result<Json<E>, ApiError> {
    Ok(Json(svc.get_by_id(&id).await?))
}

pub async fn create<E: Document>(
    State(svc): Resource<E>,
    payload: Result<Json<OneOrMany<E>>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(body) = payload?;
    svc.create(body.into_vec()).await?;
    Ok(StatusCode::CREATED)
}

pub async fn replace<E: Document>(
    State(svc): Resource<E>,
    Path(id): Path<String>,
    payload: Result<Json<E>, JsonRejection>,
) -> Result<Json<E>, ApiError> {
    let Json(body) = payload?;
    Ok(Json(svc.replace(&id, body).await?))
}

pub async fn patch<E: Document>(
    State(svc): Resource<E>,
    Path(id): Path<String>,
    payload: Result<Json<E::Patch>, JsonRejection>,
) -> Result<Json<E>, ApiError> {
    let Json(body) = payload?;
    Ok(Json(svc.patch(&id, body).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Vendor;

    #[test]
    fn body_accepts_array_or_object() {
        let many: OneOrMany<Vendor> =
            serde_json::from_str(r#"[{"firstName": "Some", "lastName": "Name"}, {}]"#).unwrap();
        assert_eq!(many.into_vec().len(), 2);

        let one: OneOrMany<Vendor> = serde_json::from_str(r#"{"firstName": "Some"}"#).unwrap();
        assert_eq!(one.into_vec(), vec![Vendor { first_name: Some("Some".into()), ..Vendor::default() }]);
    }

    #[test]
    fn body_rejects_scalars() {
        assert!(serde_json::from_str::<OneOrMany<Vendor>>("42").is_err());
    }
}
