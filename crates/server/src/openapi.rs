use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct Category {
    pub id: Option<String>,
    pub description: Option<String>,
}

/// Omitted fields are left untouched; `null` clears the field.
#[derive(ToSchema)]
pub struct CategoryPatch {
    pub description: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Omitted fields are left untouched; `null` clears the field.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VendorPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Path descriptions for the collection routes.
///
/// The handlers in `routes::resources` are generic over the document type, so
/// each mounted collection is described here once per method.
pub mod paths {
    use super::{Category, CategoryPatch, ErrorResponse, Vendor, VendorPatch};

    #[utoipa::path(
        get, path = "/api/v1/categories", tag = "categories",
        responses(
            (status = 200, description = "All categories", body = [Category]),
            (status = 500, description = "Store unavailable", body = ErrorResponse)
        )
    )]
    pub async fn list_categories() {}

    #[utoipa::path(
        post, path = "/api/v1/categories", tag = "categories",
        request_body(content = [Category], description = "Array of categories or a single category"),
        responses(
            (status = 201, description = "Created"),
            (status = 400, description = "Validation Error", body = ErrorResponse),
            (status = 500, description = "Store unavailable", body = ErrorResponse)
        )
    )]
    pub async fn create_categories() {}

    #[utoipa::path(
        get, path = "/api/v1/categories/{id}", tag = "categories",
        params(("id" = String, Path, description = "Category id")),
        responses(
            (status = 200, description = "Category", body = Category),
            (status = 404, description = "Not Found", body = ErrorResponse),
            (status = 500, description = "Store unavailable", body = ErrorResponse)
        )
    )]
    pub async fn get_category() {}

    #[utoipa::path(
        put, path = "/api/v1/categories/{id}", tag = "categories",
        params(("id" = String, Path, description = "Category id; created when unknown")),
        request_body = Category,
        responses(
            (status = 200, description = "Saved category", body = Category),
            (status = 400, description = "Validation Error", body = ErrorResponse),
            (status = 500, description = "Store unavailable", body = ErrorResponse)
        )
    )]
    pub async fn replace_category() {}

    #[utoipa::path(
        patch, path = "/api/v1/categories/{id}", tag = "categories",
        params(("id" = String, Path, description = "Category id")),
        request_body = CategoryPatch,
        responses(
            (status = 200, description = "Resulting category", body = Category),
            (status = 400, description = "Validation Error", body = ErrorResponse),
            (status = 404, description = "Not Found", body = ErrorResponse),
            (status = 500, description = "Store unavailable", body = ErrorResponse)
        )
    )]
    pub async fn patch_category() {}

    #[utoipa::path(
        get, path = "/api/v1/vendors", tag = "vendors",
        responses(
            (status = 200, description = "All vendors", body = [Vendor]),
            (status = 500, description = "Store unavailable", body = ErrorResponse)
        )
    )]
    pub async fn list_vendors() {}

    #[utoipa::path(
        post, path = "/api/v1/vendors", tag = "vendors",
        request_body(content = [Vendor], description = "Array of vendors or a single vendor"),
        responses(
            (status = 201, description = "Created"),
            (status = 400, description = "Validation Error", body = ErrorResponse),
            (status = 500, description = "Store unavailable", body = ErrorResponse)
        )
    )]
    pub async fn create_vendors() {}

    #[utoipa::path(
        get, path = "/api/v1/vendors/{id}", tag = "vendors",
        params(("id" = String, Path, description = "Vendor id")),
        responses(
            (status = 200, description = "Vendor", body = Vendor),
            (status = 404, description = "Not Found", body = ErrorResponse),
            (status = 500, description = "Store unavailable", body = ErrorResponse)
        )
    )]
    pub async fn get_vendor() {}

    #[utoipa::path(
        put, path = "/api/v1/vendors/{id}", tag = "vendors",
        params(("id" = String, Path, description = "Vendor id; created when unknown")),
        request_body = Vendor,
        responses(
            (status = 200, description = "Saved vendor", body = Vendor),
            (status = 400, description = "Validation Error", body = ErrorResponse),
            (status = 500, description = "Store unavailable", body = ErrorResponse)
        )
    )]
    pub async fn replace_vendor() {}

    #[utoipa::path(
        patch, path = "/api/v1/vendors/{id}", tag = "vendors",
        params(("id" = String, Path, description = "Vendor id")),
        request_body = VendorPatch,
        responses(
            (status = 200, description = "Resulting vendor", body = Vendor),
            (status = 400, description = "Validation Error", body = ErrorResponse),
            (status = 404, description = "Not Found", body = ErrorResponse),
            (status = 500, description = "Store unavailable", body = ErrorResponse)
        )
    )]
    pub async fn patch_vendor() {}
}

#[derive(OpenApi)]
#[openapi(
    info(title = "catalog api", description = "Categories and vendors over a document store"),
    paths(
        crate::routes::health,
        paths::list_categories,
        paths::create_categories,
        paths::get_category,
        paths::replace_category,
        paths::patch_category,
        paths::list_vendors,
        paths::create_vendors,
        paths::get_vendor,
        paths::replace_vendor,
        paths::patch_vendor,
    ),
    components(
        schemas(
            HealthResponse,
            Category,
            CategoryPatch,
            Vendor,
            VendorPatch,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "categories", description = "/api/v1/categories"),
        (name = "vendors", description = "/api/v1/vendors")
    )
)]
pub struct ApiDoc;
