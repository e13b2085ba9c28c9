use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

#[derive(ToSchema)]
pub struct ItemDoc {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Widget")]
    pub name: Option<String>,
    #[schema(example = "A widget")]
    pub description: Option<String>,
}

/// Request body for create/update; a client-supplied `id` is ignored.
#[derive(ToSchema)]
pub struct ItemInputDoc {
    #[schema(example = "Widget")]
    pub name: Option<String>,
    #[schema(example = "A widget")]
    pub description: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::items::list,
        crate::routes::items::get,
        crate::routes::items::create,
        crate::routes::items::update,
        crate::routes::items::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ItemDoc,
            ItemInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "items")
    )
)]
pub struct ApiDoc;
