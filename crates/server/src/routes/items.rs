use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use service::items::{Item, ItemId, ItemInput};

use crate::errors::ApiError;
use crate::observability;
use crate::routes::AppState;

pub const ITEMS_PATH: &str = "/api/items";

pub fn item_location(id: ItemId) -> String {
    format!("{ITEMS_PATH}/{id}")
}

#[utoipa::path(
    get, path = "/api/items", tag = "items",
    responses(
        (status = 200, description = "All items", body = [crate::openapi::ItemDoc])
    )
)]
pub async fn list(State(state): State<AppState>) -> Json<Vec<Item>> {
    observability::record("list");
    Json(state.items.list().await)
}

#[utoipa::path(
    get, path = "/api/items/{id}", tag = "items",
    params(("id" = u64, Path, description = "Item ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ItemDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<ItemId>) -> Result<Json<Item>, ApiError> {
    observability::record("get");
    Ok(Json(state.items.get(id).await?))
}

#[utoipa::path(
    post, path = "/api/items", tag = "items",
    request_body = crate::openapi::ItemInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ItemDoc,
            headers(("Location" = String, description = "Path of the new item")))
    )
)]
pub async fn create(State(state): State<AppState>, Json(input): Json<ItemInput>) -> impl IntoResponse {
    observability::record("create");
    let item = state.items.create(input).await;
    (
        StatusCode::CREATED,
        [(header::LOCATION, item_location(item.id))],
        Json(item),
    )
}

#[utoipa::path(
    put, path = "/api/items/{id}", tag = "items",
    params(("id" = u64, Path, description = "Item ID")),
    request_body = crate::openapi::ItemInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ItemDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    Json(input): Json<ItemInput>,
) -> Result<Json<Item>, ApiError> {
    observability::record("update");
    Ok(Json(state.items.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/items/{id}", tag = "items",
    params(("id" = u64, Path, description = "Item ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<ItemId>) -> Result<StatusCode, ApiError> {
    observability::record("delete");
    state.items.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
