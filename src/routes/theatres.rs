use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};
use uuid::Uuid;

use crate::{
    dto::theatres::TheatreDetail,
    error::AppResult,
    models::TheatreSummary,
    services::theatre_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_theatres))
        .route("/{id}", get(get_theatre))
        .route("/{id}", delete(delete_theatre))
}

#[utoipa::path(
    get,
    path = "/api/theatres",
    responses(
        (status = 200, description = "List theatres", body = [TheatreSummary])
    ),
    tag = "Theatres"
)]
pub async fn list_theatres(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<TheatreSummary>>> {
    let theatres = theatre_service::list_theatres(&state).await?;
    Ok(Json(theatres))
}

#[utoipa::path(
    get,
    path = "/api/theatres/{id}",
    params(
        ("id" = String, Path, description = "Theatre ID")
    ),
    responses(
        (status = 200, description = "Singleton array, empty when the id is unknown", body = [TheatreDetail])
    ),
    tag = "Theatres"
)]
pub async fn get_theatre(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<TheatreDetail>>> {
    // An unparseable id is just an unknown theatre; the contract is a
    // zero-element array, never an error.
    let id = match Uuid::parse_str(&id) {
        Ok(id) => id,
        Err(_) => return Ok(Json(Vec::new())),
    };
    let theatre = theatre_service::get_theatre(&state, id).await?;
    Ok(Json(theatre))
}

#[utoipa::path(
    delete,
    path = "/api/theatres/{id}",
    params(
        ("id" = Uuid, Path, description = "Theatre ID")
    ),
    responses(
        (status = 200, description = "Deleted theatre with its screens and reviews"),
        (status = 404, description = "Theatre not found")
    ),
    tag = "Theatres"
)]
pub async fn delete_theatre(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    theatre_service::delete_theatre(&state, id).await?;
    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}
