use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult, models::ScreenSummary, services::screen_service, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_screens))
}

#[utoipa::path(
    get,
    path = "/api/screens",
    responses(
        (status = 200, description = "List screens", body = [ScreenSummary])
    ),
    tag = "Screens"
)]
pub async fn list_screens(State(state): State<AppState>) -> AppResult<Json<Vec<ScreenSummary>>> {
    let screens = screen_service::list_screens(&state).await?;
    Ok(Json(screens))
}
