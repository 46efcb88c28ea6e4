use axum::{
    Form, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    dto::reviews::{SubmitReviewRequest, SubmitReviewResponse},
    error::AppResult,
    middleware::session::Session,
    models::ReviewWithScreen,
    services::review_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_review))
        .route("/{theatre_id}", get(list_reviews_for_theatre))
}

#[utoipa::path(
    get,
    path = "/api/reviews/{theatre_id}",
    params(
        ("theatre_id" = String, Path, description = "Theatre ID")
    ),
    responses(
        (status = 200, description = "Reviews for a theatre, joined with screen fields", body = [ReviewWithScreen])
    ),
    tag = "Reviews"
)]
pub async fn list_reviews_for_theatre(
    Path(theatre_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ReviewWithScreen>>> {
    let theatre_id = match Uuid::parse_str(&theatre_id) {
        Ok(id) => id,
        Err(_) => return Ok(Json(Vec::new())),
    };
    let reviews = review_service::list_reviews_for_theatre(&state, theatre_id).await?;
    Ok(Json(reviews))
}

#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body(content = SubmitReviewRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Review created", body = SubmitReviewResponse),
        (status = 400, description = "Validation failure"),
        (status = 409, description = "Get-or-create conflict"),
        (status = 500, description = "Storage failure")
    ),
    tag = "Reviews"
)]
pub async fn submit_review(
    State(state): State<AppState>,
    session: Session,
    Form(payload): Form<SubmitReviewRequest>,
) -> AppResult<(StatusCode, Json<SubmitReviewResponse>)> {
    let review = review_service::submit_review(&state, &session, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitReviewResponse {
            message: "Review created".to_string(),
            review,
        }),
    ))
}
