use uuid::Uuid;

use crate::{
    dto::reviews::{SubmitReviewRequest, ValidSubmission},
    error::{AppError, AppResult},
    middleware::session::Session,
    models::{Review, ReviewWithScreen},
    services::resolver,
    state::AppState,
};

pub async fn list_reviews_for_theatre(
    state: &AppState,
    theatre_id: Uuid,
) -> AppResult<Vec<ReviewWithScreen>> {
    let reviews = sqlx::query_as::<_, ReviewWithScreen>(
        r#"
        SELECT r.id, r.screen_id, s.name AS screen_name, s.screen_type,
               r.seat_row, r.seat_number, r.notes, r.recommend, r.created_at
        FROM reviews r
        LEFT JOIN screens s ON s.id = r.screen_id
        WHERE r.theatre_id = $1
        ORDER BY r.created_at DESC
        "#,
    )
    .bind(theatre_id)
    .fetch_all(&state.pool)
    .await?;

    Ok(reviews)
}

/// Submit a seat review: validate, resolve theatre/screen, insert the review
/// under the session identity. The insert is the last storage step; a
/// get-or-create race is retried once before surfacing.
pub async fn submit_review(
    state: &AppState,
    session: &Session,
    payload: SubmitReviewRequest,
) -> AppResult<Review> {
    let submission = payload.validate(&state.config)?;

    match try_submit(state, session, &submission).await {
        Err(AppError::Conflict(reason)) => {
            tracing::debug!(%reason, "get-or-create race, retrying once");
            try_submit(state, session, &submission).await
        }
        other => other,
    }
}

async fn try_submit(
    state: &AppState,
    session: &Session,
    submission: &ValidSubmission,
) -> AppResult<Review> {
    let venue = resolver::resolve_theatre_and_screen(&state.pool, submission).await?;

    let review = sqlx::query_as::<_, Review>(
        r#"
        INSERT INTO reviews (id, user_id, theatre_id, screen_id, seat_row, seat_number, notes, recommend)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(session.user_id)
    .bind(venue.theatre_id)
    .bind(venue.screen_id)
    .bind(&submission.seat_row)
    .bind(submission.seat_number)
    .bind(&submission.notes)
    .bind(submission.recommend)
    .fetch_one(&state.pool)
    .await?;

    tracing::info!(
        review_id = %review.id,
        theatre_id = %venue.theatre_id,
        screen_id = %venue.screen_id,
        "review submitted"
    );

    Ok(review)
}
