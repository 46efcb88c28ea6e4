use axum::extract::FromRequestParts;
use uuid::Uuid;

use crate::{error::AppError, state::AppState};

/// The caller identity a submission is recorded under. There is no real
/// authentication yet; the extractor hands out the identity configured via
/// SESSION_USER_ID. A production deployment replaces this extractor with one
/// backed by an authentication collaborator.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: Uuid,
}

impl FromRequestParts<AppState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Session {
            user_id: state.config.session_user_id,
        })
    }
}
