use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    ForeignKey(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error")]
    DbError(sqlx::Error),

    #[error("ORM error")]
    OrmError(sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

// Postgres 23505/23503 become Conflict/ForeignKey; everything else is a
// storage fault.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if matches!(err, sqlx::Error::RowNotFound) {
            return AppError::NotFound;
        }
        let code = err
            .as_database_error()
            .and_then(|db| db.code())
            .map(|c| c.into_owned());
        match code.as_deref() {
            Some("23505") => AppError::Conflict("resource already exists".into()),
            Some("23503") => AppError::ForeignKey("referenced entity does not exist".into()),
            _ => AppError::DbError(err),
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                AppError::Conflict("resource already exists".into())
            }
            Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_)) => {
                AppError::ForeignKey("referenced entity does not exist".into())
            }
            _ => AppError::OrmError(err),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, details) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, None),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, None),
            AppError::ForeignKey(_) => (StatusCode::BAD_REQUEST, None),
            AppError::Conflict(_) => (StatusCode::CONFLICT, None),
            AppError::DbError(err) => {
                tracing::error!(error = %err, "storage fault");
                (StatusCode::INTERNAL_SERVER_ERROR, Some("storage failure".to_string()))
            }
            AppError::OrmError(err) => {
                tracing::error!(error = %err, "storage fault");
                (StatusCode::INTERNAL_SERVER_ERROR, Some("storage failure".to_string()))
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, Some("internal failure".to_string()))
            }
        };

        let body = ErrorBody {
            error: self.to_string(),
            details,
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
