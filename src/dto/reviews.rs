use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    config::AppConfig,
    error::{AppError, AppResult},
    models::Review,
};

/// Form payload of `POST /api/reviews`. The `recommend` field is a checkbox:
/// browsers omit it entirely when unchecked, so it arrives as an optional
/// string ("on" when ticked).
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReviewRequest {
    pub theatre_name: String,
    pub screen_type: String,
    pub auditorium_number: i32,
    pub row: String,
    pub seat_number: i32,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub recommend: Option<String>,
}

/// A submission that passed shape validation: trimmed theatre name, canonical
/// screen type, uppercased seat row.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSubmission {
    pub theatre_name: String,
    pub screen_type: String,
    pub auditorium_number: i32,
    pub seat_row: String,
    pub seat_number: i32,
    pub notes: Option<String>,
    pub recommend: bool,
}

impl SubmitReviewRequest {
    pub fn validate(&self, config: &AppConfig) -> AppResult<ValidSubmission> {
        let theatre_name = self.theatre_name.trim();
        if theatre_name.is_empty() {
            return Err(AppError::Validation("theatre name is required".into()));
        }

        let screen_type = config
            .canonical_screen_type(&self.screen_type)
            .ok_or_else(|| {
                AppError::Validation(format!("unknown screen type '{}'", self.screen_type.trim()))
            })?;

        if self.auditorium_number <= 0 {
            return Err(AppError::Validation(
                "auditorium number must be a positive integer".into(),
            ));
        }

        let seat_row = self.row.trim();
        if seat_row.is_empty() {
            return Err(AppError::Validation("seat row is required".into()));
        }

        if self.seat_number <= 0 {
            return Err(AppError::Validation(
                "seat number must be a positive integer".into(),
            ));
        }

        let notes = self
            .notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Ok(ValidSubmission {
            theatre_name: theatre_name.to_string(),
            screen_type: screen_type.to_string(),
            auditorium_number: self.auditorium_number,
            seat_row: seat_row.to_uppercase(),
            seat_number: self.seat_number,
            notes,
            recommend: checkbox_checked(self.recommend.as_deref()),
        })
    }
}

fn checkbox_checked(value: Option<&str>) -> bool {
    match value {
        None => false,
        Some(v) => v != "false" && v != "0",
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitReviewResponse {
    pub message: String,
    pub review: Review,
}
