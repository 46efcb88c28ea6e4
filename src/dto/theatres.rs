use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTheatreRequest {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    pub country: String,
}

impl CreateTheatreRequest {
    pub fn validate(&self) -> AppResult<()> {
        for (field, value) in [
            ("name", &self.name),
            ("city", &self.city),
            ("state", &self.state),
            ("country", &self.country),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} is required")));
            }
        }
        Ok(())
    }
}

/// Detail shape for `GET /api/theatres/{id}`, delivered as a singleton array.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TheatreDetail {
    pub name: String,
    pub city: String,
    pub state: String,
}
