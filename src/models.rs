use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Theatre {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
}

/// Listing shape for `GET /api/theatres`.
#[derive(Debug, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TheatreSummary {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub state: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    pub id: Uuid,
    pub theatre_id: Uuid,
    pub name: String,
    pub screen_type: String,
    pub chain: Option<String>,
}

/// Listing shape for `GET /api/screens`.
#[derive(Debug, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ScreenSummary {
    pub name: String,
    pub screen_type: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub user_id: Uuid,
    pub theatre_id: Uuid,
    pub screen_id: Option<Uuid>,
    pub seat_row: String,
    pub seat_number: i32,
    pub notes: Option<String>,
    pub recommend: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A review joined with its screen. The join is a LEFT JOIN: a review whose
/// screen has been removed still surfaces, with the screen fields null.
#[derive(Debug, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ReviewWithScreen {
    pub id: Uuid,
    pub screen_id: Option<Uuid>,
    pub screen_name: Option<String>,
    pub screen_type: Option<String>,
    pub seat_row: String,
    #[serde(rename = "seatNum")]
    pub seat_number: i32,
    pub notes: Option<String>,
    pub recommend: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: Uuid,
    pub review_id: Uuid,
    pub url: String,
    pub alt_text: Option<String>,
    pub created_at: DateTime<Utc>,
}
