use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateScreenRequest {
    pub name: String,
    pub screen_type: String,
    #[serde(default)]
    pub chain: Option<String>,
}
