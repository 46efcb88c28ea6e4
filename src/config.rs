use std::env;

use uuid::Uuid;

const DEFAULT_SCREEN_TYPES: &str = "Standard,Digital,Laser,Dolby,IMAX,RPX";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
    /// Canonical screen-type set for this deployment. Matching is
    /// case-insensitive; the canonical spelling is what gets stored.
    pub screen_types: Vec<String>,
    /// Placeholder identity attached to submitted reviews until a real
    /// authentication collaborator exists.
    pub session_user_id: Uuid,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let cors_origin =
            env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());
        let screen_types = env::var("SCREEN_TYPES")
            .unwrap_or_else(|_| DEFAULT_SCREEN_TYPES.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let session_user_id = match env::var("SESSION_USER_ID") {
            Ok(raw) => Uuid::parse_str(&raw)?,
            Err(_) => Uuid::nil(),
        };
        Ok(Self {
            database_url,
            host,
            port,
            cors_origin,
            screen_types,
            session_user_id,
        })
    }

    /// Resolve a user-submitted screen type ("imax") to its canonical
    /// spelling ("IMAX"), or None when it is not in the configured set.
    pub fn canonical_screen_type(&self, raw: &str) -> Option<&str> {
        let raw = raw.trim();
        self.screen_types
            .iter()
            .find(|t| t.eq_ignore_ascii_case(raw))
            .map(|t| t.as_str())
    }
}
