use serde::Serialize;
use chrono::{DateTime, Utc};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String, // "up" ou "down"
    pub time: DateTime<Utc>,
}
