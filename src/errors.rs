use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use std::fmt;
use thiserror::Error;

use crate::utils::flash;
use crate::validation::FieldErrors;

/// Les six familles d'entités gérées par l'application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Bid,
    CurvePoint,
    Rating,
    RuleName,
    Trade,
    User,
}

impl EntityKind {
    /// Page de liste vers laquelle on renvoie l'utilisateur en cas d'erreur
    pub fn list_path(self) -> &'static str {
        match self {
            EntityKind::Bid => "/bid/list",
            EntityKind::CurvePoint => "/curvePoint/list",
            EntityKind::Rating => "/rating/list",
            EntityKind::RuleName => "/ruleName/list",
            EntityKind::Trade => "/trade/list",
            EntityKind::User => "/user/list",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Bid => "Bid",
            EntityKind::CurvePoint => "Curve point",
            EntityKind::Rating => "Rating",
            EntityKind::RuleName => "Rule name",
            EntityKind::Trade => "Trade",
            EntityKind::User => "User",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{entity} not found with ID: {id}")]
    NotFound { entity: EntityKind, id: i32 },
    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(FieldErrors),
    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),
    #[error("Invalid username or password")]
    AuthenticationFailed,
    #[error("Authentication required")]
    Unauthenticated,
    #[error("Access denied")]
    AuthorizationDenied,
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    #[error("Session error: {0}")]
    Session(String),
    #[error("Password hashing error: {0}")]
    PasswordHash(String),
}

impl AppError {
    pub fn not_found(entity: EntityKind, id: i32) -> Self {
        AppError::NotFound { entity, id }
    }

    /// Convertit une violation de contrainte unique sur `users.username`
    /// en erreur métier; les autres erreurs restent des erreurs BD
    pub fn from_user_write(err: DbErr, username: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::UsernameAlreadyExists(username.to_string())
            }
            _ => AppError::Database(err),
        }
    }
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. }
            | AppError::UsernameAlreadyExists(_)
            | AppError::AuthenticationFailed
            | AppError::Unauthenticated => StatusCode::FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::AuthorizationDenied => StatusCode::FORBIDDEN,
            AppError::Database(_) | AppError::Session(_) | AppError::PasswordHash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound { entity, .. } => {
                tracing::warn!("{}", self);
                flash::redirect_with_flash(entity.list_path(), &self.to_string())
            }
            AppError::UsernameAlreadyExists(_) => {
                flash::redirect_with_flash("/user/add", &self.to_string())
            }
            AppError::AuthenticationFailed => redirect("/login?error=true"),
            AppError::Unauthenticated => redirect("/login"),
            AppError::AuthorizationDenied => HttpResponse::Forbidden().json(serde_json::json!({
                "error": "Access denied"
            })),
            AppError::Validation(errors) => HttpResponse::BadRequest().json(serde_json::json!({
                "errors": errors
            })),
            AppError::Database(_) | AppError::Session(_) | AppError::PasswordHash(_) => {
                // Le détail reste dans les logs, jamais dans la réponse
                tracing::error!("Request failed: {}", self);
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Internal server error"
                }))
            }
        }
    }
}
