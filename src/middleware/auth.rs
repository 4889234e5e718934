use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{Payload, ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest, ResponseError};
use futures::future::{ready, Ready};
use serde::Serialize;

use crate::errors::AppError;
use crate::middleware::session::{SessionManager, SESSION_COOKIE};
use crate::models::users::Role;

/// Structure qui contient les infos de l'utilisateur authentifié
/// Posée dans les extensions de la requête par `session_gate`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthUser {
    pub user_id: i32,
    pub username: String,
    pub role: Role,
    #[serde(skip_serializing)]
    pub session_id: String,
}

/// Niveau d'accès exigé par un chemin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Requires(Role),
}

const PUBLIC_PATHS: [&str; 4] = ["/login", "/logout", "/health", "/error"];
const PUBLIC_PREFIXES: [&str; 3] = ["/css/", "/js/", "/webjars/"];

pub fn access_for(path: &str) -> Access {
    if PUBLIC_PATHS.contains(&path) || PUBLIC_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return Access::Public;
    }
    if path == "/user" || path.starts_with("/user/") {
        return Access::Requires(Role::Admin);
    }
    Access::Requires(Role::User)
}

fn resolve_session(req: &HttpRequest) -> Option<AuthUser> {
    let sessions = req.app_data::<web::Data<SessionManager>>()?;
    let cookie = req.cookie(SESSION_COOKIE)?;
    sessions.resolve(cookie.value())
}

/// Middleware (à brancher avec `middleware::from_fn`)
/// Résout la session une seule fois, puis applique la règle d'accès du chemin
pub async fn session_gate(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let auth_user = resolve_session(req.request());

    if let Access::Requires(required) = access_for(req.path()) {
        match &auth_user {
            None => {
                tracing::debug!("Anonymous access to {} redirected to login", req.path());
                let response = AppError::Unauthenticated.error_response();
                return Ok(req.into_response(response));
            }
            Some(user) if !user.role.permits(required) => {
                tracing::warn!(
                    "User {} ({}) denied access to {}",
                    user.username,
                    user.role,
                    req.path()
                );
                let response = AppError::AuthorizationDenied.error_response();
                return Ok(req.into_response(response));
            }
            Some(_) => {}
        }
    }

    if let Some(user) = auth_user {
        req.extensions_mut().insert(user);
    }

    Ok(next.call(req).await?.map_into_boxed_body())
}

/// Implémentation de FromRequest pour AuthUser
/// Lit ce que le gate a posé; sans gate, résout le cookie directement
impl FromRequest for AuthUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        if let Some(user) = req.extensions().get::<AuthUser>() {
            return ready(Ok(user.clone()));
        }
        ready(resolve_session(req).ok_or(AppError::Unauthenticated))
    }
}
