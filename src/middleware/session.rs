use actix_web::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use crate::errors::AppError;
use crate::middleware::AuthUser;
use crate::models::users;
use crate::utils::jwt::{self, Claims};

pub const SESSION_COOKIE: &str = "SESSION";

/// Sessions de connexion.
///
/// Le cookie porte un JWT signé (identité + rôle + id de session); le serveur
/// garde la liste des id de session ouverts. Un logout retire l'id, ce qui
/// invalide le token même s'il n'a pas encore expiré.
pub struct SessionManager {
    secret: String,
    lifetime: Duration,
    // id de session -> expiration (timestamp)
    active: DashMap<String, i64>,
}

impl SessionManager {
    pub fn new(secret: impl Into<String>, lifetime_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            lifetime: Duration::hours(lifetime_hours),
            active: DashMap::new(),
        }
    }

    /// Ouvre une session pour un utilisateur authentifié, retourne le token
    pub fn open(&self, user: &users::Model) -> Result<String, AppError> {
        let now = Utc::now();
        self.purge_expired(now.timestamp());

        let expiration = now
            .checked_add_signed(self.lifetime)
            .ok_or_else(|| AppError::Session("Failed to calculate expiration".to_string()))?
            .timestamp();

        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            role: user.role,
            sid: Uuid::new_v4().to_string(),
            exp: expiration,
        };

        let token = jwt::generate_token(&claims, &self.secret).map_err(AppError::Session)?;
        self.active.insert(claims.sid, expiration);

        tracing::info!("Session opened for user ID[{}]", user.id);
        Ok(token)
    }

    /// Retrouve l'utilisateur d'un token valide et dont la session est ouverte
    pub fn resolve(&self, token: &str) -> Option<AuthUser> {
        let claims = jwt::verify_token(token, &self.secret).ok()?;
        if !self.active.contains_key(&claims.sid) {
            return None;
        }
        Some(AuthUser {
            user_id: claims.sub,
            username: claims.username,
            role: claims.role,
            session_id: claims.sid,
        })
    }

    /// Ferme la session, sans condition (un token expiré ou inconnu est ignoré)
    pub fn close(&self, token: &str) {
        if let Ok(claims) = jwt::read_claims(token, &self.secret, false) {
            if self.active.remove(&claims.sid).is_some() {
                tracing::info!("Session closed for user ID[{}]", claims.sub);
            }
        }
    }

    pub fn active_sessions(&self) -> usize {
        self.active.len()
    }

    fn purge_expired(&self, now: i64) {
        self.active.retain(|_, expiration| *expiration > now);
    }

    pub fn session_cookie(token: String) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE, token)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .finish()
    }

    pub fn removal_cookie() -> Cookie<'static> {
        let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
        cookie.make_removal();
        cookie
    }
}
