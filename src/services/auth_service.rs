use sea_orm::DatabaseConnection;

use crate::errors::AppError;
use crate::models::users;
use crate::services::user_service::UserService;
use crate::utils::password::PasswordEncoder;

pub struct AuthService;

impl AuthService {
    /// Vérifie les identifiants du formulaire de login.
    /// Utilisateur inconnu ou mauvais mot de passe: même erreur, aucun détail
    pub async fn authenticate(
        db: &DatabaseConnection,
        encoder: &PasswordEncoder,
        username: &str,
        raw_password: &str,
    ) -> Result<users::Model, AppError> {
        let user = match UserService::find_by_username(db, username).await? {
            Some(user) => user,
            None => {
                tracing::warn!("Login failed: unknown user");
                return Err(AppError::AuthenticationFailed);
            }
        };

        if !encoder.verify(raw_password, &user.password_hash) {
            tracing::warn!("Login failed for user ID[{}]", user.id);
            return Err(AppError::AuthenticationFailed);
        }

        tracing::info!("User ID[{}] logged in", user.id);
        Ok(user)
    }
}
