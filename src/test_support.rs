// Outils partagés par les tests: base SQLite en mémoire, sessions, app de test

use actix_web::cookie::Cookie;
use actix_web::web;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::db;
use crate::middleware::{AuthUser, SessionManager};
use crate::models::users::{self, Role};
use crate::utils::password::PasswordEncoder;

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_PASSWORD: &str = "ValidPass123!";

pub async fn test_db() -> DatabaseConnection {
    let db = db::establish_connection("sqlite::memory:")
        .await
        .expect("in-memory database");
    db::create_schema(&db).await.expect("schema");
    db
}

/// Coût bcrypt minimal: les tests n'ont pas besoin d'un hash coûteux
pub fn test_encoder() -> PasswordEncoder {
    PasswordEncoder::new(4)
}

pub fn actor(role: Role) -> AuthUser {
    AuthUser {
        user_id: 1,
        username: role.as_str().to_lowercase(),
        role,
        session_id: "test-session".to_string(),
    }
}

pub struct TestContext {
    pub db: DatabaseConnection,
    pub sessions: web::Data<SessionManager>,
}

impl TestContext {
    pub async fn new() -> Self {
        Self {
            db: test_db().await,
            sessions: web::Data::new(SessionManager::new(TEST_SECRET, 1)),
        }
    }

    /// Enregistre un compte ("user" ou "admin", mot de passe TEST_PASSWORD)
    /// Une seule fois par rôle: username est unique
    pub async fn account(&self, role: Role) -> users::Model {
        let password_hash = test_encoder().hash(TEST_PASSWORD).expect("hash");
        users::ActiveModel {
            username: Set(role.as_str().to_lowercase()),
            password_hash: Set(password_hash),
            fullname: Set(format!("Test {}", role)),
            role: Set(role),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("test account")
    }

    /// Cookie de session d'un compte fraîchement créé
    pub async fn login(&self, role: Role) -> Cookie<'static> {
        let account = self.account(role).await;
        let token = self.sessions.open(&account).expect("session");
        SessionManager::session_cookie(token)
    }
}

/// App complète (gate + routes) branchée sur un TestContext
macro_rules! test_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($ctx.db.clone()))
                .app_data($ctx.sessions.clone())
                .app_data(actix_web::web::Data::new(
                    $crate::test_support::test_encoder(),
                ))
                .app_data($crate::routes::form_config())
                .wrap(actix_web::middleware::from_fn(
                    $crate::middleware::session_gate,
                ))
                .configure($crate::routes::configure_routes),
        )
        .await
    };
}

pub(crate) use test_app;
