use actix_web::http::header;
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use serde_json::json;

use crate::errors::AppError;
use crate::middleware::{SessionManager, SESSION_COOKIE};
use crate::services::auth_service::AuthService;
use crate::utils::password::PasswordEncoder;
use crate::views;

// Formulaire de connexion (pas de Debug: contient le mot de passe)
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginQuery {
    pub error: Option<String>,
    pub logout: Option<String>,
}

/// GET /login - page de connexion (PUBLIC)
#[get("/login")]
pub async fn login_page(req: HttpRequest, query: web::Query<LoginQuery>) -> HttpResponse {
    views::render(
        &req,
        "login",
        json!({
            "error": query.error.is_some(),
            "logout": query.logout.is_some(),
        }),
    )
}

/// POST /login - vérifie les identifiants et ouvre la session (PUBLIC)
#[post("/login")]
pub async fn login(
    db: web::Data<DatabaseConnection>,
    encoder: web::Data<PasswordEncoder>,
    sessions: web::Data<SessionManager>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    let user = AuthService::authenticate(&db, &encoder, &form.username, &form.password).await?;
    let token = sessions.open(&user)?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .cookie(SessionManager::session_cookie(token))
        .finish())
}

/// GET /logout - ferme la session, même si elle a déjà expiré (PUBLIC)
#[get("/logout")]
pub async fn logout(req: HttpRequest, sessions: web::Data<SessionManager>) -> HttpResponse {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        sessions.close(cookie.value());
    }

    HttpResponse::Found()
        .insert_header((header::LOCATION, "/login?logout=true"))
        .cookie(SessionManager::removal_cookie())
        .finish()
}

pub fn auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(login_page).service(login).service(logout);
}

#[cfg(test)]
mod tests {
    use crate::middleware::SESSION_COOKIE;
    use crate::models::users::Role;
    use crate::test_support::{test_app, TestContext, TEST_PASSWORD};
    use actix_web::http::{header, StatusCode};
    use actix_web::test;
    use serde_json::Value;

    #[actix_web::test]
    async fn test_login_home_logout() {
        let ctx = TestContext::new().await;
        ctx.account(Role::User).await;
        let app = test_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("username", "user"), ("password", TEST_PASSWORD)])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");

        let session = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .expect("session cookie")
            .into_owned();
        assert_eq!(session.http_only(), Some(true));

        let req = test::TestRequest::get().uri("/").cookie(session.clone()).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["view"], "home");
        assert_eq!(body["model"]["username"], "user");
        assert_eq!(body["model"]["role"], "USER");

        let req = test::TestRequest::get()
            .uri("/logout")
            .cookie(session.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/login?logout=true"
        );
        assert_eq!(ctx.sessions.active_sessions(), 0);

        // le token est révoqué même s'il n'a pas expiré
        let req = test::TestRequest::get().uri("/").cookie(session).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");
    }

    #[actix_web::test]
    async fn test_failed_login_does_not_say_why() {
        let ctx = TestContext::new().await;
        ctx.account(Role::User).await;
        let app = test_app!(ctx);

        for (username, password) in [("user", "WrongPass1!"), ("ghost", TEST_PASSWORD)] {
            let req = test::TestRequest::post()
                .uri("/login")
                .set_form([("username", username), ("password", password)])
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::FOUND);
            assert_eq!(
                resp.headers().get(header::LOCATION).unwrap(),
                "/login?error=true"
            );
            assert!(resp.response().cookies().all(|c| c.name() != SESSION_COOKIE));
        }
        assert_eq!(ctx.sessions.active_sessions(), 0);
    }

    #[actix_web::test]
    async fn test_login_page_is_public() {
        let ctx = TestContext::new().await;
        let app = test_app!(ctx);

        let req = test::TestRequest::get().uri("/login?error=true").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["view"], "login");
        assert_eq!(body["model"]["error"], true);
        assert_eq!(body["model"]["logout"], false);
    }
}
