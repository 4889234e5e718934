use actix_web::{get, HttpRequest, HttpResponse};
use serde_json::json;

use crate::middleware::AuthUser;
use crate::views;

/// GET / - accueil, n'expose que l'identité de la session
#[get("/")]
pub async fn home(req: HttpRequest, auth_user: AuthUser) -> HttpResponse {
    views::render(
        &req,
        "home",
        json!({
            "username": auth_user.username,
            "role": auth_user.role,
        }),
    )
}
