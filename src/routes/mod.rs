pub mod auth;
pub mod bid;
pub mod curve_point;
pub mod health;
pub mod home;
pub mod rating;
pub mod rule_name;
pub mod trade;
pub mod user;

use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health_check)
        .service(home::home)
        .configure(auth::auth_routes)
        .configure(bid::bid_routes)
        .configure(curve_point::curve_point_routes)
        .configure(rating::rating_routes)
        .configure(rule_name::rule_name_routes)
        .configure(trade::trade_routes)
        .configure(user::user_routes);
}

/// Un champ de formulaire illisible (ex: "abc" pour un nombre) est une 400
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| {
        tracing::warn!("Form binding failed: {}", err);
        let response = HttpResponse::BadRequest().json(serde_json::json!({
            "error": err.to_string()
        }));
        InternalError::from_response(err, response).into()
    })
}
