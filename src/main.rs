mod config;
mod db;
mod dto;
mod errors;
mod logging;
mod mappers;
mod middleware;
mod models;
mod routes;
mod services;
mod utils;
mod validation;
mod views;

#[cfg(test)]
mod test_support;

use actix_web::middleware::{from_fn, Logger};
use actix_web::{web, App, HttpServer};
use anyhow::Context;

use crate::config::AppConfig;
use crate::middleware::{session_gate, SessionManager};
use crate::services::user_service::UserService;
use crate::utils::password::PasswordEncoder;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().context("Invalid configuration")?;
    logging::init_logging(&config.log_level)?;
    tracing::debug!("Loaded {:?}", config);

    if config.uses_default_secret() {
        tracing::warn!("⚠️ JWT_SECRET is not set, using the insecure development secret");
    }

    tracing::info!("🔌 Connecting to database...");
    let db = db::establish_connection(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    db::create_schema(&db)
        .await
        .context("Failed to create schema")?;
    tracing::info!("✅ Database connected!");

    let encoder = PasswordEncoder::new(config.password_hash_cost);

    if let Some(admin) = &config.admin {
        UserService::ensure_admin(&db, &encoder, &admin.username, &admin.password, &admin.fullname)
            .await
            .context("Failed to create the bootstrap admin account")?;
    }

    let db = web::Data::new(db);
    let sessions = web::Data::new(SessionManager::new(
        config.jwt_secret.clone(),
        config.session_hours,
    ));
    let encoder = web::Data::new(encoder);

    tracing::info!("🚀 Starting server on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(db.clone())
            .app_data(sessions.clone())
            .app_data(encoder.clone())
            .app_data(routes::form_config())
            .wrap(from_fn(session_gate))
            .wrap(Logger::default())
            .configure(routes::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
