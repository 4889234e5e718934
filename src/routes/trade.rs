use actix_web::{get, post, web, HttpRequest, HttpResponse};
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::dto::trade::{TradeAddDto, TradeUpdateDto};
use crate::errors::AppError;
use crate::middleware::AuthUser;
use crate::services::trade_service::TradeService;
use crate::validation::{self, FieldErrors};
use crate::views;

/// GET /trade/list
#[get("/list")]
pub async fn list(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, AppError> {
    let trades = TradeService::list_all(&db).await?;
    Ok(views::render(&req, "trade/list", json!({ "trades": trades })))
}

/// GET /trade/add - formulaire vide
#[get("/add")]
pub async fn add_form(req: HttpRequest) -> HttpResponse {
    views::form(&req, "trade/add", "trade", &TradeAddDto::default(), &FieldErrors::new())
}

/// POST /trade/validate - création
#[post("/validate")]
pub async fn validate(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    auth_user: AuthUser,
    form: web::Form<TradeAddDto>,
) -> Result<HttpResponse, AppError> {
    let dto = form.into_inner();

    let errors = validation::collect(&dto);
    if !errors.is_empty() {
        tracing::warn!("Invalid trade form: {} field(s) in error", errors.len());
        return Ok(views::form(&req, "trade/add", "trade", &dto, &errors));
    }

    TradeService::create(&db, &auth_user, dto).await?;
    Ok(views::redirect("/trade/list"))
}

/// GET /trade/update/{id}
#[get("/update/{id}")]
pub async fn update_form(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let dto = TradeService::get_update_view(&db, path.into_inner()).await?;
    Ok(views::form(&req, "trade/update", "trade", &dto, &FieldErrors::new()))
}

/// POST /trade/update/{id}
#[post("/update/{id}")]
pub async fn update(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    auth_user: AuthUser,
    path: web::Path<i32>,
    form: web::Form<TradeUpdateDto>,
) -> Result<HttpResponse, AppError> {
    let mut dto = form.into_inner();

    let mut errors = FieldErrors::new();
    validation::bind_path_id(&mut dto.id, path.into_inner(), &mut errors);
    errors.merge(validation::collect(&dto));
    if !errors.is_empty() {
        tracing::warn!("Invalid trade form: {} field(s) in error", errors.len());
        return Ok(views::form(&req, "trade/update", "trade", &dto, &errors));
    }

    TradeService::update(&db, &auth_user, dto).await?;
    Ok(views::redirect("/trade/list"))
}

/// GET /trade/delete/{id}
#[get("/delete/{id}")]
pub async fn delete(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    TradeService::delete_by_id(&db, path.into_inner()).await?;
    Ok(views::redirect("/trade/list"))
}

pub fn trade_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/trade")
            .service(list)
            .service(add_form)
            .service(validate)
            .service(update_form)
            .service(update)
            .service(delete),
    );
}
