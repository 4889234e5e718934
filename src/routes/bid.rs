use actix_web::{get, post, web, HttpRequest, HttpResponse};
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::dto::bid::{BidAddDto, BidUpdateDto};
use crate::errors::AppError;
use crate::middleware::AuthUser;
use crate::services::bid_service::BidService;
use crate::validation::{self, FieldErrors};
use crate::views;

/// GET /bid/list
#[get("/list")]
pub async fn list(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, AppError> {
    let bids = BidService::list_all(&db).await?;
    Ok(views::render(&req, "bid/list", json!({ "bids": bids })))
}

/// GET /bid/add - formulaire vide
#[get("/add")]
pub async fn add_form(req: HttpRequest) -> HttpResponse {
    views::form(&req, "bid/add", "bid", &BidAddDto::default(), &FieldErrors::new())
}

/// POST /bid/validate - création
#[post("/validate")]
pub async fn validate(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    auth_user: AuthUser,
    form: web::Form<BidAddDto>,
) -> Result<HttpResponse, AppError> {
    let dto = form.into_inner();

    let errors = validation::collect(&dto);
    if !errors.is_empty() {
        tracing::warn!("Invalid bid form: {} field(s) in error", errors.len());
        return Ok(views::form(&req, "bid/add", "bid", &dto, &errors));
    }

    BidService::create(&db, &auth_user, dto).await?;
    Ok(views::redirect("/bid/list"))
}

/// GET /bid/update/{id}
#[get("/update/{id}")]
pub async fn update_form(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let dto = BidService::get_update_view(&db, path.into_inner()).await?;
    Ok(views::form(&req, "bid/update", "bid", &dto, &FieldErrors::new()))
}

/// POST /bid/update/{id}
#[post("/update/{id}")]
pub async fn update(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    auth_user: AuthUser,
    path: web::Path<i32>,
    form: web::Form<BidUpdateDto>,
) -> Result<HttpResponse, AppError> {
    let mut dto = form.into_inner();

    let mut errors = FieldErrors::new();
    validation::bind_path_id(&mut dto.id, path.into_inner(), &mut errors);
    errors.merge(validation::collect(&dto));
    if !errors.is_empty() {
        tracing::warn!("Invalid bid form: {} field(s) in error", errors.len());
        return Ok(views::form(&req, "bid/update", "bid", &dto, &errors));
    }

    BidService::update(&db, &auth_user, dto).await?;
    Ok(views::redirect("/bid/list"))
}

/// GET /bid/delete/{id}
#[get("/delete/{id}")]
pub async fn delete(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    BidService::delete_by_id(&db, path.into_inner()).await?;
    Ok(views::redirect("/bid/list"))
}

pub fn bid_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/bid")
            .service(list)
            .service(add_form)
            .service(validate)
            .service(update_form)
            .service(update)
            .service(delete),
    );
}
