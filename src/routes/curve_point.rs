use actix_web::{get, post, web, HttpRequest, HttpResponse};
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::dto::curve_point::{CurvePointAddDto, CurvePointUpdateDto};
use crate::errors::AppError;
use crate::services::curve_point_service::CurvePointService;
use crate::validation::{self, FieldErrors};
use crate::views;

/// GET /curvePoint/list
#[get("/list")]
pub async fn list(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, AppError> {
    let curve_points = CurvePointService::list_all(&db).await?;
    Ok(views::render(
        &req,
        "curvePoint/list",
        json!({ "curvePoints": curve_points }),
    ))
}

/// GET /curvePoint/add - formulaire vide
#[get("/add")]
pub async fn add_form(req: HttpRequest) -> HttpResponse {
    views::form(
        &req,
        "curvePoint/add",
        "curvePoint",
        &CurvePointAddDto::default(),
        &FieldErrors::new(),
    )
}

/// POST /curvePoint/validate - création
#[post("/validate")]
pub async fn validate(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    form: web::Form<CurvePointAddDto>,
) -> Result<HttpResponse, AppError> {
    let dto = form.into_inner();

    let errors = validation::collect(&dto);
    if !errors.is_empty() {
        tracing::warn!("Invalid curve point form: {} field(s) in error", errors.len());
        return Ok(views::form(&req, "curvePoint/add", "curvePoint", &dto, &errors));
    }

    CurvePointService::create(&db, dto).await?;
    Ok(views::redirect("/curvePoint/list"))
}

/// GET /curvePoint/update/{id}
#[get("/update/{id}")]
pub async fn update_form(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let dto = CurvePointService::get_update_view(&db, path.into_inner()).await?;
    Ok(views::form(
        &req,
        "curvePoint/update",
        "curvePoint",
        &dto,
        &FieldErrors::new(),
    ))
}

/// POST /curvePoint/update/{id}
#[post("/update/{id}")]
pub async fn update(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    form: web::Form<CurvePointUpdateDto>,
) -> Result<HttpResponse, AppError> {
    let mut dto = form.into_inner();

    let mut errors = FieldErrors::new();
    validation::bind_path_id(&mut dto.id, path.into_inner(), &mut errors);
    errors.merge(validation::collect(&dto));
    if !errors.is_empty() {
        tracing::warn!("Invalid curve point form: {} field(s) in error", errors.len());
        return Ok(views::form(
            &req,
            "curvePoint/update",
            "curvePoint",
            &dto,
            &errors,
        ));
    }

    CurvePointService::update(&db, dto).await?;
    Ok(views::redirect("/curvePoint/list"))
}

/// GET /curvePoint/delete/{id}
#[get("/delete/{id}")]
pub async fn delete(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    CurvePointService::delete_by_id(&db, path.into_inner()).await?;
    Ok(views::redirect("/curvePoint/list"))
}

pub fn curve_point_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/curvePoint")
            .service(list)
            .service(add_form)
            .service(validate)
            .service(update_form)
            .service(update)
            .service(delete),
    );
}
