use actix_web::{get, post, web, HttpRequest, HttpResponse};
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::dto::rule_name::{RuleNameAddDto, RuleNameUpdateDto};
use crate::errors::AppError;
use crate::services::rule_name_service::RuleNameService;
use crate::validation::{self, FieldErrors};
use crate::views;

#[get("/list")]
pub async fn list(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, AppError> {
    let rule_names = RuleNameService::list_all(&db).await?;
    Ok(views::render(&req, "ruleName/list", json!({ "ruleNames": rule_names })))
}

#[get("/add")]
pub async fn add_form(req: HttpRequest) -> HttpResponse {
    views::form(
        &req,
        "ruleName/add",
        "ruleName",
        &RuleNameAddDto::default(),
        &FieldErrors::new(),
    )
}

#[post("/validate")]
pub async fn validate(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    form: web::Form<RuleNameAddDto>,
) -> Result<HttpResponse, AppError> {
    let dto = form.into_inner();

    let errors = validation::collect(&dto);
    if !errors.is_empty() {
        tracing::warn!("Invalid rule name form: {} field(s) in error", errors.len());
        return Ok(views::form(&req, "ruleName/add", "ruleName", &dto, &errors));
    }

    RuleNameService::create(&db, dto).await?;
    Ok(views::redirect("/ruleName/list"))
}

#[get("/update/{id}")]
pub async fn update_form(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let dto = RuleNameService::get_update_view(&db, path.into_inner()).await?;
    Ok(views::form(&req, "ruleName/update", "ruleName", &dto, &FieldErrors::new()))
}

#[post("/update/{id}")]
pub async fn update(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    form: web::Form<RuleNameUpdateDto>,
) -> Result<HttpResponse, AppError> {
    let mut dto = form.into_inner();

    let mut errors = FieldErrors::new();
    validation::bind_path_id(&mut dto.id, path.into_inner(), &mut errors);
    errors.merge(validation::collect(&dto));
    if !errors.is_empty() {
        tracing::warn!("Invalid rule name form: {} field(s) in error", errors.len());
        return Ok(views::form(&req, "ruleName/update", "ruleName", &dto, &errors));
    }

    RuleNameService::update(&db, dto).await?;
    Ok(views::redirect("/ruleName/list"))
}

#[get("/delete/{id}")]
pub async fn delete(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    RuleNameService::delete_by_id(&db, path.into_inner()).await?;
    Ok(views::redirect("/ruleName/list"))
}

pub fn rule_name_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/ruleName")
            .service(list)
            .service(add_form)
            .service(validate)
            .service(update_form)
            .service(update)
            .service(delete),
    );
}
