use actix_web::{get, post, web, HttpRequest, HttpResponse};
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::dto::user::{UserAddDto, UserUpdateDto};
use crate::errors::AppError;
use crate::services::user_service::UserService;
use crate::utils::password::PasswordEncoder;
use crate::validation::{self, FieldErrors};
use crate::views;

// Réservé aux ADMIN (contrôlé par session_gate)

fn username_taken(username: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.add("username", format!("Username already exists: {}", username));
    errors
}

/// GET /user/list
#[get("/list")]
pub async fn list(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, AppError> {
    let users = UserService::list_all(&db).await?;
    Ok(views::render(&req, "user/list", json!({ "users": users })))
}

/// GET /user/add
#[get("/add")]
pub async fn add_form(req: HttpRequest) -> HttpResponse {
    views::form(&req, "user/add", "user", &UserAddDto::blank(), &FieldErrors::new())
}

/// POST /user/validate - création d'un compte
#[post("/validate")]
pub async fn validate(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    encoder: web::Data<PasswordEncoder>,
    form: web::Form<UserAddDto>,
) -> Result<HttpResponse, AppError> {
    let dto = form.into_inner();

    let errors = validation::collect(&dto);
    if !errors.is_empty() {
        tracing::warn!("Invalid user form: {} field(s) in error", errors.len());
        return Ok(views::form(&req, "user/add", "user", &dto, &errors));
    }

    match UserService::create(&db, &encoder, dto.clone()).await {
        Ok(_) => Ok(views::redirect("/user/list")),
        Err(AppError::UsernameAlreadyExists(username)) => Ok(views::form(
            &req,
            "user/add",
            "user",
            &dto,
            &username_taken(&username),
        )),
        Err(e) => Err(e),
    }
}

/// GET /user/update/{id} - le mot de passe n'est jamais pré-rempli
#[get("/update/{id}")]
pub async fn update_form(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let dto = UserService::get_update_view(&db, path.into_inner()).await?;
    Ok(views::form(&req, "user/update", "user", &dto, &FieldErrors::new()))
}

/// POST /user/update/{id}
#[post("/update/{id}")]
pub async fn update(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    encoder: web::Data<PasswordEncoder>,
    path: web::Path<i32>,
    form: web::Form<UserUpdateDto>,
) -> Result<HttpResponse, AppError> {
    let mut dto = form.into_inner().without_blank_password();
    let mut errors = FieldErrors::new();
    validation::bind_path_id(&mut dto.id, path.into_inner(), &mut errors);

    apply_update(&req, &db, &encoder, dto, errors).await
}

/// POST /user/update - variante où l'id vient du formulaire
#[post("/update")]
pub async fn update_from_form(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    encoder: web::Data<PasswordEncoder>,
    form: web::Form<UserUpdateDto>,
) -> Result<HttpResponse, AppError> {
    let dto = form.into_inner().without_blank_password();
    apply_update(&req, &db, &encoder, dto, FieldErrors::new()).await
}

async fn apply_update(
    req: &HttpRequest,
    db: &DatabaseConnection,
    encoder: &PasswordEncoder,
    dto: UserUpdateDto,
    mut errors: FieldErrors,
) -> Result<HttpResponse, AppError> {
    errors.merge(validation::collect(&dto));
    if !errors.is_empty() {
        tracing::warn!("Invalid user form: {} field(s) in error", errors.len());
        return Ok(views::form(req, "user/update", "user", &dto, &errors));
    }

    match UserService::update(db, encoder, dto.clone()).await {
        Ok(_) => Ok(views::redirect("/user/list")),
        Err(AppError::UsernameAlreadyExists(username)) => Ok(views::form(
            req,
            "user/update",
            "user",
            &dto,
            &username_taken(&username),
        )),
        Err(e) => Err(e),
    }
}

/// GET /user/delete/{id}
#[get("/delete/{id}")]
pub async fn delete(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    UserService::delete_by_id(&db, path.into_inner()).await?;
    Ok(views::redirect("/user/list"))
}

pub fn user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .service(list)
            .service(add_form)
            .service(validate)
            .service(update_form)
            .service(update)
            .service(update_from_form)
            .service(delete),
    );
}
