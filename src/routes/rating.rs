use actix_web::{get, post, web, HttpRequest, HttpResponse};
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::dto::rating::{RatingAddDto, RatingUpdateDto};
use crate::errors::AppError;
use crate::services::rating_service::RatingService;
use crate::validation::{self, FieldErrors};
use crate::views;

#[get("/list")]
pub async fn list(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, AppError> {
    let ratings = RatingService::list_all(&db).await?;
    Ok(views::render(&req, "rating/list", json!({ "ratings": ratings })))
}

#[get("/add")]
pub async fn add_form(req: HttpRequest) -> HttpResponse {
    views::form(&req, "rating/add", "rating", &RatingAddDto::default(), &FieldErrors::new())
}

#[post("/validate")]
pub async fn validate(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    form: web::Form<RatingAddDto>,
) -> Result<HttpResponse, AppError> {
    let dto = form.into_inner();

    let errors = validation::collect(&dto);
    if !errors.is_empty() {
        tracing::warn!("Invalid rating form: {} field(s) in error", errors.len());
        return Ok(views::form(&req, "rating/add", "rating", &dto, &errors));
    }

    RatingService::create(&db, dto).await?;
    Ok(views::redirect("/rating/list"))
}

#[get("/update/{id}")]
pub async fn update_form(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let dto = RatingService::get_update_view(&db, path.into_inner()).await?;
    Ok(views::form(&req, "rating/update", "rating", &dto, &FieldErrors::new()))
}

#[post("/update/{id}")]
pub async fn update(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    form: web::Form<RatingUpdateDto>,
) -> Result<HttpResponse, AppError> {
    let mut dto = form.into_inner();

    let mut errors = FieldErrors::new();
    validation::bind_path_id(&mut dto.id, path.into_inner(), &mut errors);
    errors.merge(validation::collect(&dto));
    if !errors.is_empty() {
        tracing::warn!("Invalid rating form: {} field(s) in error", errors.len());
        return Ok(views::form(&req, "rating/update", "rating", &dto, &errors));
    }

    RatingService::update(&db, dto).await?;
    Ok(views::redirect("/rating/list"))
}

#[get("/delete/{id}")]
pub async fn delete(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    RatingService::delete_by_id(&db, path.into_inner()).await?;
    Ok(views::redirect("/rating/list"))
}

pub fn rating_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/rating")
            .service(list)
            .service(add_form)
            .service(validate)
            .service(update_form)
            .service(update)
            .service(delete),
    );
}


#[cfg(test)]
mod tests {
    use crate::models::users::Role;
    use crate::test_support::{test_app, TestContext};
    use crate::utils::flash;
    use actix_web::http::{header, StatusCode};
    use actix_web::test;
    use serde_json::Value;

    #[actix_web::test]
    async fn test_add_then_list() {
        let ctx = TestContext::new().await;
        let cookie = ctx.login(Role::User).await;
        let app = test_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/rating/validate")
            .cookie(cookie.clone())
            .set_form([
                ("moodysRating", "Aaa"),
                ("sandPRating", "AAA"),
                ("fitchRating", "AA+"),
                ("orderNumber", "10"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/rating/list");

        let req = test::TestRequest::get()
            .uri("/rating/list")
            .cookie(cookie)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["view"], "rating/list");
        assert_eq!(body["model"]["ratings"][0]["moodysRating"], "Aaa");
        assert_eq!(body["model"]["ratings"][0]["sandPRating"], "AAA");
        assert_eq!(body["model"]["ratings"][0]["fitchRating"], "AA+");
        assert_eq!(body["model"]["ratings"][0]["orderNumber"], 10);
    }

    #[actix_web::test]
    async fn test_invalid_form_is_rendered_again() {
        let ctx = TestContext::new().await;
        let cookie = ctx.login(Role::User).await;
        let app = test_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/rating/validate")
            .cookie(cookie.clone())
            .set_form([
                ("moodysRating", "Aaa"),
                ("sandPRating", " "),
                ("fitchRating", "AA+"),
                ("orderNumber", "0"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["view"], "rating/add");
        assert_eq!(body["model"]["rating"]["moodysRating"], "Aaa");
        assert_eq!(body["model"]["errors"]["sandPRating"][0], "S&P rating is mandatory");
        assert_eq!(
            body["model"]["errors"]["orderNumber"][0],
            "Order number must be greater than 0"
        );

        let req = test::TestRequest::get()
            .uri("/rating/list")
            .cookie(cookie)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["model"]["ratings"].as_array().unwrap().len(), 0);
    }

    #[actix_web::test]
    async fn test_update_and_delete_twice() {
        let ctx = TestContext::new().await;
        let cookie = ctx.login(Role::User).await;
        let app = test_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/rating/validate")
            .cookie(cookie.clone())
            .set_form([
                ("moodysRating", "Aaa"),
                ("sandPRating", "AAA"),
                ("fitchRating", "AAA"),
                ("orderNumber", "1"),
            ])
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/rating/update/1")
            .cookie(cookie.clone())
            .set_form([("fitchRating", "BBB"), ("orderNumber", "4")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);

        let req = test::TestRequest::get()
            .uri("/rating/update/1")
            .cookie(cookie.clone())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["view"], "rating/update");
        assert_eq!(body["model"]["rating"]["moodysRating"], "Aaa");
        assert_eq!(body["model"]["rating"]["fitchRating"], "BBB");
        assert_eq!(body["model"]["rating"]["orderNumber"], 4);

        let req = test::TestRequest::get()
            .uri("/rating/delete/1")
            .cookie(cookie.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/rating/list");
        assert!(resp.response().cookies().all(|c| c.name() != flash::FLASH_COOKIE));

        let req = test::TestRequest::get()
            .uri("/rating/delete/1")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/rating/list");
        let flash_cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == flash::FLASH_COOKIE)
            .expect("flash cookie");
        assert_eq!(
            flash::decode(flash_cookie.value()).as_deref(),
            Some("Rating not found with ID: 1")
        );
    }
}
