// Rendu des vues: document JSON { view, model, flash }

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::utils::flash;
use crate::validation::FieldErrors;

/// Rend une vue; un message flash en attente est joint puis consommé
/// Un cookie illisible est effacé lui aussi
pub fn render(req: &HttpRequest, view: &str, model: Value) -> HttpResponse {
    let message = flash::peek(req);

    let mut response = HttpResponse::Ok();
    if req.cookie(flash::FLASH_COOKIE).is_some() {
        response.cookie(flash::removal_cookie());
    }

    response.json(json!({
        "view": view,
        "model": model,
        "flash": message,
    }))
}

/// Vue de formulaire: l'objet lié sous `name` + les erreurs par champ
pub fn form<T: Serialize>(
    req: &HttpRequest,
    view: &str,
    name: &str,
    dto: &T,
    errors: &FieldErrors,
) -> HttpResponse {
    let mut model = Map::new();
    model.insert(name.to_string(), serde_json::to_value(dto).unwrap_or_default());
    model.insert(
        "errors".to_string(),
        serde_json::to_value(errors).unwrap_or_default(),
    );

    render(req, view, Value::Object(model))
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}
