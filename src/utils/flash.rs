// Messages "flash": posés sur une redirection, consommés par la vue suivante

use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

pub const FLASH_COOKIE: &str = "FLASH";

pub fn encode(message: &str) -> String {
    URL_SAFE_NO_PAD.encode(message)
}

pub fn decode(value: &str) -> Option<String> {
    let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
    String::from_utf8(bytes).ok()
}

pub fn flash_cookie(message: &str) -> Cookie<'static> {
    Cookie::build(FLASH_COOKIE, encode(message))
        .path("/")
        .http_only(true)
        .finish()
}

pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(FLASH_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}

pub fn redirect_with_flash(location: &str, message: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .cookie(flash_cookie(message))
        .finish()
}

/// Lit le message en attente (le cookie est supprimé par la vue qui l'affiche)
pub fn peek(req: &HttpRequest) -> Option<String> {
    req.cookie(FLASH_COOKIE).and_then(|cookie| decode(cookie.value()))
}
