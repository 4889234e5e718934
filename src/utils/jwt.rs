use jsonwebtoken::{encode, decode, Header, Validation, EncodingKey, DecodingKey, Algorithm};
use serde::{Deserialize, Serialize};

use crate::models::users::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,        // user_id
    pub username: String,
    pub role: Role,
    pub sid: String,     // identifiant de session (registre côté serveur)
    pub exp: i64,        // expiration timestamp
}

/// Signe les claims de session (HS256)
pub fn generate_token(claims: &Claims, secret: &str) -> Result<String, String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
        .map_err(|e| format!("Failed to generate token: {}", e))
}

/// Vérifie la signature et l'expiration
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    read_claims(token, secret, true)
}

/// Comme verify_token, mais accepte un token expiré (utile au logout)
pub fn read_claims(token: &str, secret: &str, check_expiry: bool) -> Result<Claims, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = check_expiry;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &validation,
    )
        .map(|data| data.claims)
        .map_err(|e| format!("Invalid token: {}", e))
}
