// Configuration lue dans l'environnement (.env chargé par dotenv dans main)

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_JWT_SECRET: &str = "poseidon-dev-secret-change-me";
pub const DEFAULT_HASH_COST: u32 = 10;
// Bornes acceptées par bcrypt
const HASH_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Compte ADMIN créé au démarrage si la table users est vide
#[derive(Clone)]
pub struct AdminAccount {
    pub username: String,
    pub password: String,
    pub fullname: String,
}

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub session_hours: i64,
    pub password_hash_cost: u32,
    pub log_level: String,
    pub admin: Option<AdminAccount>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Même chose que from_env, avec une source de variables injectable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Une variable vide compte comme absente
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let admin = match (get("ADMIN_USERNAME"), get("ADMIN_PASSWORD")) {
            (Some(username), Some(password)) => Some(AdminAccount {
                username,
                password,
                fullname: get("ADMIN_FULLNAME").unwrap_or_else(|| "Administrator".to_string()),
            }),
            _ => None,
        };

        Ok(Self {
            database_url,
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or("PORT", get("PORT"), 8080)?,
            jwt_secret: get("JWT_SECRET").unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string()),
            session_hours: parse_or("SESSION_HOURS", get("SESSION_HOURS"), 24)?,
            password_hash_cost: parse_cost(get("BCRYPT_COST"))?,
            log_level: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            admin,
        })
    }

    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

fn parse_or<T: FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

fn parse_cost(value: Option<String>) -> Result<u32, ConfigError> {
    let cost = parse_or("BCRYPT_COST", value, DEFAULT_HASH_COST)?;
    if !HASH_COST_RANGE.contains(&cost) {
        return Err(ConfigError::Invalid {
            name: "BCRYPT_COST",
            value: cost.to_string(),
        });
    }
    Ok(cost)
}

// Debug manuel: ni secret ni mot de passe dans les logs
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &"*****")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("jwt_secret", &"*****")
            .field("session_hours", &self.session_hours)
            .field("password_hash_cost", &self.password_hash_cost)
            .field("log_level", &self.log_level)
            .field("admin", &self.admin.as_ref().map(|a| &a.username))
            .finish()
    }
}
