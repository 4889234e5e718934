// Règles de validation partagées par les DTO + collecte des erreurs par champ

use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::errors::AppError;
use crate::models::users::Role;

/// Symboles acceptés dans un mot de passe
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&#^()";

/// Erreurs de validation indexées par nom de champ du formulaire
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Ajoute les erreurs d'une autre collecte
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut collected = FieldErrors::new();
        for (field, field_errors) in errors.field_errors() {
            let name = to_form_name(&field);
            for error in field_errors {
                collected.add(&name, message_for(error));
            }
        }
        collected
    }
}

/// Évalue toutes les contraintes du DTO (vide si tout est valide)
pub fn collect<T: Validate>(dto: &T) -> FieldErrors {
    match dto.validate() {
        Ok(()) => FieldErrors::new(),
        Err(errors) => errors.into(),
    }
}

pub fn check<T: Validate>(dto: &T) -> Result<(), AppError> {
    let errors = collect(dto);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

/// Identifiant obligatoire d'un DTO de modification déjà validé
pub fn require_id(id: Option<i32>) -> Result<i32, AppError> {
    id.ok_or_else(|| {
        let mut errors = FieldErrors::new();
        errors.add("id", "Id is mandatory");
        AppError::Validation(errors)
    })
}

/// Rattache l'id de l'URL au DTO; un id différent dans le corps est refusé
pub fn bind_path_id(dto_id: &mut Option<i32>, path_id: i32, errors: &mut FieldErrors) {
    match *dto_id {
        None => *dto_id = Some(path_id),
        Some(id) if id != path_id => errors.add("id", "Identifier cannot be changed"),
        Some(_) => {}
    }
}

/// Les noms de champs Rust sont en snake_case, les formulaires en camelCase
fn to_form_name(field: &str) -> String {
    let field = field.strip_prefix("r#").unwrap_or(field);
    let mut name = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            name.extend(c.to_uppercase());
            upper_next = false;
        } else {
            name.push(c);
        }
    }
    name
}

fn message_for(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }
    match &*error.code {
        "range" => "must be greater than 0".to_string(),
        "required" => "must not be null".to_string(),
        "length" => "has an invalid length".to_string(),
        other => format!("is invalid ({})", other),
    }
}

fn error_with_message(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Équivalent du @NotBlank: refuse les chaînes vides ou composées d'espaces
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

/// Refuse inf et NaN, que le parseur f64 accepte
pub fn finite(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new("finite"));
    }
    Ok(())
}

/// Règle de complexité du mot de passe (la longueur est vérifiée à part)
pub fn password_strength(password: &str) -> Result<(), ValidationError> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(c);

    if !password.chars().all(allowed) {
        return Err(error_with_message(
            "password_charset",
            "Password may only contain letters, digits and the symbols @$!%*?&#^()",
        ));
    }

    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    if !(has_upper && has_digit && has_symbol) {
        return Err(error_with_message(
            "password_strength",
            "Password must contain at least one uppercase letter, one digit and one symbol",
        ));
    }
    Ok(())
}

pub fn valid_role(role: &str) -> Result<(), ValidationError> {
    if role.trim().is_empty() {
        return Err(error_with_message("not_blank", "Role is mandatory"));
    }
    role.parse::<Role>()
        .map(|_| ())
        .map_err(|_| error_with_message("role", "Role must be USER or ADMIN"))
}
