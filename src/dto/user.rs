use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::dto::empty_as_none;
use crate::models::users::Role;
use crate::validation::{not_blank, password_strength, valid_role};

#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserAddDto {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Username is mandatory"))]
    pub username: String,

    // Jamais renvoyé dans un formulaire réaffiché
    #[serde(default, skip_serializing)]
    #[validate(
        length(min = 8, message = "Password must be at least 8 characters long"),
        custom(function = "password_strength")
    )]
    pub raw_password: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "FullName is mandatory"))]
    pub fullname: String,

    #[serde(default)]
    #[validate(custom(function = "valid_role"))]
    pub role: String,
}

impl UserAddDto {
    /// Formulaire vide proposé par /user/add (rôle USER présélectionné)
    pub fn blank() -> Self {
        Self {
            role: Role::User.to_string(),
            ..Default::default()
        }
    }
}

impl fmt::Debug for UserAddDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserAddDto")
            .field("username", &self.username)
            .field("raw_password", &"*****")
            .field("fullname", &self.fullname)
            .field("role", &self.role)
            .finish()
    }
}

/// rawPassword absent = mot de passe inchangé
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateDto {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(required(message = "Id is mandatory"))]
    pub id: Option<i32>,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Username is mandatory"))]
    pub username: Option<String>,

    #[serde(default, skip_serializing)]
    #[validate(
        length(min = 8, message = "Password must be at least 8 characters long"),
        custom(function = "password_strength")
    )]
    pub raw_password: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "FullName is mandatory"))]
    pub fullname: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "valid_role"))]
    pub role: Option<String>,
}

impl UserUpdateDto {
    /// Un champ mot de passe laissé vide dans le formulaire d'édition = pas de changement
    pub fn without_blank_password(mut self) -> Self {
        if self.raw_password.as_deref().is_some_and(str::is_empty) {
            self.raw_password = None;
        }
        self
    }
}

impl fmt::Debug for UserUpdateDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserUpdateDto")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("raw_password", &self.raw_password.as_ref().map(|_| "*****"))
            .field("fullname", &self.fullname)
            .field("role", &self.role)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListItemDto {
    pub id: i32,
    pub fullname: String,
    pub username: String,
    pub role: Role,
}
