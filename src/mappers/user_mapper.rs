use crate::dto::user::{UserListItemDto, UserUpdateDto};
use crate::models::users;

pub fn to_list_item(user: &users::Model) -> UserListItemDto {
    UserListItemDto {
        id: user.id,
        fullname: user.fullname.clone(),
        username: user.username.clone(),
        role: user.role,
    }
}

/// Le mot de passe n'est jamais pré-rempli dans le formulaire d'édition
pub fn to_update_dto(user: &users::Model) -> UserUpdateDto {
    UserUpdateDto {
        id: Some(user.id),
        username: Some(user.username.clone()),
        raw_password: None,
        fullname: Some(user.fullname.clone()),
        role: Some(user.role.to_string()),
    }
}

/// Le hash n'est pas touché ici: c'est le service qui re-hash si besoin
pub fn merge(current: users::Model, patch: &UserUpdateDto) -> users::Model {
    let role = patch
        .role
        .as_deref()
        .and_then(|role| role.parse().ok())
        .unwrap_or(current.role);

    users::Model {
        username: patch.username.clone().unwrap_or(current.username),
        fullname: patch.fullname.clone().unwrap_or(current.fullname),
        role,
        ..current
    }
}
