use sea_orm::*;

use crate::dto::user::{UserAddDto, UserListItemDto, UserUpdateDto};
use crate::errors::{AppError, EntityKind};
use crate::mappers::user_mapper;
use crate::models::users::{self, Role};
use crate::utils::password::PasswordEncoder;
use crate::validation::{self, FieldErrors};

pub struct UserService;

impl UserService {
    pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<UserListItemDto>, AppError> {
        tracing::debug!("Listing all users");
        let users = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(db)
            .await?;

        Ok(users.iter().map(user_mapper::to_list_item).collect())
    }

    /// Crée un compte; le mot de passe brut est hashé avant l'écriture
    pub async fn create(
        db: &DatabaseConnection,
        encoder: &PasswordEncoder,
        dto: UserAddDto,
    ) -> Result<users::Model, AppError> {
        tracing::debug!("Creating user {}", dto.username);
        validation::check(&dto)?;
        let role = parse_role(&dto.role)?;

        if Self::find_by_username(db, &dto.username).await?.is_some() {
            tracing::warn!("Username already taken: {}", dto.username);
            return Err(AppError::UsernameAlreadyExists(dto.username));
        }

        let new_user = users::ActiveModel {
            username: Set(dto.username.clone()),
            password_hash: Set(encoder.hash(&dto.raw_password)?),
            fullname: Set(dto.fullname),
            role: Set(role),
            ..Default::default()
        };

        // La contrainte unique couvre la course entre deux créations simultanées
        let created = new_user
            .insert(db)
            .await
            .map_err(|e| AppError::from_user_write(e, &dto.username))?;

        tracing::info!("User created with ID[{}] and role {}", created.id, created.role);
        Ok(created)
    }

    /// Le mot de passe n'est re-hashé que si un nouveau est fourni
    pub async fn update(
        db: &DatabaseConnection,
        encoder: &PasswordEncoder,
        dto: UserUpdateDto,
    ) -> Result<users::Model, AppError> {
        let dto = dto.without_blank_password();
        validation::check(&dto)?;
        let id = validation::require_id(dto.id)?;
        tracing::debug!("Updating user ID[{}]", id);

        let txn = db.begin().await?;
        let current = users::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::User, id))?;

        if let Some(username) = dto.username.as_deref().filter(|u| *u != current.username) {
            let taken = users::Entity::find()
                .filter(users::Column::Username.eq(username))
                .one(&txn)
                .await?
                .is_some();
            if taken {
                tracing::warn!("Username already taken: {}", username);
                return Err(AppError::UsernameAlreadyExists(username.to_string()));
            }
        }

        let mut merged = user_mapper::merge(current, &dto);
        if let Some(raw_password) = dto.raw_password.as_deref() {
            merged.password_hash = encoder.hash(raw_password)?;
        }

        let username = merged.username.clone();
        let updated = users::ActiveModel::from(merged)
            .reset_all()
            .update(&txn)
            .await
            .map_err(|e| AppError::from_user_write(e, &username))?;
        txn.commit().await?;

        tracing::info!("User ID[{}] updated", updated.id);
        Ok(updated)
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<(), AppError> {
        tracing::debug!("Deleting user ID[{}]", id);
        let result = users::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::not_found(EntityKind::User, id));
        }

        tracing::info!("User ID[{}] deleted", id);
        Ok(())
    }

    pub async fn get_update_view(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<UserUpdateDto, AppError> {
        let user = users::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::User, id))?;

        Ok(user_mapper::to_update_dto(&user))
    }

    pub async fn find_by_username<C: ConnectionTrait>(
        db: &C,
        username: &str,
    ) -> Result<Option<users::Model>, AppError> {
        let user = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(db)
            .await?;
        Ok(user)
    }

    /// Crée le premier compte ADMIN si la table est vide.
    /// Retourne true si le compte a été créé.
    pub async fn ensure_admin(
        db: &DatabaseConnection,
        encoder: &PasswordEncoder,
        username: &str,
        raw_password: &str,
        fullname: &str,
    ) -> Result<bool, AppError> {
        if users::Entity::find().count(db).await? > 0 {
            tracing::debug!("Users already present, no admin bootstrap");
            return Ok(false);
        }

        let dto = UserAddDto {
            username: username.to_string(),
            raw_password: raw_password.to_string(),
            fullname: fullname.to_string(),
            role: Role::Admin.to_string(),
        };
        let admin = Self::create(db, encoder, dto).await?;

        tracing::info!("Bootstrap admin account created: {}", admin.username);
        Ok(true)
    }
}

fn parse_role(role: &str) -> Result<Role, AppError> {
    role.parse().map_err(|_| {
        let mut errors = FieldErrors::new();
        errors.add("role", "Role must be USER or ADMIN");
        AppError::Validation(errors)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_db, test_encoder};

    fn new_user(username: &str) -> UserAddDto {
        UserAddDto {
            username: username.to_string(),
            raw_password: "ValidPass123!".to_string(),
            fullname: "New User".to_string(),
            role: "USER".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_hashes_password() {
        let db = test_db().await;
        let encoder = test_encoder();

        let created = UserService::create(&db, &encoder, new_user("newuser")).await.unwrap();

        assert_ne!(created.password_hash, "ValidPass123!");
        assert!(encoder.verify("ValidPass123!", &created.password_hash));
        assert!(!encoder.verify("ValidPass123?", &created.password_hash));
        assert_eq!(created.role, Role::User);

        let users = UserService::list_all(&db).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "newuser");
    }

    #[tokio::test]
    async fn test_duplicate_username() {
        let db = test_db().await;
        let encoder = test_encoder();
        UserService::create(&db, &encoder, new_user("newuser")).await.unwrap();

        let err = UserService::create(&db, &encoder, new_user("newuser"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UsernameAlreadyExists(ref name) if name == "newuser"));
        assert_eq!(UserService::list_all(&db).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_weak_password() {
        let db = test_db().await;
        let mut dto = new_user("weak");
        dto.raw_password = "invalidpassword1".to_string();

        let err = UserService::create(&db, &test_encoder(), dto).await.unwrap_err();

        match err {
            AppError::Validation(errors) => assert!(errors.contains("rawPassword")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(UserService::find_by_username(&db, "weak").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_without_password_keeps_hash() {
        let db = test_db().await;
        let encoder = test_encoder();
        let created = UserService::create(&db, &encoder, new_user("newuser")).await.unwrap();

        let patch = UserUpdateDto {
            id: Some(created.id),
            fullname: Some("Renamed".to_string()),
            raw_password: Some(String::new()),
            ..Default::default()
        };
        let updated = UserService::update(&db, &encoder, patch).await.unwrap();

        assert_eq!(updated.fullname, "Renamed");
        assert_eq!(updated.password_hash, created.password_hash);
    }

    #[tokio::test]
    async fn test_update_with_new_password() {
        let db = test_db().await;
        let encoder = test_encoder();
        let created = UserService::create(&db, &encoder, new_user("newuser")).await.unwrap();

        let patch = UserUpdateDto {
            id: Some(created.id),
            raw_password: Some("OtherPass456#".to_string()),
            role: Some("ADMIN".to_string()),
            ..Default::default()
        };
        let updated = UserService::update(&db, &encoder, patch).await.unwrap();

        assert!(encoder.verify("OtherPass456#", &updated.password_hash));
        assert!(!encoder.verify("ValidPass123!", &updated.password_hash));
        assert_eq!(updated.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_rename_to_existing_username() {
        let db = test_db().await;
        let encoder = test_encoder();
        UserService::create(&db, &encoder, new_user("alice")).await.unwrap();
        let bob = UserService::create(&db, &encoder, new_user("bob")).await.unwrap();

        let patch = UserUpdateDto {
            id: Some(bob.id),
            username: Some("alice".to_string()),
            ..Default::default()
        };
        let err = UserService::update(&db, &encoder, patch).await.unwrap_err();

        assert!(matches!(err, AppError::UsernameAlreadyExists(_)));
        let view = UserService::get_update_view(&db, bob.id).await.unwrap();
        assert_eq!(view.username.as_deref(), Some("bob"));
        assert!(view.raw_password.is_none());
    }

    #[tokio::test]
    async fn test_ensure_admin_only_on_empty_table() {
        let db = test_db().await;
        let encoder = test_encoder();

        let created = UserService::ensure_admin(&db, &encoder, "admin", "Admin123!", "Administrator")
            .await
            .unwrap();
        assert!(created);

        let admin = UserService::find_by_username(&db, "admin").await.unwrap().unwrap();
        assert_eq!(admin.role, Role::Admin);

        let created = UserService::ensure_admin(&db, &encoder, "other", "Admin123!", "Other")
            .await
            .unwrap();
        assert!(!created);
        assert_eq!(UserService::list_all(&db).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let db = test_db().await;
        let user = UserService::create(&db, &test_encoder(), new_user("gone")).await.unwrap();

        UserService::delete_by_id(&db, user.id).await.unwrap();
        let err = UserService::delete_by_id(&db, user.id).await.unwrap_err();

        assert_eq!(err.to_string(), format!("User not found with ID: {}", user.id));
    }
}
