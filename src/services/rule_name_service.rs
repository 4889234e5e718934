use sea_orm::*;

use crate::dto::rule_name::{RuleNameAddDto, RuleNameListItemDto, RuleNameUpdateDto};
use crate::errors::{AppError, EntityKind};
use crate::mappers::rule_name_mapper;
use crate::models::rule_name;
use crate::validation;

pub struct RuleNameService;

impl RuleNameService {
    pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<RuleNameListItemDto>, AppError> {
        tracing::debug!("Listing all rule names");
        let rules = rule_name::Entity::find()
            .order_by_asc(rule_name::Column::Id)
            .all(db)
            .await?;

        Ok(rules.iter().map(rule_name_mapper::to_list_item).collect())
    }

    pub async fn create(
        db: &DatabaseConnection,
        dto: RuleNameAddDto,
    ) -> Result<rule_name::Model, AppError> {
        tracing::debug!("Creating rule name {}", dto.name);
        validation::check(&dto)?;

        let created = rule_name_mapper::to_active_model(dto).insert(db).await?;
        tracing::info!("Rule name created with ID[{}]", created.id);
        Ok(created)
    }

    pub async fn update(
        db: &DatabaseConnection,
        dto: RuleNameUpdateDto,
    ) -> Result<rule_name::Model, AppError> {
        validation::check(&dto)?;
        let id = validation::require_id(dto.id)?;
        tracing::debug!("Updating rule name ID[{}]", id);

        let txn = db.begin().await?;
        let current = rule_name::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::RuleName, id))?;

        let merged = rule_name_mapper::merge(current, dto);
        let updated = rule_name::ActiveModel::from(merged)
            .reset_all()
            .update(&txn)
            .await?;
        txn.commit().await?;

        tracing::info!("Rule name ID[{}] updated", updated.id);
        Ok(updated)
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<(), AppError> {
        tracing::debug!("Deleting rule name ID[{}]", id);
        let result = rule_name::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::not_found(EntityKind::RuleName, id));
        }

        tracing::info!("Rule name ID[{}] deleted", id);
        Ok(())
    }

    pub async fn get_update_view(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<RuleNameUpdateDto, AppError> {
        let rule = rule_name::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::RuleName, id))?;

        Ok(rule_name_mapper::to_update_dto(&rule))
    }
}
