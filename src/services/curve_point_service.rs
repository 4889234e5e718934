use chrono::Utc;
use sea_orm::*;

use crate::dto::curve_point::{CurvePointAddDto, CurvePointListItemDto, CurvePointUpdateDto};
use crate::errors::{AppError, EntityKind};
use crate::mappers::curve_point_mapper;
use crate::models::curve_point;
use crate::validation;

pub struct CurvePointService;

impl CurvePointService {
    pub async fn list_all(
        db: &DatabaseConnection,
    ) -> Result<Vec<CurvePointListItemDto>, AppError> {
        tracing::debug!("Listing all curve points");
        let points = curve_point::Entity::find()
            .order_by_asc(curve_point::Column::Id)
            .all(db)
            .await?;

        Ok(points.iter().map(curve_point_mapper::to_list_item).collect())
    }

    pub async fn create(
        db: &DatabaseConnection,
        dto: CurvePointAddDto,
    ) -> Result<curve_point::Model, AppError> {
        tracing::debug!("Creating curve point for curve {:?}", dto.curve_id);
        validation::check(&dto)?;

        let mut new_point = curve_point_mapper::to_active_model(dto);
        new_point.creation_date = Set(Utc::now());

        let created = new_point.insert(db).await?;
        tracing::info!("Curve point created with ID[{}]", created.id);
        Ok(created)
    }

    /// `as_of_date` suit la dernière modification, `creation_date` ne bouge pas
    pub async fn update(
        db: &DatabaseConnection,
        dto: CurvePointUpdateDto,
    ) -> Result<curve_point::Model, AppError> {
        validation::check(&dto)?;
        let id = validation::require_id(dto.id)?;
        tracing::debug!("Updating curve point ID[{}]", id);

        let txn = db.begin().await?;
        let current = curve_point::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::CurvePoint, id))?;

        let mut merged = curve_point_mapper::merge(current, dto);
        merged.as_of_date = Some(Utc::now());

        let updated = curve_point::ActiveModel::from(merged)
            .reset_all()
            .update(&txn)
            .await?;
        txn.commit().await?;

        tracing::info!("Curve point ID[{}] updated", updated.id);
        Ok(updated)
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<(), AppError> {
        tracing::debug!("Deleting curve point ID[{}]", id);
        let result = curve_point::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::not_found(EntityKind::CurvePoint, id));
        }

        tracing::info!("Curve point ID[{}] deleted", id);
        Ok(())
    }

    pub async fn get_update_view(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<CurvePointUpdateDto, AppError> {
        let point = curve_point::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::CurvePoint, id))?;

        Ok(curve_point_mapper::to_update_dto(&point))
    }
}
