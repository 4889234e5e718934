use sea_orm::*;

use crate::dto::rating::{RatingAddDto, RatingListItemDto, RatingUpdateDto};
use crate::errors::{AppError, EntityKind};
use crate::mappers::rating_mapper;
use crate::models::rating;
use crate::validation;

pub struct RatingService;

impl RatingService {
    pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<RatingListItemDto>, AppError> {
        tracing::debug!("Listing all ratings");
        let ratings = rating::Entity::find()
            .order_by_asc(rating::Column::Id)
            .all(db)
            .await?;

        Ok(ratings.iter().map(rating_mapper::to_list_item).collect())
    }

    pub async fn create(
        db: &DatabaseConnection,
        dto: RatingAddDto,
    ) -> Result<rating::Model, AppError> {
        tracing::debug!("Creating rating with order number {:?}", dto.order_number);
        validation::check(&dto)?;

        let created = rating_mapper::to_active_model(dto).insert(db).await?;
        tracing::info!("Rating created with ID[{}]", created.id);
        Ok(created)
    }

    pub async fn update(
        db: &DatabaseConnection,
        dto: RatingUpdateDto,
    ) -> Result<rating::Model, AppError> {
        validation::check(&dto)?;
        let id = validation::require_id(dto.id)?;
        tracing::debug!("Updating rating ID[{}]", id);

        let txn = db.begin().await?;
        let current = rating::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::Rating, id))?;

        let merged = rating_mapper::merge(current, dto);
        let updated = rating::ActiveModel::from(merged).reset_all().update(&txn).await?;
        txn.commit().await?;

        tracing::info!("Rating ID[{}] updated", updated.id);
        Ok(updated)
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<(), AppError> {
        tracing::debug!("Deleting rating ID[{}]", id);
        let result = rating::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::not_found(EntityKind::Rating, id));
        }

        tracing::info!("Rating ID[{}] deleted", id);
        Ok(())
    }

    pub async fn get_update_view(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<RatingUpdateDto, AppError> {
        let rating = rating::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::Rating, id))?;

        Ok(rating_mapper::to_update_dto(&rating))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_db;

    fn add_dto(order_number: i32) -> RatingAddDto {
        RatingAddDto {
            moodys_rating: "Aaa".to_string(),
            sand_p_rating: "AAA".to_string(),
            fitch_rating: "AAA".to_string(),
            order_number: Some(order_number),
        }
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let db = test_db().await;
        let first = RatingService::create(&db, add_dto(2)).await.unwrap();
        let second = RatingService::create(&db, add_dto(1)).await.unwrap();

        let ratings = RatingService::list_all(&db).await.unwrap();

        let ids: Vec<i32> = ratings.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn test_update_validates_present_fields() {
        let db = test_db().await;
        let created = RatingService::create(&db, add_dto(1)).await.unwrap();

        let patch = RatingUpdateDto {
            id: Some(created.id),
            fitch_rating: Some("  ".to_string()),
            order_number: Some(-1),
            ..Default::default()
        };
        let err = RatingService::update(&db, patch).await.unwrap_err();

        match err {
            AppError::Validation(errors) => {
                assert!(errors.contains("fitchRating"));
                assert!(errors.contains("orderNumber"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // rien n'a changé en base
        let view = RatingService::get_update_view(&db, created.id).await.unwrap();
        assert_eq!(view.fitch_rating.as_deref(), Some("AAA"));
    }

    #[tokio::test]
    async fn test_full_update_round_trips_through_update_view() {
        let db = test_db().await;
        let created = RatingService::create(&db, add_dto(1)).await.unwrap();

        let full = RatingUpdateDto {
            id: Some(created.id),
            moodys_rating: Some("Baa1".to_string()),
            sand_p_rating: Some("BBB+".to_string()),
            fitch_rating: Some("BBB".to_string()),
            order_number: Some(7),
        };
        RatingService::update(&db, full.clone()).await.unwrap();

        assert_eq!(RatingService::get_update_view(&db, created.id).await.unwrap(), full);
    }

    #[tokio::test]
    async fn test_create_then_list_keeps_fields() {
        let db = test_db().await;
        let created = RatingService::create(&db, add_dto(3)).await.unwrap();

        let ratings = RatingService::list_all(&db).await.unwrap();

        assert_eq!(
            ratings,
            vec![RatingListItemDto {
                id: created.id,
                moodys_rating: "Aaa".to_string(),
                sand_p_rating: "AAA".to_string(),
                fitch_rating: "AAA".to_string(),
                order_number: 3,
            }]
        );
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let db = test_db().await;

        let patch = RatingUpdateDto {
            id: Some(42),
            order_number: Some(2),
            ..Default::default()
        };
        let err = RatingService::update(&db, patch).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { entity: EntityKind::Rating, id: 42 }));

        let err = RatingService::get_update_view(&db, 42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { entity: EntityKind::Rating, id: 42 }));
        assert!(RatingService::list_all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let db = test_db().await;
        let first = RatingService::create(&db, add_dto(1)).await.unwrap();
        RatingService::create(&db, add_dto(2)).await.unwrap();

        RatingService::delete_by_id(&db, first.id).await.unwrap();
        assert_eq!(RatingService::list_all(&db).await.unwrap().len(), 1);

        let err = RatingService::delete_by_id(&db, first.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { entity: EntityKind::Rating, .. }));
        assert_eq!(RatingService::list_all(&db).await.unwrap().len(), 1);
    }
}
