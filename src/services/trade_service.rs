use chrono::Utc;
use sea_orm::*;

use crate::dto::trade::{TradeAddDto, TradeListItemDto, TradeUpdateDto};
use crate::errors::{AppError, EntityKind};
use crate::mappers::trade_mapper;
use crate::middleware::AuthUser;
use crate::models::trade;
use crate::validation;

pub struct TradeService;

impl TradeService {
    pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<TradeListItemDto>, AppError> {
        tracing::debug!("Listing all trades");
        let trades = trade::Entity::find()
            .order_by_asc(trade::Column::Id)
            .all(db)
            .await?;

        Ok(trades.iter().map(trade_mapper::to_list_item).collect())
    }

    /// Enregistre un trade au nom de l'utilisateur de la session
    pub async fn create(
        db: &DatabaseConnection,
        actor: &AuthUser,
        dto: TradeAddDto,
    ) -> Result<trade::Model, AppError> {
        tracing::debug!("Creating trade for account {}", dto.account);
        validation::check(&dto)?;

        let mut new_trade = trade_mapper::to_active_model(dto);
        new_trade.creation_date = Set(Utc::now());
        new_trade.creation_name = Set(Some(actor.username.clone()));

        let created = new_trade.insert(db).await?;
        tracing::info!("Trade created with ID[{}]", created.id);
        Ok(created)
    }

    pub async fn update(
        db: &DatabaseConnection,
        actor: &AuthUser,
        dto: TradeUpdateDto,
    ) -> Result<trade::Model, AppError> {
        validation::check(&dto)?;
        let id = validation::require_id(dto.id)?;
        tracing::debug!("Updating trade ID[{}]", id);

        let txn = db.begin().await?;
        let current = trade::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::Trade, id))?;

        let mut merged = trade_mapper::merge(current, dto);
        merged.revision_date = Some(Utc::now());
        merged.revision_name = Some(actor.username.clone());

        let updated = trade::ActiveModel::from(merged).reset_all().update(&txn).await?;
        txn.commit().await?;

        tracing::info!("Trade ID[{}] updated", updated.id);
        Ok(updated)
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<(), AppError> {
        tracing::debug!("Deleting trade ID[{}]", id);
        let result = trade::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::not_found(EntityKind::Trade, id));
        }

        tracing::info!("Trade ID[{}] deleted", id);
        Ok(())
    }

    pub async fn get_update_view(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<TradeUpdateDto, AppError> {
        let trade = trade::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::Trade, id))?;

        Ok(trade_mapper::to_update_dto(&trade))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::Role;
    use crate::test_support::{actor, test_db};

    fn add_dto(account: &str, quantity: Option<f64>) -> TradeAddDto {
        TradeAddDto {
            account: account.to_string(),
            r#type: "Buy".to_string(),
            buy_quantity: quantity,
        }
    }

    #[tokio::test]
    async fn test_create_records_audit_fields() {
        let db = test_db().await;
        let admin = actor(Role::Admin);

        let created = TradeService::create(&db, &admin, add_dto("Trade Account", Some(10.0)))
            .await
            .unwrap();

        assert_eq!(created.creation_name.as_deref(), Some("admin"));
        assert!(created.revision_date.is_none());

        let trades = TradeService::list_all(&db).await.unwrap();
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].buy_quantity, 10.0);
    }

    #[tokio::test]
    async fn test_create_requires_buy_quantity() {
        let db = test_db().await;

        let err = TradeService::create(&db, &actor(Role::User), add_dto(" ", None))
            .await
            .unwrap_err();

        match err {
            AppError::Validation(errors) => {
                assert!(errors.contains("account"));
                assert!(errors.contains("buyQuantity"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(TradeService::list_all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_sets_revision() {
        let db = test_db().await;
        let created = TradeService::create(&db, &actor(Role::User), add_dto("A", Some(1.0)))
            .await
            .unwrap();

        let patch = TradeUpdateDto {
            id: Some(created.id),
            r#type: Some("Sell".to_string()),
            ..Default::default()
        };
        let updated = TradeService::update(&db, &actor(Role::Admin), patch).await.unwrap();

        assert_eq!(updated.trade_type, "Sell");
        assert_eq!(updated.account, "A");
        assert_eq!(updated.buy_quantity, 1.0);
        assert_eq!(updated.creation_name.as_deref(), Some("user"));
        assert_eq!(updated.revision_name.as_deref(), Some("admin"));
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let db = test_db().await;

        let err = TradeService::delete_by_id(&db, 5).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { entity: EntityKind::Trade, id: 5 }));
        let err = TradeService::get_update_view(&db, 5).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
