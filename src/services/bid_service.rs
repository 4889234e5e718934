use chrono::Utc;
use sea_orm::*;

use crate::dto::bid::{BidAddDto, BidListItemDto, BidUpdateDto};
use crate::errors::{AppError, EntityKind};
use crate::mappers::bid_mapper;
use crate::middleware::AuthUser;
use crate::models::bid;
use crate::validation;

pub struct BidService;

impl BidService {
    /// Toutes les offres, par identifiant croissant
    pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<BidListItemDto>, AppError> {
        tracing::debug!("Listing all bids");
        let bids = bid::Entity::find()
            .order_by_asc(bid::Column::Id)
            .all(db)
            .await?;

        Ok(bids.iter().map(bid_mapper::to_list_item).collect())
    }

    /// Crée une offre; `creation_name` est l'utilisateur de la session
    pub async fn create(
        db: &DatabaseConnection,
        actor: &AuthUser,
        dto: BidAddDto,
    ) -> Result<bid::Model, AppError> {
        tracing::debug!("Creating bid for account {}", dto.account);
        validation::check(&dto)?;

        let mut new_bid = bid_mapper::to_active_model(dto);
        new_bid.creation_date = Set(Utc::now());
        new_bid.creation_name = Set(Some(actor.username.clone()));

        let created = new_bid.insert(db).await?;
        tracing::info!("Bid created with ID[{}]", created.id);
        Ok(created)
    }

    /// Modification partielle dans une transaction (lecture, fusion, écriture)
    pub async fn update(
        db: &DatabaseConnection,
        actor: &AuthUser,
        dto: BidUpdateDto,
    ) -> Result<bid::Model, AppError> {
        validation::check(&dto)?;
        let id = validation::require_id(dto.id)?;
        tracing::debug!("Updating bid ID[{}]", id);

        let txn = db.begin().await?;
        let current = bid::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::Bid, id))?;

        let mut merged = bid_mapper::merge(current, dto);
        merged.revision_date = Some(Utc::now());
        merged.revision_name = Some(actor.username.clone());

        let updated = bid::ActiveModel::from(merged).reset_all().update(&txn).await?;
        txn.commit().await?;

        tracing::info!("Bid ID[{}] updated", updated.id);
        Ok(updated)
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<(), AppError> {
        tracing::debug!("Deleting bid ID[{}]", id);
        let result = bid::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::not_found(EntityKind::Bid, id));
        }

        tracing::info!("Bid ID[{}] deleted", id);
        Ok(())
    }

    pub async fn get_update_view(db: &DatabaseConnection, id: i32) -> Result<BidUpdateDto, AppError> {
        let bid = bid::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::Bid, id))?;

        Ok(bid_mapper::to_update_dto(&bid))
    }
}
