use sea_orm::Set;

use crate::dto::bid::{BidAddDto, BidListItemDto, BidUpdateDto};
use crate::models::bid;

pub fn to_list_item(bid: &bid::Model) -> BidListItemDto {
    BidListItemDto {
        id: bid.id,
        account: bid.account.clone(),
        r#type: bid.bid_type.clone(),
        quantity: bid.bid_quantity,
    }
}

/// Champs métier seulement: les dates et noms d'audit sont posés par le service
pub fn to_active_model(dto: BidAddDto) -> bid::ActiveModel {
    bid::ActiveModel {
        account: Set(dto.account),
        bid_type: Set(dto.r#type),
        bid_quantity: Set(dto.quantity.unwrap_or_default()),
        ..Default::default()
    }
}

pub fn to_update_dto(bid: &bid::Model) -> BidUpdateDto {
    BidUpdateDto {
        id: Some(bid.id),
        account: Some(bid.account.clone()),
        r#type: Some(bid.bid_type.clone()),
        quantity: Some(bid.bid_quantity),
    }
}

pub fn merge(current: bid::Model, patch: BidUpdateDto) -> bid::Model {
    bid::Model {
        account: patch.account.unwrap_or(current.account),
        bid_type: patch.r#type.unwrap_or(current.bid_type),
        bid_quantity: patch.quantity.unwrap_or(current.bid_quantity),
        ..current
    }
}
