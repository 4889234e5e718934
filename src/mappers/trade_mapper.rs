use sea_orm::Set;

use crate::dto::trade::{TradeAddDto, TradeListItemDto, TradeUpdateDto};
use crate::models::trade;

pub fn to_list_item(trade: &trade::Model) -> TradeListItemDto {
    TradeListItemDto {
        id: trade.id,
        account: trade.account.clone(),
        r#type: trade.trade_type.clone(),
        buy_quantity: trade.buy_quantity,
    }
}

pub fn to_active_model(dto: TradeAddDto) -> trade::ActiveModel {
    trade::ActiveModel {
        account: Set(dto.account),
        trade_type: Set(dto.r#type),
        buy_quantity: Set(dto.buy_quantity.unwrap_or_default()),
        ..Default::default()
    }
}

pub fn to_update_dto(trade: &trade::Model) -> TradeUpdateDto {
    TradeUpdateDto {
        id: Some(trade.id),
        account: Some(trade.account.clone()),
        r#type: Some(trade.trade_type.clone()),
        buy_quantity: Some(trade.buy_quantity),
    }
}

pub fn merge(current: trade::Model, patch: TradeUpdateDto) -> trade::Model {
    trade::Model {
        account: patch.account.unwrap_or(current.account),
        trade_type: patch.r#type.unwrap_or(current.trade_type),
        buy_quantity: patch.buy_quantity.unwrap_or(current.buy_quantity),
        ..current
    }
}
