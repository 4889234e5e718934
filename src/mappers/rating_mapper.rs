use sea_orm::Set;

use crate::dto::rating::{RatingAddDto, RatingListItemDto, RatingUpdateDto};
use crate::models::rating;

pub fn to_list_item(rating: &rating::Model) -> RatingListItemDto {
    RatingListItemDto {
        id: rating.id,
        moodys_rating: rating.moodys_rating.clone(),
        sand_p_rating: rating.sand_p_rating.clone(),
        fitch_rating: rating.fitch_rating.clone(),
        order_number: rating.order_number,
    }
}

pub fn to_active_model(dto: RatingAddDto) -> rating::ActiveModel {
    rating::ActiveModel {
        moodys_rating: Set(dto.moodys_rating),
        sand_p_rating: Set(dto.sand_p_rating),
        fitch_rating: Set(dto.fitch_rating),
        order_number: Set(dto.order_number.unwrap_or_default()),
        ..Default::default()
    }
}

pub fn to_update_dto(rating: &rating::Model) -> RatingUpdateDto {
    RatingUpdateDto {
        id: Some(rating.id),
        moodys_rating: Some(rating.moodys_rating.clone()),
        sand_p_rating: Some(rating.sand_p_rating.clone()),
        fitch_rating: Some(rating.fitch_rating.clone()),
        order_number: Some(rating.order_number),
    }
}

pub fn merge(current: rating::Model, patch: RatingUpdateDto) -> rating::Model {
    rating::Model {
        moodys_rating: patch.moodys_rating.unwrap_or(current.moodys_rating),
        sand_p_rating: patch.sand_p_rating.unwrap_or(current.sand_p_rating),
        fitch_rating: patch.fitch_rating.unwrap_or(current.fitch_rating),
        order_number: patch.order_number.unwrap_or(current.order_number),
        ..current
    }
}
