use sea_orm::Set;

use crate::dto::curve_point::{CurvePointAddDto, CurvePointListItemDto, CurvePointUpdateDto};
use crate::models::curve_point;

pub fn to_list_item(point: &curve_point::Model) -> CurvePointListItemDto {
    CurvePointListItemDto {
        id: point.id,
        curve_id: point.curve_id,
        term: point.term,
        value: point.point_value,
    }
}

pub fn to_active_model(dto: CurvePointAddDto) -> curve_point::ActiveModel {
    curve_point::ActiveModel {
        curve_id: Set(dto.curve_id.unwrap_or_default()),
        term: Set(dto.term),
        point_value: Set(dto.value),
        ..Default::default()
    }
}

pub fn to_update_dto(point: &curve_point::Model) -> CurvePointUpdateDto {
    CurvePointUpdateDto {
        id: Some(point.id),
        curve_id: Some(point.curve_id),
        term: point.term,
        value: point.point_value,
    }
}

pub fn merge(current: curve_point::Model, patch: CurvePointUpdateDto) -> curve_point::Model {
    curve_point::Model {
        curve_id: patch.curve_id.unwrap_or(current.curve_id),
        term: patch.term.or(current.term),
        point_value: patch.value.or(current.point_value),
        ..current
    }
}
