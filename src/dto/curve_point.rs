use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::empty_as_none;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CurvePointAddDto {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(
        required(message = "must not be null"),
        range(exclusive_min = 0, message = "Curve id must be greater than 0")
    )]
    pub curve_id: Option<i32>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub term: Option<f64>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub value: Option<f64>,
}

/// term / value absents = inchangés (pas de remise à zéro)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CurvePointUpdateDto {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(required(message = "Id is mandatory"))]
    pub id: Option<i32>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(range(exclusive_min = 0, message = "Curve id must be greater than 0"))]
    pub curve_id: Option<i32>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub term: Option<f64>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePointListItemDto {
    pub id: i32,
    pub curve_id: i32,
    pub term: Option<f64>,
    pub value: Option<f64>,
}
