use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::empty_as_none;
use crate::validation::{finite, not_blank};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TradeAddDto {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Account is mandatory"))]
    pub account: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Type is mandatory"))]
    pub r#type: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(
        required(message = "Buy quantity is mandatory"),
        range(exclusive_min = 0.0, message = "Buy quantity must be greater than 0"),
        custom(function = "finite", message = "Buy quantity must be a finite number")
    )]
    pub buy_quantity: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TradeUpdateDto {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(required(message = "Id is mandatory"))]
    pub id: Option<i32>,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Account is mandatory"))]
    pub account: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Type is mandatory"))]
    pub r#type: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(
        range(exclusive_min = 0.0, message = "Buy quantity must be greater than 0"),
        custom(function = "finite", message = "Buy quantity must be a finite number")
    )]
    pub buy_quantity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeListItemDto {
    pub id: i32,
    pub account: String,
    pub r#type: String,
    pub buy_quantity: f64,
}
