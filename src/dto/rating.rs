use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::empty_as_none;
use crate::validation::not_blank;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RatingAddDto {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Moody's rating is mandatory"))]
    pub moodys_rating: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "S&P rating is mandatory"))]
    pub sand_p_rating: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Fitch rating is mandatory"))]
    pub fitch_rating: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(
        required(message = "Order number is mandatory"),
        range(exclusive_min = 0, message = "Order number must be greater than 0")
    )]
    pub order_number: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RatingUpdateDto {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(required(message = "Id is mandatory"))]
    pub id: Option<i32>,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Moody's rating is mandatory"))]
    pub moodys_rating: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "S&P rating is mandatory"))]
    pub sand_p_rating: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Fitch rating is mandatory"))]
    pub fitch_rating: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(range(exclusive_min = 0, message = "Order number must be greater than 0"))]
    pub order_number: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingListItemDto {
    pub id: i32,
    pub moodys_rating: String,
    pub sand_p_rating: String,
    pub fitch_rating: String,
    pub order_number: i32,
}
