use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::empty_as_none;
use crate::validation::not_blank;

// json / template / sqlStr / sqlPart sont libres (stockés tels quels)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RuleNameAddDto {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Name is mandatory"))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Description is mandatory"))]
    pub description: String,

    #[serde(default)]
    pub json: Option<String>,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub sql_str: Option<String>,
    #[serde(default)]
    pub sql_part: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RuleNameUpdateDto {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(required(message = "Id is mandatory"))]
    pub id: Option<i32>,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Name is mandatory"))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Description is mandatory"))]
    pub description: Option<String>,

    #[serde(default)]
    pub json: Option<String>,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub sql_str: Option<String>,
    #[serde(default)]
    pub sql_part: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleNameListItemDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub json: Option<String>,
    pub template: Option<String>,
    pub sql_str: Option<String>,
    pub sql_part: Option<String>,
}
