use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trade")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub account: String,
    #[serde(rename = "type")]
    #[sea_orm(column_name = "type")]
    pub trade_type: String,
    pub buy_quantity: f64,

    // Audit: même principe que bidlist
    pub creation_date: DateTimeUtc,
    pub creation_name: Option<String>,
    pub revision_date: Option<DateTimeUtc>,
    pub revision_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
