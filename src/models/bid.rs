use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bidlist")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub account: String,
    #[serde(rename = "type")]
    #[sea_orm(column_name = "type")]
    pub bid_type: String,
    pub bid_quantity: f64,

    // Audit: rempli par le service, jamais par le formulaire
    pub creation_date: DateTimeUtc,
    pub creation_name: Option<String>,
    pub revision_date: Option<DateTimeUtc>,
    pub revision_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
