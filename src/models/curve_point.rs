use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "curvepoint")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub curve_id: i32,
    pub as_of_date: Option<DateTimeUtc>, // mis à jour à chaque modification
    pub term: Option<f64>,
    #[serde(rename = "value")]
    #[sea_orm(column_name = "value")]
    pub point_value: Option<f64>,
    pub creation_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
