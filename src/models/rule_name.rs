use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rulename")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    // Champs opaques: stockés tels quels, jamais interprétés
    #[sea_orm(column_type = "Text", nullable)]
    pub json: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub template: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub sql_str: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub sql_part: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
