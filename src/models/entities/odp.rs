// SeaORM 实体定义：光分纤点表 `odp`

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::values::Coordinate;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "odp")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(nullable)]
    pub name: Option<String>,

    #[sea_orm(nullable, column_type = "Double")]
    pub latitude: Option<Coordinate>,

    #[sea_orm(nullable, column_type = "Double")]
    pub longitude: Option<Coordinate>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
