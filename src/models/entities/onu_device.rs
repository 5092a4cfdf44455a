// SeaORM 实体定义：ONU 设备表 `onu_device`
// 设备通过 odp_id / customer_id 关联到光分纤点和客户

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::values::Coordinate;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "onu_device")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(nullable)]
    pub name: Option<String>,

    #[sea_orm(nullable, column_type = "Double")]
    pub latitude: Option<Coordinate>,

    #[sea_orm(nullable, column_type = "Double")]
    pub longitude: Option<Coordinate>,

    /// 所属光分纤点
    #[sea_orm(nullable)]
    pub odp_id: Option<i64>,

    /// 所属客户
    #[sea_orm(nullable)]
    pub customer_id: Option<i64>,

    /// 设备状态（online / offline 等，自由文本）
    #[sea_orm(nullable)]
    pub status: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::odp::Entity",
        from = "Column::OdpId",
        to = "super::odp::Column::Id"
    )]
    Odp,
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
}

impl Related<super::odp::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Odp.def()
    }
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}
