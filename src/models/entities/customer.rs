// SeaORM 实体定义：客户表 `customer`
// 只声明维护脚本用到的字段，表结构由计费系统本身维护

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::values::Coordinate;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// 客户名称
    #[sea_orm(nullable)]
    pub name: Option<String>,

    /// PPPoE 拨号用户名，客户查询的检索键
    #[sea_orm(nullable)]
    pub pppoe_username: Option<String>,

    /// 纬度
    #[sea_orm(nullable, column_type = "Double")]
    pub latitude: Option<Coordinate>,

    /// 经度
    #[sea_orm(nullable, column_type = "Double")]
    pub longitude: Option<Coordinate>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 经纬度都存在才算已完成地理编码
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}
