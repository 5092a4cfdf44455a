// SeaORM 实体定义：收款员收款记录表 `collector_payment`
// remittance_status 是自由文本，现场数据里出现过 pending / received 两种取值
// updated_at 由数据库触发器维护，脚本从不直接写入

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "collector_payment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(nullable)]
    pub collector_id: Option<i64>,

    /// 上缴状态
    #[sea_orm(nullable)]
    pub remittance_status: Option<String>,

    /// 关联的上缴单ID
    #[sea_orm(nullable)]
    pub remittance_id: Option<i64>,

    /// 备注，批量修复时按模式匹配
    #[sea_orm(nullable)]
    pub notes: Option<String>,

    #[sea_orm(nullable)]
    pub updated_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::collector::Entity",
        from = "Column::CollectorId",
        to = "super::collector::Column::Id"
    )]
    Collector,
}

impl Related<super::collector::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Collector.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
