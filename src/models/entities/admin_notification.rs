// SeaORM 实体定义：管理员通知表 `admin_notification`
// 建表语句见 services::notification_table，本工具集只建表不写数据

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "admin_notification")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// 通知类型，列名为 `type`
    #[sea_orm(column_name = "type")]
    pub notification_type: String,

    pub title: String,

    pub message: String,

    #[sea_orm(nullable)]
    pub agent_id: Option<i64>,

    /// 阅读状态，默认 unread
    pub status: String,

    #[sea_orm(nullable)]
    pub created_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
