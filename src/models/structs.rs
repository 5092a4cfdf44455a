// 维护脚本的查询结果结构
// 与 entities 不同，这些结构不对应业务表，而是 PRAGMA / sqlite_master 查询或脚本报告

use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

use super::entities::{collector, collector_payment, odp, onu_device};

/// `pragma_table_info` 返回的一列
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct ColumnInfo {
    /// 列序号
    pub cid: i64,
    /// 列名
    pub name: String,
    /// 声明类型，未声明类型的列为空串
    pub declared_type: String,
    /// 非空标志（0/1）
    pub notnull: i64,
    /// 默认值表达式原文
    pub default_value: Option<String>,
    /// 主键序号，0 表示不是主键列
    pub pk: i64,
}

impl ColumnInfo {
    pub fn is_not_null(&self) -> bool {
        self.notnull != 0
    }

    pub fn is_primary_key(&self) -> bool {
        self.pk != 0
    }
}

/// sqlite_master 中的触发器记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct TriggerInfo {
    pub name: String,
    pub tbl_name: String,
    pub sql: Option<String>,
}

/// 按上缴状态分组的计数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct StatusCount {
    pub remittance_status: Option<String>,
    pub total: i64,
}

/// 单表检查结果：列信息 + 行数
#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    pub table: String,
    /// 表是否存在（sqlite_master 中有记录）
    pub exists: bool,
    pub columns: Vec<ColumnInfo>,
    pub row_count: Option<i64>,
    /// 任一查询失败时的错误信息，其余字段保留已取得的部分
    pub error: Option<String>,
}

/// 单表结构导出结果：列信息 + 建表语句
#[derive(Debug, Clone, Serialize)]
pub struct TableStructure {
    pub table: String,
    pub columns: Vec<ColumnInfo>,
    pub create_sql: Option<String>,
    pub error: Option<String>,
}

/// CREATE TABLE IF NOT EXISTS 的执行结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableCreation {
    /// 本次新建
    Created,
    /// 执行前已存在，未做任何结构变更
    AlreadyExists,
}

/// ONU 设备及其关联的光分纤点
#[derive(Debug, Clone, Serialize)]
pub struct OnuDeviceEntry {
    pub device: onu_device::Model,
    /// odp_id 指向的光分纤点；odp_id 为空或引用不存在时为 None
    pub odp: Option<odp::Model>,
}

impl OnuDeviceEntry {
    /// odp_id 有值但找不到对应光分纤点
    pub fn has_dangling_odp(&self) -> bool {
        self.device.odp_id.is_some() && self.odp.is_none()
    }
}

/// 缴款记录及其收款员，用于修复后的联表核对
#[derive(Debug, Clone, Serialize)]
pub struct PaymentWithCollector {
    pub payment: collector_payment::Model,
    pub collector: Option<collector::Model>,
}

impl PaymentWithCollector {
    pub fn collector_name(&self) -> &str {
        self.collector
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or("-")
    }
}
