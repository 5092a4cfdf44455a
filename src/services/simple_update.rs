// 单行更新测试：更新一条缴款记录后重新读取，
// 确认驱动写入成功、触发器按预期刷新 updated_at

use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use serde::Serialize;

use crate::models::entities::collector_payment;
use crate::services::payment_queries;
use crate::utils::config::MaintenanceConfig;
use crate::utils::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleUpdatePlan {
    pub payment_id: i64,
    pub new_status: String,
}

impl SimpleUpdatePlan {
    pub fn from_config(config: &MaintenanceConfig) -> Self {
        Self {
            payment_id: config.test_payment_id,
            new_status: config.received_status.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SimpleUpdateReport {
    pub before: collector_payment::Model,
    pub rows_affected: u64,
    /// 更新后重新读取的记录；读取失败或记录消失时为 None
    pub after: Option<collector_payment::Model>,
}

impl SimpleUpdateReport {
    /// 重新读取到的状态是否等于写入值
    pub fn value_persisted(&self, expected: &str) -> bool {
        self.after
            .as_ref()
            .and_then(|p| p.remittance_status.as_deref())
            == Some(expected)
    }

    /// updated_at 是否被触发器刷新
    pub fn updated_at_changed(&self) -> bool {
        match &self.after {
            Some(after) => after.updated_at != self.before.updated_at,
            None => false,
        }
    }
}

/// 执行单行更新
///
/// `IS NOT ?` 排除已是目标值的记录，影响行数只在值确实变化时为 1
pub async fn update_payment_status<C>(db: &C, payment_id: i64, new_status: &str) -> AppResult<u64>
where
    C: ConnectionTrait,
{
    let sql = "UPDATE collector_payment SET remittance_status = ? WHERE id = ? AND remittance_status IS NOT ?";
    let result = db
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            sql,
            [new_status.into(), payment_id.into(), new_status.into()],
        ))
        .await
        .map_err(|e| AppError::persistence_error(format!("更新缴款记录{}失败: {}", payment_id, e)))?;

    Ok(result.rows_affected())
}

pub async fn run<C>(db: &C, plan: &SimpleUpdatePlan) -> AppResult<SimpleUpdateReport>
where
    C: ConnectionTrait,
{
    let before = payment_queries::find_payment(db, plan.payment_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found_error("collector_payment", format!("id = {}", plan.payment_id))
        })?;

    let rows_affected = update_payment_status(db, plan.payment_id, &plan.new_status).await?;

    let after = match payment_queries::find_payment(db, plan.payment_id).await {
        Ok(after) => after,
        Err(e) => {
            log::error!("更新后重新读取失败: {}", e);
            None
        }
    };

    Ok(SimpleUpdateReport {
        before,
        rows_affected,
        after,
    })
}
