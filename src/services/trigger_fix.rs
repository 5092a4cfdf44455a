//! # 缴款触发器修复
//!
//! 现场库中 collector_payment 上的更新时间触发器会让状态更新失败，
//! 修复步骤：
//! 1. 删除触发器（IF EXISTS，不存在时什么也不做）
//! 2. 把已关联上缴单但仍处于待上缴状态的记录改为已上缴
//! 3. 核对：表上剩余的触发器、各状态记录数
//!
//! 第1、2步在同一个事务中执行，任一步失败整体回滚；第3步无论成败都会执行。

use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, TransactionTrait,
};
use serde::Serialize;

use crate::database::{quote_identifier, SchemaInspector};
use crate::models::entities::collector_payment;
use crate::models::{StatusCount, TriggerInfo};
use crate::services::payment_queries;
use crate::utils::config::MaintenanceConfig;
use crate::utils::error::{AppError, AppResult};
use crate::{log_data_fix, log_db_failure};

const PAYMENT_TABLE: &str = "collector_payment";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerFixPlan {
    pub trigger_name: String,
    pub from_status: String,
    pub to_status: String,
}

impl TriggerFixPlan {
    pub fn from_config(config: &MaintenanceConfig) -> Self {
        Self {
            trigger_name: config.payment_trigger_name.clone(),
            from_status: config.pending_status.clone(),
            to_status: config.received_status.clone(),
        }
    }

    /// 触发器名不能为空；两个状态相同时 UPDATE 不会改变任何值，影响行数失真
    pub fn validate(&self) -> AppResult<()> {
        if self.trigger_name.trim().is_empty() {
            return Err(AppError::validation_error("触发器名称不能为空"));
        }
        if self.from_status == self.to_status {
            return Err(AppError::validation_error(format!(
                "待修复状态与目标状态相同: {}",
                self.from_status
            )));
        }
        Ok(())
    }
}

/// 事务内两步的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TriggerFixOutcome {
    /// 执行前触发器是否存在
    pub trigger_existed: bool,
    pub rows_updated: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TriggerFixReport {
    pub outcome: Option<TriggerFixOutcome>,
    pub fix_error: Option<String>,
    pub remaining_triggers: Vec<TriggerInfo>,
    pub status_counts: Vec<StatusCount>,
    pub verify_error: Option<String>,
}

/// DROP TRIGGER IF EXISTS
pub async fn drop_trigger_if_exists<C>(db: &C, trigger_name: &str) -> AppResult<()>
where
    C: ConnectionTrait,
{
    let sql = format!("DROP TRIGGER IF EXISTS {}", quote_identifier(trigger_name));
    db.execute_unprepared(&sql)
        .await
        .map_err(|e| AppError::persistence_error(format!("删除触发器{}失败: {}", trigger_name, e)))?;
    Ok(())
}

/// 已有上缴单ID且状态为 from_status 的记录改为 to_status，返回实际发生变化的行数
pub async fn mark_linked_payments<C>(db: &C, from_status: &str, to_status: &str) -> AppResult<u64>
where
    C: ConnectionTrait,
{
    let result = collector_payment::Entity::update_many()
        .col_expr(
            collector_payment::Column::RemittanceStatus,
            Expr::value(to_status.to_string()),
        )
        .filter(collector_payment::Column::RemittanceId.is_not_null())
        .filter(collector_payment::Column::RemittanceStatus.eq(from_status))
        .filter(collector_payment::Column::RemittanceStatus.ne(to_status))
        .exec(db)
        .await
        .map_err(|e| AppError::persistence_error(format!("更新缴款状态失败: {}", e)))?;

    Ok(result.rows_affected)
}

async fn apply_in_transaction(txn: &DatabaseTransaction, plan: &TriggerFixPlan) -> AppResult<TriggerFixOutcome> {
    let trigger_existed = SchemaInspector::trigger_exists(txn, &plan.trigger_name).await?;
    drop_trigger_if_exists(txn, &plan.trigger_name).await?;
    let rows_updated = mark_linked_payments(txn, &plan.from_status, &plan.to_status).await?;
    Ok(TriggerFixOutcome {
        trigger_existed,
        rows_updated,
    })
}

/// 在一个事务中删除触发器并更新状态
pub async fn apply(db: &DatabaseConnection, plan: &TriggerFixPlan) -> AppResult<TriggerFixOutcome> {
    plan.validate()?;
    let txn = db.begin().await?;

    match apply_in_transaction(&txn, plan).await {
        Ok(outcome) => {
            txn.commit()
                .await
                .map_err(|e| AppError::persistence_error(format!("提交事务失败: {}", e)))?;
            Ok(outcome)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                log_db_failure!("回滚事务失败: {}", rollback_err);
            }
            Err(e)
        }
    }
}

/// 修复后核对
pub async fn verify<C>(db: &C) -> AppResult<(Vec<TriggerInfo>, Vec<StatusCount>)>
where
    C: ConnectionTrait,
{
    let triggers = SchemaInspector::list_triggers(db, PAYMENT_TABLE).await?;
    let counts = payment_queries::status_counts(db).await?;
    Ok((triggers, counts))
}

/// 完整执行：修复 + 核对，各步骤错误分别记录
pub async fn run(db: &DatabaseConnection, plan: &TriggerFixPlan) -> TriggerFixReport {
    let mut report = TriggerFixReport {
        outcome: None,
        fix_error: None,
        remaining_triggers: Vec::new(),
        status_counts: Vec::new(),
        verify_error: None,
    };

    match apply(db, plan).await {
        Ok(outcome) => {
            log_data_fix!(
                "触发器{}{}，{}条记录由{}改为{}",
                plan.trigger_name,
                if outcome.trigger_existed { "已删除" } else { "不存在，跳过删除" },
                outcome.rows_updated,
                plan.from_status,
                plan.to_status
            );
            report.outcome = Some(outcome);
        }
        Err(e) => {
            log_db_failure!("触发器修复失败，已回滚: {}", e);
            report.fix_error = Some(e.to_string());
        }
    }

    match verify(db).await {
        Ok((triggers, counts)) => {
            report.remaining_triggers = triggers;
            report.status_counts = counts;
        }
        Err(e) => {
            log_db_failure!("修复结果核对失败: {}", e);
            report.verify_error = Some(e.to_string());
        }
    }

    report
}
