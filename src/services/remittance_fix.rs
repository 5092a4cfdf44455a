// 上缴状态批量修复
// notes 匹配指定模式的缴款记录统一改为已上缴，随后联表收款员核对结果

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter};
use serde::Serialize;

use crate::models::entities::collector_payment;
use crate::models::PaymentWithCollector;
use crate::services::payment_queries;
use crate::utils::config::MaintenanceConfig;
use crate::utils::error::{AppError, AppResult};
use crate::{log_data_fix, log_db_failure};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemittanceFixPlan {
    /// LIKE 模式，例如 `%remit%`
    pub notes_pattern: String,
    pub to_status: String,
}

impl RemittanceFixPlan {
    pub fn from_config(config: &MaintenanceConfig) -> Self {
        Self {
            notes_pattern: config.remittance_notes_pattern.clone(),
            to_status: config.received_status.clone(),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.notes_pattern.trim().is_empty() {
            return Err(AppError::validation_error("notes 匹配模式不能为空"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RemittanceFixReport {
    pub rows_updated: Option<u64>,
    pub fix_error: Option<String>,
    pub matching_payments: Vec<PaymentWithCollector>,
    pub verify_error: Option<String>,
}

impl RemittanceFixReport {
    /// 核对结果中仍未达到目标状态的记录
    pub fn unresolved<'a>(&'a self, to_status: &'a str) -> impl Iterator<Item = &'a PaymentWithCollector> + 'a {
        self.matching_payments
            .iter()
            .filter(move |p| p.payment.remittance_status.as_deref() != Some(to_status))
    }
}

/// 执行批量更新，返回实际发生变化的行数
///
/// 已是目标状态的记录不在 WHERE 范围内，不计入影响行数
pub async fn apply<C>(db: &C, plan: &RemittanceFixPlan) -> AppResult<u64>
where
    C: ConnectionTrait,
{
    plan.validate()?;

    let result = collector_payment::Entity::update_many()
        .col_expr(
            collector_payment::Column::RemittanceStatus,
            Expr::value(plan.to_status.clone()),
        )
        .filter(collector_payment::Column::Notes.like(plan.notes_pattern.as_str()))
        .filter(
            Condition::any()
                .add(collector_payment::Column::RemittanceStatus.is_null())
                .add(collector_payment::Column::RemittanceStatus.ne(plan.to_status.as_str())),
        )
        .exec(db)
        .await
        .map_err(|e| AppError::persistence_error(format!("批量更新上缴状态失败: {}", e)))?;

    Ok(result.rows_affected)
}

/// 完整执行：更新 + 联表核对
pub async fn run<C>(db: &C, plan: &RemittanceFixPlan) -> RemittanceFixReport
where
    C: ConnectionTrait,
{
    let mut report = RemittanceFixReport {
        rows_updated: None,
        fix_error: None,
        matching_payments: Vec::new(),
        verify_error: None,
    };

    match apply(db, plan).await {
        Ok(rows) => {
            log_data_fix!("notes 匹配 {} 的记录中有{}条改为{}", plan.notes_pattern, rows, plan.to_status);
            report.rows_updated = Some(rows);
        }
        Err(e) => {
            log_db_failure!("批量修复失败: {}", e);
            report.fix_error = Some(e.to_string());
        }
    }

    match payment_queries::payments_matching_notes(db, &plan.notes_pattern).await {
        Ok(payments) => report.matching_payments = payments,
        Err(e) => {
            log_db_failure!("核对查询失败: {}", e);
            report.verify_error = Some(e.to_string());
        }
    }

    report
}
