// collector_payment 的只读核对查询，供各修复脚本在修改前后使用

use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder, Statement,
};

use crate::models::entities::{collector, collector_payment};
use crate::models::{PaymentWithCollector, StatusCount};
use crate::utils::error::{AppError, AppResult};

/// 按 id 读取一条缴款记录
pub async fn find_payment<C>(db: &C, payment_id: i64) -> AppResult<Option<collector_payment::Model>>
where
    C: ConnectionTrait,
{
    collector_payment::Entity::find_by_id(payment_id)
        .one(db)
        .await
        .map_err(|e| AppError::persistence_error(format!("读取缴款记录{}失败: {}", payment_id, e)))
}

/// notes 匹配模式的缴款记录，联表带出收款员
pub async fn payments_matching_notes<C>(db: &C, notes_pattern: &str) -> AppResult<Vec<PaymentWithCollector>>
where
    C: ConnectionTrait,
{
    let rows = collector_payment::Entity::find()
        .find_also_related(collector::Entity)
        .filter(collector_payment::Column::Notes.like(notes_pattern))
        .order_by_asc(collector_payment::Column::Id)
        .all(db)
        .await
        .map_err(|e| AppError::persistence_error(format!("查询缴款记录失败: {}", e)))?;

    Ok(rows
        .into_iter()
        .map(|(payment, collector)| PaymentWithCollector { payment, collector })
        .collect())
}

/// 按上缴状态统计缴款记录数
pub async fn status_counts<C>(db: &C) -> AppResult<Vec<StatusCount>>
where
    C: ConnectionTrait,
{
    let sql = r#"
        SELECT remittance_status, COUNT(*) AS total
        FROM collector_payment
        GROUP BY remittance_status
        ORDER BY remittance_status
    "#;
    StatusCount::find_by_statement(Statement::from_string(DatabaseBackend::Sqlite, sql))
        .all(db)
        .await
        .map_err(|e| AppError::persistence_error(format!("统计上缴状态失败: {}", e)))
}

/// 取某个状态的记录数，没有该状态时为 0
pub fn count_for_status(counts: &[StatusCount], status: &str) -> i64 {
    counts
        .iter()
        .filter(|c| c.remittance_status.as_deref() == Some(status))
        .map(|c| c.total)
        .sum()
}
