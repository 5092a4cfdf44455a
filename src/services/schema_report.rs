// 表信息检查：列信息 + 记录数
// 每张表独立检查，某张表失败不影响其余表

use sea_orm::ConnectionTrait;

use crate::database::SchemaInspector;
use crate::log_db_failure;
use crate::models::TableReport;

/// 检查单张表
///
/// 表不存在时不再统计行数（否则必然报 no such table），`exists` 为 false
pub async fn inspect_table<C>(db: &C, table_name: &str) -> TableReport
where
    C: ConnectionTrait,
{
    let mut report = TableReport {
        table: table_name.to_string(),
        exists: false,
        columns: Vec::new(),
        row_count: None,
        error: None,
    };

    match SchemaInspector::table_exists(db, table_name).await {
        Ok(exists) => report.exists = exists,
        Err(e) => {
            log_db_failure!("检查表{}是否存在失败: {}", table_name, e);
            report.error = Some(e.to_string());
            return report;
        }
    }

    if !report.exists {
        log::warn!("表不存在: {}", table_name);
        return report;
    }

    match SchemaInspector::table_info(db, table_name).await {
        Ok(columns) => report.columns = columns,
        Err(e) => {
            log_db_failure!("{}", e);
            report.error = Some(e.to_string());
        }
    }

    match SchemaInspector::count_rows(db, table_name).await {
        Ok(count) => report.row_count = Some(count),
        Err(e) => {
            log_db_failure!("{}", e);
            report.error.get_or_insert_with(|| e.to_string());
        }
    }

    report
}

/// 依次检查多张表，结果顺序与输入一致
pub async fn inspect_tables<C>(db: &C, tables: &[String]) -> Vec<TableReport>
where
    C: ConnectionTrait,
{
    let mut reports = Vec::with_capacity(tables.len());
    for table in tables {
        reports.push(inspect_table(db, table).await);
    }
    reports
}
