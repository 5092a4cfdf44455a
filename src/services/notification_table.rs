// 创建管理员通知表 admin_notification
// CREATE TABLE IF NOT EXISTS 保证重复执行不改变已有表结构

use sea_orm::ConnectionTrait;

use crate::database::SchemaInspector;
use crate::models::TableCreation;
use crate::utils::error::{AppError, AppResult};
use crate::log_db_failure;

pub const ADMIN_NOTIFICATION_TABLE: &str = "admin_notification";

pub const CREATE_ADMIN_NOTIFICATION_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS admin_notification (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        type TEXT NOT NULL,
        title TEXT NOT NULL,
        message TEXT NOT NULL,
        agent_id INTEGER,
        status TEXT NOT NULL DEFAULT 'unread',
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// 创建通知表
///
/// 返回本次是新建还是表已存在；两种情况都算成功
pub async fn create_admin_notification_table<C>(db: &C) -> AppResult<TableCreation>
where
    C: ConnectionTrait,
{
    let existed = SchemaInspector::table_exists(db, ADMIN_NOTIFICATION_TABLE).await?;

    db.execute_unprepared(CREATE_ADMIN_NOTIFICATION_SQL)
        .await
        .map_err(|e| {
            log_db_failure!("创建{}表失败: {}", ADMIN_NOTIFICATION_TABLE, e);
            AppError::persistence_error(format!("创建{}表失败: {}", ADMIN_NOTIFICATION_TABLE, e))
        })?;

    if existed {
        return Ok(TableCreation::AlreadyExists);
    }

    if !SchemaInspector::table_exists(db, ADMIN_NOTIFICATION_TABLE).await? {
        return Err(AppError::persistence_error(format!(
            "建表语句执行成功但{}表仍不存在",
            ADMIN_NOTIFICATION_TABLE
        )));
    }

    log::info!("已创建{}表", ADMIN_NOTIFICATION_TABLE);
    Ok(TableCreation::Created)
}
