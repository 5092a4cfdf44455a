//! # 表结构检查 (Schema Introspection)
//!
//! 基于 `sqlite_master` 与 `pragma_table_info` 的只读查询，
//! 供表信息检查、表结构导出和触发器修复脚本共用。
//!
//! 表名只能出现在 `COUNT(*)` 的 FROM 子句中时才拼接进 SQL，
//! 此时一律经过 [`quote_identifier`]；其余位置都使用参数绑定。

use sea_orm::{ConnectionTrait, DatabaseBackend, FromQueryResult, Statement};

use crate::models::{ColumnInfo, TriggerInfo};
use crate::utils::error::{AppError, AppResult};

/// 把标识符包成 SQLite 的双引号形式，内部的双引号转义为两个
pub fn quote_identifier(identifier: &str) -> String {
    format!("\"{}\"", identifier.replace('"', "\"\""))
}

/// 表结构检查器
///
/// 纯工具类，没有实例字段，所有方法都是关联函数。
/// 参数 `db` 可以是连接，也可以是事务。
pub struct SchemaInspector;

impl SchemaInspector {
    /// 查询表的列信息，表不存在时返回空列表
    pub async fn table_info<C>(db: &C, table_name: &str) -> AppResult<Vec<ColumnInfo>>
    where
        C: ConnectionTrait,
    {
        let sql = r#"
            SELECT cid,
                   name,
                   type AS declared_type,
                   "notnull" AS "notnull",
                   dflt_value AS default_value,
                   pk
            FROM pragma_table_info(?)
            ORDER BY cid
        "#;
        ColumnInfo::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            sql,
            [table_name.into()],
        ))
        .all(db)
        .await
        .map_err(|e| AppError::persistence_error(format!("查询{}表结构失败: {}", table_name, e)))
    }

    /// 统计表中的记录数
    pub async fn count_rows<C>(db: &C, table_name: &str) -> AppResult<i64>
    where
        C: ConnectionTrait,
    {
        let sql = format!(
            "SELECT COUNT(*) AS row_count FROM {}",
            quote_identifier(table_name)
        );
        let row = db
            .query_one(Statement::from_string(DatabaseBackend::Sqlite, sql))
            .await
            .map_err(|e| AppError::persistence_error(format!("统计{}记录数失败: {}", table_name, e)))?
            .ok_or_else(|| AppError::persistence_error(format!("统计{}记录数没有返回结果", table_name)))?;

        row.try_get::<i64>("", "row_count")
            .map_err(|e| AppError::persistence_error(format!("读取{}记录数失败: {}", table_name, e)))
    }

    /// 检查表是否存在
    pub async fn table_exists<C>(db: &C, table_name: &str) -> AppResult<bool>
    where
        C: ConnectionTrait,
    {
        let sql = "SELECT name FROM sqlite_master WHERE type='table' AND name=?";
        let result = db
            .query_all(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                sql,
                [table_name.into()],
            ))
            .await
            .map_err(|e| AppError::persistence_error(format!("检查表是否存在失败: {}", e)))?;

        Ok(!result.is_empty())
    }

    /// 列出所有用户表（排除 sqlite_ 内部表）
    pub async fn list_tables<C>(db: &C) -> AppResult<Vec<String>>
    where
        C: ConnectionTrait,
    {
        let sql = "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name";
        let rows = db
            .query_all(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
            .await
            .map_err(|e| AppError::persistence_error(format!("查询表列表失败: {}", e)))?;

        rows.iter()
            .map(|row| {
                row.try_get::<String>("", "name")
                    .map_err(|e| AppError::persistence_error(format!("读取表名失败: {}", e)))
            })
            .collect()
    }

    /// 读取建表语句原文
    pub async fn table_sql<C>(db: &C, table_name: &str) -> AppResult<Option<String>>
    where
        C: ConnectionTrait,
    {
        let sql = "SELECT sql FROM sqlite_master WHERE type='table' AND name=?";
        let row = db
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                sql,
                [table_name.into()],
            ))
            .await
            .map_err(|e| AppError::persistence_error(format!("查询{}建表语句失败: {}", table_name, e)))?;

        match row {
            Some(row) => row
                .try_get::<Option<String>>("", "sql")
                .map_err(|e| AppError::persistence_error(format!("读取{}建表语句失败: {}", table_name, e))),
            None => Ok(None),
        }
    }

    /// 列出挂在某张表上的触发器
    pub async fn list_triggers<C>(db: &C, table_name: &str) -> AppResult<Vec<TriggerInfo>>
    where
        C: ConnectionTrait,
    {
        let sql = "SELECT name, tbl_name, sql FROM sqlite_master WHERE type='trigger' AND tbl_name=? ORDER BY name";
        TriggerInfo::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            sql,
            [table_name.into()],
        ))
        .all(db)
        .await
        .map_err(|e| AppError::persistence_error(format!("查询{}触发器失败: {}", table_name, e)))
    }

    /// 检查触发器是否存在
    pub async fn trigger_exists<C>(db: &C, trigger_name: &str) -> AppResult<bool>
    where
        C: ConnectionTrait,
    {
        let sql = "SELECT name FROM sqlite_master WHERE type='trigger' AND name=?";
        let result = db
            .query_all(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                sql,
                [trigger_name.into()],
            ))
            .await
            .map_err(|e| AppError::persistence_error(format!("检查触发器是否存在失败: {}", e)))?;

        Ok(!result.is_empty())
    }
}
