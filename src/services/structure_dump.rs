// 遍历固定表名列表，导出每张表的列信息和建表语句
//
// 所有表的查询先全部发出，再统一等待全部完成，之后调用方才能关闭连接

use futures::future::join_all;
use sea_orm::ConnectionTrait;

use crate::database::SchemaInspector;
use crate::log_db_failure;
use crate::models::TableStructure;

/// 导出单张表结构
pub async fn dump_structure<C>(db: &C, table_name: &str) -> TableStructure
where
    C: ConnectionTrait,
{
    let mut structure = TableStructure {
        table: table_name.to_string(),
        columns: Vec::new(),
        create_sql: None,
        error: None,
    };

    match SchemaInspector::table_info(db, table_name).await {
        Ok(columns) => structure.columns = columns,
        Err(e) => {
            log_db_failure!("{}", e);
            structure.error = Some(e.to_string());
            return structure;
        }
    }

    match SchemaInspector::table_sql(db, table_name).await {
        Ok(sql) => structure.create_sql = sql,
        Err(e) => {
            log_db_failure!("{}", e);
            structure.error = Some(e.to_string());
        }
    }

    if structure.error.is_none() && structure.columns.is_empty() && structure.create_sql.is_none() {
        structure.error = Some(format!("表不存在: {}", table_name));
    }

    structure
}

/// 导出多张表结构，返回时所有查询均已结束
pub async fn dump_structures<C>(db: &C, tables: &[String]) -> Vec<TableStructure>
where
    C: ConnectionTrait,
{
    join_all(tables.iter().map(|table| dump_structure(db, table))).await
}
