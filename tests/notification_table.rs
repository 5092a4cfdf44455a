mod common;

use std::path::Path;
use std::process::{Command, ExitStatus};

use billing_db_tools::database::{close_database, open_database, open_or_create_database, SchemaInspector};
use billing_db_tools::models::TableCreation;
use billing_db_tools::services::notification_table::{
    create_admin_notification_table, ADMIN_NOTIFICATION_TABLE,
};
use billing_db_tools::utils::DatabaseConfig;
use sea_orm::ConnectionTrait;
use tempfile::TempDir;

#[tokio::test]
async fn test_create_table_twice_is_idempotent() {
    let t = common::empty_db().await;

    let first = create_admin_notification_table(&t.db).await.unwrap();
    assert_eq!(first, TableCreation::Created);
    let sql_after_first = SchemaInspector::table_sql(&t.db, ADMIN_NOTIFICATION_TABLE)
        .await
        .unwrap();

    // 第二次使用新连接，模拟再次运行脚本
    let config = t.config.clone();
    close_database(t.db).await;
    let db = open_or_create_database(&config).await.unwrap();

    let second = create_admin_notification_table(&db).await.unwrap();
    assert_eq!(second, TableCreation::AlreadyExists);
    let sql_after_second = SchemaInspector::table_sql(&db, ADMIN_NOTIFICATION_TABLE)
        .await
        .unwrap();
    assert_eq!(sql_after_first, sql_after_second);
}

#[tokio::test]
async fn test_created_table_schema() {
    let t = common::empty_db().await;
    create_admin_notification_table(&t.db).await.unwrap();

    let columns = SchemaInspector::table_info(&t.db, ADMIN_NOTIFICATION_TABLE).await.unwrap();
    let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["id", "type", "title", "message", "agent_id", "status", "created_at"]
    );

    let status = columns.iter().find(|c| c.name == "status").unwrap();
    assert_eq!(status.default_value.as_deref(), Some("'unread'"));
    assert!(columns[0].is_primary_key());
}

#[tokio::test]
async fn test_status_defaults_to_unread() {
    let t = common::empty_db().await;
    create_admin_notification_table(&t.db).await.unwrap();

    t.db.execute_unprepared(
        "INSERT INTO admin_notification (type, title, message) VALUES ('payment', 'Setoran', 'Budi menyetor')",
    )
    .await
    .unwrap();

    let row = t
        .db
        .query_one(sea_orm::Statement::from_string(
            sea_orm::DatabaseBackend::Sqlite,
            "SELECT status FROM admin_notification",
        ))
        .await
        .unwrap()
        .unwrap();
    let status: String = row.try_get("", "status").unwrap();
    assert_eq!(status, "unread");
}

/// 以独立进程运行建表脚本，不读取任何配置文件
fn run_creator(work_dir: &Path, db_path: &Path) -> ExitStatus {
    Command::new(env!("CARGO_BIN_EXE_create_notification_table"))
        .current_dir(work_dir)
        .env("BILLING_DB_PATH", db_path)
        .env("LOG_LEVEL", "warn")
        .env_remove("RUST_LOG")
        .status()
        .expect("run create_notification_table")
}

#[tokio::test]
async fn test_creator_binary_exits_zero_on_both_runs() {
    common::init_test_logger();
    let work_dir = TempDir::new().unwrap();
    let db_path = work_dir.path().join("data").join("billing.db");

    let first = run_creator(work_dir.path(), &db_path);
    assert!(first.success(), "first run: {:?}", first);
    assert!(db_path.exists());

    let config = DatabaseConfig {
        db_path: db_path.clone(),
        ..DatabaseConfig::default()
    };
    let db = open_database(&config).await.unwrap();
    let sql_after_first = SchemaInspector::table_sql(&db, ADMIN_NOTIFICATION_TABLE)
        .await
        .unwrap()
        .unwrap();
    close_database(db).await;

    let second = run_creator(work_dir.path(), &db_path);
    assert!(second.success(), "second run: {:?}", second);

    let db = open_database(&config).await.unwrap();
    let sql_after_second = SchemaInspector::table_sql(&db, ADMIN_NOTIFICATION_TABLE)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(sql_after_first, sql_after_second);
    assert_eq!(SchemaInspector::list_tables(&db).await.unwrap(), vec!["admin_notification"]);
    close_database(db).await;
}

#[test]
fn test_creator_binary_exits_one_when_database_cannot_open() {
    let work_dir = TempDir::new().unwrap();
    // 父路径是普通文件，无法在其下建库
    let blocker = work_dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let db_path = blocker.join("billing.db");

    let status = run_creator(work_dir.path(), &db_path);
    assert_eq!(status.code(), Some(1));
    assert!(!db_path.exists());
}
