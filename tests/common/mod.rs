// 集成测试公共夹具：在临时目录中建一个带样例数据的计费库

#![allow(dead_code)]

use billing_db_tools::database::open_or_create_database;
use billing_db_tools::utils::DatabaseConfig;
use sea_orm::{ConnectionTrait, DatabaseConnection};
use tempfile::TempDir;

pub const SCHEMA: &[&str] = &[
    r#"CREATE TABLE customer (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        pppoe_username TEXT,
        latitude REAL,
        longitude REAL
    )"#,
    r#"CREATE TABLE odp (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        latitude REAL,
        longitude REAL
    )"#,
    r#"CREATE TABLE onu_device (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        latitude REAL,
        longitude REAL,
        odp_id INTEGER,
        customer_id INTEGER,
        status TEXT DEFAULT 'offline'
    )"#,
    r#"CREATE TABLE cable_route (
        id INTEGER PRIMARY KEY,
        from_odp_id INTEGER,
        to_odp_id INTEGER,
        coordinates TEXT
    )"#,
    r#"CREATE TABLE collector (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL
    )"#,
    r#"CREATE TABLE collector_payment (
        id INTEGER PRIMARY KEY,
        collector_id INTEGER,
        remittance_status TEXT,
        remittance_id INTEGER,
        notes TEXT,
        updated_at DATETIME
    )"#,
];

pub const SEED: &[&str] = &[
    "INSERT INTO customer (id, name, pppoe_username, latitude, longitude) VALUES (1, 'Andi', 'andi01', -6.2, 106.8)",
    "INSERT INTO customer (id, name, pppoe_username, latitude, longitude) VALUES (2, 'Sari', 'sari02', NULL, NULL)",
    "INSERT INTO odp (id, name, latitude, longitude) VALUES (1, 'ODP-A', -6.21, 106.81)",
    "INSERT INTO odp (id, name, latitude, longitude) VALUES (2, 'ODP-B', NULL, NULL)",
    "INSERT INTO onu_device (id, name, latitude, longitude, odp_id, customer_id, status) VALUES (1, 'ONU-1', -6.2, 106.8, 1, 1, 'online')",
    "INSERT INTO onu_device (id, name, latitude, longitude, odp_id, customer_id, status) VALUES (2, 'ONU-2', NULL, NULL, NULL, 2, NULL)",
    "INSERT INTO onu_device (id, name, latitude, longitude, odp_id, customer_id, status) VALUES (3, 'ONU-3', -6.3, 106.9, 99, NULL, 'offline')",
    "INSERT INTO collector (id, name) VALUES (1, 'Budi')",
    "INSERT INTO collector (id, name) VALUES (2, 'Citra')",
    "INSERT INTO collector_payment (id, collector_id, remittance_status, remittance_id, notes, updated_at) VALUES (1, 1, 'pending', 10, 'remitted to office', '2020-01-01 00:00:00')",
    "INSERT INTO collector_payment (id, collector_id, remittance_status, remittance_id, notes, updated_at) VALUES (2, 1, 'pending', NULL, 'remit batch 3', '2020-01-01 00:00:00')",
    "INSERT INTO collector_payment (id, collector_id, remittance_status, remittance_id, notes, updated_at) VALUES (3, 2, 'received', 11, 'remit batch 3', '2020-01-01 00:00:00')",
    "INSERT INTO collector_payment (id, collector_id, remittance_status, remittance_id, notes, updated_at) VALUES (4, 2, 'pending', 12, 'cash on hand', '2020-01-01 00:00:00')",
    "INSERT INTO collector_payment (id, collector_id, remittance_status, remittance_id, notes, updated_at) VALUES (5, 3, NULL, NULL, 'remit later', '2020-01-01 00:00:00')",
];

/// 列类型不规范的计费表：名称可为空，坐标以文本或无类型列存储
pub const LOOSE_SCHEMA: &[&str] = &[
    r#"CREATE TABLE customer (
        id INTEGER PRIMARY KEY,
        name TEXT,
        pppoe_username TEXT,
        latitude TEXT,
        longitude TEXT
    )"#,
    r#"CREATE TABLE odp (
        id INTEGER PRIMARY KEY,
        name TEXT,
        latitude,
        longitude
    )"#,
    r#"CREATE TABLE onu_device (
        id INTEGER PRIMARY KEY,
        name TEXT,
        latitude TEXT,
        longitude TEXT,
        odp_id INTEGER,
        customer_id INTEGER,
        status TEXT
    )"#,
    r#"CREATE TABLE collector (
        id INTEGER PRIMARY KEY,
        name TEXT
    )"#,
    r#"CREATE TABLE collector_payment (
        id INTEGER PRIMARY KEY,
        collector_id INTEGER,
        remittance_status TEXT,
        remittance_id INTEGER,
        notes TEXT,
        updated_at TEXT
    )"#,
];

pub const LOOSE_SEED: &[&str] = &[
    "INSERT INTO customer (id, name, pppoe_username, latitude, longitude) VALUES (1, 'Andi', 'andi01', '-6.2', '106.8')",
    "INSERT INTO customer (id, name, pppoe_username, latitude, longitude) VALUES (2, NULL, 'anon03', '  ', NULL)",
    // 无类型列保留原始存储类型：REAL 与 INTEGER
    "INSERT INTO odp (id, name, latitude, longitude) VALUES (1, NULL, -6.21, 107)",
    "INSERT INTO odp (id, name, latitude, longitude) VALUES (2, 'ODP-B', '-6.3', 'abc')",
    "INSERT INTO onu_device (id, name, latitude, longitude, odp_id, customer_id, status) VALUES (1, 'ONU-1', '-6.2', '106.8', 1, 1, 'online')",
    "INSERT INTO onu_device (id, name, latitude, longitude, odp_id, customer_id, status) VALUES (2, NULL, NULL, NULL, 2, NULL, NULL)",
    "INSERT INTO onu_device (id, name, latitude, longitude, odp_id, customer_id, status) VALUES (3, 'ONU-3', '', '106.9', NULL, 2, NULL)",
    "INSERT INTO collector (id, name) VALUES (1, NULL)",
    "INSERT INTO collector_payment (id, collector_id, remittance_status, remittance_id, notes, updated_at) VALUES (1, 1, 'pending', 7, 'remit cash', NULL)",
];

/// 刷新 updated_at 的触发器
pub const TIMESTAMP_TRIGGER: &str = r#"
    CREATE TRIGGER update_collector_payment_timestamp
    AFTER UPDATE ON collector_payment
    BEGIN
        UPDATE collector_payment SET updated_at = CURRENT_TIMESTAMP WHERE id = NEW.id;
    END
"#;

/// 让所有更新失败的触发器，模拟现场的问题触发器
pub const BLOCKING_TRIGGER: &str = r#"
    CREATE TRIGGER update_collector_payment_timestamp
    BEFORE UPDATE ON collector_payment
    BEGIN
        SELECT RAISE(ABORT, 'updated_at trigger failed');
    END
"#;

pub struct TestDb {
    pub db: DatabaseConnection,
    pub config: DatabaseConfig,
    // 持有临时目录，测试结束时删除
    _dir: TempDir,
}

pub fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 空库
pub async fn empty_db() -> TestDb {
    init_test_logger();
    let dir = TempDir::new().expect("create temp dir");
    let config = DatabaseConfig {
        db_path: dir.path().join("data").join("billing.db"),
        ..DatabaseConfig::default()
    };
    let db = open_or_create_database(&config).await.expect("open temp db");
    TestDb { db, config, _dir: dir }
}

/// 建好计费表并写入样例数据的库
pub async fn seeded_db() -> TestDb {
    let test_db = empty_db().await;
    execute_all(&test_db.db, SCHEMA).await;
    execute_all(&test_db.db, SEED).await;
    test_db
}

/// 列类型不规范、含空名称和文本坐标的库
pub async fn loosely_typed_db() -> TestDb {
    let test_db = empty_db().await;
    execute_all(&test_db.db, LOOSE_SCHEMA).await;
    execute_all(&test_db.db, LOOSE_SEED).await;
    test_db
}

pub async fn execute_all(db: &DatabaseConnection, statements: &[&str]) {
    for sql in statements {
        db.execute_unprepared(sql).await.expect("fixture statement");
    }
}
