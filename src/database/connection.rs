// 数据库连接的打开与关闭
// 所有脚本都通过这里连接同一个 SQLite 文件

use log::LevelFilter;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::Path;
use std::time::Duration;

use crate::utils::config::DatabaseConfig;
use crate::utils::error::{AppError, AppResult};

// 数据库URL前缀
const SQLITE_URL_PREFIX: &str = "sqlite://";

/// 打开模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// 只连接已存在的库文件
    ReadWrite,
    /// 文件不存在时创建
    ReadWriteCreate,
}

impl OpenMode {
    fn query_value(self) -> &'static str {
        match self {
            OpenMode::ReadWrite => "rw",
            OpenMode::ReadWriteCreate => "rwc",
        }
    }
}

/// 生成 sqlx 可识别的连接串
pub fn connection_url(db_path: &Path, mode: OpenMode) -> String {
    format!(
        "{}{}?mode={}",
        SQLITE_URL_PREFIX,
        db_path.to_string_lossy(),
        mode.query_value()
    )
}

fn connect_options(config: &DatabaseConfig, mode: OpenMode) -> ConnectOptions {
    let mut options = ConnectOptions::new(connection_url(&config.db_path, mode));
    // 单连接：语句严格按发出顺序执行
    options
        .max_connections(1)
        .min_connections(1)
        .acquire_timeout(Duration::from_millis(config.acquire_timeout_ms))
        .sqlx_logging(config.sqlx_logging)
        .sqlx_logging_level(LevelFilter::Debug);
    options
}

/// 连接已存在的数据库
///
/// 库文件不存在视为连接失败，不会悄悄建出一个空库
pub async fn open_database(config: &DatabaseConfig) -> AppResult<DatabaseConnection> {
    if !config.db_path.exists() {
        return Err(AppError::connection_error(format!(
            "数据库文件不存在: {:?}",
            config.db_path
        )));
    }

    log::debug!("连接数据库: {:?}", config.db_path);
    Database::connect(connect_options(config, OpenMode::ReadWrite))
        .await
        .map_err(|e| AppError::connection_error(format!("打开数据库失败: {}", e)))
}

/// 连接数据库，文件及其父目录不存在时一并创建
pub async fn open_or_create_database(config: &DatabaseConfig) -> AppResult<DatabaseConnection> {
    if let Some(parent_dir) = config.db_path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            tokio::fs::create_dir_all(parent_dir).await.map_err(|e| {
                AppError::io_error(
                    format!("创建数据库目录失败: {:?}", parent_dir),
                    e.kind().to_string(),
                )
            })?;
        }
    }

    log::debug!("连接或创建数据库: {:?}", config.db_path);
    Database::connect(connect_options(config, OpenMode::ReadWriteCreate))
        .await
        .map_err(|e| AppError::connection_error(format!("打开数据库失败: {}", e)))
}

/// 关闭连接
///
/// 关闭结果只记录日志，不影响脚本退出码
pub async fn close_database(db: DatabaseConnection) {
    match db.close().await {
        Ok(()) => log::info!("数据库连接已关闭"),
        Err(e) => log::error!("关闭数据库连接失败: {}", e),
    }
}
