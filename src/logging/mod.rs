//! # 日志记录模块 (Logging Module)
//!
//! ## 业务说明
//! 维护脚本是一次性运行的命令行工具，日志只输出到控制台，
//! 供操作人员阅读后人工判断下一步动作
//!
//! ## 日志策略
//! - **数据库错误**: 连接失败、语句执行失败，记录后继续执行下一条语句
//! - **数据修复**: 每次修改数据都记录影响行数，便于事后核对
//! - **SQL 语句**: 配置 `sqlx_logging` 后以 debug 级别输出
//!
//! ## Rust知识点
//! - **日志宏**: 使用log crate的宏系统
//! - **环境配置**: 通过env_logger进行环境变量配置，`RUST_LOG` 优先于配置文件

use chrono::Local;
use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;
use std::str::FromStr;

use crate::utils::config::LoggingConfig;
use crate::utils::error::{AppError, AppResult};

/// 把配置中的级别字符串转换为 LevelFilter
pub fn parse_level(level: &str) -> AppResult<LevelFilter> {
    LevelFilter::from_str(level)
        .map_err(|_| AppError::configuration_error(format!("无效的日志级别: {}", level)))
}

/// 初始化全局日志
///
/// 重复初始化（例如测试中多次调用）直接忽略
pub fn init_logger(config: &LoggingConfig) -> AppResult<()> {
    let level = parse_level(&config.log_level)?;
    let show_timestamp = config.show_timestamp;

    let mut builder = Builder::new();
    builder.filter_level(level);
    // RUST_LOG 存在时覆盖配置级别
    builder.parse_env(Env::default());
    builder.format(move |buf, record| {
        if show_timestamp {
            writeln!(
                buf,
                "[{}] [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        } else {
            writeln!(buf, "[{}] {}", record.level(), record.args())
        }
    });

    if builder.try_init().is_err() {
        log::debug!("日志系统已初始化，跳过");
    }
    Ok(())
}

/// 记录数据库错误日志
#[macro_export]
macro_rules! log_db_failure {
    ($msg:expr) => {
        log::error!("[数据库错误] {}", $msg);
    };
    ($msg:expr, $($arg:tt)*) => {
        log::error!("[数据库错误] {}", format!($msg, $($arg)*));
    };
}

/// 记录数据修复日志
#[macro_export]
macro_rules! log_data_fix {
    ($msg:expr) => {
        log::info!("[数据修复] {}", $msg);
    };
    ($msg:expr, $($arg:tt)*) => {
        log::info!("[数据修复] {}", format!($msg, $($arg)*));
    };
}

// 重新导出宏
pub use crate::log_data_fix;
pub use crate::log_db_failure;
