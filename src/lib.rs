/// 计费/ISP 管理系统数据库维护工具集 - 核心库
///
/// 每个 `src/bin` 下的脚本只负责连接、调用本库、打印结果
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod utils;

// 重新导出常用类型，方便使用
pub use models::*;
pub use utils::{AppConfig, AppError, AppResult};
