use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::utils::error::{AppError, AppResult};

/// 默认配置文件路径（相对工作目录）
pub const DEFAULT_CONFIG_PATH: &str = "config/db_tools.json";

/// 工具集主配置结构
/// 不提供配置文件时，所有工具的行为与写死的脚本完全一致
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 数据库连接配置
    #[serde(default)]
    pub database_config: DatabaseConfig,
    /// 日志配置
    #[serde(default)]
    pub logging_config: LoggingConfig,
    /// 各维护脚本的固定参数
    #[serde(default)]
    pub maintenance_config: MaintenanceConfig,
}

/// 数据库连接配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite 数据库文件路径
    pub db_path: PathBuf,
    /// 获取连接的超时时间（毫秒）
    pub acquire_timeout_ms: u64,
    /// 是否把 SQL 语句输出到 debug 日志
    pub sqlx_logging: bool,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub log_level: String,
    /// 日志行是否带时间戳
    pub show_timestamp: bool,
}

/// 维护脚本参数
///
/// 这些值原本直接写在各个脚本里，集中到这里后仍然以默认值为准
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenanceConfig {
    /// 表信息检查脚本要检查的表
    pub inspect_tables: Vec<String>,
    /// 表结构导出脚本遍历的表
    pub structure_tables: Vec<String>,
    /// 客户查询使用的 PPPoE 用户名
    pub lookup_username: String,
    /// 需要删除的 collector_payment 触发器
    pub payment_trigger_name: String,
    /// 待修复的缴款状态
    pub pending_status: String,
    /// 修复后的缴款状态
    pub received_status: String,
    /// 批量修复时匹配 notes 的 LIKE 模式
    pub remittance_notes_pattern: String,
    /// 单行更新测试使用的缴款记录ID
    pub test_payment_id: i64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("data/billing.db"),
            acquire_timeout_ms: 30000,
            sqlx_logging: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_timestamp: true,
        }
    }
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            inspect_tables: vec![
                "customer".to_string(),
                "onu_device".to_string(),
                "odp".to_string(),
                "cable_route".to_string(),
            ],
            structure_tables: vec![
                "customer".to_string(),
                "onu_device".to_string(),
                "odp".to_string(),
                "cable_route".to_string(),
                "collector".to_string(),
                "collector_payment".to_string(),
                "admin_notification".to_string(),
            ],
            lookup_username: "user001".to_string(),
            payment_trigger_name: "update_collector_payment_timestamp".to_string(),
            pending_status: "pending".to_string(),
            received_status: "received".to_string(),
            remittance_notes_pattern: "%remit%".to_string(),
            test_payment_id: 1,
        }
    }
}

/// 配置管理器
/// 负责加载、保存和校验工具配置
pub struct ConfigManager {
    config: AppConfig,
    config_file_path: PathBuf,
}

impl ConfigManager {
    /// 创建新的配置管理器
    pub fn new(config_file_path: PathBuf) -> Self {
        Self {
            config: AppConfig::default(),
            config_file_path,
        }
    }

    /// 从文件加载配置
    ///
    /// 文件不存在时保留默认配置，不会自动写出配置文件
    pub async fn load_from_file(&mut self) -> AppResult<()> {
        if !self.config_file_path.exists() {
            log::debug!("配置文件不存在，使用默认配置: {:?}", self.config_file_path);
            return Ok(());
        }

        let content = tokio::fs::read_to_string(&self.config_file_path)
            .await
            .map_err(|e| AppError::io_error(format!("读取配置文件失败: {}", e), e.kind().to_string()))?;

        self.config = serde_json::from_str(&content)
            .map_err(|e| AppError::configuration_error(format!("解析配置文件失败: {}", e)))?;

        Ok(())
    }

    /// 将配置保存到文件
    pub async fn save_to_file(&self) -> AppResult<()> {
        if let Some(parent) = self.config_file_path.parent() {
            tokio::fs::create_dir_all(parent).await
                .map_err(|e| AppError::io_error(format!("创建配置目录失败: {}", e), e.kind().to_string()))?;
        }

        let content = serde_json::to_string_pretty(&self.config)
            .map_err(|e| AppError::json_error(format!("序列化配置失败: {}", e)))?;

        tokio::fs::write(&self.config_file_path, content)
            .await
            .map_err(|e| AppError::io_error(format!("写入配置文件失败: {}", e), e.kind().to_string()))?;

        Ok(())
    }

    /// 从环境变量覆盖配置
    pub fn override_from_env(&mut self) {
        if let Ok(db_path) = std::env::var("BILLING_DB_PATH") {
            if !db_path.trim().is_empty() {
                self.config.database_config.db_path = PathBuf::from(db_path);
            }
        }
        if let Ok(log_level) = std::env::var("LOG_LEVEL") {
            self.config.logging_config.log_level = log_level.to_lowercase();
        }
    }

    /// 获取配置的只读引用
    pub fn get_config(&self) -> &AppConfig {
        &self.config
    }

    /// 获取配置的可变引用
    pub fn get_config_mut(&mut self) -> &mut AppConfig {
        &mut self.config
    }

    /// 验证配置的有效性
    pub fn validate_config(&self) -> AppResult<()> {
        if self.config.database_config.db_path.as_os_str().is_empty() {
            return Err(AppError::configuration_error("数据库路径不能为空"));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.config.logging_config.log_level.as_str()) {
            return Err(AppError::configuration_error(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.config.logging_config.log_level, valid_log_levels
            )));
        }

        // 修复参数由各修复计划自行校验
        Ok(())
    }

    /// 重置为默认配置
    pub fn reset_to_default(&mut self) {
        self.config = AppConfig::default();
    }

    /// 消费管理器，取出配置
    pub fn into_config(self) -> AppConfig {
        self.config
    }
}

/// 加载工具配置：文件 → 环境变量 → 校验
///
/// 每个脚本启动时调用一次；`config_path` 为 None 时使用 [`DEFAULT_CONFIG_PATH`]
pub async fn load_app_config(config_path: Option<&Path>) -> AppResult<AppConfig> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let mut config_manager = ConfigManager::new(config_path);

    config_manager.load_from_file().await?;
    config_manager.override_from_env();
    config_manager.validate_config()?;

    Ok(config_manager.into_config())
}
