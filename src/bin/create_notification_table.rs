// 创建管理员通知表 admin_notification
// 唯一设置退出码的脚本：成功（含表已存在）返回 0，失败返回 1

use std::process::ExitCode;

use billing_db_tools::database::{close_database, open_or_create_database};
use billing_db_tools::logging::init_logger;
use billing_db_tools::models::TableCreation;
use billing_db_tools::services::notification_table;
use billing_db_tools::utils::load_app_config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match load_app_config(None).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ 加载配置失败: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = init_logger(&config.logging_config) {
        eprintln!("⚠️  日志初始化失败: {}", e);
    }

    println!("🔧 创建 {} 表...", notification_table::ADMIN_NOTIFICATION_TABLE);

    let db = match open_or_create_database(&config.database_config).await {
        Ok(db) => db,
        Err(e) => {
            log::error!("{}", e);
            println!("❌ 连接数据库失败: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = notification_table::create_admin_notification_table(&db).await;
    close_database(db).await;

    match result {
        Ok(TableCreation::Created) => {
            println!("✅ {} 表创建成功", notification_table::ADMIN_NOTIFICATION_TABLE);
            ExitCode::SUCCESS
        }
        Ok(TableCreation::AlreadyExists) => {
            println!("✅ {} 表已存在，无需变更", notification_table::ADMIN_NOTIFICATION_TABLE);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("❌ 创建表失败: {}", e);
            ExitCode::FAILURE
        }
    }
}
