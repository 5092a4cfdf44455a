// 检查表信息：列结构 + 记录数

use billing_db_tools::database::{close_database, open_database};
use billing_db_tools::logging::init_logger;
use billing_db_tools::services::schema_report;
use billing_db_tools::utils::console::format_column_line;
use billing_db_tools::utils::load_app_config;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match load_app_config(None).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ 加载配置失败: {}", e);
            return;
        }
    };
    if let Err(e) = init_logger(&config.logging_config) {
        eprintln!("⚠️  日志初始化失败: {}", e);
    }

    println!("=== 检查表信息 ===");
    println!("📁 数据库文件: {:?}", config.database_config.db_path);

    let db = match open_database(&config.database_config).await {
        Ok(db) => db,
        Err(e) => {
            log::error!("{}", e);
            println!("❌ 连接数据库失败: {}", e);
            return;
        }
    };

    let reports = schema_report::inspect_tables(&db, &config.maintenance_config.inspect_tables).await;

    for report in &reports {
        println!("\n🔍 {}表结构:", report.table);

        if !report.exists {
            match &report.error {
                Some(e) => println!("❌ 检查失败: {}", e),
                None => println!("⚠️  表不存在"),
            }
            continue;
        }

        for column in &report.columns {
            println!("{}", format_column_line(column));
        }

        match report.row_count {
            Some(count) => println!("   总记录数: {}", count),
            None => println!("   总记录数: 未知"),
        }
        if let Some(e) = &report.error {
            println!("❌ 部分查询失败: {}", e);
        }
    }

    println!("\n🎉 表信息检查完成！");
    close_database(db).await;
}
