// 遍历固定表名列表，输出每张表的结构
// 全部查询完成后才关闭连接

use billing_db_tools::database::{close_database, open_database};
use billing_db_tools::logging::init_logger;
use billing_db_tools::services::structure_dump;
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

    println!("=== 检查数据库表结构 ===");

    let db = match open_database(&config.database_config).await {
        Ok(db) => db,
        Err(e) => {
            log::error!("{}", e);
            println!("❌ 连接数据库失败: {}", e);
            return;
        }
    };

    let structures =
        structure_dump::dump_structures(&db, &config.maintenance_config.structure_tables).await;

    for structure in &structures {
        println!("\n🔍 {}:", structure.table);
        if let Some(e) = &structure.error {
            println!("❌ {}", e);
        }
        for column in &structure.columns {
            println!("{}", format_column_line(column));
        }
        if let Some(sql) = &structure.create_sql {
            println!("   建表语句: {}", sql.trim());
        }
    }

    println!("\n🎉 表结构检查完成！共 {} 张表", structures.len());
    close_database(db).await;
}
