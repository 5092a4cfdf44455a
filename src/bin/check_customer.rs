// 按 PPPoE 用户名查询客户，检查是否已有经纬度

use billing_db_tools::database::{close_database, open_database};
use billing_db_tools::logging::init_logger;
use billing_db_tools::services::customer_lookup;
use billing_db_tools::utils::console::format_coordinates;
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

    let username = &config.maintenance_config.lookup_username;
    println!("🔍 查询客户: {}", username);

    let db = match open_database(&config.database_config).await {
        Ok(db) => db,
        Err(e) => {
            log::error!("{}", e);
            println!("❌ 连接数据库失败: {}", e);
            return;
        }
    };

    match customer_lookup::find_customer_by_username(&db, username).await {
        Ok(Some(customer)) => {
            match serde_json::to_string_pretty(&customer) {
                Ok(json) => println!("✅ 找到客户:\n{}", json),
                Err(e) => println!("✅ 找到客户 {:?}（JSON序列化失败: {}）", customer, e),
            }
            if customer.has_coordinates() {
                println!(
                    "📍 已有经纬度: {}",
                    format_coordinates(customer.latitude, customer.longitude)
                );
            } else {
                println!("⚠️  客户尚未设置经纬度");
            }
        }
        Ok(None) => println!("❌ 未找到客户: {}", username),
        Err(e) => {
            log::error!("{}", e);
            println!("❌ 查询失败: {}", e);
        }
    }

    close_database(db).await;
}
