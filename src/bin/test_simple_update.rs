// 单行更新测试：确认驱动写入与 updated_at 触发器是否正常

use billing_db_tools::database::{close_database, open_database};
use billing_db_tools::logging::init_logger;
use billing_db_tools::services::simple_update::{self, SimpleUpdatePlan};
use billing_db_tools::utils::console::display_or_dash;
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

    let plan = SimpleUpdatePlan::from_config(&config.maintenance_config);
    println!("=== 单行更新测试 ===");
    println!("🔧 collector_payment.id = {} → {}", plan.payment_id, plan.new_status);

    let db = match open_database(&config.database_config).await {
        Ok(db) => db,
        Err(e) => {
            log::error!("{}", e);
            println!("❌ 连接数据库失败: {}", e);
            return;
        }
    };

    match simple_update::run(&db, &plan).await {
        Ok(report) => {
            println!(
                "   更新前: 状态 {} | 更新时间 {}",
                display_or_dash(report.before.remittance_status.as_deref()),
                display_or_dash(report.before.updated_at.as_deref())
            );
            println!("   影响行数: {}", report.rows_affected);
            match &report.after {
                Some(after) => println!(
                    "   更新后: 状态 {} | 更新时间 {}",
                    display_or_dash(after.remittance_status.as_deref()),
                    display_or_dash(after.updated_at.as_deref())
                ),
                None => println!("❌ 更新后无法重新读取记录"),
            }

            if report.value_persisted(&plan.new_status) {
                println!("✅ 写入值已生效");
            } else {
                println!("❌ 写入值未生效");
            }
            if report.rows_affected == 0 {
                println!("⚠️  记录原本就是 {}，未发生变化", plan.new_status);
            } else if report.updated_at_changed() {
                println!("✅ updated_at 已被触发器刷新");
            } else {
                println!("⚠️  updated_at 未变化，触发器可能不存在");
            }
        }
        Err(e) => {
            log::error!("{}", e);
            println!("❌ 测试失败: {}", e);
        }
    }

    close_database(db).await;
}
