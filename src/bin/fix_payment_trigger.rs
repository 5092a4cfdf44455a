// 删除 collector_payment 上的问题触发器，并修复已关联上缴单但仍待上缴的记录

use billing_db_tools::database::{close_database, open_database};
use billing_db_tools::logging::init_logger;
use billing_db_tools::services::trigger_fix::{self, TriggerFixPlan};
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

    let plan = TriggerFixPlan::from_config(&config.maintenance_config);
    println!("=== 修复缴款触发器 ===");
    println!("🔧 触发器: {}", plan.trigger_name);

    let db = match open_database(&config.database_config).await {
        Ok(db) => db,
        Err(e) => {
            log::error!("{}", e);
            println!("❌ 连接数据库失败: {}", e);
            return;
        }
    };

    let report = trigger_fix::run(&db, &plan).await;

    match (&report.outcome, &report.fix_error) {
        (Some(outcome), _) => {
            if outcome.trigger_existed {
                println!("✅ 已删除触发器 {}", plan.trigger_name);
            } else {
                println!("⚠️  触发器 {} 不存在，跳过删除", plan.trigger_name);
            }
            println!(
                "✅ {} 条记录由 {} 更新为 {}",
                outcome.rows_updated, plan.from_status, plan.to_status
            );
        }
        (None, Some(e)) => println!("❌ 修复失败，已回滚: {}", e),
        (None, None) => {}
    }

    println!("\n🔍 验证修复结果...");
    if let Some(e) = &report.verify_error {
        println!("❌ 验证失败: {}", e);
    } else {
        if report.remaining_triggers.is_empty() {
            println!("   collector_payment 上已无触发器");
        } else {
            for trigger in &report.remaining_triggers {
                println!("   剩余触发器: {}", trigger.name);
            }
        }
        for count in &report.status_counts {
            println!(
                "   状态 {}: {} 条",
                display_or_dash(count.remittance_status.as_deref()),
                count.total
            );
        }
    }

    close_database(db).await;
}
