// 批量修复上缴状态：notes 匹配模式的缴款记录改为已上缴，再联表收款员核对

use billing_db_tools::database::{close_database, open_database};
use billing_db_tools::logging::init_logger;
use billing_db_tools::services::remittance_fix::{self, RemittanceFixPlan};
use billing_db_tools::utils::console::{display_or_dash, format_optional_id};
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

    let plan = RemittanceFixPlan::from_config(&config.maintenance_config);
    println!("=== 批量修复上缴状态 ===");
    println!("🔧 notes 匹配: {} → {}", plan.notes_pattern, plan.to_status);

    let db = match open_database(&config.database_config).await {
        Ok(db) => db,
        Err(e) => {
            log::error!("{}", e);
            println!("❌ 连接数据库失败: {}", e);
            return;
        }
    };

    let report = remittance_fix::run(&db, &plan).await;

    match (report.rows_updated, &report.fix_error) {
        (Some(rows), _) => println!("✅ 已更新 {} 条记录", rows),
        (None, Some(e)) => println!("❌ 更新失败: {}", e),
        (None, None) => {}
    }

    println!("\n🔍 核对匹配的缴款记录:");
    if let Some(e) = &report.verify_error {
        println!("❌ 核对失败: {}", e);
    } else {
        for item in &report.matching_payments {
            let payment = &item.payment;
            println!(
                "   [{}] 收款员: {} | 状态: {} | 上缴单: {} | 更新时间: {} | 备注: {}",
                payment.id,
                item.collector_name(),
                display_or_dash(payment.remittance_status.as_deref()),
                format_optional_id(payment.remittance_id),
                display_or_dash(payment.updated_at.as_deref()),
                display_or_dash(payment.notes.as_deref())
            );
        }
        let unresolved = report.unresolved(&plan.to_status).count();
        if unresolved == 0 {
            println!("✅ 共 {} 条匹配记录，全部为 {}", report.matching_payments.len(), plan.to_status);
        } else {
            println!("⚠️  仍有 {} 条记录不是 {}", unresolved, plan.to_status);
        }
    }

    close_database(db).await;
}
