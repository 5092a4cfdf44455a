// 列出 ONU 设备与光分纤点(ODP)，核对坐标与关联ID

use billing_db_tools::database::{close_database, open_database};
use billing_db_tools::logging::init_logger;
use billing_db_tools::services::topology::{self, TopologySummary};
use billing_db_tools::utils::console::{display_or_dash, format_coordinates, format_optional_id};
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

    let db = match open_database(&config.database_config).await {
        Ok(db) => db,
        Err(e) => {
            log::error!("{}", e);
            println!("❌ 连接数据库失败: {}", e);
            return;
        }
    };

    println!("📡 ONU设备列表:");
    let devices = match topology::list_onu_devices(&db).await {
        Ok(devices) => {
            for (i, entry) in devices.iter().enumerate() {
                let device = &entry.device;
                let odp_label = match (&entry.odp, device.odp_id) {
                    (Some(odp), _) => format!("{} ({})", odp.id, display_or_dash(odp.name.as_deref())),
                    (None, Some(odp_id)) => format!("{} (不存在)", odp_id),
                    (None, None) => "-".to_string(),
                };
                println!(
                    "   {}. [{}] {} | 坐标: {} | ODP: {} | 客户ID: {} | 状态: {}",
                    i + 1,
                    device.id,
                    display_or_dash(device.name.as_deref()),
                    format_coordinates(device.latitude, device.longitude),
                    odp_label,
                    format_optional_id(device.customer_id),
                    display_or_dash(device.status.as_deref())
                );
            }
            devices
        }
        Err(e) => {
            log::error!("{}", e);
            println!("❌ 查询ONU设备失败: {}", e);
            Vec::new()
        }
    };

    println!("\n📍 ODP列表:");
    let odps = match topology::list_odps(&db).await {
        Ok(odps) => {
            for (i, odp) in odps.iter().enumerate() {
                println!(
                    "   {}. [{}] {} | 坐标: {}",
                    i + 1,
                    odp.id,
                    display_or_dash(odp.name.as_deref()),
                    format_coordinates(odp.latitude, odp.longitude)
                );
            }
            odps
        }
        Err(e) => {
            log::error!("{}", e);
            println!("❌ 查询ODP失败: {}", e);
            Vec::new()
        }
    };

    let summary = TopologySummary::from_entries(&devices, &odps);
    println!("\n📊 汇总:");
    println!("   ONU设备: {} 台，ODP: {} 个", summary.device_count, summary.odp_count);
    println!("   无坐标设备: {}", summary.devices_without_coordinates);
    println!("   未关联ODP设备: {}", summary.devices_without_odp);
    println!("   ODP引用失效设备: {}", summary.devices_with_dangling_odp);
    println!("   未关联客户设备: {}", summary.devices_without_customer);
    println!("   无坐标ODP: {}", summary.odps_without_coordinates);

    close_database(db).await;
}
