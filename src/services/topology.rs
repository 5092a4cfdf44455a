// ONU 设备与光分纤点(ODP)列表，以及链路完整性统计

use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};
use serde::Serialize;

use crate::models::entities::{odp, onu_device};
use crate::models::OnuDeviceEntry;
use crate::utils::error::{AppError, AppResult};

/// 列出所有 ONU 设备，附带其 odp_id 指向的光分纤点
pub async fn list_onu_devices<C>(db: &C) -> AppResult<Vec<OnuDeviceEntry>>
where
    C: ConnectionTrait,
{
    let rows = onu_device::Entity::find()
        .find_also_related(odp::Entity)
        .order_by_asc(onu_device::Column::Id)
        .all(db)
        .await
        .map_err(|e| AppError::persistence_error(format!("查询ONU设备失败: {}", e)))?;

    Ok(rows
        .into_iter()
        .map(|(device, odp)| OnuDeviceEntry { device, odp })
        .collect())
}

/// 列出所有光分纤点
pub async fn list_odps<C>(db: &C) -> AppResult<Vec<odp::Model>>
where
    C: ConnectionTrait,
{
    odp::Entity::find()
        .order_by_asc(odp::Column::Id)
        .all(db)
        .await
        .map_err(|e| AppError::persistence_error(format!("查询ODP失败: {}", e)))
}

/// 拓扑数据汇总
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopologySummary {
    pub device_count: usize,
    pub odp_count: usize,
    pub devices_without_coordinates: usize,
    pub devices_without_odp: usize,
    /// odp_id 指向不存在的光分纤点
    pub devices_with_dangling_odp: usize,
    pub devices_without_customer: usize,
    pub odps_without_coordinates: usize,
}

impl TopologySummary {
    pub fn from_entries(devices: &[OnuDeviceEntry], odps: &[odp::Model]) -> Self {
        Self {
            device_count: devices.len(),
            odp_count: odps.len(),
            devices_without_coordinates: devices
                .iter()
                .filter(|e| !e.device.has_coordinates())
                .count(),
            devices_without_odp: devices.iter().filter(|e| e.device.odp_id.is_none()).count(),
            devices_with_dangling_odp: devices.iter().filter(|e| e.has_dangling_odp()).count(),
            devices_without_customer: devices
                .iter()
                .filter(|e| e.device.customer_id.is_none())
                .count(),
            odps_without_coordinates: odps
                .iter()
                .filter(|o| o.latitude.is_none() || o.longitude.is_none())
                .count(),
        }
    }
}
