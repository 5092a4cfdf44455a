// 按 PPPoE 用户名查询客户，并判断是否已完成地理编码

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::models::entities::customer;
use crate::utils::error::{AppError, AppResult};

/// 按用户名查找客户
///
/// 用户名理论上唯一；出现重复时只返回 id 最小的一条并记录警告
pub async fn find_customer_by_username<C>(db: &C, username: &str) -> AppResult<Option<customer::Model>>
where
    C: ConnectionTrait,
{
    let mut matches = customer::Entity::find()
        .filter(customer::Column::PppoeUsername.eq(username))
        .order_by_asc(customer::Column::Id)
        .limit(2)
        .all(db)
        .await
        .map_err(|e| AppError::persistence_error(format!("查询客户{}失败: {}", username, e)))?;

    if matches.len() > 1 {
        log::warn!("PPPoE用户名 {} 对应多条客户记录，仅显示第一条", username);
    }

    if matches.is_empty() {
        Ok(None)
    } else {
        Ok(Some(matches.swap_remove(0)))
    }
}
