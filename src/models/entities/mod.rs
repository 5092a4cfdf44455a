// 声明 entities 模块下的所有实体
// 这些表都由计费系统创建，admin_notification 除外

pub mod admin_notification;
pub mod collector;
pub mod collector_payment;
pub mod customer;
pub mod odp;
pub mod onu_device;
