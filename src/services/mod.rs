/// 维护脚本的业务逻辑，每个脚本对应一个模块
///
/// 各模块之间互不依赖（payment_queries 为共用的只读查询）

pub mod customer_lookup;
pub mod notification_table;
pub mod payment_queries;
pub mod remittance_fix;
pub mod schema_report;
pub mod simple_update;
pub mod structure_dump;
pub mod topology;
pub mod trigger_fix;

pub use topology::TopologySummary;
