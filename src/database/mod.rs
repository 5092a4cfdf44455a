/// 数据库访问模块：连接管理与表结构检查

pub mod connection;
pub mod introspection;

pub use connection::{close_database, open_database, open_or_create_database, OpenMode};
pub use introspection::{quote_identifier, SchemaInspector};
