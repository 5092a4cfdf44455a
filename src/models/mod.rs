/// 数据模型模块
///
/// - `entities`: 计费库中各业务表的 SeaORM 实体
/// - `structs`: 表结构检查、修复脚本使用的结果结构
/// - `values`: 存储类型不固定的列的值类型

pub mod entities;
pub mod structs;
pub mod values;

pub use structs::*;
pub use values::Coordinate;
