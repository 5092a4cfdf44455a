/// 错误处理模块
///
/// 重新导出 utils::error 中的错误类型，其他模块可以通过 `use crate::error::*` 使用

pub use crate::utils::error::*;
