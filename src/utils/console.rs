// 控制台输出格式化
// 脚本输出面向人工阅读，不保证格式稳定

use crate::models::{ColumnInfo, Coordinate};

/// 单列信息行，格式与历史脚本一致
pub fn format_column_line(column: &ColumnInfo) -> String {
    format!(
        "   {} | {} | {} | NOT NULL: {} | DEFAULT: {} | PK: {}",
        column.cid,
        column.name,
        if column.declared_type.is_empty() { "-" } else { column.declared_type.as_str() },
        column.is_not_null(),
        column.default_value.as_deref().unwrap_or("NULL"),
        column.is_primary_key()
    )
}

/// 经纬度，任一缺失即显示未设置
pub fn format_coordinates(latitude: Option<Coordinate>, longitude: Option<Coordinate>) -> String {
    match (latitude, longitude) {
        (Some(lat), Some(lng)) => format!("({}, {})", lat, lng),
        _ => "未设置".to_string(),
    }
}

pub fn format_optional_id(id: Option<i64>) -> String {
    id.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn display_or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "-",
    }
}
