// 计费库里由其他系统写入的列，存储类型并不固定
// 这里的值类型在解码时放宽要求，单行脏数据不会让整条查询失败

use std::fmt;

use sea_orm::sea_query::{ArrayType, ColumnType, Nullable, ValueType, ValueTypeErr};
use sea_orm::{ColIdx, QueryResult, TryGetError, TryGetable, Value};
use serde::{Deserialize, Serialize};

/// 经纬度
///
/// 列中可能是 REAL、INTEGER 或数字文本。
/// 空白文本、无法解析的文本与 NULL 一样按未设置处理。
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coordinate(pub f64);

impl Coordinate {
    pub fn value(self) -> f64 {
        self.0
    }

    /// 解析文本形式的坐标
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Coordinate)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Coordinate> for Value {
    fn from(source: Coordinate) -> Self {
        source.0.into()
    }
}

impl TryGetable for Coordinate {
    fn try_get_by<I: ColIdx>(res: &QueryResult, idx: I) -> Result<Self, TryGetError> {
        // 依次按 REAL、INTEGER、TEXT 解码；NULL 在第一步就返回
        if let Ok(real) = <Option<f64> as TryGetable>::try_get_by(res, idx) {
            return real
                .map(Coordinate)
                .ok_or_else(|| TryGetError::Null(format!("{idx:?}")));
        }
        if let Ok(Some(integer)) = <Option<i64> as TryGetable>::try_get_by(res, idx) {
            return Ok(Coordinate(integer as f64));
        }

        let text = <Option<String> as TryGetable>::try_get_by(res, idx)?;
        match text.as_deref().and_then(Coordinate::parse) {
            Some(coordinate) => Ok(coordinate),
            None => {
                if let Some(raw) = text.as_deref().filter(|t| !t.trim().is_empty()) {
                    log::warn!("无法解析的坐标值 {:?}，按未设置处理: {}", idx, raw);
                }
                Err(TryGetError::Null(format!("{idx:?}")))
            }
        }
    }
}

impl ValueType for Coordinate {
    fn try_from(v: Value) -> Result<Self, ValueTypeErr> {
        <f64 as ValueType>::try_from(v).map(Coordinate)
    }

    fn type_name() -> String {
        "Coordinate".to_owned()
    }

    fn array_type() -> ArrayType {
        ArrayType::Double
    }

    fn column_type() -> ColumnType {
        ColumnType::Double
    }
}

impl Nullable for Coordinate {
    fn null() -> Value {
        <f64 as Nullable>::null()
    }
}
