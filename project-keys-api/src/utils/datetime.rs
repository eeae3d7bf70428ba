//! 日期时间序列化/反序列化工具
//!
//! 提供自定义 Serde 序列化/反序列化支持：
//! - 序列化: `DateTime`<Utc> -> RFC3339 字符串
//! - 反序列化: RFC3339 字符串 或 Unix 时间戳 -> `DateTime`<Utc>
//!
//! 用法：`#[serde(with = "crate::utils::datetime")]`，可选字段使用
//! `crate::utils::datetime::option`。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Timestamp {
    String(String),
    I64(i64),
    U64(u64),
}

impl Timestamp {
    fn into_datetime<E: serde::de::Error>(self) -> Result<DateTime<Utc>, E> {
        match self {
            Timestamp::String(s) => DateTime::parse_from_rfc3339(&s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| E::custom(format!("Invalid RFC3339 timestamp: {e}"))),
            Timestamp::I64(ts) => {
                parse_unix_timestamp(ts).ok_or_else(|| E::custom("Invalid Unix timestamp"))
            }
            Timestamp::U64(ts) => i64::try_from(ts)
                .ok()
                .and_then(parse_unix_timestamp)
                .ok_or_else(|| E::custom("Invalid Unix timestamp")),
        }
    }
}

/// 序列化 `DateTime`<Utc> 为 RFC3339 字符串
pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339())
}

/// 反序列化：支持 RFC3339 字符串或 Unix 时间戳（秒/毫秒自动识别）
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    Timestamp::deserialize(deserializer)?.into_datetime()
}

/// `Option<DateTime<Utc>>` 版本
pub mod option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Timestamp;

    pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match dt {
            Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Timestamp>::deserialize(deserializer)?
            .map(Timestamp::into_datetime)
            .transpose()
    }
}

/// 解析 Unix 时间戳（自动判断秒/毫秒）
fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    // 大于 10^11 视为毫秒
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super")]
        at: DateTime<Utc>,
    }

    #[derive(Serialize, Deserialize, Default)]
    struct OptionalWrapper {
        #[serde(default, with = "super::option")]
        at: Option<DateTime<Utc>>,
    }

    #[test]
    fn parses_rfc3339() {
        let w: Result<Wrapper, _> = serde_json::from_str(r#"{"at":"2020-01-01T00:00:00Z"}"#);
        assert!(matches!(w, Ok(ref w) if w.at.timestamp() == 1_577_836_800));
    }

    #[test]
    fn parses_unix_seconds_and_millis() {
        let secs: Result<Wrapper, _> = serde_json::from_str(r#"{"at":1577836800}"#);
        let millis: Result<Wrapper, _> = serde_json::from_str(r#"{"at":1577836800000}"#);
        assert!(matches!(secs, Ok(ref w) if w.at.timestamp() == 1_577_836_800));
        assert!(matches!(millis, Ok(ref w) if w.at.timestamp() == 1_577_836_800));
    }

    #[test]
    fn rejects_garbage() {
        let w: Result<Wrapper, _> = serde_json::from_str(r#"{"at":"yesterday"}"#);
        assert!(w.is_err());
    }

    #[test]
    fn optional_missing_and_null() {
        let missing: OptionalWrapper = serde_json::from_str("{}").unwrap_or_default();
        let null: OptionalWrapper = serde_json::from_str(r#"{"at":null}"#).unwrap_or_default();
        assert!(missing.at.is_none());
        assert!(null.at.is_none());
    }

    #[test]
    fn serializes_as_rfc3339() {
        let w = Wrapper {
            at: DateTime::from_timestamp(1_577_836_800, 0).unwrap_or_default(),
        };
        let json = serde_json::to_string(&w).unwrap_or_default();
        assert_eq!(json, r#"{"at":"2020-01-01T00:00:00+00:00"}"#);
    }
}
