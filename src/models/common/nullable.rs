//! 可置空字段的反序列化
//!
//! PATCH 请求需要区分「字段缺失」和「显式传 null」：
//! - 缺失 → `None`
//! - `null` → `Some(None)`
//! - 值 → `Some(Some(v))`
//!
//! 字段需同时标注 `#[serde(default)]`。

use serde::{Deserialize, Deserializer};

pub fn deserialize_nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "deserialize_nullable")]
        grade: Option<Option<i32>>,
    }

    #[test]
    fn test_missing_field_is_none() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.grade, None);
    }

    #[test]
    fn test_explicit_null_clears_value() {
        let patch: Patch = serde_json::from_str(r#"{"grade": null}"#).unwrap();
        assert_eq!(patch.grade, Some(None));
    }

    #[test]
    fn test_value_is_set() {
        let patch: Patch = serde_json::from_str(r#"{"grade": 5}"#).unwrap();
        assert_eq!(patch.grade, Some(Some(5)));
    }
}
