//! 查询参数辅助反序列化

use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

// 自定义反序列化函数：空字符串视为未提供，其余按 FromStr 解析
pub fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web;

    #[derive(Debug, Deserialize)]
    struct Query {
        #[serde(default, deserialize_with = "empty_string_as_none")]
        grade: Option<i32>,
        #[serde(default, deserialize_with = "empty_string_as_none")]
        subject: Option<String>,
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let query = web::Query::<Query>::from_query("subject=&grade=").unwrap();
        assert_eq!(query.grade, None);
        assert_eq!(query.subject, None);
    }

    #[test]
    fn test_values_are_parsed() {
        let query = web::Query::<Query>::from_query("subject=Matematikk&grade=8").unwrap();
        assert_eq!(query.grade, Some(8));
        assert_eq!(query.subject.as_deref(), Some("Matematikk"));
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        assert!(web::Query::<Query>::from_query("grade=eight").is_err());
    }
}
