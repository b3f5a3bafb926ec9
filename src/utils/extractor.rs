//! 路径参数提取器

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::errors::VurderingError;

/// 从路径 `{id}` 中解析正整数 ID，格式错误返回 400
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = VurderingError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = req
            .match_info()
            .get("id")
            .ok_or_else(|| VurderingError::validation("Missing id in path"))
            .and_then(|raw| {
                raw.parse::<i64>()
                    .ok()
                    .filter(|id| *id > 0)
                    .map(SafeIDI64)
                    .ok_or_else(|| VurderingError::validation(format!("Invalid id: {raw}")))
            });
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_parses_positive_id() {
        let req = TestRequest::default().param("id", "17").to_http_request();
        let id = SafeIDI64::extract(&req).await.unwrap();
        assert_eq!(id, SafeIDI64(17));
    }

    #[actix_web::test]
    async fn test_rejects_malformed_id() {
        for raw in ["abc", "-3", "0", "1.5"] {
            let req = TestRequest::default().param("id", raw).to_http_request();
            let err = SafeIDI64::extract(&req).await.unwrap_err();
            assert_eq!(err.code(), "E004");
        }
    }
}
