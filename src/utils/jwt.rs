use crate::config::JwtConfig;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

pub const ACCESS_TOKEN_TYPE: &str = "access";

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,        // Subject (user ID)
    pub role: String,       // 用户角色
    pub token_type: String, // token类型，只接受 "access"
    pub exp: usize,         // Expiration time (时间戳)
    pub iat: usize,         // Issued at (签发时间)
}

/// 令牌由外部身份服务签发，这里只负责校验
pub struct JwtUtils;

impl JwtUtils {
    // 生成 Access Token（开发工具和测试使用）
    pub fn generate_access_token(
        config: &JwtConfig,
        user_id: i64,
        role: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        Self::generate_token_with_expiry(
            config,
            user_id,
            role,
            ACCESS_TOKEN_TYPE,
            chrono::Duration::minutes(config.access_token_expiry),
        )
    }

    // 生成带自定义过期时间的 Token
    pub fn generate_token_with_expiry(
        config: &JwtConfig,
        user_id: i64,
        role: &str,
        token_type: &str,
        expiry_duration: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = Claims {
            sub: user_id.to_string(),
            role: role.to_string(),
            token_type: token_type.to_string(),
            exp: expiration.timestamp().max(0) as usize,
            iat: now.timestamp() as usize,
        };

        let encoding_key = EncodingKey::from_secret(config.secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
    }

    // 验证 JWT token
    pub fn verify_token(
        config: &JwtConfig,
        token: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let decoding_key = DecodingKey::from_secret(config.secret.as_ref());
        let mut validation = Validation::default();
        validation.leeway = config.leeway;

        decode::<Claims>(token, &decoding_key, &validation).map(|token_data| token_data.claims)
    }

    // 验证 Access Token
    pub fn verify_access_token(
        config: &JwtConfig,
        token: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let claims = Self::verify_token(config, token)?;
        if claims.token_type != ACCESS_TOKEN_TYPE {
            return Err(jsonwebtoken::errors::Error::from(
                jsonwebtoken::errors::ErrorKind::InvalidToken,
            ));
        }
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            access_token_expiry: 60,
            leeway: 0,
        }
    }

    #[test]
    fn test_access_token_verifies() {
        let config = config();
        let token = JwtUtils::generate_access_token(&config, 42, "TEACHER").unwrap();
        let claims = JwtUtils::verify_access_token(&config, &token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.role, "TEACHER");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = JwtUtils::generate_access_token(&config(), 42, "TEACHER").unwrap();
        let other = JwtConfig {
            secret: "another-secret".to_string(),
            ..config()
        };
        assert!(JwtUtils::verify_access_token(&other, &token).is_err());
    }

    #[test]
    fn test_refresh_token_rejected() {
        let config = config();
        let token = JwtUtils::generate_token_with_expiry(
            &config,
            42,
            "TEACHER",
            "refresh",
            chrono::Duration::minutes(5),
        )
        .unwrap();
        assert!(JwtUtils::verify_access_token(&config, &token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = config();
        let token = JwtUtils::generate_token_with_expiry(
            &config,
            42,
            "TEACHER",
            ACCESS_TOKEN_TYPE,
            chrono::Duration::minutes(-10),
        )
        .unwrap();
        assert!(JwtUtils::verify_access_token(&config, &token).is_err());
    }
}
