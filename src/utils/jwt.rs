use crate::config::AppConfig;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

const ACCESS_TOKEN: &str = "access";

// 后台账号登录令牌
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,        // 账号 ID
    pub role: String,       // staff / admin
    pub token_type: String, // 目前只签发 access
    pub exp: usize,
    pub iat: usize,
}

pub struct JwtUtils;

impl JwtUtils {
    /// 按配置的有效期签发访问令牌
    pub fn generate_access_token(
        user_id: i64,
        role: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let config = &AppConfig::get().jwt;
        Self::sign(
            &config.secret,
            user_id,
            role,
            ACCESS_TOKEN,
            chrono::Duration::minutes(config.access_token_expiry),
        )
    }

    /// 校验签名、过期时间与令牌类型
    pub fn verify_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify(&AppConfig::get().jwt.secret, token)
    }

    fn sign(
        secret: &str,
        user_id: i64,
        role: &str,
        token_type: &str,
        lifetime: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            role: role.to_string(),
            token_type: token_type.to_string(),
            exp: (now + lifetime).timestamp() as usize,
            iat: now.timestamp() as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    fn verify(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?
        .claims;

        if claims.token_type != ACCESS_TOKEN {
            return Err(jsonwebtoken::errors::ErrorKind::InvalidToken.into());
        }
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_roundtrip() {
        let token = JwtUtils::generate_access_token(42, "admin").unwrap();
        let claims = JwtUtils::verify_access_token(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn test_other_token_type_rejected() {
        let token =
            JwtUtils::sign("secret", 7, "staff", "invite", chrono::Duration::minutes(5)).unwrap();
        assert!(JwtUtils::verify("secret", &token).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token =
            JwtUtils::sign("secret", 7, "staff", ACCESS_TOKEN, chrono::Duration::minutes(5))
                .unwrap();
        assert!(JwtUtils::verify("other-secret", &token).is_err());
        assert!(JwtUtils::verify("secret", &token).is_ok());
    }

    #[test]
    fn test_expired_token_rejected() {
        // 超过默认 60 秒的 leeway
        let token =
            JwtUtils::sign("secret", 7, "staff", ACCESS_TOKEN, chrono::Duration::minutes(-5))
                .unwrap();
        assert!(JwtUtils::verify("secret", &token).is_err());
    }
}
