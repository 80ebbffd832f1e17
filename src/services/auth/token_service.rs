//! JWT 토큰 관리 서비스 구현
//!
//! HMAC(HS256) 서명 기반의 액세스 토큰 발급과 검증을 담당합니다.
//! 비밀키는 시작 시점에 [`JwtConfig`]로 주입되며 요청마다 환경 변수를 읽지 않습니다.
//!
//! ## 검증 규칙
//!
//! - 헤더 알고리즘은 HMAC 계열(HS256/HS384/HS512)만 허용합니다. `none` 등은 거부됩니다.
//! - 서명과 `exp`를 검증하며 만료 유예(leeway)는 두지 않습니다.
//! - 모든 검증 실패는 `AppError::InvalidTokenError`로 변환됩니다.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Account;
use crate::domain::models::TokenClaims;

#[derive(Clone)]
pub struct TokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = 0;
        validation.validate_exp = true;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            config,
        }
    }

    /// 계좌에 대한 액세스 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::SigningError` - 비밀키가 비어있거나 인코딩 실패
    /// * `AppError::SigningError` - 만료 시각을 표현할 수 없음
    pub fn issue(&self, account: &Account) -> AppResult<String> {
        if self.config.secret.is_empty() {
            return Err(AppError::SigningError("JWT 비밀키가 설정되지 않았습니다".to_string()));
        }

        let now = Utc::now();
        let expiration = TimeDelta::try_hours(self.config.expiration_hours)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                AppError::SigningError(format!(
                    "만료 시간 {}시간을 계산할 수 없습니다",
                    self.config.expiration_hours
                ))
            })?;
        let claims = TokenClaims::new(account.number(), now.timestamp(), expiration.timestamp());

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::SigningError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 토큰의 서명과 만료를 검증하고 클레임을 반환합니다.
    pub fn verify(&self, token: &str) -> AppResult<TokenClaims> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::InvalidTokenError("token expired".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::InvalidTokenError("signature mismatch".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidAlgorithm => {
                    AppError::InvalidTokenError("unsupported algorithm".to_string())
                }
                _ => AppError::InvalidTokenError("malformed token".to_string()),
            })
    }

    /// `Bearer <token>` 형식의 헤더 값에서 토큰을 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::InvalidTokenError("expected Bearer scheme".to_string()))?
            .trim();

        if token.is_empty() {
            return Err(AppError::InvalidTokenError("empty bearer token".to_string()));
        }

        Ok(token)
    }
}
