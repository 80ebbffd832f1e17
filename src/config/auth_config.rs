//! # Authentication Configuration Module
//!
//! JWT 서명 비밀키와 토큰 만료 시간을 관리하는 모듈입니다.
//!
//! 비밀키는 토큰 무결성의 유일한 신뢰 기반이므로 요청마다 환경 변수를 읽지 않고,
//! 시작 시점에 [`JwtConfig`] 값으로 한 번 로드하여 `TokenService`에 주입합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```
//!
//! 기존 배포와의 호환을 위해 `JWT_SECRET`이 없으면 `SECRET`을 사용합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::JwtConfig;
//! use crate::services::auth::TokenService;
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let token_service = TokenService::new(jwt_config);
//! ```

use std::env;
use std::fmt;

use crate::core::errors::{AppError, AppResult};

/// 기본 토큰 만료 시간 (시간)
const DEFAULT_EXPIRATION_HOURS: i64 = 24;

/// 허용되는 토큰 만료 시간 범위 (1시간 ~ 1년)
const EXPIRATION_HOURS_RANGE: std::ops::RangeInclusive<i64> = 1..=8760;

/// JWT 토큰 설정
///
/// ## 권장 설정값
///
/// - **비밀키**: 최소 256비트, `openssl rand -base64 32` 등으로 생성
/// - **만료 시간**: 개발 24시간, 프로덕션 1시간 이하
#[derive(Clone)]
pub struct JwtConfig {
    /// HMAC 서명 비밀키
    pub secret: String,
    /// 토큰 만료 시간 (시간 단위)
    pub expiration_hours: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expiration_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }

    /// 프로세스 환경 변수에서 설정을 로드합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::SigningError` - `JWT_SECRET`과 `SECRET`이 모두 비어있음
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정을 구성합니다.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET")
            .filter(|value| !value.is_empty())
            .or_else(|| lookup("SECRET").filter(|value| !value.is_empty()))
            .ok_or_else(|| {
                AppError::SigningError("JWT_SECRET (또는 SECRET) 환경 변수가 설정되지 않았습니다".to_string())
            })?;

        if secret.len() < 32 {
            log::warn!("JWT 비밀키가 32바이트 미만입니다. 프로덕션에서는 더 긴 키를 사용하세요");
        }

        let expiration_hours = match lookup("JWT_EXPIRATION_HOURS").map(|value| value.parse::<i64>()) {
            Some(Ok(hours)) if EXPIRATION_HOURS_RANGE.contains(&hours) => hours,
            Some(_) => {
                log::warn!(
                    "JWT_EXPIRATION_HOURS는 {}..={} 범위의 정수여야 합니다. 기본값 {} 사용",
                    EXPIRATION_HOURS_RANGE.start(),
                    EXPIRATION_HOURS_RANGE.end(),
                    DEFAULT_EXPIRATION_HOURS
                );
                DEFAULT_EXPIRATION_HOURS
            }
            None => DEFAULT_EXPIRATION_HOURS,
        };

        Ok(Self {
            secret,
            expiration_hours,
        })
    }
}

// 비밀키가 로그에 찍히지 않도록 Debug를 직접 구현
impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}
