//! JWT 토큰 클레임 모델

use serde::{Deserialize, Serialize};

/// JWT 토큰 클레임
///
/// 계좌 번호는 `sub`(문자열)와 `accountNumber`(정수) 두 곳에 담깁니다.
/// 미들웨어의 권한 확인은 `accountNumber`를 사용합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰 주체 (계좌 번호 문자열)
    pub sub: String,
    /// 토큰 소유 계좌 번호
    #[serde(rename = "accountNumber")]
    pub account_number: i64,
    /// 발급 시각 (Unix timestamp)
    pub iat: i64,
    /// 만료 시각 (Unix timestamp)
    pub exp: i64,
}

impl TokenClaims {
    pub fn new(account_number: i64, iat: i64, exp: i64) -> Self {
        Self {
            sub: account_number.to_string(),
            account_number,
            iat,
            exp,
        }
    }
}
