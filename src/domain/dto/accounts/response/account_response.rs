//! 계좌 API 응답 DTO
//!
//! 계좌 자체는 [`Account`](crate::domain::entities::Account)의 직렬화 결과를 그대로 응답합니다.
//! (암호화된 비밀번호는 엔티티 단계에서 제외됨)

use serde::Serialize;

/// 로그인 또는 계좌 생성 성공 시 발급되는 토큰 응답
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIs..." }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// 계좌 삭제 응답
#[derive(Debug, Clone, Serialize)]
pub struct DeleteAccountResponse {
    pub deleted: i64,
}
