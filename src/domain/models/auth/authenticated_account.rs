//! 인증된 계좌 정보 모델
//!
//! 인증 미들웨어가 토큰 검증과 계좌 확인을 통과한 요청에 대해
//! request extensions에 삽입하는 값입니다.
//!
//! ```rust,ignore
//! #[post("/transfer")]
//! async fn transfer(caller: AuthenticatedAccount) -> Result<HttpResponse, AppError> {
//!     log::info!("이체 요청: 계좌 {}", caller.account_number);
//!     // ...
//! }
//! ```

use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::core::errors::AppError;

/// 인증된 요청의 계좌 정보
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedAccount {
    /// 저장소 ID
    pub account_id: i64,
    /// 토큰 클레임과 일치가 확인된 계좌 번호
    pub account_number: i64,
}

/// 핸들러 파라미터로 인증된 계좌를 추출합니다.
///
/// 미들웨어가 적용되지 않은 경로에서 사용하면 401을 반환합니다.
impl FromRequest for AuthenticatedAccount {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedAccount>() {
            Some(account) => ready(Ok(account.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "authentication required".to_string(),
            ))),
        }
    }
}
