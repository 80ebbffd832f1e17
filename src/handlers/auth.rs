//! 로그인 핸들러

use actix_web::{web, HttpResponse, post};

use crate::core::errors::AppError;
use crate::domain::dto::{LoginRequest, TokenResponse};
use crate::services::accounts::AccountService;

/// 계좌 번호와 비밀번호로 로그인
///
/// ```json
/// POST /login
/// { "number": 1234567, "password": "longenough" }
/// ```
///
/// 성공 시 `{"token": "..."}`, 실패 시 사유와 무관하게 401을 반환합니다.
#[post("/login")]
pub async fn login(
    accounts: web::Data<AccountService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let (_, token) = accounts.login(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}
