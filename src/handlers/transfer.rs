//! 이체 핸들러
//!
//! 유효한 토큰을 가진 계좌만 호출할 수 있으며, 현재는 요청 본문을 그대로 돌려줍니다.
//! 잔액 변경은 수행하지 않습니다.

use actix_web::{web, HttpResponse, post};

use crate::core::errors::AppError;
use crate::domain::dto::TransferRequest;
use crate::domain::models::AuthenticatedAccount;
use crate::middlewares::AuthMiddleware;

#[post("/transfer", wrap = "AuthMiddleware::token_scoped()")]
pub async fn transfer(
    caller: AuthenticatedAccount,
    payload: web::Json<TransferRequest>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    log::info!(
        "이체 요청 수신: 계좌 {} -> 계좌 {} ({})",
        caller.account_number,
        request.to_account,
        request.amount
    );
    Ok(HttpResponse::Ok().json(request))
}
