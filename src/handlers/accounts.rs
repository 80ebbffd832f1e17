//! 계좌 관리 HTTP 핸들러
//!
//! | Method | Path | 인증 | 설명 |
//! |--------|------|------|------|
//! | GET | `/account` | - | 전체 계좌 목록 |
//! | POST | `/account` | - | 계좌 생성, 토큰 발급 |
//! | GET | `/account/{id}` | - | 단건 조회 |
//! | DELETE | `/account/{id}` | 본인 토큰 | 계좌 삭제 |

use actix_web::{web, HttpResponse, get, post, delete};

use crate::core::errors::AppError;
use crate::domain::dto::{CreateAccountRequest, DeleteAccountResponse, TokenResponse};
use crate::domain::models::AuthenticatedAccount;
use crate::middlewares::AuthMiddleware;
use crate::services::accounts::AccountService;

/// 전체 계좌 목록 조회
#[get("/account")]
pub async fn list_accounts(
    accounts: web::Data<AccountService>,
) -> Result<HttpResponse, AppError> {
    let list = accounts.list_accounts().await?;
    Ok(HttpResponse::Ok().json(list))
}

/// 계좌 생성
///
/// 성공 시 새 계좌에 대한 토큰을 `{"token": "..."}` 형식으로 반환합니다.
/// 비밀번호가 6자 미만이면 400을 반환하며 계좌는 생성되지 않습니다.
#[post("/account")]
pub async fn create_account(
    accounts: web::Data<AccountService>,
    payload: web::Json<CreateAccountRequest>,
) -> Result<HttpResponse, AppError> {
    let (_, token) = accounts.register(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

/// ID로 계좌 조회
#[get("/account/{id}")]
pub async fn get_account(
    accounts: web::Data<AccountService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_account_id(&id)?;
    let account = accounts.get_account(id).await?;
    Ok(HttpResponse::Ok().json(account))
}

/// 계좌 삭제
///
/// 인증 미들웨어가 경로의 계좌와 토큰 소유 계좌가 같은지 먼저 확인합니다.
#[delete("/account/{id}", wrap = "AuthMiddleware::path_scoped()")]
pub async fn delete_account(
    accounts: web::Data<AccountService>,
    caller: AuthenticatedAccount,
) -> Result<HttpResponse, AppError> {
    accounts.delete_account(caller.account_id).await?;
    Ok(HttpResponse::Ok().json(DeleteAccountResponse {
        deleted: caller.account_id,
    }))
}

/// 경로의 계좌 ID를 정수로 해석합니다.
fn parse_account_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::ValidationError(format!("invalid id given {}", raw)))
}
