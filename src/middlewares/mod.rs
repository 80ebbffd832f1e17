//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인에서 사용되는 미들웨어를 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <token>` 또는 기존 `token` 헤더에서 토큰 추출
//! - JWT 서명과 만료 검증
//! - 토큰의 계좌 번호가 요청 대상 계좌와 일치하는지 확인
//! - 통과한 요청에 `AuthenticatedAccount`를 request extension으로 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{delete, post, web, App};
//! use crate::middlewares::AuthMiddleware;
//!
//! // 경로의 {id} 계좌 소유자만 접근 가능
//! #[delete("/account/{id}", wrap = "AuthMiddleware::path_scoped()")]
//! async fn delete_account(/* ... */) -> Result<HttpResponse, AppError> { /* ... */ }
//!
//! // 유효한 토큰의 계좌가 존재하면 접근 가능
//! #[post("/transfer", wrap = "AuthMiddleware::token_scoped()")]
//! async fn transfer(/* ... */) -> Result<HttpResponse, AppError> { /* ... */ }
//! ```
//!
//! 미들웨어는 `web::Data<AccountService>`를 app data에서 찾으므로
//! `App::app_data`로 서비스를 등록해야 합니다.

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
