//! # Bank Account Authentication Backend
//!
//! 은행 계좌 API의 계좌 관리와 인증 핵심부입니다.
//!
//! ## 주요 기능
//!
//! - 계좌 생성 (bcrypt 비밀번호 해싱, 무작위 계좌 번호 발급)
//! - 계좌 번호와 비밀번호 기반 로그인, HS256 JWT 발급
//! - 토큰 소유 계좌만 접근할 수 있는 보호 라우트 (계좌 삭제, 이체)
//! - SQLite 기반 계좌 저장소 (`AccountStore` 트레이트로 추상화)
//!
//! ## 계층 구조
//!
//! ```text
//! routes → middlewares → handlers → services → repositories → db
//!                                      │
//!                                      └── domain (entities, dto, models)
//! ```
//!
//! 공유 상태는 `main`에서 한 번 조립한 `web::Data<AccountService>`뿐이며
//! 전역 싱글톤이나 서비스 로케이터는 사용하지 않습니다.

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod middlewares;

#[cfg(test)]
mod test_support;
