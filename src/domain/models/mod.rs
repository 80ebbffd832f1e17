//! # Domain Models Module
//!
//! 영속되지 않는 도메인 값 객체를 정의합니다.
//!
//! - [`token`] - JWT 클레임
//! - [`auth`] - 인증된 요청 정보와 인증 범위

pub mod auth;
pub mod token;

pub use auth::{AuthScope, AuthenticatedAccount};
pub use token::TokenClaims;
