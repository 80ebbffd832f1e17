//! 인증 관련 서비스 모듈
//!
//! - [`password_service`] - bcrypt 비밀번호 해싱과 검증
//! - [`token_service`] - HS256 JWT 발급과 검증

pub mod password_service;
pub mod token_service;

pub use password_service::*;
pub use token_service::*;
