//! 계좌 관리 서비스 모듈
//!
//! 계좌 생명주기(생성, 로그인, 조회, 삭제)와 관련된 비즈니스 로직을 제공합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 로그인 실패 사유 비공개 (계좌 없음과 비밀번호 불일치를 구분하지 않음)
//! - 계좌 번호 충돌 시 새 번호 재발급

pub mod account_service;

pub use account_service::AccountService;
