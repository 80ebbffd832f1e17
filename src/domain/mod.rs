//! # Domain Layer Module
//!
//! 계좌 도메인의 핵심 타입을 정의하는 계층입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 영속 엔티티 (Account)
//! ├── dto       - HTTP 요청/응답 계약
//! └── models    - 값 객체 (TokenClaims, AuthenticatedAccount, AuthScope)
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db)
//! ```
//!
//! ## 설계 원칙
//!
//! - 도메인 타입은 HTTP나 저장소 구현에 의존하지 않습니다.
//!   예외는 `AuthenticatedAccount`의 `FromRequest` 구현으로, 핸들러 추출 편의를 위한 것입니다.
//! - 엔티티의 불변 필드(계좌 번호, 생성 시각)는 접근자만 노출합니다.
//! - 직렬화 시 민감 정보(암호화된 비밀번호)는 타입 정의 단계에서 제외됩니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::Account;
pub use dto::{CreateAccountRequest, DeleteAccountResponse, LoginRequest, TokenResponse, TransferRequest};
pub use models::{AuthScope, AuthenticatedAccount, TokenClaims};
