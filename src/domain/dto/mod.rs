//! # Data Transfer Objects
//!
//! HTTP API 계약을 정의하는 요청/응답 타입입니다.
//! JSON 필드명은 기존 클라이언트와 호환되도록 camelCase를 사용합니다.
//!
//! 요청 DTO는 `validator` 크레이트의 derive로 입력 검증 규칙을 선언하며,
//! 핸들러는 서비스 호출 전 `validate()`를 실행합니다.

pub mod accounts;

pub use accounts::{CreateAccountRequest, DeleteAccountResponse, LoginRequest, TokenResponse, TransferRequest};
