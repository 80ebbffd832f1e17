//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 JSON 입출력 변환만 담당하고 비즈니스 로직은 `AccountService`에 위임합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   AuthMiddleware (보호된 라우트)
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈)                            ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   AccountService                               ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   AccountStore                                 ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! 에러는 `AppError`의 `ResponseError` 구현에 의해 `{"error": "..."}` JSON으로 변환됩니다.
//!
//! ## 모듈 구성
//!
//! - [`auth`] - `POST /login`
//! - [`accounts`] - `/account`, `/account/{id}`
//! - [`transfer`] - `POST /transfer`

pub mod auth;
pub mod accounts;
pub mod transfer;
