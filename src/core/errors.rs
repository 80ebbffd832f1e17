//! # Application Error Handling System
//!
//! 계좌 API 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! 모든 컴포넌트(해셔, 토큰 서비스, 저장소, 미들웨어, 핸들러)는 패닉 대신
//! `AppError`를 반환하고, HTTP 응답으로의 변환은 `error_response()` 한 곳에서만 일어납니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 짧은 비밀번호, 숫자가 아닌 ID, 잘못된 JSON |
//! | `AuthenticationError` | 401 Unauthorized | 로그인 실패 (계좌 없음/비밀번호 불일치 구분 없음) |
//! | `InvalidTokenError` | 401 Unauthorized | 토큰 누락, 서명/형식/알고리즘 오류, 만료 |
//! | `AuthorizationError` | 403 Forbidden | 유효한 토큰이지만 다른 계좌 범위 |
//! | `NotFound` | 404 Not Found | 존재하지 않는 계좌 |
//! | `ConflictError` | 409 Conflict | 계좌 번호 유니크 제약 위반 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소/커넥션 풀 오류 |
//! | `HashingError` | 500 Internal Server Error | bcrypt 해싱 실패 |
//! | `SigningError` | 500 Internal Server Error | JWT 서명 실패, 비밀키 없음 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! 5xx 에러는 서버 로그에만 상세 내용을 남기고, 클라이언트에는 일반 메시지만 전달합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn get_account(&self, id: i64) -> AppResult<Account> {
//!     self.store.get_account_by_id(id).await
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드에서 발생할 수 있는 모든 실패를 포괄하는 열거형입니다.
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// `{"error": "<message>"}` 형식의 JSON 응답으로 자동 변환됩니다.
///
/// ## 에러 카테고리
///
/// ### 1. 입력 계층
/// - `ValidationError`: 호출자 입력이 제약을 만족하지 않음
///
/// ### 2. 보안 계층
/// - `AuthenticationError`: 자격 증명 불일치
/// - `InvalidTokenError`: 토큰이 없거나 검증 불가
/// - `AuthorizationError`: 토큰의 계좌와 요청 대상 계좌 불일치
///
/// ### 3. 도메인 계층
/// - `NotFound`, `ConflictError`
///
/// ### 4. 인프라 계층
/// - `DatabaseError`, `HashingError`, `SigningError`, `InternalError`
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// # 발생 시나리오
    /// - 6자 미만 비밀번호로 계좌 생성
    /// - 경로의 계좌 ID가 숫자가 아님
    /// - 요청 본문 JSON 파싱 실패
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    ///
    /// 로그인 시 계좌가 없거나 비밀번호가 틀린 경우 모두 이 변형 하나로 표현합니다.
    /// 두 경우의 메시지가 같아야 계좌 번호 존재 여부가 노출되지 않습니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 토큰 검증 실패 에러 (401 Unauthorized)
    ///
    /// # 발생 시나리오
    /// - 토큰 헤더 누락
    /// - 형식 오류, 서명 불일치
    /// - HMAC 이외의 알고리즘(`none` 포함)을 선언한 토큰
    /// - 만료된 토큰
    #[error("Invalid token: {0}")]
    InvalidTokenError(String),

    /// 권한 부족 에러 (403 Forbidden)
    ///
    /// 토큰 자체는 유효하지만 요청 경로의 계좌를 소유하지 않는 경우입니다.
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    ///
    /// 계좌 번호 유니크 제약 위반 시 저장소가 반환합니다.
    /// 계좌 생성 흐름에서는 새 번호로 재시도하는 신호로 사용됩니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// # 발생 시나리오
    /// - 커넥션 풀 고갈/타임아웃
    /// - 쿼리 실행 실패
    /// - 행 매핑 실패
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 비밀번호 해싱 에러 (500 Internal Server Error)
    #[error("Hashing error: {0}")]
    HashingError(String),

    /// 토큰 서명 에러 (500 Internal Server Error)
    ///
    /// 서버 비밀키가 설정되지 않았거나 인코딩에 실패한 경우입니다.
    #[error("Signing error: {0}")]
    SigningError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::InvalidTokenError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 다음 JSON 형식을 따릅니다:
    ///
    /// ```json
    /// {
    ///   "error": "Human readable error message"
    /// }
    /// ```
    ///
    /// 5xx 에러는 상세 원인을 `log::error!`로만 남기고 응답 본문에는 일반 메시지를 씁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        let message = if status.is_server_error() {
            log::error!("{}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": message
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let value = web::block(move || work()).await
///     .context("Blocking task failed")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
