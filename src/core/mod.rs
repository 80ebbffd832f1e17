//! # Core Module
//!
//! 계좌 API 전역에서 공유하는 기반 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 `{"error": ...}` 응답 생성
//! - **AppResult / ErrorContext**: 에러 전파 보조 도구
//!
//! ## 의존성 주입
//!
//! 서비스 인스턴스는 전역 레지스트리 대신 `main`에서 명시적으로 생성하여
//! `web::Data<AccountService>`로 Actix 애플리케이션에 등록합니다.
//!
//! ```rust,ignore
//! let store: Arc<dyn AccountStore> = Arc::new(SqliteAccountStore::new(database));
//! let service = AccountService::new(store, passwords, TokenService::new(jwt_config));
//!
//! App::new()
//!     .app_data(web::Data::new(service))
//!     .configure(configure_all_routes)
//! ```

pub mod errors;

pub use errors::*;
