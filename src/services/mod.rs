//! 비즈니스 로직 계층
//!
//! - [`auth`] - 비밀번호 해싱과 JWT 토큰 서비스
//! - [`accounts`] - 계좌 생성, 로그인, 조회, 삭제 조율
//!
//! 서비스는 생성자로 의존성을 주입받으며 `main`에서 한 번 조립되어
//! `web::Data<AccountService>`로 모든 워커에 공유됩니다.

pub mod auth;
pub mod accounts;
