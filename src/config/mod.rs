//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 시작 시점에 한 번 읽어 각 컴포넌트에 주입합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, 해싱, Rate Limiting 설정
//! - [`auth_config`] - JWT 서명 비밀키와 만료 시간
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-key"   # 또는 기존 변수명 SECRET
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"     # development, test, staging, production
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export WORKERS="4"
//! export DATABASE_PATH="bank.db"
//! export DB_POOL_SIZE="8"
//! export JWT_EXPIRATION_HOURS="24"
//! export BCRYPT_COST="12"             # 4-15 범위
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
