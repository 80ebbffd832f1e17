//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 구체 타입 대신 [`AccountStore`](accounts::AccountStore) 트레이트 객체에 의존하며,
//! 운영 환경에서는 SQLite 구현체를, 테스트에서는 인메모리 대역을 주입합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::accounts::{AccountStore, SqliteAccountStore};
//!
//! let store: Arc<dyn AccountStore> = Arc::new(SqliteAccountStore::new(database));
//! let account = store.get_account_by_number(1234567).await?;
//! ```

pub mod accounts;
