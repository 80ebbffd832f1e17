//! Database Connection Management Module
//!
//! SQLite 커넥션 풀 관리를 담당하는 모듈입니다.
//! `r2d2` 풀 위에서 동기 `rusqlite` 연산을 Actix의 블로킹 스레드 풀로 넘겨 실행하므로
//! 요청 처리 스레드가 디스크 I/O로 막히지 않습니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! export DATABASE_PATH="bank.db"
//! export DB_POOL_SIZE="8"
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::DatabaseConfig;
//! use crate::db::Database;
//!
//! let database = Database::open(&DatabaseConfig::from_env())?;
//! database.init_schema().await?;
//! ```

use std::time::Duration;

use actix_web::web;
use log::info;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use crate::config::DatabaseConfig;
use crate::core::errors::{AppError, AppResult, ErrorContext};

/// 계좌 테이블 스키마
const ACCOUNT_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS account (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name  TEXT    NOT NULL,
    last_name   TEXT    NOT NULL,
    number      INTEGER NOT NULL UNIQUE,
    password    TEXT    NOT NULL,
    balance     INTEGER NOT NULL DEFAULT 0,
    created_at  TEXT    NOT NULL
);
"#;

/// SQLite 커넥션 풀 래퍼
///
/// 복제 비용이 낮아(`Pool`은 내부적으로 `Arc`) 저장소마다 자유롭게 복제해 사용할 수 있습니다.
#[derive(Clone)]
pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// 파일 기반 데이터베이스 풀을 생성합니다.
    ///
    /// 각 커넥션은 WAL 모드와 busy timeout을 설정하여 동시 요청에서의 잠금 충돌을 줄입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - 풀 생성 또는 초기 커넥션 실패
    pub fn open(config: &DatabaseConfig) -> AppResult<Self> {
        let manager = SqliteConnectionManager::file(&config.path)
            .with_init(|conn| {
                conn.busy_timeout(Duration::from_secs(5))?;
                conn.execute_batch("PRAGMA journal_mode = WAL;")
            });

        let pool = Pool::builder()
            .max_size(config.pool_size)
            .connection_timeout(Duration::from_secs(30))
            .build(manager)
            .map_err(|e| AppError::DatabaseError(format!("커넥션 풀 생성 실패: {}", e)))?;

        info!("✅ SQLite 연결 성공: {} (pool size {})", config.path.display(), config.pool_size);

        Ok(Self { pool })
    }

    /// 테스트용 인메모리 데이터베이스를 생성합니다.
    ///
    /// 인메모리 DB는 커넥션마다 별개이므로 풀 크기를 1로 고정하고 커넥션을 회수하지 않습니다.
    pub fn in_memory() -> AppResult<Self> {
        let pool = Pool::builder()
            .max_size(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connection_timeout(Duration::from_secs(30))
            .build(SqliteConnectionManager::memory())
            .map_err(|e| AppError::DatabaseError(format!("커넥션 풀 생성 실패: {}", e)))?;

        Ok(Self { pool })
    }

    /// 풀에서 커넥션을 얻어 블로킹 스레드 풀에서 연산을 실행합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - 커넥션 획득 실패 또는 클로저가 반환한 에러
    /// * `AppError::InternalError` - 블로킹 작업이 취소되거나 패닉
    pub async fn execute<F, T>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();

        web::block(move || {
            let conn = pool
                .get()
                .map_err(|e| AppError::DatabaseError(format!("커넥션 획득 실패: {}", e)))?;
            f(&conn)
        })
        .await
        .context("데이터베이스 작업 실행 실패")?
    }

    /// 스키마가 없으면 생성합니다.
    pub async fn init_schema(&self) -> AppResult<()> {
        self.execute(|conn| {
            conn.execute_batch(ACCOUNT_SCHEMA)
                .map_err(|e| AppError::DatabaseError(format!("스키마 생성 실패: {}", e)))
        })
        .await?;

        info!("📦 account 테이블 준비 완료");
        Ok(())
    }
}
