//! # 계좌 리포지토리 구현
//!
//! SQLite `account` 테이블에 대한 [`AccountStore`] 구현체입니다.
//! 각 연산은 풀에서 얻은 커넥션 하나로 단일 쿼리를 실행하며,
//! 실행은 [`Database::execute`]를 통해 블로킹 스레드 풀에서 이루어집니다.

use async_trait::async_trait;
use log::{debug, info};
use rusqlite::{params, OptionalExtension, Row};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::Account;

use super::AccountStore;

const SELECT_ACCOUNT: &str =
    "SELECT id, first_name, last_name, number, password, balance, created_at FROM account";

/// SQLite 기반 계좌 저장소
#[derive(Clone)]
pub struct SqliteAccountStore {
    db: Database,
}

impl SqliteAccountStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountStore for SqliteAccountStore {
    async fn create_account(&self, account: Account) -> AppResult<Account> {
        let stored = self
            .db
            .execute(move |conn| {
                conn.execute(
                    "INSERT INTO account (first_name, last_name, number, password, balance, created_at) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![
                        account.first_name(),
                        account.last_name(),
                        account.number(),
                        account.encrypted_password(),
                        account.balance(),
                        account.created_at(),
                    ],
                )
                .map_err(map_sqlite_error)?;

                Ok(account.with_id(conn.last_insert_rowid()))
            })
            .await?;

        info!("계좌 저장 완료: id={:?}, number={}", stored.id(), stored.number());
        Ok(stored)
    }

    async fn get_account_by_id(&self, id: i64) -> AppResult<Account> {
        self.db
            .execute(move |conn| {
                conn.query_row(&format!("{} WHERE id = ?1", SELECT_ACCOUNT), [id], account_from_row)
                    .optional()
                    .map_err(map_sqlite_error)?
                    .ok_or_else(|| AppError::NotFound(format!("account {} not found", id)))
            })
            .await
    }

    async fn get_account_by_number(&self, number: i64) -> AppResult<Account> {
        self.db
            .execute(move |conn| {
                conn.query_row(
                    &format!("{} WHERE number = ?1", SELECT_ACCOUNT),
                    [number],
                    account_from_row,
                )
                .optional()
                .map_err(map_sqlite_error)?
                .ok_or_else(|| AppError::NotFound(format!("account with number {} not found", number)))
            })
            .await
    }

    async fn get_accounts(&self) -> AppResult<Vec<Account>> {
        self.db
            .execute(|conn| {
                let mut stmt = conn
                    .prepare(&format!("{} ORDER BY id", SELECT_ACCOUNT))
                    .map_err(map_sqlite_error)?;

                let accounts = stmt
                    .query_map([], account_from_row)
                    .map_err(map_sqlite_error)?
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(map_sqlite_error)?;

                Ok(accounts)
            })
            .await
    }

    async fn delete_account(&self, id: i64) -> AppResult<bool> {
        let removed = self
            .db
            .execute(move |conn| {
                conn.execute("DELETE FROM account WHERE id = ?1", [id])
                    .map_err(map_sqlite_error)
            })
            .await?;

        debug!("계좌 삭제 쿼리 실행: id={}, 삭제된 행 {}", id, removed);
        Ok(removed > 0)
    }
}

fn account_from_row(row: &Row<'_>) -> rusqlite::Result<Account> {
    Ok(Account::restore(
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
    ))
}

/// 유니크 제약 위반만 `ConflictError`로 변환합니다.
/// NOT NULL 등 다른 제약 위반은 다시 시도해도 해결되지 않으므로 `DatabaseError`입니다.
fn map_sqlite_error(error: rusqlite::Error) -> AppError {
    match error {
        rusqlite::Error::SqliteFailure(err, _)
            if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            AppError::ConflictError("account number already exists".to_string())
        }
        other => AppError::DatabaseError(other.to_string()),
    }
}
