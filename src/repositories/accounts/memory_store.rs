//! 테스트용 인메모리 계좌 저장소

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Account;

use super::AccountStore;

/// `BTreeMap` 기반 저장소 대역
///
/// `fail_all(true)`로 설정하면 모든 연산이 `DatabaseError`를 반환하고,
/// `force_conflicts(n)`은 다음 n번의 생성을 계좌 번호 충돌로 거부합니다.
#[derive(Default)]
pub struct MemoryAccountStore {
    accounts: Mutex<BTreeMap<i64, Account>>,
    next_id: Mutex<i64>,
    failing: AtomicBool,
    forced_conflicts: AtomicUsize,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_all(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn force_conflicts(&self, count: usize) {
        self.forced_conflicts.store(count, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }

    fn check_failure(&self) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError("store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn create_account(&self, account: Account) -> AppResult<Account> {
        self.check_failure()?;
        let forced = self
            .forced_conflicts
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        let mut accounts = self.accounts.lock().unwrap();

        if forced || accounts.values().any(|existing| existing.number() == account.number()) {
            return Err(AppError::ConflictError("account number already exists".to_string()));
        }

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let stored = account.with_id(*next_id);
        accounts.insert(*next_id, stored.clone());

        Ok(stored)
    }

    async fn get_account_by_id(&self, id: i64) -> AppResult<Account> {
        self.check_failure()?;
        self.accounts
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("account {} not found", id)))
    }

    async fn get_account_by_number(&self, number: i64) -> AppResult<Account> {
        self.check_failure()?;
        self.accounts
            .lock()
            .unwrap()
            .values()
            .find(|account| account.number() == number)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("account with number {} not found", number)))
    }

    async fn get_accounts(&self) -> AppResult<Vec<Account>> {
        self.check_failure()?;
        Ok(self.accounts.lock().unwrap().values().cloned().collect())
    }

    async fn delete_account(&self, id: i64) -> AppResult<bool> {
        self.check_failure()?;
        Ok(self.accounts.lock().unwrap().remove(&id).is_some())
    }
}
