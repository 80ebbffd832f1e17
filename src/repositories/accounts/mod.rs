//! 계좌 저장소 추상화
//!
//! 계좌 영속화에 필요한 최소 연산 집합을 [`AccountStore`] 트레이트로 정의합니다.
//! 로그인은 해싱과 토큰 발급을 함께 다루므로 저장소가 아닌 `AccountService`가 담당합니다.

pub mod account_repo;
#[cfg(test)]
pub mod memory_store;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::Account;

pub use account_repo::SqliteAccountStore;

/// 계좌 저장소 계약
///
/// # 에러 규칙
///
/// * `AppError::NotFound` - 단건 조회 대상이 없음
/// * `AppError::ConflictError` - 계좌 번호 유니크 제약 위반
/// * `AppError::DatabaseError` - 그 외 드라이버 또는 커넥션 풀 실패
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// 계좌를 저장하고 저장소가 할당한 `id`가 채워진 계좌를 반환합니다.
    async fn create_account(&self, account: Account) -> AppResult<Account>;

    async fn get_account_by_id(&self, id: i64) -> AppResult<Account>;

    async fn get_account_by_number(&self, number: i64) -> AppResult<Account>;

    /// 모든 계좌를 `id` 순으로 반환합니다. 계좌가 없으면 빈 벡터입니다.
    async fn get_accounts(&self) -> AppResult<Vec<Account>>;

    /// 계좌를 삭제합니다. 실제로 행이 삭제되었는지를 반환하며, 없는 ID는 에러가 아닙니다.
    async fn delete_account(&self, id: i64) -> AppResult<bool>;
}
