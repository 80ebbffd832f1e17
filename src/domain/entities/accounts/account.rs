//! Account Entity Implementation
//!
//! 은행 계좌 엔티티의 핵심 구현체입니다.
//! 계좌 번호와 생성 시각은 생성 시점에 한 번만 정해지며 이후 변경할 수 있는 경로가 없습니다.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

/// 계좌 번호 발급 범위 (1 이상 10,000,000 미만)
const ACCOUNT_NUMBER_RANGE: std::ops::Range<i64> = 1..10_000_000;

/// 계좌 엔티티
///
/// JSON으로 내보낼 때 암호화된 비밀번호는 항상 제외됩니다.
/// 필드는 비공개이며 읽기 전용 접근자만 제공합니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    id: Option<i64>,
    first_name: String,
    #[serde(rename = "secondName")]
    last_name: String,
    number: i64,
    #[serde(skip)]
    encrypted_password: String,
    balance: i64,
    created_at: DateTime<Utc>,
}

impl Account {
    /// 새 계좌를 생성합니다.
    ///
    /// 계좌 번호는 무작위로 발급되고, 잔액은 0, 생성 시각은 현재 UTC 시각입니다.
    /// `id`는 저장소가 저장 시 할당합니다.
    pub fn new(first_name: String, last_name: String, encrypted_password: String) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            number: generate_account_number(),
            encrypted_password,
            balance: 0,
            created_at: Utc::now(),
        }
    }

    /// 저장소에서 읽은 행으로 계좌를 복원합니다.
    pub fn restore(
        id: i64,
        first_name: String,
        last_name: String,
        number: i64,
        encrypted_password: String,
        balance: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            first_name,
            last_name,
            number,
            encrypted_password,
            balance,
            created_at,
        }
    }

    /// 저장소가 할당한 ID를 부여한 계좌를 반환합니다.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// 같은 내용에 새 계좌 번호만 다시 발급한 계좌를 반환합니다.
    ///
    /// 아직 저장되지 않은 계좌의 번호가 기존 계좌와 충돌했을 때만 사용합니다.
    pub(crate) fn with_fresh_number(mut self) -> Self {
        debug_assert!(self.id.is_none());
        self.number = generate_account_number();
        self
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn encrypted_password(&self) -> &str {
        &self.encrypted_password
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

fn generate_account_number() -> i64 {
    rand::thread_rng().gen_range(ACCOUNT_NUMBER_RANGE)
}
