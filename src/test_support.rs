//! 테스트 공용 픽스처

use std::sync::Arc;

use crate::config::JwtConfig;
use crate::domain::dto::CreateAccountRequest;
use crate::domain::entities::Account;
use crate::repositories::accounts::memory_store::MemoryAccountStore;
use crate::services::accounts::AccountService;
use crate::services::auth::{PasswordService, TokenService};

pub const TEST_SECRET: &str = "test-secret-that-is-long-enough-0123456789";

/// 인메모리 저장소와 최소 bcrypt cost로 계좌 서비스를 조립합니다.
pub fn account_service(store: Arc<MemoryAccountStore>) -> AccountService {
    AccountService::new(
        store,
        PasswordService::new(4).unwrap(),
        TokenService::new(JwtConfig::new(TEST_SECRET, 1)),
    )
}

/// 계좌를 하나 생성하고 발급된 토큰과 함께 반환합니다.
pub async fn register(service: &AccountService, password: &str) -> (Account, String) {
    service
        .register(CreateAccountRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            password: password.to_string(),
        })
        .await
        .unwrap()
}
