//! # 계좌 서비스 구현
//!
//! 계좌 생성, 로그인, 조회, 삭제의 비즈니스 로직을 조율합니다.
//! 저장소([`AccountStore`]), 해셔([`PasswordService`]), 토큰 서비스([`TokenService`])를
//! 생성 시점에 주입받으며 전역 상태에 의존하지 않습니다.
//!
//! ## 로그인 보안
//!
//! 존재하지 않는 계좌 번호와 잘못된 비밀번호는 같은 메시지의 `AuthenticationError`로 응답합니다.
//! 계좌가 없을 때도 더미 bcrypt 검증을 수행하여 응답 시간으로 계좌 존재 여부를 추측할 수 없게 합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let service = AccountService::new(store, password_service, token_service);
//!
//! let (account, token) = service.register(CreateAccountRequest {
//!     first_name: "Jane".into(),
//!     last_name: "Doe".into(),
//!     password: "longenough".into(),
//! }).await?;
//! ```

use std::sync::Arc;
use std::time::Instant;

use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::{CreateAccountRequest, LoginRequest};
use crate::domain::entities::Account;
use crate::repositories::accounts::AccountStore;
use crate::services::auth::{PasswordService, TokenService};

/// 계좌 번호 충돌 시 새 번호로 생성을 시도하는 최대 횟수
const MAX_CREATE_ATTEMPTS: usize = 3;

/// 로그인 실패 메시지 (계좌 없음과 비밀번호 불일치 공통)
const INVALID_CREDENTIALS: &str = "invalid account number or password";

#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
    passwords: PasswordService,
    tokens: TokenService,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>, passwords: PasswordService, tokens: TokenService) -> Self {
        Self {
            store,
            passwords,
            tokens,
        }
    }

    pub fn store(&self) -> &Arc<dyn AccountStore> {
        &self.store
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// 계좌 번호와 비밀번호로 로그인하고 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 계좌가 없거나 비밀번호 불일치
    /// * `AppError::DatabaseError` - 저장소 조회 실패
    /// * `AppError::SigningError` - 토큰 서명 실패
    pub async fn login(&self, request: LoginRequest) -> AppResult<(Account, String)> {
        let started = Instant::now();

        let account = match self.store.get_account_by_number(request.number).await {
            Ok(account) => account,
            Err(AppError::NotFound(_)) => {
                self.passwords.verify_dummy(&request.password).await;
                log::warn!("로그인 실패: 존재하지 않는 계좌 번호");
                return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
            }
            Err(e) => return Err(e),
        };

        if !self
            .passwords
            .verify(&request.password, account.encrypted_password())
            .await
        {
            log::warn!("로그인 실패: 비밀번호 불일치 (계좌 {})", account.number());
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        let token = self.tokens.issue(&account)?;

        log::info!("로그인 성공: 계좌 {}", account.number());
        log::debug!("Total login took: {:?}", started.elapsed());
        Ok((account, token))
    }

    /// 새 계좌를 생성하고 토큰을 발급합니다.
    ///
    /// 입력 검증에 실패하면 아무것도 저장하지 않습니다.
    /// 무작위 계좌 번호가 기존 계좌와 충돌하면 새 번호로 최대 3번까지 생성을 시도합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 비밀번호가 6자 미만
    /// * `AppError::HashingError` - bcrypt 해싱 실패
    /// * `AppError::ConflictError` - 모든 시도에서 계좌 번호 충돌
    /// * `AppError::DatabaseError` - 저장 실패
    /// * `AppError::SigningError` - 토큰 서명 실패
    pub async fn register(&self, request: CreateAccountRequest) -> AppResult<(Account, String)> {
        let started = Instant::now();

        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let encrypted_password = self.passwords.hash(&request.password).await?;
        let mut candidate = Account::new(request.first_name, request.last_name, encrypted_password);

        let mut attempt = 1;
        let account = loop {
            match self.store.create_account(candidate.clone()).await {
                Ok(account) => break account,
                Err(AppError::ConflictError(_)) if attempt < MAX_CREATE_ATTEMPTS => {
                    log::warn!("계좌 번호 충돌, 새 번호로 다시 생성 ({}/{})", attempt, MAX_CREATE_ATTEMPTS);
                    candidate = candidate.with_fresh_number();
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        };

        let token = self.tokens.issue(&account)?;

        log::info!("계좌 생성 완료: id={:?}, number={}", account.id(), account.number());
        log::debug!("Total account creation took: {:?}", started.elapsed());
        Ok((account, token))
    }

    pub async fn get_account(&self, id: i64) -> AppResult<Account> {
        self.store.get_account_by_id(id).await
    }

    pub async fn list_accounts(&self) -> AppResult<Vec<Account>> {
        self.store.get_accounts().await
    }

    /// 계좌를 삭제합니다. 삭제된 행이 없으면 `NotFound`입니다.
    pub async fn delete_account(&self, id: i64) -> AppResult<()> {
        if !self.store.delete_account(id).await? {
            return Err(AppError::NotFound(format!("account {} not found", id)));
        }

        log::info!("계좌 삭제 완료: id={}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::accounts::memory_store::MemoryAccountStore;
    use crate::test_support::account_service as service_with;

    fn create_request(password: &str) -> CreateAccountRequest {
        CreateAccountRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_register_short_password_stores_nothing() {
        let store = Arc::new(MemoryAccountStore::new());
        let service = service_with(store.clone());

        let result = service.register(create_request("short")).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(store.len(), 0);
    }

    #[actix_web::test]
    async fn test_register_issues_token_for_new_number() {
        let store = Arc::new(MemoryAccountStore::new());
        let service = service_with(store.clone());

        let (account, token) = service.register(create_request("longenough")).await.unwrap();
        let claims = service.tokens().verify(&token).unwrap();

        assert_eq!(claims.account_number, account.number());
        assert!(account.id().is_some());
        assert_ne!(account.encrypted_password(), "longenough");
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_register_regenerates_number_on_conflict() {
        let store = Arc::new(MemoryAccountStore::new());
        store.force_conflicts(2);
        let service = service_with(store.clone());

        assert!(service.register(create_request("longenough")).await.is_ok());
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_register_gives_up_after_three_conflicts() {
        let store = Arc::new(MemoryAccountStore::new());
        store.force_conflicts(3);
        let service = service_with(store.clone());

        let result = service.register(create_request("longenough")).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert_eq!(store.len(), 0);
    }

    #[actix_web::test]
    async fn test_login_success_and_failures_share_message() {
        let store = Arc::new(MemoryAccountStore::new());
        let service = service_with(store);
        let (account, _) = service.register(create_request("longenough")).await.unwrap();

        let (logged_in, token) = service
            .login(LoginRequest {
                number: account.number(),
                password: "longenough".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(logged_in.id(), account.id());
        assert_eq!(service.tokens().verify(&token).unwrap().account_number, account.number());

        let wrong_password = service
            .login(LoginRequest {
                number: account.number(),
                password: "wrong-password".to_string(),
            })
            .await
            .unwrap_err();
        let unknown_number = service
            .login(LoginRequest {
                number: account.number() + 1,
                password: "longenough".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AppError::AuthenticationError(_)));
        assert!(matches!(unknown_number, AppError::AuthenticationError(_)));
        assert_eq!(wrong_password.to_string(), unknown_number.to_string());
    }

    #[actix_web::test]
    async fn test_login_store_failure_is_not_masked() {
        let store = Arc::new(MemoryAccountStore::new());
        let service = service_with(store.clone());
        store.fail_all(true);

        let result = service
            .login(LoginRequest {
                number: 1,
                password: "longenough".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    #[actix_web::test]
    async fn test_delete_then_get_is_not_found() {
        let store = Arc::new(MemoryAccountStore::new());
        let service = service_with(store);
        let (account, _) = service.register(create_request("longenough")).await.unwrap();
        let id = account.id().unwrap();

        service.delete_account(id).await.unwrap();

        assert!(matches!(service.get_account(id).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.delete_account(id).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_list_accounts() {
        let store = Arc::new(MemoryAccountStore::new());
        let service = service_with(store);

        assert!(service.list_accounts().await.unwrap().is_empty());

        service.register(create_request("longenough")).await.unwrap();
        service.register(create_request("longenough")).await.unwrap();

        assert_eq!(service.list_accounts().await.unwrap().len(), 2);
    }
}
