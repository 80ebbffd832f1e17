//! 비밀번호 해싱 서비스
//!
//! bcrypt 기반의 비밀번호 해싱과 검증을 담당합니다.
//! bcrypt는 CPU를 많이 사용하므로 모든 연산은 `web::block`으로 블로킹 스레드 풀에서 실행됩니다.
//!
//! ## 타이밍 공격 방지
//!
//! 존재하지 않는 계좌로 로그인을 시도해도 [`PasswordService::verify_dummy`]로
//! 실제 검증과 같은 비용의 bcrypt 비교를 한 번 수행하여 응답 시간 차이를 줄입니다.
//!
//! ## 72바이트 제한
//!
//! bcrypt는 종료 NUL 문자를 포함해 72바이트까지만 사용합니다. 앞 72바이트가 같은 두 비밀번호가
//! 같은 해시로 검증되지 않도록 잘라내지 않는 API를 사용합니다. 71바이트를 넘는 입력은
//! 해싱 시 `HashingError`, 검증 시 `false`가 됩니다.

use std::sync::Arc;
use std::time::Instant;

use actix_web::web;
use bcrypt::{non_truncating_hash, non_truncating_verify};

use crate::core::errors::{AppError, AppResult, ErrorContext};

/// 더미 검증에 사용할 고정 평문
const DUMMY_PASSWORD: &str = "dummy-password-for-timing";

/// bcrypt 해싱 서비스
#[derive(Clone)]
pub struct PasswordService {
    cost: u32,
    dummy_hash: Arc<str>,
}

impl PasswordService {
    /// 주어진 cost로 서비스를 생성합니다.
    ///
    /// 생성 시 더미 검증용 해시를 한 번 계산합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::HashingError` - bcrypt가 cost를 거부함 (4 미만 또는 31 초과)
    pub fn new(cost: u32) -> AppResult<Self> {
        let dummy_hash = non_truncating_hash(DUMMY_PASSWORD, cost)
            .map_err(|e| AppError::HashingError(format!("더미 해시 생성 실패: {}", e)))?;

        Ok(Self {
            cost,
            dummy_hash: Arc::from(dummy_hash),
        })
    }

    /// 평문 비밀번호를 솔트가 포함된 bcrypt 해시로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::HashingError` - 71바이트를 넘는 입력 또는 bcrypt 실패
    pub async fn hash(&self, plaintext: &str) -> AppResult<String> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;

        let started = Instant::now();
        let hashed = web::block(move || non_truncating_hash(plaintext, cost))
            .await
            .context("해싱 작업 실행 실패")?
            .map_err(|e| AppError::HashingError(format!("비밀번호 해싱 실패: {}", e)))?;

        log::debug!("Password hashing took: {:?}", started.elapsed());
        Ok(hashed)
    }

    /// 평문이 해시와 일치하는지 확인합니다.
    ///
    /// 저장된 해시가 손상되었거나 평문이 71바이트를 넘으면 에러 대신 `false`를 반환합니다.
    pub async fn verify(&self, plaintext: &str, hashed: &str) -> bool {
        let plaintext = plaintext.to_owned();
        let hashed = hashed.to_owned();

        let started = Instant::now();
        let result = web::block(move || non_truncating_verify(plaintext, &hashed)).await;
        log::debug!("Password verification took: {:?}", started.elapsed());

        match result {
            Ok(Ok(matches)) => matches,
            Ok(Err(e)) => {
                log::warn!("저장된 비밀번호 해시를 검증할 수 없습니다: {}", e);
                false
            }
            Err(e) => {
                log::error!("비밀번호 검증 작업 실행 실패: {}", e);
                false
            }
        }
    }

    /// 존재하지 않는 계좌에 대한 로그인에서 실제 검증과 같은 비용을 소모합니다.
    pub async fn verify_dummy(&self, plaintext: &str) {
        let dummy_hash = self.dummy_hash.clone();
        let _ = self.verify(plaintext, &dummy_hash).await;
    }
}
