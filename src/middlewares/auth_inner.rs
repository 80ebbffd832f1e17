use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::core::AppError;
use crate::domain::models::{AuthScope, AuthenticatedAccount};
use crate::services::accounts::AccountService;

/// 기존 클라이언트가 사용하는 토큰 헤더
const LEGACY_TOKEN_HEADER: &str = "token";

/// 권한 거부 시 응답 메시지 (거부 사유를 구분하지 않음)
const PERMISSION_DENIED: &str = "permission denied";

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub scope: AuthScope,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let scope = self.scope;

        Box::pin(async move {
            match authorize(&req, scope).await {
                Ok(caller) => {
                    log::debug!("인증 성공: 계좌 {}", caller.account_number);
                    req.extensions_mut().insert(caller);
                }
                Err(err) => {
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 토큰을 검증하고 범위에 맞는 계좌를 확인합니다. 첫 실패에서 중단합니다.
async fn authorize(req: &ServiceRequest, scope: AuthScope) -> Result<AuthenticatedAccount, AppError> {
    let accounts = req
        .app_data::<web::Data<AccountService>>()
        .cloned()
        .ok_or_else(|| AppError::InternalError("AccountService가 등록되지 않았습니다".to_string()))?;

    let token = extract_token(req, &accounts).inspect_err(|e| {
        log::warn!("인증 실패 ({}): {}", req.path(), e);
    })?;

    let claims = accounts.tokens().verify(&token).inspect_err(|e| {
        log::warn!("토큰 검증 실패 ({}): {}", req.path(), e);
    })?;

    let account = match scope {
        AuthScope::PathScoped => {
            let id = req
                .match_info()
                .get("id")
                .and_then(|raw| raw.parse::<i64>().ok())
                .ok_or_else(|| {
                    log::warn!("경로 계좌 ID를 해석할 수 없습니다 ({})", req.path());
                    AppError::InvalidTokenError("invalid account id in path".to_string())
                })?;

            let account = accounts.store().get_account_by_id(id).await.map_err(|e| {
                log::warn!("경로 계좌 조회 실패 (id={}): {}", id, e);
                AppError::AuthorizationError(PERMISSION_DENIED.to_string())
            })?;

            if account.number() != claims.account_number {
                log::warn!("토큰 계좌와 경로 계좌 불일치 (id={})", id);
                return Err(AppError::AuthorizationError(PERMISSION_DENIED.to_string()));
            }

            account
        }
        AuthScope::TokenScoped => accounts
            .store()
            .get_account_by_number(claims.account_number)
            .await
            .map_err(|e| {
                log::warn!("토큰 계좌 조회 실패: {}", e);
                AppError::AuthorizationError(PERMISSION_DENIED.to_string())
            })?,
    };

    let account_id = account
        .id()
        .ok_or_else(|| AppError::InternalError("저장된 계좌에 ID가 없습니다".to_string()))?;

    Ok(AuthenticatedAccount {
        account_id,
        account_number: account.number(),
    })
}

/// `Authorization: Bearer` 헤더를 우선 사용하고, 없으면 기존 `token` 헤더를 사용합니다.
fn extract_token(req: &ServiceRequest, accounts: &AccountService) -> Result<String, AppError> {
    if let Some(header) = req.headers().get("Authorization") {
        let value = header
            .to_str()
            .map_err(|_| AppError::InvalidTokenError("malformed Authorization header".to_string()))?;
        return accounts.tokens().extract_bearer_token(value).map(str::to_owned);
    }

    req.headers()
        .get(LEGACY_TOKEN_HEADER)
        .and_then(|header| header.to_str().ok())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| AppError::InvalidTokenError("missing token".to_string()))
}
