//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 토큰 소유 계좌를 확인합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::AuthScope;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    /// 토큰 소유자 확인 방식
    scope: AuthScope,
}

impl AuthMiddleware {
    pub fn new(scope: AuthScope) -> Self {
        Self { scope }
    }

    /// 경로의 `{id}` 계좌와 토큰의 계좌 번호가 일치해야 통과하는 미들웨어
    pub fn path_scoped() -> Self {
        Self::new(AuthScope::PathScoped)
    }

    /// 토큰의 계좌 번호로 계좌가 존재하면 통과하는 미들웨어
    pub fn token_scoped() -> Self {
        Self::new(AuthScope::TokenScoped)
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            scope: self.scope,
        }))
    }
}
