//! 인증 범위 모델

/// 인증 미들웨어가 토큰 소유자를 확인하는 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScope {
    /// 경로의 `{id}` 계좌가 토큰의 계좌 번호와 일치해야 통과
    PathScoped,
    /// 토큰의 계좌 번호로 계좌가 존재하기만 하면 통과 (경로에 ID가 없는 엔드포인트용)
    TokenScoped,
}
