//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경, 비밀번호 해싱 및 Rate Limiting 관련 설정을 관리합니다.
//! 모든 값은 시작 시점에 한 번 읽히며, 파싱에 실패하면 경고 로그와 함께 기본값을 사용합니다.

use std::env;
use std::path::PathBuf;

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수에서 현재 환경을 판별합니다.
    ///
    /// 설정되지 않은 경우 가장 보수적인 `Production`으로 간주합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 비밀번호 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 정수면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        Self::bcrypt_cost_from(env::var("BCRYPT_COST").ok().as_deref(), &Environment::current())
    }

    pub fn bcrypt_cost_from(raw: Option<&str>, env: &Environment) -> u32 {
        if let Some(cost) = raw.and_then(|value| value.parse::<u32>().ok()) {
            if (4..=15).contains(&cost) {
                return cost;
            }
            log::warn!("BCRYPT_COST {} 는 허용 범위(4-15)를 벗어났습니다. 환경 기본값 사용", cost);
        }

        Self::bcrypt_cost_for_env(env)
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 워커 스레드 수 (`WORKERS`, 기본값 4)
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|value| value.parse().ok())
            .filter(|&workers: &usize| workers > 0)
            .unwrap_or(4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// SQLite 데이터베이스 설정
///
/// ```bash
/// export DATABASE_PATH="/var/lib/bank/bank.db"
/// export DB_POOL_SIZE="8"
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 데이터베이스 파일 경로
    pub path: PathBuf,
    /// 커넥션 풀 최대 크기
    pub pool_size: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정을 구성합니다. (테스트에서 프로세스 환경을 건드리지 않기 위함)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = lookup("DATABASE_PATH")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "bank.db".to_string());

        let pool_size = match lookup("DB_POOL_SIZE").map(|value| value.parse::<u32>()) {
            Some(Ok(size)) if size > 0 => size,
            Some(_) => {
                log::warn!("DB_POOL_SIZE 파싱 실패. 기본값 8 사용");
                8
            }
            None => 8,
        };

        Self {
            path: PathBuf::from(path),
            pool_size,
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        let config = Self {
            per_second,
            burst_size,
        };

        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}
