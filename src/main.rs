use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use bank_auth_backend::config::{DatabaseConfig, JwtConfig, PasswordConfig, RateLimitConfig, ServerConfig};
use bank_auth_backend::core::errors::{AppError, AppResult};
use bank_auth_backend::db::Database;
use bank_auth_backend::repositories::accounts::SqliteAccountStore;
use bank_auth_backend::routes::configure_all_routes;
use bank_auth_backend::services::accounts::AccountService;
use bank_auth_backend::services::auth::{PasswordService, TokenService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let env_status = load_env_file();
    init_logging();
    info!("{}", env_status);

    info!("🚀 계좌 인증 서비스 시작중...");

    let account_service = match initialize_services().await {
        Ok(service) => service,
        Err(e) => {
            error!("서비스 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(account_service).await
}

/// 설정을 읽어 저장소, 해셔, 토큰 서비스를 조립합니다.
async fn initialize_services() -> AppResult<AccountService> {
    let jwt_config = JwtConfig::from_env()?;
    info!("🔑 JWT 설정 로드됨: {:?}", jwt_config);

    info!("📡 데이터베이스 연결 중...");
    let database = Database::open(&DatabaseConfig::from_env())?;
    database.init_schema().await?;

    let bcrypt_cost = PasswordConfig::bcrypt_cost();
    info!("🔒 bcrypt cost: {}", bcrypt_cost);

    Ok(AccountService::new(
        Arc::new(SqliteAccountStore::new(database)),
        PasswordService::new(bcrypt_cost)?,
        TokenService::new(jwt_config),
    ))
}

async fn start_http_server(account_service: AccountService) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            let e = AppError::InternalError("Rate Limiting 설정이 올바르지 않습니다".to_string());
            error!("{}", e);
            std::io::Error::other(e.to_string())
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let account_service = web::Data::new(account_service);

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            .app_data(account_service.clone())
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(workers)
        .run()
        .await
}

/// `PROFILE`에 맞는 .env 파일을 로드하고 결과 메시지를 반환합니다.
///
/// 로거는 .env의 `RUST_LOG`를 반영해 초기화되므로 메시지는 초기화 이후에 기록합니다.
fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => ".env.prod 파일 로드 됨".to_string(),
            Err(e) => format!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => ".env.dev 파일 로드 됨".to_string(),
            Err(e) => format!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            "기본 .env 파일 로드".to_string()
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("token"),
        ])
        .max_age(3600)
}
