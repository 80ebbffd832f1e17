//! 라우트 구성 모듈
//!
//! 모든 HTTP 엔드포인트를 애플리케이션에 등록합니다.
//! 경로는 기존 클라이언트와의 호환을 위해 접두사 없이 유지합니다.
//!
//! | Method | Path | 인증 |
//! |--------|------|------|
//! | POST | `/login` | - |
//! | GET | `/account` | - |
//! | POST | `/account` | - |
//! | GET | `/account/{id}` | - |
//! | DELETE | `/account/{id}` | 경로 계좌 본인 |
//! | POST | `/transfer` | 유효한 토큰 |
//! | GET | `/health` | - |

use crate::core::errors::AppError;
use crate::handlers;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());
    cfg.service(health_check);
    configure_auth_routes(cfg);
    configure_account_routes(cfg);
    configure_transfer_routes(cfg);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::login);
}

fn configure_account_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::accounts::list_accounts)
        .service(handlers::accounts::create_account)
        .service(handlers::accounts::get_account)
        .service(handlers::accounts::delete_account);
}

fn configure_transfer_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::transfer::transfer);
}

/// 잘못된 JSON 본문도 다른 에러와 같은 `{"error": ...}` 형식의 400으로 응답합니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "bank_auth_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "SQLite",
            "token": "HS256 JWT"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test::{self, TestRequest};
    use actix_web::App;
    use serde_json::Value;
    use std::sync::Arc;

    use crate::config::JwtConfig;
    use crate::db::Database;
    use crate::repositories::accounts::memory_store::MemoryAccountStore;
    use crate::repositories::accounts::SqliteAccountStore;
    use crate::services::accounts::AccountService;
    use crate::services::auth::{PasswordService, TokenService};
    use crate::test_support::{account_service, TEST_SECRET};

    async fn sqlite_service() -> AccountService {
        let database = Database::in_memory().unwrap();
        database.init_schema().await.unwrap();

        AccountService::new(
            Arc::new(SqliteAccountStore::new(database)),
            PasswordService::new(4).unwrap(),
            TokenService::new(JwtConfig::new(TEST_SECRET, 1)),
        )
    }

    macro_rules! init_app {
        ($service:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($service.clone()))
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    macro_rules! call_json {
        ($app:expr, $req:expr) => {{
            let res = test::call_service(&$app, $req.to_request()).await;
            let status = res.status();
            let body: Value = test::read_body_json(res).await;
            (status, body)
        }};
    }

    fn register_body(password: &str) -> Value {
        json!({ "firstName": "Jane", "lastName": "Doe", "password": password })
    }

    #[actix_web::test]
    async fn test_account_lifecycle_scenario() {
        let service = sqlite_service().await;
        let app = init_app!(service);

        // 짧은 비밀번호는 거부되고 아무것도 저장되지 않음
        let (status, body) = call_json!(
            app,
            TestRequest::post().uri("/account").set_json(register_body("short"))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("password"));

        let (status, body) = call_json!(app, TestRequest::get().uri("/account"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        // 계좌 생성 후 발급된 토큰은 새 계좌 번호를 담고 있음
        let (status, body) = call_json!(
            app,
            TestRequest::post().uri("/account").set_json(register_body("longenough"))
        );
        assert_eq!(status, StatusCode::OK);
        let token = body["token"].as_str().unwrap().to_string();

        let (_, accounts) = call_json!(app, TestRequest::get().uri("/account"));
        let created = &accounts[0];
        let id = created["id"].as_i64().unwrap();
        let number = created["number"].as_i64().unwrap();
        assert_eq!(service.tokens().verify(&token).unwrap().account_number, number);
        assert_eq!(created["firstName"], "Jane");
        assert_eq!(created["secondName"], "Doe");
        assert_eq!(created["balance"], 0);
        assert!(created.get("encryptedPassword").is_none());
        assert!(!created.to_string().contains("longenough"));

        // 로그인
        let (status, body) = call_json!(
            app,
            TestRequest::post()
                .uri("/login")
                .set_json(json!({ "number": number, "password": "longenough" }))
        );
        assert_eq!(status, StatusCode::OK);
        let login_token = body["token"].as_str().unwrap();
        assert_eq!(service.tokens().verify(login_token).unwrap().account_number, number);

        let (wrong_status, wrong_body) = call_json!(
            app,
            TestRequest::post()
                .uri("/login")
                .set_json(json!({ "number": number, "password": "wrong-password" }))
        );
        let (unknown_status, unknown_body) = call_json!(
            app,
            TestRequest::post()
                .uri("/login")
                .set_json(json!({ "number": number + 1, "password": "longenough" }))
        );
        assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong_body, unknown_body);

        // 조회
        let (status, body) = call_json!(app, TestRequest::get().uri(&format!("/account/{}", id)));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["number"], number);

        // 다른 계좌의 토큰으로는 삭제할 수 없음
        let (_, other) = call_json!(
            app,
            TestRequest::post().uri("/account").set_json(register_body("longenough"))
        );
        let other_token = other["token"].as_str().unwrap();

        let (status, _) = call_json!(app, TestRequest::delete().uri(&format!("/account/{}", id)));
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = call_json!(
            app,
            TestRequest::delete()
                .uri(&format!("/account/{}", id))
                .insert_header(("Authorization", format!("Bearer {}", other_token)))
        );
        assert_eq!(status, StatusCode::FORBIDDEN);

        // 본인 토큰으로 삭제
        let (status, body) = call_json!(
            app,
            TestRequest::delete()
                .uri(&format!("/account/{}", id))
                .insert_header(("Authorization", format!("Bearer {}", token)))
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "deleted": id }));

        let (status, _) = call_json!(app, TestRequest::get().uri(&format!("/account/{}", id)));
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_non_numeric_id_is_bad_request() {
        let service = account_service(Arc::new(MemoryAccountStore::new()));
        let app = init_app!(service);

        let (status, body) = call_json!(app, TestRequest::get().uri("/account/abc"));

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation error: invalid id given abc");
    }

    #[actix_web::test]
    async fn test_malformed_json_uses_error_envelope() {
        let service = account_service(Arc::new(MemoryAccountStore::new()));
        let app = init_app!(service);

        let (status, body) = call_json!(
            app,
            TestRequest::post()
                .uri("/login")
                .insert_header(("Content-Type", "application/json"))
                .set_payload("{not json")
        );

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_transfer_echoes_body_for_token_holder() {
        let service = account_service(Arc::new(MemoryAccountStore::new()));
        let app = init_app!(service);
        let (_, body) = call_json!(
            app,
            TestRequest::post().uri("/account").set_json(register_body("longenough"))
        );
        let token = body["token"].as_str().unwrap();
        let transfer = json!({ "toAccount": 1234, "amount": 500 });

        let (status, body) = call_json!(
            app,
            TestRequest::post()
                .uri("/transfer")
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .set_json(transfer.clone())
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, transfer);

        let (status, _) = call_json!(
            app,
            TestRequest::post().uri("/transfer").set_json(transfer)
        );
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_store_failure_hides_detail() {
        let store = Arc::new(MemoryAccountStore::new());
        let service = account_service(store.clone());
        let app = init_app!(service);
        store.fail_all(true);

        let (status, body) = call_json!(app, TestRequest::get().uri("/account"));

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }

    #[actix_web::test]
    async fn test_health_check() {
        let service = account_service(Arc::new(MemoryAccountStore::new()));
        let app = init_app!(service);

        let (status, body) = call_json!(app, TestRequest::get().uri("/health"));

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }
}
