//! 계좌 생성 및 로그인 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// 계좌 생성 요청
///
/// ```json
/// {
///   "firstName": "Jane",
///   "lastName": "Doe",
///   "password": "longenough"
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub first_name: String,

    pub last_name: String,

    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}

/// 계좌 번호와 비밀번호로 로그인하는 요청
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub number: i64,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(password: &str) -> CreateAccountRequest {
        CreateAccountRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_short_password_fails_validation() {
        let errors = create_request("short").validate().unwrap_err();

        assert!(errors.field_errors().contains_key("password"));
        assert!(errors.to_string().contains("at least 6 characters"));
    }

    #[test]
    fn test_six_characters_is_enough() {
        assert!(create_request("123456").validate().is_ok());
    }

    #[test]
    fn test_password_length_counts_characters() {
        // 6글자, 18바이트
        assert!(create_request("비밀번호여섯").validate().is_ok());
        assert!(create_request("비밀번호").validate().is_err());
    }

    #[test]
    fn test_deserialize_camel_case_fields() {
        let request: CreateAccountRequest = serde_json::from_str(
            r#"{"firstName":"Jane","lastName":"Doe","password":"longenough"}"#,
        )
        .unwrap();

        assert_eq!(request.first_name, "Jane");
        assert_eq!(request.last_name, "Doe");
    }

    #[test]
    fn test_login_request_requires_numeric_number() {
        assert!(serde_json::from_str::<LoginRequest>(r#"{"number":"abc","password":"x"}"#).is_err());

        let request: LoginRequest =
            serde_json::from_str(r#"{"number":1234,"password":"x"}"#).unwrap();
        assert_eq!(request.number, 1234);
    }
}
