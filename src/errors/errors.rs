//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 서비스 전 계층의 실패를 하나의 `AppError` 열거형으로 모아,
//! `thiserror`와 `actix_web::ResponseError`를 통해 일관된 HTTP 에러
//! 응답(`ApiError`)으로 변환합니다. 예외 계층 탐색 대신 태그된
//! 에러 종류를 경계에서 한 번만 매칭하는 방식입니다.
//!
//! ## 상태 코드 매핑
//!
//! | 에러 종류 | 상태 코드 |
//! |-----------|-----------|
//! | `ValidationError` (필드별 메시지 목록) | 400 Bad Request |
//! | `InvalidArgument` (이메일 문법 등) | 400 Bad Request |
//! | `NotValidAge` (도메인 규칙 위반) | 400 Bad Request |
//! | `NotFound` | 404 Not Found |
//! | `ConflictError` (이메일/전화번호 중복) | 409 Conflict |
//! | `DatabaseError`, `InternalError` | 500 Internal Server Error |
//!
//! ## 에러 응답 형식
//!
//! 모든 에러는 동일한 형태의 JSON 본문으로 렌더링됩니다:
//!
//! ```json
//! {
//!   "error": 404,
//!   "status": "NOT_FOUND",
//!   "timestamp": "11-11-2024 03:24:15",
//!   "message": ["User does not exist or has been deleted"]
//! }
//! ```

use actix_web::http::StatusCode;
use chrono::Local;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

use crate::utils::date_utils::TIMESTAMP_FORMAT;

/// 애플리케이션 전역 에러 타입
///
/// 검증, 도메인 규칙, 저장소, 시스템 계층에서 발생하는 모든 실패를
/// 포괄합니다. 핸들러는 `Result<_, AppError>`를 반환하고, HTTP 변환은
/// `ResponseError` 구현이 중앙에서 한 번만 수행합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// 필드 단위 입력값 검증 실패 (400 Bad Request)
    ///
    /// 필드당 하나씩 `"<field> <reason>"` 형태의 메시지를 담습니다.
    #[error("Validation error: {}", .0.join(", "))]
    ValidationError(Vec<String>),

    /// 구조적으로는 통과했지만 값 자체가 잘못된 인자 (400 Bad Request)
    #[error("{0}")]
    InvalidArgument(String),

    /// 최소 등록 연령 미달 (400 Bad Request)
    ///
    /// 필드 검증 에러와 구분되는 도메인 규칙 위반입니다.
    #[error("{0}")]
    NotValidAge(String),

    /// 리소스 찾을 수 없음 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 이메일/전화번호 중복 등 유니크 제약 위반 (409 Conflict)
    #[error("{0}")]
    ConflictError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 분류되지 않은 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러 응답 본문에 실릴 메시지 목록을 반환합니다
    ///
    /// 필드 검증 에러는 필드별 메시지 전체를, 나머지는 단일 메시지를
    /// 담습니다.
    pub fn messages(&self) -> Vec<String> {
        match self {
            AppError::ValidationError(violations) => violations.clone(),
            other => vec![other.to_string()],
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::InvalidArgument(_)
            | AppError::NotValidAge(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 에러를 `ApiError` JSON 응답으로 변환합니다
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();
        actix_web::HttpResponse::build(status).json(ApiError::new(status, self.messages()))
    }
}

/// 클라이언트에게 전달되는 구조화된 에러 페이로드
///
/// 모든 실패 경로가 동일한 형태로 렌더링됩니다. 매 실패마다 새로
/// 생성되며 저장되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP 상태 코드 숫자 값 (예: 404)
    pub error: u16,
    /// 상태 코드의 심볼릭 이름 (예: `NOT_FOUND`)
    pub status: String,
    /// 응답 생성 시각, `dd-MM-yyyy hh:mm:ss`
    pub timestamp: String,
    /// 사람이 읽을 수 있는 메시지 목록
    pub message: Vec<String>,
}

impl ApiError {
    /// 주어진 상태 코드와 메시지로 새 에러 페이로드를 생성합니다
    pub fn new(status: StatusCode, message: Vec<String>) -> Self {
        Self {
            error: status.as_u16(),
            status: symbolic_status(status),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            message,
        }
    }
}

/// 상태 코드의 심볼릭 이름을 반환합니다 (`Bad Request` → `BAD_REQUEST`)
fn symbolic_status(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_uppercase()
        .replace(' ', "_")
}

impl From<ValidationErrors> for AppError {
    /// `validator` 검증 결과를 필드별 메시지 목록으로 변환합니다
    ///
    /// 메시지는 와이어 필드명(camelCase) 기준 `"<field> <reason>"`
    /// 형태이며, 결정적인 출력을 위해 정렬됩니다.
    fn from(errors: ValidationErrors) -> Self {
        let mut violations: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, field_errors)| {
                let field = camel_case(field);
                field_errors.iter().map(move |error| {
                    let reason = error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    format!("{} {}", field, reason)
                })
            })
            .collect();
        violations.sort();
        AppError::ValidationError(violations)
    }
}

impl From<sqlx::Error> for AppError {
    /// 저장소 에러를 분류합니다
    ///
    /// 유니크 제약 위반은 제약 이름으로 중복 필드를 식별하여 409로,
    /// 그 외에는 500으로 매핑됩니다.
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::RowNotFound => {
                AppError::NotFound("User does not exist or has been deleted".to_string())
            }
            sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
                let field = match db_error.constraint() {
                    Some("users_email_key") => "email",
                    Some("users_phone_number_key") => "phone number",
                    _ => "field",
                };
                AppError::ConflictError(format!("User with this {} already exists", field))
            }
            _ => AppError::DatabaseError(error.to_string()),
        }
    }
}

/// snake_case 필드명을 와이어 포맷의 camelCase로 변환합니다
fn camel_case(field: &str) -> String {
    let mut result = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            result.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            result.push(ch);
        }
    }
    result
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError(vec!["email Email should be valid".to_string()]);
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_valid_age_error_response() {
        let error =
            AppError::NotValidAge("Age not valid, user must be older than 18 years".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User does not exist or has been deleted".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("User with this email already exists".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_api_error_payload_shape() {
        let api_error = ApiError::new(StatusCode::NOT_FOUND, vec!["Users not found!".to_string()]);

        assert_eq!(api_error.error, 404);
        assert_eq!(api_error.status, "NOT_FOUND");
        assert_eq!(api_error.message, vec!["Users not found!".to_string()]);
        // dd-MM-yyyy hh:mm:ss
        assert_eq!(api_error.timestamp.len(), "11-11-2024 03:24:15".len());
    }

    #[test]
    fn test_symbolic_status_names() {
        assert_eq!(symbolic_status(StatusCode::BAD_REQUEST), "BAD_REQUEST");
        assert_eq!(symbolic_status(StatusCode::CONFLICT), "CONFLICT");
        assert_eq!(
            symbolic_status(StatusCode::INTERNAL_SERVER_ERROR),
            "INTERNAL_SERVER_ERROR"
        );
    }

    #[test]
    fn test_camel_case_field_names() {
        assert_eq!(camel_case("first_name"), "firstName");
        assert_eq!(camel_case("phone_number"), "phoneNumber");
        assert_eq!(camel_case("email"), "email");
    }

    #[test]
    fn test_validation_error_display_joins_messages() {
        let error = AppError::ValidationError(vec![
            "address can not be null or empty".to_string(),
            "firstName can not be null or empty".to_string(),
        ]);

        assert_eq!(error.messages().len(), 2);
        assert_eq!(
            error.to_string(),
            "Validation error: address can not be null or empty, firstName can not be null or empty"
        );
    }
}
