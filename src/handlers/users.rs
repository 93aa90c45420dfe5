//! # User Management HTTP Handlers
//!
//! 사용자 리소스의 CRUD HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 각 핸들러는 검증 → 매핑 → 저장소 호출 → 매핑의 파이프라인을
//! 요청당 한 번 수행하며, 요청 간 상태를 공유하지 않습니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 성공 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/users/{id}` | 사용자 조회 | 200 OK |
//! | `GET` | `/users` | 전체 사용자 조회 | 200 OK |
//! | `GET` | `/users/search?from&to` | 생년월일 범위 검색 | 200 OK |
//! | `POST` | `/users` | 새 사용자 등록 | 201 Created |
//! | `PUT` | `/users/{id}` | 사용자 전체 수정 | 200 OK |
//! | `PATCH` | `/users/{id}` | 사용자 부분 수정 | 200 OK |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 200 OK |
//!
//! 실패는 모두 `AppError`로 전파되어 중앙의 에러 변환기가 동일한
//! 형태의 `ApiError` JSON으로 렌더링합니다.
//!
//! 서비스와 설정은 `web::Data`로 주입됩니다. 프로세스 시작 시 한 번
//! 조립되는 명시적 생성자 와이어링으로, 프레임워크가 관리하는 동적
//! 의존성 주입을 대체합니다.

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use chrono::{Local, NaiveDate};
use log::debug;
use serde::Deserialize;
use validator::{Validate, ValidateEmail};

use crate::config::AppConfig;
use crate::domain::dto::users::user_dto::{UserDto, UserPatchDto};
use crate::errors::AppError;
use crate::services::users::user_service::UserService;
use crate::utils::date_utils::{age_in_years, date_format};

/// 생년월일 범위 검색 쿼리 파라미터 (`from`, `to`는 `dd-MM-yyyy`)
#[derive(Debug, Deserialize)]
pub struct BirthDateRangeQuery {
    #[serde(with = "date_format")]
    pub from: NaiveDate,
    #[serde(with = "date_format")]
    pub to: NaiveDate,
}

/// 사용자 조회 핸들러
///
/// `GET /users/{id}`
///
/// # 응답
///
/// * `200 OK` - 사용자 DTO
/// * `404 Not Found` - 해당 ID의 사용자가 없는 경우
#[get("/{id}")]
pub async fn get_user_by_id(
    service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    debug!("Try get user with id {}", user_id);

    let user = service.get_user_by_id(user_id).await?;

    debug!("User with id {} was successfully got", user_id);
    Ok(HttpResponse::Ok().json(UserDto::from(user)))
}

/// 전체 사용자 조회 핸들러
///
/// `GET /users`
///
/// # 응답
///
/// * `200 OK` - 사용자 DTO 배열
/// * `404 Not Found` - 저장소가 비어 있는 경우
#[get("")]
pub async fn get_all_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    debug!("Try get all users");

    let users: Vec<UserDto> = service
        .get_all_users()
        .await?
        .into_iter()
        .map(UserDto::from)
        .collect();

    debug!("All users were successfully got");
    Ok(HttpResponse::Ok().json(users))
}

/// 생년월일 범위 검색 핸들러
///
/// `GET /users/search?from=dd-MM-yyyy&to=dd-MM-yyyy`
///
/// 범위 양끝을 포함하며 생년월일 오름차순으로 정렬됩니다.
///
/// # 응답
///
/// * `200 OK` - 사용자 DTO 배열
/// * `404 Not Found` - 범위에 드는 사용자가 없는 경우
#[get("/search")]
pub async fn find_users_by_birth_date(
    service: web::Data<UserService>,
    query: web::Query<BirthDateRangeQuery>,
) -> Result<HttpResponse, AppError> {
    debug!("Try get users by birth date range");

    let users: Vec<UserDto> = service
        .find_users_by_birth_date(query.from, query.to)
        .await?
        .into_iter()
        .map(UserDto::from)
        .collect();

    debug!("Users by birth date range were successfully got");
    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 등록 핸들러
///
/// `POST /users`
///
/// 저장소 변경 전에 필드 검증과 도메인 규칙(최소 등록 연령)을 모두
/// 통과해야 합니다. 실패 시 부분 쓰기는 발생하지 않습니다.
///
/// # 요청 본문
///
/// ```json
/// {
///   "email": "user@example.com",
///   "firstName": "Yaroslav",
///   "lastName": "Voronovskyi",
///   "birthDate": "11-11-1986",
///   "address": "Ukraine, Kyiv",
///   "phoneNumber": "+380976714492"
/// }
/// ```
///
/// # 응답
///
/// * `201 Created` - ID가 할당된 사용자 DTO
/// * `400 Bad Request` - 필드 검증 실패, 이메일 문법 오류, 연령 미달
/// * `409 Conflict` - 이메일/전화번호 중복
#[post("")]
pub async fn register_new_user(
    service: web::Data<UserService>,
    config: web::Data<AppConfig>,
    payload: web::Json<UserDto>,
) -> Result<HttpResponse, AppError> {
    debug!("Try register new user");
    let dto = payload.into_inner();

    dto.validate()?;
    if !dto.email.validate_email() {
        return Err(AppError::InvalidArgument("Wrong e-mail address!".to_string()));
    }
    if age_in_years(dto.birth_date, Local::now().date_naive()) < config.min_age {
        return Err(AppError::NotValidAge(
            "Age not valid, user must be older than 18 years".to_string(),
        ));
    }

    let created = service.register_user(dto.into_entity()).await?;

    debug!("New user was registered");
    Ok(HttpResponse::Created().json(UserDto::from(created)))
}

/// 사용자 전체 수정 핸들러
///
/// `PUT /users/{id}`
///
/// 경로의 ID로 전체 레코드를 덮어씁니다(업서트). 성공 시 제출된
/// DTO를 그대로 반환합니다.
///
/// # 응답
///
/// * `200 OK` - 제출된 사용자 DTO (ID 포함)
/// * `400 Bad Request` - 필드 검증 실패
/// * `409 Conflict` - 이메일/전화번호 중복
#[put("/{id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    path: web::Path<i64>,
    payload: web::Json<UserDto>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    debug!("Try update user with id {}", user_id);

    let mut dto = payload.into_inner();
    dto.validate()?;
    dto.id = Some(user_id);

    service.update_user(dto.clone().into_entity()).await?;

    debug!("User was updated with id {}", user_id);
    Ok(HttpResponse::Ok().json(dto))
}

/// 사용자 부분 수정 핸들러
///
/// `PATCH /users/{id}`
///
/// 저장된 레코드를 읽어 요청에 존재하는 필드만 병합한 뒤 저장하는
/// 부분 병합 방식입니다. 전체 레코드 검증은 수행하지 않습니다
/// (생성/전체 수정 경로와의 의도된 비대칭).
///
/// # 응답
///
/// * `200 OK` - 병합된 사용자 DTO
/// * `404 Not Found` - 해당 ID의 사용자가 없는 경우
/// * `409 Conflict` - 이메일/전화번호 중복
#[patch("/{id}")]
pub async fn update_some_user_fields(
    service: web::Data<UserService>,
    path: web::Path<i64>,
    payload: web::Json<UserPatchDto>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    debug!("Try update user with id {}", user_id);

    let existing = service.get_user_by_id(user_id).await?;
    let merged = payload.into_inner().apply_to(existing);
    let saved = service.update_user(merged).await?;

    debug!("User was updated with id {}", user_id);
    Ok(HttpResponse::Ok().json(UserDto::from(saved)))
}

/// 사용자 삭제 핸들러
///
/// `DELETE /users/{id}`
///
/// # 응답
///
/// * `200 OK` - 본문 없는 성공
/// * `404 Not Found` - 해당 ID의 사용자가 없는 경우
#[delete("/{id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    debug!("Try delete user with id {}", user_id);

    service.delete_user(user_id).await?;

    debug!("User was deleted with id {}", user_id);
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test};
    use chrono::Datelike;
    use serde_json::json;

    use super::*;
    use crate::errors::ApiError;
    use crate::repositories::users::user_repo::test_support::InMemoryUserRepository;
    use crate::routes::configure_all_routes;

    macro_rules! init_app {
        ($min_age:expr) => {{
            let repository = Arc::new(InMemoryUserRepository::default());
            let service = web::Data::new(UserService::new(repository));
            let config = web::Data::new(AppConfig { min_age: $min_age });
            test::init_service(
                App::new()
                    .app_data(service)
                    .app_data(config)
                    .configure(configure_all_routes),
            )
            .await
        }};
        () => {
            init_app!(18)
        };
    }

    fn sample_payload() -> serde_json::Value {
        json!({
            "email": "yaroslav.voronovskyi@gmail.com",
            "firstName": "Yaroslav",
            "lastName": "Voronovskyi",
            "birthDate": "11-11-1986",
            "address": "Ukraine, Kyiv",
            "phoneNumber": "+380976714492"
        })
    }

    fn payload_with(field: &str, value: serde_json::Value) -> serde_json::Value {
        let mut payload = sample_payload();
        payload[field] = value;
        payload
    }

    #[actix_web::test]
    async fn test_create_then_get_round_trip() {
        let app = init_app!();

        let request = test::TestRequest::post()
            .uri("/users")
            .set_json(sample_payload())
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let created: UserDto = test::read_body_json(response).await;
        assert_eq!(created.id, Some(1));
        assert_eq!(created.email, "yaroslav.voronovskyi@gmail.com");

        let request = test::TestRequest::get().uri("/users/1").to_request();
        let fetched: UserDto = test::call_and_read_body_json(&app, request).await;
        assert_eq!(fetched, created);
    }

    #[actix_web::test]
    async fn test_create_with_invalid_email() {
        let app = init_app!();

        let request = test::TestRequest::post()
            .uri("/users")
            .set_json(payload_with("email", json!("not-an-email")))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: ApiError = test::read_body_json(response).await;
        assert_eq!(body.error, 400);
        assert_eq!(body.status, "BAD_REQUEST");
        assert_eq!(body.message, vec!["email Email should be valid".to_string()]);
    }

    #[actix_web::test]
    async fn test_create_with_blank_fields() {
        let app = init_app!();

        let mut payload = payload_with("firstName", json!("   "));
        payload["address"] = json!("");
        let request = test::TestRequest::post()
            .uri("/users")
            .set_json(payload)
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: ApiError = test::read_body_json(response).await;
        assert_eq!(
            body.message,
            vec![
                "address can not be null or empty".to_string(),
                "firstName can not be null or empty".to_string(),
            ]
        );
    }

    #[actix_web::test]
    async fn test_create_below_minimum_age() {
        let app = init_app!();

        // 오늘 기준 12살이 되는 생년월일
        let today = Local::now().date_naive();
        let birth_date = format!("01-01-{}", today.year() - 12);
        let request = test::TestRequest::post()
            .uri("/users")
            .set_json(payload_with("birthDate", json!(birth_date)))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: ApiError = test::read_body_json(response).await;
        assert_eq!(
            body.message,
            vec!["Age not valid, user must be older than 18 years".to_string()]
        );
    }

    #[actix_web::test]
    async fn test_create_duplicate_email_conflicts() {
        let app = init_app!();

        let request = test::TestRequest::post()
            .uri("/users")
            .set_json(sample_payload())
            .to_request();
        test::call_service(&app, request).await;

        let request = test::TestRequest::post()
            .uri("/users")
            .set_json(payload_with("phoneNumber", json!("+380000000000")))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body: ApiError = test::read_body_json(response).await;
        assert_eq!(body.status, "CONFLICT");
        assert_eq!(
            body.message,
            vec!["User with this email already exists".to_string()]
        );
    }

    #[actix_web::test]
    async fn test_get_missing_user() {
        let app = init_app!();

        let request = test::TestRequest::get().uri("/users/42").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: ApiError = test::read_body_json(response).await;
        assert_eq!(body.error, 404);
        assert_eq!(body.status, "NOT_FOUND");
        assert_eq!(
            body.message,
            vec!["User does not exist or has been deleted".to_string()]
        );
    }

    #[actix_web::test]
    async fn test_get_all_users_on_empty_store() {
        let app = init_app!();

        let request = test::TestRequest::get().uri("/users").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: ApiError = test::read_body_json(response).await;
        assert_eq!(body.message, vec!["Users not found!".to_string()]);
    }

    #[actix_web::test]
    async fn test_get_all_users_returns_every_row() {
        let app = init_app!();

        for (email, phone) in [("a@b.com", "+1"), ("c@d.com", "+2")] {
            let mut payload = payload_with("email", json!(email));
            payload["phoneNumber"] = json!(phone);
            let request = test::TestRequest::post()
                .uri("/users")
                .set_json(payload)
                .to_request();
            test::call_service(&app, request).await;
        }

        let request = test::TestRequest::get().uri("/users").to_request();
        let users: Vec<UserDto> = test::call_and_read_body_json(&app, request).await;
        assert_eq!(users.len(), 2);
    }

    #[actix_web::test]
    async fn test_search_by_birth_range_orders_ascending() {
        let app = init_app!();

        for (email, phone, birth) in [
            ("young@b.com", "+1", "01-06-1995"),
            ("old@b.com", "+2", "15-03-1980"),
            ("outside@b.com", "+3", "20-08-1975"),
        ] {
            let mut payload = payload_with("email", json!(email));
            payload["phoneNumber"] = json!(phone);
            payload["birthDate"] = json!(birth);
            let request = test::TestRequest::post()
                .uri("/users")
                .set_json(payload)
                .to_request();
            test::call_service(&app, request).await;
        }

        let request = test::TestRequest::get()
            .uri("/users/search?from=01-01-1980&to=01-01-2000")
            .to_request();
        let users: Vec<UserDto> = test::call_and_read_body_json(&app, request).await;

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].email, "old@b.com");
        assert_eq!(users[1].email, "young@b.com");
    }

    #[actix_web::test]
    async fn test_search_with_empty_range() {
        let app = init_app!();

        let request = test::TestRequest::post()
            .uri("/users")
            .set_json(sample_payload())
            .to_request();
        test::call_service(&app, request).await;

        let request = test::TestRequest::get()
            .uri("/users/search?from=01-01-2010&to=01-01-2011")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_full_update_returns_submitted_dto() {
        let app = init_app!();

        let request = test::TestRequest::post()
            .uri("/users")
            .set_json(sample_payload())
            .to_request();
        test::call_service(&app, request).await;

        let updated_payload = payload_with("phoneNumber", json!("+380976714493"));
        let request = test::TestRequest::put()
            .uri("/users/1")
            .set_json(updated_payload)
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let updated: UserDto = test::read_body_json(response).await;
        assert_eq!(updated.id, Some(1));
        assert_eq!(updated.phone_number, "+380976714493");

        let request = test::TestRequest::get().uri("/users/1").to_request();
        let fetched: UserDto = test::call_and_read_body_json(&app, request).await;
        assert_eq!(fetched.phone_number, "+380976714493");
    }

    #[actix_web::test]
    async fn test_full_update_validates_fields() {
        let app = init_app!();

        let request = test::TestRequest::put()
            .uri("/users/1")
            .set_json(payload_with("lastName", json!("")))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: ApiError = test::read_body_json(response).await;
        assert_eq!(
            body.message,
            vec!["lastName can not be null or empty".to_string()]
        );
    }

    #[actix_web::test]
    async fn test_partial_update_merges_present_fields() {
        let app = init_app!();

        let request = test::TestRequest::post()
            .uri("/users")
            .set_json(sample_payload())
            .to_request();
        test::call_service(&app, request).await;

        let request = test::TestRequest::patch()
            .uri("/users/1")
            .set_json(json!({ "address": "Ukraine, Lviv" }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let patched: UserDto = test::read_body_json(response).await;
        assert_eq!(patched.address, "Ukraine, Lviv");
        assert_eq!(patched.email, "yaroslav.voronovskyi@gmail.com");
        assert_eq!(patched.phone_number, "+380976714492");
    }

    #[actix_web::test]
    async fn test_partial_update_of_missing_user() {
        let app = init_app!();

        let request = test::TestRequest::patch()
            .uri("/users/42")
            .set_json(json!({ "address": "Ukraine, Lviv" }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_then_get_is_not_found() {
        let app = init_app!();

        let request = test::TestRequest::post()
            .uri("/users")
            .set_json(sample_payload())
            .to_request();
        test::call_service(&app, request).await;

        let request = test::TestRequest::delete().uri("/users/1").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let request = test::TestRequest::get().uri("/users/1").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_missing_user() {
        let app = init_app!();

        let request = test::TestRequest::delete().uri("/users/42").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: ApiError = test::read_body_json(response).await;
        assert_eq!(
            body.message,
            vec!["User with id 42 does not exist or has been deleted".to_string()]
        );
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = init_app!();

        let request = test::TestRequest::get().uri("/health").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
