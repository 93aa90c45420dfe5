//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 사용자 CRUD 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 사용자 CRUD API 엔드포인트
//! - 생년월일 범위 검색 엔드포인트
//! - 헬스체크 엔드포인트
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// 사용자 생성, 조회, 수정, 삭제 API 엔드포인트를 등록합니다.
///
/// # Available Routes
///
/// - `GET /users/{id}` - 사용자 조회
/// - `GET /users` - 전체 사용자 조회
/// - `GET /users/search?from&to` - 생년월일 범위 검색
/// - `POST /users` - 사용자 등록
/// - `PUT /users/{id}` - 사용자 전체 수정
/// - `PATCH /users/{id}` - 사용자 부분 수정
/// - `DELETE /users/{id}` - 사용자 삭제
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/users \
///   -H "Content-Type: application/json" \
///   -d '{"email":"user@example.com","firstName":"Yaroslav","lastName":"Voronovskyi","birthDate":"11-11-1986","address":"Ukraine, Kyiv","phoneNumber":"+380976714492"}'
///
/// curl "http://localhost:8080/users/search?from=01-01-1980&to=01-01-2000"
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    // `/search`는 `/{id}`보다 먼저 등록되어야 한다
    cfg.service(
        web::scope("/users")
            .service(handlers::users::find_users_by_birth_date)
            .service(handlers::users::get_all_users)
            .service(handlers::users::register_new_user)
            .service(handlers::users::get_user_by_id)
            .service(handlers::users::update_user)
            .service(handlers::users::update_some_user_fields)
            .service(handlers::users::delete_user),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_service_backend",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
