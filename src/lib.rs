//! 사용자 관리 서비스 백엔드
//!
//! Rust 기반의 사용자 CRUD REST 서비스입니다.
//! PostgreSQL을 영구 저장소로 사용하며, 검증 → 매핑 → 저장소 호출의
//! 파이프라인과 중앙화된 에러 변환을 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 등록, 조회, 전체/부분 수정, 삭제
//! - **범위 검색**: 생년월일 범위로 사용자 조회 (양끝 포함, 오름차순)
//! - **입력 검증**: 필드 검증 + 도메인 규칙(최소 등록 연령)
//! - **에러 변환**: 모든 실패를 동일한 형태의 JSON 에러 봉투로 렌더링
//! - **PostgreSQL**: sqlx 연결 풀 및 스키마 마이그레이션
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, DTO 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   PostgreSQL    │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_service_backend::db::Database;
//! use user_service_backend::repositories::users::user_repo::PgUserRepository;
//! use user_service_backend::services::users::user_service::UserService;
//!
//! let database = Database::new().await?;
//! let repository = Arc::new(PgUserRepository::new(database.pool().clone()));
//! let service = UserService::new(repository);
//!
//! let user = service.get_user_by_id(1).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
