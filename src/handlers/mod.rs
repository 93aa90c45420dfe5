//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! Actix-web 프레임워크를 기반으로 구현되었습니다.
//!
//! ```text
//! ┌─────────────────────────────┐
//!   Handlers (이 모듈)            ← Web Layer
//! ├─────────────────────────────┤
//!   Services - 비즈니스 로직       ← Service Layer
//! ├─────────────────────────────┤
//!   Repositories - 데이터 접근    ← Repository Layer
//! ├─────────────────────────────┤
//!   Entities / DTO - 도메인 모델  ← Domain Layer
//! └─────────────────────────────┘
//! ```
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하고, 에러는
//! `?` 연산자로 전파되어 중앙의 `ResponseError` 구현이 한 번에
//! HTTP 응답으로 변환합니다.

pub mod users;
