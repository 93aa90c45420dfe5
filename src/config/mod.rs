//! 애플리케이션 설정 모듈
//!
//! 환경 변수 기반의 설정 로드를 담당합니다.

pub mod app_config;

pub use app_config::*;
