//! 애플리케이션 및 서버 설정 관리 모듈
//!
//! 도메인 규칙(최소 등록 연령)과 서버 바인딩 관련 설정을 관리합니다.

use std::env;

/// 최소 등록 연령 기본값 (년)
const DEFAULT_MIN_AGE: i64 = 18;

/// 애플리케이션 도메인 설정
///
/// 프로세스 시작 시 환경 변수에서 한 번 로드되어 `web::Data`로
/// 핸들러에 주입됩니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 사용자 등록 시 요구되는 최소 연령 (만 나이, 년)
    pub min_age: i64,
}

impl AppConfig {
    /// 환경 변수에서 설정을 로드합니다.
    ///
    /// # Environment Variables
    ///
    /// - `APPLICATION_MIN_AGE`: 최소 등록 연령 (기본값: 18)
    pub fn from_env() -> Self {
        Self {
            min_age: parse_min_age(env::var("APPLICATION_MIN_AGE").ok()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            min_age: DEFAULT_MIN_AGE,
        }
    }
}

/// 최소 연령 값을 파싱합니다. 없거나 잘못된 값이면 기본값을 사용합니다.
fn parse_min_age(raw: Option<String>) -> i64 {
    raw.and_then(|value| value.parse::<i64>().ok())
        .unwrap_or(DEFAULT_MIN_AGE)
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 8080
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "0.0.0.0" (모든 인터페이스)
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}
