//! 공용 유틸리티 모듈

pub mod date_utils;

pub use date_utils::*;
