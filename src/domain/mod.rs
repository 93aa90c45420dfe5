//! 도메인 모델 모듈
//!
//! 영속 엔티티(`entities`)와 와이어 표현(`dto`)을 분리하여 정의합니다.

pub mod dto;
pub mod entities;
