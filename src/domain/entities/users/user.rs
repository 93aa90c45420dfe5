use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 사용자 엔티티
///
/// `users` 테이블의 한 행을 표현하는 영속 도메인 엔티티입니다.
/// `id`는 생성 시점에 저장소(BIGSERIAL)가 할당하며 이후 변경되지
/// 않습니다. 나머지 필드는 업데이트로 변경할 수 있습니다.
///
/// 유니크 제약: `email`(`users_email_key`), `phone_number`
/// (`users_phone_number_key`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// 저장소가 할당하는 식별자 (아직 저장되지 않은 엔티티는 0)
    pub id: i64,
    /// 이메일 주소 (unique)
    pub email: String,
    /// 이름
    pub first_name: String,
    /// 성
    pub last_name: String,
    /// 생년월일 (달력 날짜, 타임존 없음)
    pub birth_date: NaiveDate,
    /// 주소
    pub address: String,
    /// 전화번호 (unique)
    pub phone_number: String,
}
