//! 사용자 와이어 표현 (DTO)와 엔티티 매핑
//!
//! JSON 역직렬화와 입력 검증을 자동으로 수행하며, 영속 표현(`User`)과의
//! 변환은 리플렉션 매퍼 대신 컴파일 타임에 검증되는 필드별 수동 변환
//! 함수로 제공합니다. 날짜 필드는 양쪽 모두 동일한 달력 값을 유지합니다.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::users::user::User;
use crate::utils::date_utils::{date_format, option_date_format};

/// 사용자 와이어 표현
///
/// 생성 요청에서는 `id`가 없고, 응답에서는 저장소가 할당한 `id`가
/// 채워집니다. 생년월일은 `dd-MM-yyyy` 문자열로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[validate(email(message = "Email should be valid"))]
    pub email: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub first_name: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub last_name: String,

    /// 생년월일, 검증 시점 기준으로 과거여야 합니다
    #[serde(with = "date_format")]
    #[validate(custom(function = "validate_past_date"))]
    pub birth_date: NaiveDate,

    #[validate(custom(function = "validate_not_blank"))]
    pub address: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub phone_number: String,
}

impl UserDto {
    /// DTO를 영속 엔티티로 변환합니다
    ///
    /// `id`가 없으면 0을 사용합니다. 0은 "아직 저장되지 않음"을
    /// 의미하며 insert 경로에서는 저장소가 무시합니다.
    pub fn into_entity(self) -> User {
        User {
            id: self.id.unwrap_or_default(),
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            address: self.address,
            phone_number: self.phone_number,
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: Some(user.id),
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            birth_date: user.birth_date,
            address: user.address,
            phone_number: user.phone_number,
        }
    }
}

/// 부분 수정(PATCH) 요청용 와이어 표현
///
/// 모든 필드가 선택적이며 전체 레코드 검증을 거치지 않습니다.
/// 존재하는 필드만 저장된 레코드 위에 덮어씁니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatchDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, with = "option_date_format", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl UserPatchDto {
    /// 존재하는 필드만 기존 엔티티 위에 병합합니다
    ///
    /// 식별자는 항상 기존 엔티티의 것을 유지합니다.
    pub fn apply_to(self, user: User) -> User {
        User {
            id: user.id,
            email: self.email.unwrap_or(user.email),
            first_name: self.first_name.unwrap_or(user.first_name),
            last_name: self.last_name.unwrap_or(user.last_name),
            birth_date: self.birth_date.unwrap_or(user.birth_date),
            address: self.address.unwrap_or(user.address),
            phone_number: self.phone_number.unwrap_or(user.phone_number),
        }
    }
}

/// 공백만으로 이루어지거나 빈 문자열을 거부합니다
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank")
            .with_message("can not be null or empty".into()));
    }
    Ok(())
}

/// 검증 시점 기준으로 엄격하게 과거인 날짜만 허용합니다
fn validate_past_date(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date >= Local::now().date_naive() {
        return Err(ValidationError::new("past")
            .with_message("must be a past date".into()));
    }
    Ok(())
}
