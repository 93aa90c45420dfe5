//! 날짜 처리 유틸리티
//!
//! 와이어 포맷(`dd-MM-yyyy`)과 `chrono::NaiveDate` 간의 변환,
//! 그리고 등록 최소 연령 계산을 담당합니다.
//! 타임존 변환 없이 순수한 달력 날짜만 다룹니다.

use chrono::{Datelike, NaiveDate};

/// 와이어 포맷 날짜 패턴 (`dd-MM-yyyy`)
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// 에러 응답 타임스탬프 패턴 (`dd-MM-yyyy hh:mm:ss`, 12시간제)
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %I:%M:%S";

/// 생년월일 기준 만 나이를 계산합니다
///
/// 생일이 아직 지나지 않은 해에는 한 살을 빼는, 버림 방식의
/// 온전한 연 단위 나이입니다.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use user_service_backend::utils::date_utils::age_in_years;
///
/// let birth = NaiveDate::from_ymd_opt(2000, 11, 11).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// assert_eq!(age_in_years(birth, today), 23);
/// ```
pub fn age_in_years(birth_date: NaiveDate, today: NaiveDate) -> i64 {
    let mut age = i64::from(today.year() - birth_date.year());
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// `NaiveDate` 필드를 `dd-MM-yyyy` 문자열로 직렬화/역직렬화하는 serde 모듈
///
/// ```rust,ignore
/// #[serde(with = "date_format")]
/// pub birth_date: NaiveDate,
/// ```
pub mod date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&value, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// `Option<NaiveDate>` 필드용 `dd-MM-yyyy` serde 모듈 (PATCH 요청에서 사용)
pub mod option_date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(value) => NaiveDate::parse_from_str(&value, DATE_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
