//! 사용자 데이터 액세스 리포지토리
//!
//! 사용자 엔티티의 CRUD 및 생년월일 범위 조회를 담당합니다.
//! `UserRepository` trait이 저장소 포트를 정의하고,
//! `PgUserRepository`가 PostgreSQL(sqlx) 위에서 구현합니다.
//!
//! ## 트랜잭션 경계
//!
//! 변경 연산(insert/save/delete)은 요청당 하나의 명시적 트랜잭션으로
//! 감싸고, 읽기 연산은 풀에서 직접 실행합니다. 격리 수준이나 재시도는
//! 저장소 엔진에 위임하며 이 계층은 자체 잠금을 구현하지 않습니다.
//!
//! ## 유니크 제약
//!
//! `users_email_key`, `users_phone_number_key` 위반은
//! `From<sqlx::Error>` 변환에 의해 409 Conflict로 분류됩니다.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::entities::users::user::User;
use crate::errors::AppError;

const SELECT_COLUMNS: &str = "id, email, first_name, last_name, birth_date, address, phone_number";

/// 사용자 저장소 포트
///
/// 도메인 계층과 데이터 매핑 계층 사이의 경계입니다. 프로덕션에서는
/// PostgreSQL 구현이, 테스트에서는 인메모리 구현이 주입됩니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// ID로 사용자 한 명을 조회합니다
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// 모든 사용자를 ID 오름차순으로 조회합니다
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// 생년월일이 `[from, to]` 범위(양끝 포함)에 드는 사용자를
    /// 생년월일 오름차순으로 조회합니다
    async fn find_by_birth_date_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<User>, AppError>;

    /// 새 사용자를 저장하고 저장소가 할당한 ID가 채워진 엔티티를
    /// 반환합니다 (입력 엔티티의 `id`는 무시됩니다)
    async fn insert(&self, user: User) -> Result<User, AppError>;

    /// ID 기준 전체 레코드 업서트: 해당 ID가 있으면 모든 필드를
    /// 덮어쓰고, 없으면 그 ID로 새로 삽입합니다
    async fn save(&self, user: User) -> Result<User, AppError>;

    /// 사용자를 삭제하고 삭제된 행 수를 반환합니다
    async fn delete_by_id(&self, id: i64) -> Result<u64, AppError>;
}

/// PostgreSQL 기반 사용자 리포지토리
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// 커넥션 풀을 받아 리포지토리를 생성합니다
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {SELECT_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {SELECT_COLUMNS} FROM users ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn find_by_birth_date_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {SELECT_COLUMNS} FROM users \
             WHERE birth_date BETWEEN $1 AND $2 ORDER BY birth_date ASC"
        ))
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn insert(&self, user: User) -> Result<User, AppError> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, first_name, last_name, birth_date, address, phone_number) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {SELECT_COLUMNS}"
        ))
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.birth_date)
        .bind(&user.address)
        .bind(&user.phone_number)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn save(&self, user: User) -> Result<User, AppError> {
        let mut tx = self.pool.begin().await?;

        let saved = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (id, email, first_name, last_name, birth_date, address, phone_number) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (id) DO UPDATE SET \
                 email = EXCLUDED.email, \
                 first_name = EXCLUDED.first_name, \
                 last_name = EXCLUDED.last_name, \
                 birth_date = EXCLUDED.birth_date, \
                 address = EXCLUDED.address, \
                 phone_number = EXCLUDED.phone_number \
             RETURNING {SELECT_COLUMNS}"
        ))
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.birth_date)
        .bind(&user.address)
        .bind(&user.phone_number)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected())
    }
}
