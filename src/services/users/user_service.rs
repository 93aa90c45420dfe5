//! 사용자 비즈니스 로직 서비스
//!
//! 리포지토리 포트 위에서 조회 결과의 존재 여부를 해석하고,
//! 빈 결과를 도메인의 "찾을 수 없음" 실패로 변환합니다.
//! 요청 간 공유되는 상태는 없으며, 모든 메서드는 하나의 논리적
//! 작업 단위로 완결됩니다.

use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;

use crate::domain::entities::users::user::User;
use crate::errors::AppError;
use crate::repositories::users::user_repo::UserRepository;

/// 사용자 서비스
///
/// 생성자 주입으로 리포지토리를 받습니다. 프로세스 시작 시 한 번
/// 조립되어 `web::Data`로 핸들러에 전달됩니다.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// 리포지토리 구현을 받아 서비스를 생성합니다
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// ID로 사용자를 조회합니다
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 사용자가 없는 경우
    pub async fn get_user_by_id(&self, user_id: i64) -> Result<User, AppError> {
        debug!("Try get user with id {} from DB", user_id);
        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User does not exist or has been deleted".to_string()))
    }

    /// 모든 사용자를 조회합니다
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 저장소가 비어 있는 경우
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        debug!("Try get all users from DB");
        let users = self.repository.find_all().await?;
        if users.is_empty() {
            return Err(AppError::NotFound("Users not found!".to_string()));
        }
        debug!("All users were successfully got from DB");
        Ok(users)
    }

    /// 새 사용자를 등록하고 ID가 할당된 엔티티를 반환합니다
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이메일 또는 전화번호 중복
    pub async fn register_user(&self, user: User) -> Result<User, AppError> {
        debug!("Try register new user and save in DB");
        self.repository.insert(user).await
    }

    /// 사용자 전체 레코드를 덮어씁니다 (ID 기준 업서트)
    pub async fn update_user(&self, user: User) -> Result<User, AppError> {
        debug!("Try update user with id {} from DB", user.id);
        self.repository.save(user).await
    }

    /// 사용자를 삭제합니다
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 삭제할 행이 없는 경우
    pub async fn delete_user(&self, user_id: i64) -> Result<(), AppError> {
        debug!("Try delete user with id {} from DB", user_id);
        let deleted = self.repository.delete_by_id(user_id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!(
                "User with id {} does not exist or has been deleted",
                user_id
            )));
        }
        debug!("User with id {} was successfully deleted from DB", user_id);
        Ok(())
    }

    /// 생년월일 범위로 사용자를 조회합니다 (생년월일 오름차순)
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 범위에 드는 사용자가 없는 경우
    pub async fn find_users_by_birth_date(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<User>, AppError> {
        debug!("Try get users by birth date range from DB");
        let users = self
            .repository
            .find_by_birth_date_between(from, to)
            .await?;
        if users.is_empty() {
            return Err(AppError::NotFound("Users not found!".to_string()));
        }
        debug!("Users by birth date range were successfully got from DB");
        Ok(users)
    }
}
