//! # 계정 리포지토리 구현
//!
//! 호스트 시스템의 `users` 컬렉션에 대한 데이터 액세스 계층입니다.
//! 계정 문서는 호스트 시스템이 소유하므로 문서 전체를 덮어쓰지 않고 `roles`만 갱신합니다.
//! 계정은 역할 변경이 즉시 권한 검사에 반영되어야 하므로 캐싱하지 않습니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::{doc, Document}, Collection};
use crate::{
    core::errors::{AppError, AppResult},
    db::{collections, Database},
    domain::entities::users::Account,
};

/// 계정 저장소 인터페이스
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// 계정 ID로 조회합니다. 없으면 `None`.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>>;

    /// 계정의 `roles` 목록에 역할 하나를 추가합니다.
    ///
    /// 다른 필드는 건드리지 않습니다.
    /// 존재하지 않는 계정이면 `NotFound`를 반환합니다 (새 계정을 만들지 않음).
    async fn add_role(&self, id: &str, role: &str) -> AppResult<()>;
}

/// `roles`에 역할 항목을 추가하는 갱신 문서
pub fn add_role_update(role: &str) -> Document {
    doc! { "$addToSet": { "roles": { "role": role } } }
}

/// MongoDB 기반 계정 리포지토리
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = MongoAccountRepository::new(database.clone());
///
/// if let Some(account) = repo.find_by_id("alice@example.com").await? {
///     if !account.has_role("Raven User") {
///         repo.add_role(&account.name, "Raven User").await?;
///     }
/// }
/// ```
pub struct MongoAccountRepository {
    db: Arc<Database>,
}

impl MongoAccountRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Account> {
        self.db.collection::<Account>(collections::ACCOUNTS)
    }
}

#[async_trait]
impl AccountRepository for MongoAccountRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn add_role(&self, id: &str, role: &str) -> AppResult<()> {
        let result = self
            .collection()
            .update_one(doc! { "_id": id }, add_role_update(role))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("계정을 찾을 수 없습니다: {}", id)));
        }

        Ok(())
    }
}
