//! # 채팅 프로필 리포지토리 구현
//!
//! `raven_users` 컬렉션은 채팅 앱이 소유하며, 이 서비스에서는 읽기만 합니다.
//!
//! ## 인덱스
//!
//! `ENSURE_INDEXES=true`일 때만 시작 시 생성을 시도합니다.
//!
//! | 이름 | 키 | 용도 |
//! |------|----|------|
//! | `user_unique` | `user` (unique) | 계정별 프로필 조회, 계정당 프로필 1개 보장 |
//! | `full_name_asc` | `full_name` | 사용자 목록 정렬 |

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use crate::{
    core::errors::{AppError, AppResult},
    db::{collections, Database},
    domain::entities::chat::ChatUser,
};

/// 채팅 프로필 저장소 인터페이스
#[async_trait]
pub trait ChatUserRepository: Send + Sync {
    /// 계정 ID에 연결된 프로필을 조회합니다.
    async fn find_by_user(&self, user: &str) -> AppResult<Option<ChatUser>>;

    /// 모든 프로필을 조회합니다. 반환 순서는 보장하지 않습니다.
    async fn list_all(&self) -> AppResult<Vec<ChatUser>>;
}

/// MongoDB 기반 채팅 프로필 리포지토리
pub struct MongoChatUserRepository {
    db: Arc<Database>,
}

impl MongoChatUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<ChatUser> {
        self.db.collection::<ChatUser>(collections::CHAT_USERS)
    }

    /// 컬렉션 인덱스 생성
    ///
    /// 이미 같은 정의의 인덱스가 있으면 MongoDB가 무시합니다.
    /// 기존 데이터에 같은 계정의 프로필이 둘 이상 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_unique".to_string())
                .build())
            .build();

        let full_name_index = IndexModel::builder()
            .keys(doc! { "full_name": 1 })
            .options(IndexOptions::builder()
                .name("full_name_asc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([user_index, full_name_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl ChatUserRepository for MongoChatUserRepository {
    async fn find_by_user(&self, user: &str) -> AppResult<Option<ChatUser>> {
        self.collection()
            .find_one(doc! { "user": user })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn list_all(&self) -> AppResult<Vec<ChatUser>> {
        let cursor = self
            .collection()
            .find(doc! {})
            .sort(doc! { "full_name": 1, "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
