//! # 채팅 프로필 서비스 구현
//!
//! 현재 사용자 프로필 조회와 전체 사용자 목록을 제공합니다.
//! 두 작업 모두 채팅 역할이 있는 사용자만 호출할 수 있으며,
//! 권한 검사는 캐시/저장소 접근보다 먼저 수행됩니다.
//!
//! ## 캐싱 전략
//!
//! | 데이터 | 캐시 키 | TTL |
//! |--------|---------|-----|
//! | 현재 사용자 프로필 | `chat_user:{identity}` | 5분 |
//! | 전체 사용자 목록 | `raven:users:list` | 없음 |
//!
//! 사용자 목록은 채팅 앱이 프로필을 변경할 때 [`USER_LIST_CACHE_KEY`]를 직접 삭제합니다.
//! 이 서비스는 목록 캐시를 무효화하지 않습니다.

use std::sync::Arc;
use crate::{
    caching::{get_or_compute, CacheStore},
    core::errors::{AppError, AppResult},
    domain::{dto::users::response::ChatUserSummary, entities::chat::ChatUser},
    repositories::chat::ChatUserRepository,
    services::permissions::{ensure_role, PermissionChecker},
};

/// 전체 사용자 목록 캐시 키
pub const USER_LIST_CACHE_KEY: &str = "raven:users:list";

/// 현재 사용자 프로필 캐시 유지 시간
pub const PROFILE_CACHE_TTL_SECONDS: u64 = 300;

pub fn profile_cache_key(identity: &str) -> String {
    format!("chat_user:{}", identity)
}

/// 채팅 프로필 서비스
pub struct ChatUserService {
    chat_users: Arc<dyn ChatUserRepository>,
    cache: Arc<dyn CacheStore>,
    permissions: Arc<dyn PermissionChecker>,
    chat_role: String,
}

impl ChatUserService {
    pub fn new(
        chat_users: Arc<dyn ChatUserRepository>,
        cache: Arc<dyn CacheStore>,
        permissions: Arc<dyn PermissionChecker>,
        chat_role: impl Into<String>,
    ) -> Self {
        Self {
            chat_users,
            cache,
            permissions,
            chat_role: chat_role.into(),
        }
    }

    /// 호출자 본인의 채팅 프로필을 반환합니다.
    ///
    /// # 에러
    ///
    /// * `PermissionError` - 채팅 역할이 없는 경우
    /// * `NotFound` - 계정에 연결된 프로필이 없는 경우 (캐시하지 않음)
    pub async fn get_current_profile(&self, identity: &str) -> AppResult<ChatUser> {
        ensure_role(self.permissions.as_ref(), identity, &self.chat_role).await?;

        let cache_key = profile_cache_key(identity);

        get_or_compute(self.cache.as_ref(), &cache_key, Some(PROFILE_CACHE_TTL_SECONDS), move || async move {
            self.chat_users
                .find_by_user(identity)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("채팅 프로필을 찾을 수 없습니다: {}", identity)))
        })
        .await
    }

    /// 모든 채팅 사용자를 `full_name` 오름차순으로 반환합니다.
    ///
    /// 이름이 같으면 `name`으로 정렬하여 순서가 항상 결정되도록 합니다.
    pub async fn list_users(&self, identity: &str) -> AppResult<Vec<ChatUserSummary>> {
        ensure_role(self.permissions.as_ref(), identity, &self.chat_role).await?;

        get_or_compute(self.cache.as_ref(), USER_LIST_CACHE_KEY, None, move || async move {
            let mut users: Vec<ChatUserSummary> = self
                .chat_users
                .list_all()
                .await?
                .into_iter()
                .map(ChatUserSummary::from)
                .collect();

            users.sort_by(|a, b| a.full_name.cmp(&b.full_name).then_with(|| a.name.cmp(&b.name)));

            log::info!("📋 사용자 목록 캐시 갱신: {}명", users.len());
            Ok::<_, AppError>(users)
        })
        .await
    }
}
