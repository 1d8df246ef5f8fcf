//! 캐싱 계층 모듈
//!
//! 프로세스 전역 캐시를 [`CacheStore`] trait 으로 추상화하고,
//! JSON 직렬화를 거치는 read-through 헬퍼 [`get_or_compute`]를 제공합니다.
//! 캐시 인스턴스는 조립 시점에 생성되어 서비스에 주입되며, 전역 상태로 두지 않습니다.
//!
//! # 구현체
//!
//! - [`redis::RedisClient`] - Redis 서버 (운영 환경, 프로세스 간 공유)
//! - [`memory::MemoryCache`] - 프로세스 내부 메모리 (로컬 개발, 테스트)
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::{get_or_compute, CacheStore};
//!
//! let users: Vec<ChatUserSummary> = get_or_compute(cache.as_ref(), "raven:users:list", None, || async {
//!     repo.list_all().await
//! }).await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! CACHE_BACKEND=redis               # redis | memory
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod memory;
pub mod redis;

use std::future::Future;
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use crate::core::errors::AppResult;

/// 키-값 캐시 저장소 인터페이스
///
/// 값은 직렬화된 문자열로 저장됩니다. 타입 변환은 [`get_or_compute`]가 담당하므로
/// 구현체는 문자열 저장만 신경 쓰면 됩니다.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// 키에 저장된 원시 값을 조회합니다. 없으면 `None`.
    async fn get_raw(&self, key: &str) -> AppResult<Option<String>>;

    /// 값을 저장합니다. `ttl_seconds`가 `None`이면 만료 없이 저장합니다.
    async fn set_raw(&self, key: &str, value: String, ttl_seconds: Option<u64>) -> AppResult<()>;

    /// 키를 삭제합니다. 키가 없어도 성공으로 처리합니다.
    async fn delete(&self, key: &str) -> AppResult<()>;
}

/// 캐시에서 값을 읽고, 없으면 계산하여 저장한 뒤 반환합니다.
///
/// ## 동작
///
/// 1. 캐시 조회에 성공하고 역직렬화가 되면 그 값을 그대로 반환
/// 2. 캐시 미스, 캐시 조회 실패, 역직렬화 실패 시 `compute` 실행
/// 3. 계산 결과를 캐시에 저장 (저장 실패는 로그만 남기고 무시)
///
/// 캐시는 원본 조회의 결과를 보관할 뿐이므로, 캐시 장애가 요청 실패로 번지지 않습니다.
/// `compute`의 에러는 그대로 전파되며 이 경우 캐시에는 아무것도 저장되지 않습니다.
///
/// 동시에 여러 요청이 미스를 내면 각자 계산하고 마지막 저장이 남습니다.
/// `compute`가 부작용 없는 조회라면 어느 값이 남아도 동일합니다.
pub async fn get_or_compute<T, F, Fut>(
    cache: &dyn CacheStore,
    key: &str,
    ttl_seconds: Option<u64>,
    compute: F,
) -> AppResult<T>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    match cache.get_raw(key).await {
        Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
            Ok(value) => return Ok(value),
            Err(e) => log::warn!("캐시 값 역직렬화 실패, 다시 계산합니다 ({}): {}", key, e),
        },
        Ok(None) => log::debug!("캐시 미스: {}", key),
        Err(e) => log::warn!("캐시 조회 실패, 원본에서 조회합니다 ({}): {}", key, e),
    }

    let value = compute().await?;

    match serde_json::to_string(&value) {
        Ok(raw) => {
            if let Err(e) = cache.set_raw(key, raw, ttl_seconds).await {
                log::warn!("캐시 저장 실패 ({}): {}", key, e);
            }
        }
        Err(e) => log::warn!("캐시 값 직렬화 실패 ({}): {}", key, e),
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use crate::caching::memory::MemoryCache;
    use crate::core::errors::AppError;

    #[actix_web::test]
    async fn test_get_or_compute_computes_once() {
        let cache = MemoryCache::new();
        let counter = AtomicUsize::new(0);
        let calls = &counter;

        for _ in 0..3 {
            let value: Vec<String> = get_or_compute(&cache, "names", None, move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, AppError>(vec!["a".to_string(), "b".to_string()])
            })
            .await
            .unwrap();
            assert_eq!(value, vec!["a".to_string(), "b".to_string()]);
        }

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn test_get_or_compute_recomputes_after_delete() {
        let cache = MemoryCache::new();

        let first: u32 = get_or_compute(&cache, "counter", None, || async { Ok::<_, AppError>(1) })
            .await
            .unwrap();
        let cached: u32 = get_or_compute(&cache, "counter", None, || async { Ok::<_, AppError>(2) })
            .await
            .unwrap();
        cache.delete("counter").await.unwrap();
        let refreshed: u32 = get_or_compute(&cache, "counter", None, || async { Ok::<_, AppError>(3) })
            .await
            .unwrap();

        assert_eq!((first, cached, refreshed), (1, 1, 3));
    }

    #[actix_web::test]
    async fn test_get_or_compute_replaces_undecodable_value() {
        let cache = MemoryCache::new();
        cache.set_raw("broken", "not json".to_string(), None).await.unwrap();

        let value: u32 = get_or_compute(&cache, "broken", None, || async { Ok::<_, AppError>(7) })
            .await
            .unwrap();

        assert_eq!(value, 7);
        assert_eq!(cache.get_raw("broken").await.unwrap(), Some("7".to_string()));
    }

    #[actix_web::test]
    async fn test_get_or_compute_does_not_store_errors() {
        let cache = MemoryCache::new();

        let result: AppResult<u32> = get_or_compute(&cache, "failing", None, || async {
            Err(AppError::DatabaseError("down".to_string()))
        })
        .await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
        assert_eq!(cache.get_raw("failing").await.unwrap(), None);
    }
}
