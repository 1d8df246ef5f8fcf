//! # 메모리 캐시 구현
//!
//! 프로세스 내부 `HashMap` 기반의 [`CacheStore`] 구현체입니다.
//! Redis 없이 로컬에서 서비스를 띄우거나 테스트할 때 사용합니다.
//! 프로세스 간 공유가 되지 않으므로 워커가 여러 개인 운영 환경에서는 Redis를 사용하세요.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use async_trait::async_trait;
use crate::caching::CacheStore;
use crate::core::errors::{AppError, AppResult};

struct CacheEntry {
    value: String,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// 프로세스 내부 메모리 캐시
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 키 개수 (만료되었지만 아직 정리되지 않은 키 포함)
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<E>(_: E) -> AppError {
    AppError::CacheError("메모리 캐시 잠금이 손상되었습니다".to_string())
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get_raw(&self, key: &str) -> AppResult<Option<String>> {
        let now = Instant::now();
        {
            let entries = self.entries.read().map_err(poisoned)?;
            match entries.get(key) {
                None => return Ok(None),
                Some(entry) if !entry.is_expired(now) => return Ok(Some(entry.value.clone())),
                Some(_) => {}
            }
        }

        // 만료된 항목은 조회 시점에 정리
        let mut entries = self.entries.write().map_err(poisoned)?;
        if entries.get(key).is_some_and(|entry| entry.is_expired(now)) {
            entries.remove(key);
        }
        Ok(None)
    }

    async fn set_raw(&self, key: &str, value: String, ttl_seconds: Option<u64>) -> AppResult<()> {
        let expires_at = ttl_seconds.map(|secs| Instant::now() + Duration::from_secs(secs));
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(key.to_string(), CacheEntry { value, expires_at });
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.remove(key);
        Ok(())
    }
}
