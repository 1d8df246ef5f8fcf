//! # 채팅 사용자 일괄 등록 서비스
//!
//! 기존 계정에 채팅 역할을 부여합니다.
//!
//! ## 처리 순서
//!
//! 1. 모든 계정 ID를 먼저 조회합니다. 하나라도 없으면 `NotFound`로 중단하며,
//!    이 시점까지는 어떤 계정도 수정되지 않습니다.
//! 2. 입력 순서대로 계정을 하나씩 처리합니다.
//!    - 역할 프로필(레거시 또는 다중)이 있으면 실패 목록에 추가 (수정 없음)
//!    - 그 외에는 계정의 `roles`에 채팅 역할을 추가(이미 있으면 생략)한 뒤 성공 목록에 추가
//!
//! 계정 문서의 다른 필드는 수정하지 않습니다.
//!
//! 갱신은 배치 단위 트랜잭션이 아닙니다. 중간에 갱신이 실패하면 에러를 즉시 반환하며,
//! 이미 역할이 추가된 계정은 되돌리지 않습니다.

use std::sync::Arc;
use crate::{
    core::errors::{AppError, AppResult},
    domain::entities::users::Account,
    repositories::users::AccountRepository,
};

/// 일괄 등록 결과
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrollmentOutcome {
    /// 채팅 역할이 부여된 계정 (갱신 후 상태)
    pub successful: Vec<Account>,
    /// 역할 프로필 때문에 건너뛴 계정 (조회 시점 상태)
    pub failed: Vec<Account>,
}

/// 채팅 사용자 일괄 등록 서비스
pub struct EnrollmentService {
    accounts: Arc<dyn AccountRepository>,
    chat_role: String,
}

impl EnrollmentService {
    pub fn new(accounts: Arc<dyn AccountRepository>, chat_role: impl Into<String>) -> Self {
        Self {
            accounts,
            chat_role: chat_role.into(),
        }
    }

    /// 계정 목록에 채팅 역할을 부여합니다.
    ///
    /// # 에러
    ///
    /// * `NotFound` - 존재하지 않는 계정 ID가 포함된 경우 (아무것도 수정하지 않음)
    /// * `DatabaseError` - 역할 추가 실패 (앞서 갱신된 계정은 유지됨)
    pub async fn add_users(&self, ids: Vec<String>) -> AppResult<EnrollmentOutcome> {
        let mut resolved = Vec::with_capacity(ids.len());
        for id in &ids {
            let account = self
                .accounts
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("계정을 찾을 수 없습니다: {}", id)))?;
            resolved.push(account);
        }

        let mut outcome = EnrollmentOutcome::default();

        for mut account in resolved {
            if account.has_role_profile_assignment() {
                log::info!("⏭️  역할 프로필이 지정된 계정은 건너뜁니다: {}", account.name);
                outcome.failed.push(account);
                continue;
            }

            if !account.has_role(&self.chat_role) {
                self.accounts.add_role(&account.name, &self.chat_role).await?;
                account.append_role(&self.chat_role);
                log::info!("✅ 채팅 역할 부여: {}", account.name);
            } else {
                log::info!("이미 채팅 역할이 있는 계정: {}", account.name);
            }

            outcome.successful.push(account);
        }

        log::info!(
            "채팅 사용자 일괄 등록 완료: 성공 {}건, 실패 {}건",
            outcome.successful.len(),
            outcome.failed.len()
        );

        Ok(outcome)
    }
}
