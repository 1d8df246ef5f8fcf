//! # 역할 기반 권한 검사
//!
//! 계정 문서의 `roles` 목록을 기준으로 역할 보유 여부를 판단합니다.
//!
//! ## 판정 규칙
//!
//! | 조건 | 결과 |
//! |------|------|
//! | 관리자 신원 (`ADMIN_IDENTITY`) | 항상 허용 |
//! | 계정 없음 | 거부 |
//! | 비활성 계정 | 거부 |
//! | `roles`에 역할 포함 | 허용 |

use std::sync::Arc;
use async_trait::async_trait;
use crate::{
    config::ChatConfig,
    core::errors::{AppError, AppResult},
    repositories::users::AccountRepository,
};

/// 권한 검사 인터페이스
#[async_trait]
pub trait PermissionChecker: Send + Sync {
    /// `identity`가 `role` 역할을 가지고 있는지 확인합니다.
    async fn has_role(&self, identity: &str, role: &str) -> AppResult<bool>;
}

/// 계정 저장소를 조회하는 기본 권한 검사기
pub struct RolePermissionChecker {
    accounts: Arc<dyn AccountRepository>,
    admin_identity: String,
}

impl RolePermissionChecker {
    pub fn new(accounts: Arc<dyn AccountRepository>, admin_identity: impl Into<String>) -> Self {
        Self {
            accounts,
            admin_identity: admin_identity.into(),
        }
    }
}

#[async_trait]
impl PermissionChecker for RolePermissionChecker {
    async fn has_role(&self, identity: &str, role: &str) -> AppResult<bool> {
        if identity == self.admin_identity {
            return Ok(true);
        }

        let granted = self
            .accounts
            .find_by_id(identity)
            .await?
            .is_some_and(|account| account.enabled && account.has_role(role));

        Ok(granted)
    }
}

/// 채팅 역할이 없으면 `PermissionError`를 반환합니다.
///
/// 에러 메시지와 제목은 그대로 클라이언트에 표시됩니다.
///
/// ```rust,ignore
/// ensure_role(self.permissions.as_ref(), identity, &self.chat_role).await?;
/// ```
pub async fn ensure_role(checker: &dyn PermissionChecker, identity: &str, role: &str) -> AppResult<()> {
    require_role(checker, identity, role, ChatConfig::permission_message).await
}

/// 사용자 관리 역할이 없으면 `PermissionError`를 반환합니다.
///
/// 채팅 역할과 달리 역할 부여를 요청하라는 안내를 하지 않습니다.
pub async fn ensure_manager_role(checker: &dyn PermissionChecker, identity: &str, role: &str) -> AppResult<()> {
    require_role(checker, identity, role, ChatConfig::manager_permission_message).await
}

async fn require_role(
    checker: &dyn PermissionChecker,
    identity: &str,
    role: &str,
    message: fn(&str) -> String,
) -> AppResult<()> {
    if checker.has_role(identity, role).await? {
        return Ok(());
    }

    log::warn!("⛔ 권한 없음: {} (필요 역할: {})", identity, role);

    Err(AppError::PermissionError {
        message: message(role),
        title: ChatConfig::permission_title(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::Account;
    use crate::test_support::InMemoryAccountRepository;

    fn checker_with(accounts: Vec<Account>) -> RolePermissionChecker {
        RolePermissionChecker::new(Arc::new(InMemoryAccountRepository::with_accounts(accounts)), "Administrator")
    }

    #[actix_web::test]
    async fn test_role_membership() {
        let mut member = Account::new("alice@example.com");
        member.append_role("Raven User");
        let outsider = Account::new("bob@example.com");

        let checker = checker_with(vec![member, outsider]);

        assert!(checker.has_role("alice@example.com", "Raven User").await.unwrap());
        assert!(!checker.has_role("bob@example.com", "Raven User").await.unwrap());
        assert!(!checker.has_role("ghost@example.com", "Raven User").await.unwrap());
    }

    #[actix_web::test]
    async fn test_disabled_account_is_denied() {
        let mut disabled = Account::new("carol@example.com");
        disabled.append_role("Raven User");
        disabled.enabled = false;

        let checker = checker_with(vec![disabled]);

        assert!(!checker.has_role("carol@example.com", "Raven User").await.unwrap());
    }

    #[actix_web::test]
    async fn test_admin_identity_passes_every_check() {
        let checker = checker_with(vec![]);
        assert!(checker.has_role("Administrator", "Anything").await.unwrap());
    }

    #[actix_web::test]
    async fn test_ensure_role_builds_permission_error() {
        let checker = checker_with(vec![Account::new("bob@example.com")]);

        let err = ensure_role(&checker, "bob@example.com", "Raven User").await.unwrap_err();

        match err {
            AppError::PermissionError { message, title } => {
                assert!(message.contains("<b>Raven User</b>"));
                assert_eq!(title, "Insufficient permissions. Please contact your administrator.");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_ensure_manager_role_uses_management_message() {
        let checker = checker_with(vec![Account::new("bob@example.com")]);

        let err = ensure_manager_role(&checker, "bob@example.com", "System Manager").await.unwrap_err();

        match err {
            AppError::PermissionError { message, .. } => {
                assert!(message.contains("<b>System Manager</b>"));
                assert!(!message.contains("add your user profile as a"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
