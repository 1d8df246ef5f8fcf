//! Account Entity Implementation
//!
//! 호스트 시스템의 로그인 계정입니다. 이 서비스는 계정을 생성하거나 삭제하지 않으며,
//! 채팅 역할을 `roles` 목록에 추가하는 것만 수행합니다.

use serde::{Deserialize, Serialize};
use crate::utils::string_utils::deserialize_optional_string;

/// 계정에 직접 부여된 역할 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HasRole {
    pub role: String,
}

/// 다중 역할 프로필 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRoleProfile {
    pub role_profile: String,
}

/// 계정 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// 계정 ID (보통 이메일)
    #[serde(rename = "_id")]
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// 계정 유형 (예: "System User", "Website User")
    #[serde(default)]
    pub user_type: Option<String>,
    /// 레거시 단일 역할 프로필
    #[serde(default, deserialize_with = "deserialize_optional_string", skip_serializing_if = "Option::is_none")]
    pub role_profile_name: Option<String>,
    #[serde(default)]
    pub role_profiles: Vec<UserRoleProfile>,
    #[serde(default)]
    pub roles: Vec<HasRole>,
}

fn default_enabled() -> bool {
    true
}

impl Account {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: None,
            enabled: true,
            user_type: Some("System User".to_string()),
            role_profile_name: None,
            role_profiles: Vec::new(),
            roles: Vec::new(),
        }
    }

    /// 역할 프로필(레거시 또는 다중)이 지정되어 있는지 확인
    ///
    /// 공백만 있는 레거시 프로필 이름은 지정되지 않은 것으로 봅니다.
    pub fn has_role_profile_assignment(&self) -> bool {
        let legacy = self
            .role_profile_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty());

        legacy || !self.role_profiles.is_empty()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.role == role)
    }

    /// 역할을 추가합니다. 이미 있으면 아무것도 하지 않고 `false`를 반환합니다.
    pub fn append_role(&mut self, role: &str) -> bool {
        if self.has_role(role) {
            return false;
        }
        self.roles.push(HasRole { role: role.to_string() });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_role_is_idempotent() {
        let mut account = Account::new("alice@example.com");

        assert!(account.append_role("Raven User"));
        assert!(!account.append_role("Raven User"));
        assert_eq!(account.roles.len(), 1);
        assert!(account.has_role("Raven User"));
    }

    #[test]
    fn test_role_profile_assignment() {
        let mut account = Account::new("bob@example.com");
        assert!(!account.has_role_profile_assignment());

        account.role_profile_name = Some("   ".to_string());
        assert!(!account.has_role_profile_assignment());

        account.role_profile_name = Some("Sales".to_string());
        assert!(account.has_role_profile_assignment());

        account.role_profile_name = None;
        account.role_profiles.push(UserRoleProfile { role_profile: "Support".to_string() });
        assert!(account.has_role_profile_assignment());
    }

    #[test]
    fn test_deserialize_minimal_document() {
        let account: Account =
            serde_json::from_str(r#"{"_id": "carol@example.com"}"#).unwrap();

        assert_eq!(account.name, "carol@example.com");
        assert!(account.enabled);
        assert!(account.roles.is_empty());
        assert!(!account.has_role_profile_assignment());
    }
}
