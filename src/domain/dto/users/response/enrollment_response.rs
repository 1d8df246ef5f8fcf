use serde::{Deserialize, Serialize};
use crate::domain::entities::users::{Account, HasRole, UserRoleProfile};

/// 계정 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub name: String,
    pub full_name: Option<String>,
    pub enabled: bool,
    pub user_type: Option<String>,
    pub role_profile_name: Option<String>,
    pub role_profiles: Vec<UserRoleProfile>,
    pub roles: Vec<HasRole>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        let Account {
            name,
            full_name,
            enabled,
            user_type,
            role_profile_name,
            role_profiles,
            roles,
        } = account;

        Self {
            name,
            full_name,
            enabled,
            user_type,
            role_profile_name,
            role_profiles,
            roles,
        }
    }
}

/// 채팅 사용자 일괄 추가 응답 DTO
///
/// 두 목록 모두 요청에 나온 순서를 유지합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddUsersResponse {
    /// 채팅 역할이 부여된 계정
    pub successful: Vec<AccountResponse>,
    /// 역할 프로필이 지정되어 있어 건너뛴 계정
    pub failed: Vec<AccountResponse>,
}
