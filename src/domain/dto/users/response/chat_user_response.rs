use serde::{Deserialize, Serialize};
use crate::domain::entities::chat::{AvailabilityStatus, ChatUser, ChatUserType};

/// 현재 사용자 프로필 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatUserResponse {
    pub name: String,
    pub user: String,
    pub full_name: String,
    pub first_name: Option<String>,
    pub user_image: Option<String>,
    pub enabled: bool,
    #[serde(rename = "type")]
    pub user_type: ChatUserType,
    pub availability_status: AvailabilityStatus,
    pub custom_status: Option<String>,
}

impl From<ChatUser> for ChatUserResponse {
    fn from(chat_user: ChatUser) -> Self {
        let ChatUser {
            name,
            user,
            full_name,
            first_name,
            user_image,
            enabled,
            user_type,
            availability_status,
            custom_status,
        } = chat_user;

        Self {
            name,
            user,
            full_name,
            first_name,
            user_image,
            enabled,
            user_type,
            availability_status,
            custom_status,
        }
    }
}

/// 사용자 목록 항목
///
/// 공개해도 되는 필드만 포함합니다 (소유 계정 ID 제외).
/// 캐시에는 이 형태로 JSON 직렬화되어 저장됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatUserSummary {
    pub name: String,
    pub full_name: String,
    pub first_name: Option<String>,
    pub user_image: Option<String>,
    pub enabled: bool,
    #[serde(rename = "type")]
    pub user_type: ChatUserType,
    pub availability_status: AvailabilityStatus,
    pub custom_status: Option<String>,
}

impl From<ChatUser> for ChatUserSummary {
    fn from(chat_user: ChatUser) -> Self {
        Self {
            name: chat_user.name,
            full_name: chat_user.full_name,
            first_name: chat_user.first_name,
            user_image: chat_user.user_image,
            enabled: chat_user.enabled,
            user_type: chat_user.user_type,
            availability_status: chat_user.availability_status,
            custom_status: chat_user.custom_status,
        }
    }
}
