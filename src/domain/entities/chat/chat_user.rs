//! ChatUser Entity Implementation
//!
//! 채팅 앱에 등록된 사용자 프로필입니다.
//! 계정(`Account`)과 1:1로 연결되며, 봇(`Bot`)도 같은 컬렉션에 저장됩니다.

use serde::{Deserialize, Serialize};
use crate::utils::string_utils::deserialize_optional_string;

/// 채팅 프로필 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChatUserType {
    #[default]
    User,
    Bot,
}

/// 사용자가 직접 설정하는 접속 상태
///
/// 설정하지 않은 경우 빈 문자열로 저장됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    Available,
    Away,
    #[serde(rename = "Do not disturb")]
    DoNotDisturb,
    Invisible,
    #[default]
    #[serde(rename = "")]
    Unset,
}

/// 채팅 프로필 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatUser {
    /// 프로필 식별자
    #[serde(rename = "_id")]
    pub name: String,
    /// 소유 계정 ID
    pub user: String,
    pub full_name: String,
    #[serde(default)]
    pub first_name: Option<String>,
    /// 아바타 이미지 경로
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub user_image: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(rename = "type", default)]
    pub user_type: ChatUserType,
    #[serde(default)]
    pub availability_status: AvailabilityStatus,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub custom_status: Option<String>,
}

fn default_enabled() -> bool {
    true
}

impl ChatUser {
    /// 계정에 연결된 사람 사용자 프로필 생성
    pub fn new(name: impl Into<String>, user: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            user: user.into(),
            full_name: full_name.into(),
            first_name: None,
            user_image: None,
            enabled: true,
            user_type: ChatUserType::User,
            availability_status: AvailabilityStatus::Unset,
            custom_status: None,
        }
    }

    pub fn is_bot(&self) -> bool {
        self.user_type == ChatUserType::Bot
    }
}
