//! # Chat Configuration Module
//!
//! 채팅 접근 권한, 설치된 앱 목록, 신원 전달 방식 등
//! 채팅 사용자 엔드포인트의 동작을 결정하는 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 채팅 접근을 허용하는 역할 이름
//! export CHAT_ROLE="Raven User"
//!
//! # 다른 계정에 채팅 역할을 부여할 수 있는 역할 이름
//! export USER_MANAGER_ROLE="System Manager"
//!
//! # 호스트 시스템에 설치된 앱 목록 (HR 모듈이 있으면 hrms 포함)
//! export INSTALLED_APPS="frappe,raven,hrms"
//!
//! # 상위 세션 계층이 검증된 신원을 실어 보내는 헤더
//! export IDENTITY_HEADER="X-Authenticated-User"
//!
//! # 모든 역할 검사를 통과하는 관리자 신원
//! export ADMIN_IDENTITY="Administrator"
//! ```

use std::env;

/// HR 모듈의 앱 이름
pub const HR_APP_NAME: &str = "hrms";

/// 채팅 역할 및 권한 안내 문구 설정
pub struct ChatConfig;

impl ChatConfig {
    pub fn chat_role() -> String {
        env::var("CHAT_ROLE").unwrap_or_else(|_| "Raven User".to_string())
    }

    /// 채팅 사용자 일괄 추가 엔드포인트를 호출할 수 있는 역할
    pub fn user_manager_role() -> String {
        env::var("USER_MANAGER_ROLE").unwrap_or_else(|_| "System Manager".to_string())
    }

    /// 채팅 역할이 없는 사용자에게 보여줄 안내 메시지
    pub fn permission_message(role: &str) -> String {
        format!(
            "You do not have a <b>{role}</b> role. Please contact your administrator to add your user profile as a <b>{role}</b>."
        )
    }

    /// 사용자 관리 역할이 없는 사용자에게 보여줄 안내 메시지
    pub fn manager_permission_message(role: &str) -> String {
        format!(
            "You are not permitted to add users to Raven. Only users with the <b>{role}</b> role can add users."
        )
    }

    pub fn permission_title() -> String {
        "Insufficient permissions. Please contact your administrator.".to_string()
    }
}

/// 호스트 시스템에 설치된 앱 목록
///
/// 선택적 통합(HR 등)의 활성화 여부를 결정하는 데 사용됩니다.
pub struct InstalledAppsConfig;

impl InstalledAppsConfig {
    pub fn apps() -> Vec<String> {
        Self::parse(&env::var("INSTALLED_APPS").unwrap_or_else(|_| "raven".to_string()))
    }

    pub fn parse(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(|app| app.trim().to_lowercase())
            .filter(|app| !app.is_empty())
            .collect()
    }

    pub fn is_installed(app: &str) -> bool {
        Self::apps().iter().any(|installed| installed == &app.to_lowercase())
    }
}

/// 요청 신원 전달 설정
pub struct IdentityConfig;

impl IdentityConfig {
    pub fn header_name() -> String {
        env::var("IDENTITY_HEADER").unwrap_or_else(|_| "X-Authenticated-User".to_string())
    }

    pub fn admin_identity() -> String {
        env::var("ADMIN_IDENTITY").unwrap_or_else(|_| "Administrator".to_string())
    }
}
