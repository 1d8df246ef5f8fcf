//! 채팅 사용자 서비스 모듈
//!
//! # Features
//!
//! - 현재 사용자 채팅 프로필 조회 (캐시)
//! - 전체 채팅 사용자 목록 (프로세스 전역 캐시, 이름순)
//! - 기존 계정에 채팅 역할 일괄 부여
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::{ChatUserService, EnrollmentService};
//!
//! let users = chat_user_service.list_users("alice@example.com").await?;
//! let outcome = enrollment_service.add_users(vec!["bob@example.com".to_string()]).await?;
//! ```

pub mod chat_user_service;
pub mod enrollment_service;

pub use chat_user_service::{profile_cache_key, ChatUserService, PROFILE_CACHE_TTL_SECONDS, USER_LIST_CACHE_KEY};
pub use enrollment_service::{EnrollmentOutcome, EnrollmentService};
