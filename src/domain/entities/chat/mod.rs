//! Chat Entity Module
//!
//! 채팅 프로필(`ChatUser`)과 그 상태 값들을 정의합니다.

pub mod chat_user;

pub use chat_user::{AvailabilityStatus, ChatUser, ChatUserType};
