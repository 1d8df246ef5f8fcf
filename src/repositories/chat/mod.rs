//! 채팅 프로필 데이터 액세스

pub mod chat_user_repo;

pub use chat_user_repo::{ChatUserRepository, MongoChatUserRepository};
