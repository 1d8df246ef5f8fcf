//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 1:1 대응되는 문서 구조체들을 정의합니다.
//!
//! | 엔티티 | 컬렉션 | 소유자 | 이 서비스의 사용 |
//! |--------|--------|--------|------------------|
//! | [`chat::ChatUser`] | `raven_users` | 채팅 앱 | 읽기 전용 |
//! | [`users::Account`] | `users` | 호스트 시스템 | 채팅 역할 추가 |
//! | [`hr::Employee`] | `employees` | HR 모듈 | 읽기 전용 |
//! | [`hr::Attendance`] | `attendances` | HR 모듈 | 읽기 전용 |
//!
//! ## 식별자
//!
//! 모든 문서는 사람이 읽을 수 있는 문자열 `_id`를 가집니다 (예: 계정은 이메일).
//! Rust 쪽에서는 `name` 필드로 다루고 `#[serde(rename = "_id")]`로 매핑합니다.
//!
//! ```rust,ignore
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Account {
//!     #[serde(rename = "_id")]
//!     pub name: String,
//!     // ...
//! }
//! ```

pub mod chat;
pub mod hr;
pub mod users;
