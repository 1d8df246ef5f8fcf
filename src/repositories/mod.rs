//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 컬렉션에 대한 접근을 `async_trait` 기반 trait 으로 정의하고,
//! MongoDB 구현체를 함께 제공합니다. 서비스 계층은 trait 객체(`Arc<dyn ...>`)에만 의존하므로
//! 테스트에서는 메모리 구현체로 교체할 수 있습니다.
//!
//! | Trait | MongoDB 구현체 | 컬렉션 |
//! |-------|----------------|--------|
//! | [`users::AccountRepository`] | [`users::MongoAccountRepository`] | `users` |
//! | [`chat::ChatUserRepository`] | [`chat::MongoChatUserRepository`] | `raven_users` |
//! | [`hr::HrRepository`] | [`hr::MongoHrRepository`] | `employees`, `attendances` |
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{AccountRepository, MongoAccountRepository};
//!
//! let accounts: Arc<dyn AccountRepository> = Arc::new(MongoAccountRepository::new(database.clone()));
//! let account = accounts.find_by_id("user@example.com").await?;
//! ```

pub mod chat;
pub mod hr;
pub mod users;
