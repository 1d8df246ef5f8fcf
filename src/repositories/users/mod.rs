//! 계정 데이터 액세스
//!
//! [`AccountRepository`](account_repo::AccountRepository)를 통해 호스트 시스템 계정을 조회하고 저장합니다.

pub mod account_repo;

pub use account_repo::{AccountRepository, MongoAccountRepository};
