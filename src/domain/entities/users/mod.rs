//! Users Entity Module
//!
//! 호스트 시스템의 계정(`Account`) 엔티티를 정의합니다.
//!
//! # 권한 모델
//!
//! 계정의 권한은 두 가지 방식 중 하나로 관리됩니다.
//!
//! - **역할 프로필**: 레거시 단일 프로필(`role_profile_name`) 또는
//!   다중 프로필 목록(`role_profiles`). 프로필이 역할 목록을 통째로 결정합니다.
//! - **직접 역할**: `roles` 목록에 역할을 하나씩 추가
//!
//! 역할 프로필이 지정된 계정에 직접 역할을 추가하면 다음 프로필 동기화 때 사라지므로,
//! 채팅 역할 부여는 프로필이 없는 계정에만 수행합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::Account;
//!
//! if !account.has_role_profile_assignment() {
//!     account.append_role("Raven User");
//! }
//! ```

pub mod account;

pub use account::{Account, HasRole, UserRoleProfile};
