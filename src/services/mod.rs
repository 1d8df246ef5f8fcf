//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 조립 시점(`core::registry::ServiceRegistry`)에 리포지토리, 캐시, 권한 검사기를
//! 주입받아 생성됩니다. 요청 신원은 전역 세션이 아니라 각 메서드의 인자로 전달됩니다.
//!
//! # 구성
//!
//! - [`permissions`] - 역할 기반 권한 검사 (`PermissionChecker`)
//! - [`hr`] - 선택적 HR 모듈 연동과 휴가 확인
//! - [`users`] - 채팅 프로필 조회, 사용자 목록, 채팅 사용자 일괄 추가
//!
//! # Examples
//!
//! ```rust,ignore
//! let registry = ServiceRegistry::initialize(database, cache).await;
//!
//! let profile = registry.chat_user_service.get_current_profile("alice@example.com").await?;
//! let on_leave = registry.leave_service.is_user_on_leave("alice@example.com").await;
//! ```

pub mod hr;
pub mod permissions;
pub mod users;
