//! 요청 신원 모델
//!
//! 인증 자체는 상위 세션 계층이 수행하며, 이 서비스는 검증된 신원을 헤더로 전달받습니다.

pub mod authenticated_user;

pub use authenticated_user::AuthenticatedUser;
