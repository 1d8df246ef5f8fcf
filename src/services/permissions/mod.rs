//! 권한 검사 모듈
//!
//! 역할 엔진 자체는 호스트 시스템이 소유하며, 이 서비스는
//! `has_role(identity, role)` 형태의 좁은 인터페이스로만 사용합니다.

pub mod permission_checker;

pub use permission_checker::{ensure_manager_role, ensure_role, PermissionChecker, RolePermissionChecker};
