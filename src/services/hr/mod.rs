//! HR 연동 서비스 모듈
//!
//! HR 모듈 설치 여부는 [`AttendanceProvider`] 구현체 선택으로 표현되며,
//! 조립 시점에 한 번만 결정됩니다. 호출하는 쪽에서는 설치 여부를 검사하지 않습니다.

pub mod attendance_provider;
pub mod leave_service;

pub use attendance_provider::{AttendanceProvider, InstalledAttendanceProvider, NotInstalledAttendanceProvider};
pub use leave_service::LeaveService;
