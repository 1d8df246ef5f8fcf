//! HR Entity Module
//!
//! 선택적으로 설치되는 HR 모듈의 직원/근태 문서입니다.
//! HR 모듈이 설치되지 않은 환경에서는 이 컬렉션들이 존재하지 않을 수 있습니다.

pub mod attendance;
pub mod employee;

pub use attendance::{Attendance, AttendanceStatus, DocStatus};
pub use employee::Employee;
