//! # 근태 조회 제공자
//!
//! HR 모듈이 설치되어 있지 않으면 [`NotInstalledAttendanceProvider`],
//! 설치되어 있으면 [`InstalledAttendanceProvider`]가 조립됩니다.
//!
//! 이 연동은 보조 정보(휴가 배지 표시)에만 쓰이므로 어떤 실패도 에러로 올리지 않습니다.
//! 저장소 오류는 로그를 남기고 `false`로 처리합니다.

use std::sync::Arc;
use async_trait::async_trait;
use chrono::NaiveDate;
use crate::{
    domain::entities::hr::{AttendanceStatus, DocStatus},
    repositories::hr::HrRepository,
};

/// 휴가 여부 조회 인터페이스
#[async_trait]
pub trait AttendanceProvider: Send + Sync {
    /// `user` 계정이 `date`에 휴가인지 확인합니다.
    async fn is_on_leave(&self, user: &str, date: NaiveDate) -> bool;

    /// HR 모듈 설치 여부 (헬스 체크 표시용)
    fn is_installed(&self) -> bool;
}

/// HR 모듈이 없는 환경의 제공자. 항상 `false`.
pub struct NotInstalledAttendanceProvider;

#[async_trait]
impl AttendanceProvider for NotInstalledAttendanceProvider {
    async fn is_on_leave(&self, _user: &str, _date: NaiveDate) -> bool {
        false
    }

    fn is_installed(&self) -> bool {
        false
    }
}

/// HR 저장소를 조회하는 제공자
pub struct InstalledAttendanceProvider {
    hr: Arc<dyn HrRepository>,
}

impl InstalledAttendanceProvider {
    pub fn new(hr: Arc<dyn HrRepository>) -> Self {
        Self { hr }
    }
}

#[async_trait]
impl AttendanceProvider for InstalledAttendanceProvider {
    async fn is_on_leave(&self, user: &str, date: NaiveDate) -> bool {
        let employee = match self.hr.find_employee_by_user(user).await {
            Ok(Some(employee)) => employee,
            Ok(None) => return false,
            Err(e) => {
                log::warn!("직원 조회 실패, 휴가 아님으로 처리합니다 ({}): {}", user, e);
                return false;
            }
        };

        match self
            .hr
            .attendance_exists(&employee.name, date, AttendanceStatus::OnLeave, DocStatus::Submitted)
            .await
        {
            Ok(exists) => exists,
            Err(e) => {
                log::warn!("근태 조회 실패, 휴가 아님으로 처리합니다 ({}): {}", employee.name, e);
                false
            }
        }
    }

    fn is_installed(&self) -> bool {
        true
    }
}
