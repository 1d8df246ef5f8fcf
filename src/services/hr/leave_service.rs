use std::sync::Arc;
use chrono::{Local, NaiveDate};
use crate::services::hr::AttendanceProvider;

/// 휴가 확인 서비스
///
/// 권한 검사를 하지 않으며 에러 경로가 없습니다. "오늘"은 서버의 로컬 날짜입니다.
pub struct LeaveService {
    provider: Arc<dyn AttendanceProvider>,
}

impl LeaveService {
    pub fn new(provider: Arc<dyn AttendanceProvider>) -> Self {
        Self { provider }
    }

    /// 오늘 휴가인지 확인
    pub async fn is_user_on_leave(&self, user: &str) -> bool {
        self.is_user_on_leave_on(user, Local::now().date_naive()).await
    }

    pub async fn is_user_on_leave_on(&self, user: &str, date: NaiveDate) -> bool {
        let on_leave = self.provider.is_on_leave(user, date).await;
        log::debug!("휴가 확인: {} {} -> {}", user, date, on_leave);
        on_leave
    }

    pub fn hr_installed(&self) -> bool {
        self.provider.is_installed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::hr::{AttendanceStatus, DocStatus};
    use crate::domain::entities::hr::attendance::format_attendance_date;
    use crate::services::hr::{InstalledAttendanceProvider, NotInstalledAttendanceProvider};
    use crate::test_support::{attendance, employee, InMemoryHrRepository};

    #[actix_web::test]
    async fn test_uses_local_today() {
        let today = format_attendance_date(Local::now().date_naive());
        let hr = InMemoryHrRepository::new(
            vec![employee("HR-EMP-1", "alice@example.com")],
            vec![attendance("HR-EMP-1", &today, AttendanceStatus::OnLeave, DocStatus::Submitted)],
        );
        let service = LeaveService::new(Arc::new(InstalledAttendanceProvider::new(Arc::new(hr))));

        assert!(service.is_user_on_leave("alice@example.com").await);
        assert!(!service.is_user_on_leave("bob@example.com").await);
        assert!(service.hr_installed());
    }

    #[actix_web::test]
    async fn test_without_hr_module() {
        let service = LeaveService::new(Arc::new(NotInstalledAttendanceProvider));

        assert!(!service.is_user_on_leave("alice@example.com").await);
        assert!(!service.hr_installed());
    }
}
