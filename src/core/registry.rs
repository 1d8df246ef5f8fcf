//! # Service Registry
//!
//! 애플리케이션 시작 시 저장소와 서비스를 한 번 조립하여 보관하는 컴포지션 루트입니다.
//! 조립된 레지스트리는 `web::Data<ServiceRegistry>`로 모든 워커가 공유합니다.
//!
//! ## 조립 순서
//!
//! 1. MongoDB 저장소 생성 (HR 저장소는 HR 모듈이 설치된 경우에만)
//!    - `ENSURE_INDEXES=true`일 때만 인덱스 생성을 시도하며, 실패는 경고로 남기고 계속 진행
//! 2. 권한 검사기, 근태 제공자 선택
//! 3. 서비스 생성
//!
//! HR 모듈 설치 여부는 이 시점에 [`AttendanceProvider`] 구현체 선택으로 한 번만 결정됩니다.
//!
//! ## 테스트
//!
//! [`ServiceRegistry::assemble`]은 trait 객체만 받으므로 메모리 구현체로 전체 그래프를
//! 조립할 수 있습니다.
//!
//! ```rust,ignore
//! let registry = ServiceRegistry::assemble(
//!     accounts,
//!     chat_users,
//!     None,
//!     Arc::new(MemoryCache::new()),
//!     RegistrySettings::from_env(),
//! );
//! ```

use std::future::Future;
use std::sync::Arc;
use crate::{
    caching::CacheStore,
    config::{ChatConfig, DatabaseConfig, IdentityConfig, InstalledAppsConfig, HR_APP_NAME},
    core::errors::AppResult,
    db::Database,
    repositories::{
        chat::{ChatUserRepository, MongoChatUserRepository},
        hr::{HrRepository, MongoHrRepository},
        users::{AccountRepository, MongoAccountRepository},
    },
    services::{
        hr::{AttendanceProvider, InstalledAttendanceProvider, LeaveService, NotInstalledAttendanceProvider},
        permissions::{PermissionChecker, RolePermissionChecker},
        users::{ChatUserService, EnrollmentService},
    },
    utils::display_terminal::{
        print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
    },
};

const INIT_STEPS: u8 = 3;

/// 인덱스 준비 결과를 시작 화면의 상태 문구로 바꿉니다.
///
/// 컬렉션은 채팅 앱과 HR 모듈이 소유하므로 생성 실패는 경고만 남기고 시작을 계속합니다.
async fn prepare_indexes<F>(name: &str, enabled: bool, task: F) -> &'static str
where
    F: Future<Output = AppResult<()>>,
{
    if !enabled {
        return "OK";
    }

    match task.await {
        Ok(()) => "OK (indexes)",
        Err(e) => {
            log::warn!("⚠️ {} 인덱스 생성 실패, 인덱스 없이 계속합니다: {}", name, e);
            "OK (indexes skipped)"
        }
    }
}

/// 조립 시점에 주입되는 역할/신원 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySettings {
    pub chat_role: String,
    pub admin_identity: String,
    pub user_manager_role: String,
}

impl RegistrySettings {
    pub fn from_env() -> Self {
        Self {
            chat_role: ChatConfig::chat_role(),
            admin_identity: IdentityConfig::admin_identity(),
            user_manager_role: ChatConfig::user_manager_role(),
        }
    }
}

/// 조립된 서비스 묶음
pub struct ServiceRegistry {
    pub chat_user_service: Arc<ChatUserService>,
    pub enrollment_service: Arc<EnrollmentService>,
    pub leave_service: Arc<LeaveService>,
    pub permissions: Arc<dyn PermissionChecker>,
    /// 일괄 등록 엔드포인트 호출에 필요한 역할
    pub user_manager_role: String,
}

impl ServiceRegistry {
    /// 주어진 저장소와 캐시로 서비스 그래프를 조립합니다.
    ///
    /// `hr`가 `None`이면 HR 모듈이 설치되지 않은 것으로 보고
    /// 휴가 조회는 항상 `false`를 반환합니다.
    pub fn assemble(
        accounts: Arc<dyn AccountRepository>,
        chat_users: Arc<dyn ChatUserRepository>,
        hr: Option<Arc<dyn HrRepository>>,
        cache: Arc<dyn CacheStore>,
        settings: RegistrySettings,
    ) -> Self {
        let permissions: Arc<dyn PermissionChecker> = Arc::new(RolePermissionChecker::new(
            accounts.clone(),
            settings.admin_identity,
        ));

        let attendance: Arc<dyn AttendanceProvider> = match hr {
            Some(hr) => Arc::new(InstalledAttendanceProvider::new(hr)),
            None => Arc::new(NotInstalledAttendanceProvider),
        };

        Self {
            chat_user_service: Arc::new(ChatUserService::new(
                chat_users,
                cache,
                permissions.clone(),
                settings.chat_role.clone(),
            )),
            enrollment_service: Arc::new(EnrollmentService::new(accounts, settings.chat_role)),
            leave_service: Arc::new(LeaveService::new(attendance)),
            permissions,
            user_manager_role: settings.user_manager_role,
        }
    }

    /// MongoDB 저장소를 만들고 서비스를 조립합니다.
    pub async fn initialize(
        database: Arc<Database>,
        cache: Arc<dyn CacheStore>,
    ) -> Self {
        print_boxed_title("💬 Chat User Service");

        print_step_start(1, INIT_STEPS, "저장소 준비");
        let ensure_indexes = DatabaseConfig::ensure_indexes();
        let accounts = Arc::new(MongoAccountRepository::new(database.clone()));
        print_sub_task("Account", "OK");

        let chat_users = Arc::new(MongoChatUserRepository::new(database.clone()));
        let status = prepare_indexes("ChatUser", ensure_indexes, chat_users.create_indexes()).await;
        print_sub_task("ChatUser", status);

        let hr_installed = InstalledAppsConfig::is_installed(HR_APP_NAME);
        let hr: Option<Arc<dyn HrRepository>> = if hr_installed {
            let repo = MongoHrRepository::new(database);
            let status = prepare_indexes("Employee/Attendance", ensure_indexes, repo.create_indexes()).await;
            print_sub_task("Employee/Attendance", status);
            Some(Arc::new(repo) as Arc<dyn HrRepository>)
        } else {
            print_sub_task("Employee/Attendance", "미설치");
            None
        };
        let repo_count = if hr.is_some() { 3 } else { 2 };
        print_step_complete(1, INIT_STEPS, "저장소 준비", repo_count);

        print_step_start(2, INIT_STEPS, "설정 로드");
        let settings = RegistrySettings::from_env();
        print_sub_task("CHAT_ROLE", &settings.chat_role);
        print_sub_task("USER_MANAGER_ROLE", &settings.user_manager_role);
        print_step_complete(2, INIT_STEPS, "설정 로드", 3);

        print_step_start(3, INIT_STEPS, "서비스 조립");
        let registry = Self::assemble(accounts, chat_users, hr, cache, settings);
        print_step_complete(3, INIT_STEPS, "서비스 조립", 3);

        print_final_summary(
            repo_count,
            3,
            &[("HR", if hr_installed { "installed".to_string() } else { "not installed".to_string() })],
        );
        log::info!("✅ 서비스 레지스트리 조립 완료 (HR 모듈: {})", hr_installed);

        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caching::memory::MemoryCache;
    use crate::domain::entities::hr::{AttendanceStatus, DocStatus};
    use crate::domain::entities::users::Account;
    use crate::test_support::{attendance, employee, InMemoryAccountRepository, InMemoryChatUserRepository, InMemoryHrRepository};
    use crate::core::errors::AppError;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn settings() -> RegistrySettings {
        RegistrySettings {
            chat_role: "Raven User".to_string(),
            admin_identity: "Administrator".to_string(),
            user_manager_role: "System Manager".to_string(),
        }
    }

    fn accounts() -> Arc<InMemoryAccountRepository> {
        Arc::new(InMemoryAccountRepository::with_accounts(vec![Account::new("alice@example.com")]))
    }

    #[actix_web::test]
    async fn test_assemble_without_hr_reports_not_installed() {
        let registry = ServiceRegistry::assemble(
            accounts(),
            Arc::new(InMemoryChatUserRepository::default()),
            None,
            Arc::new(MemoryCache::new()),
            settings(),
        );

        assert!(!registry.leave_service.hr_installed());
        assert_eq!(registry.user_manager_role, "System Manager");
        assert!(registry.permissions.has_role("Administrator", "Raven User").await.unwrap());
        assert!(!registry.permissions.has_role("alice@example.com", "Raven User").await.unwrap());
    }

    #[actix_web::test]
    async fn test_assemble_with_hr_wires_attendance_lookup() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let hr: Arc<dyn HrRepository> = Arc::new(InMemoryHrRepository::new(
            vec![employee("EMP-001", "alice@example.com")],
            vec![attendance("EMP-001", "2024-03-04", AttendanceStatus::OnLeave, DocStatus::Submitted)],
        ));

        let registry = ServiceRegistry::assemble(
            accounts(),
            Arc::new(InMemoryChatUserRepository::default()),
            Some(hr),
            Arc::new(MemoryCache::new()),
            settings(),
        );

        assert!(registry.leave_service.hr_installed());
        assert!(registry.leave_service.is_user_on_leave_on("alice@example.com", date).await);
    }

    #[actix_web::test]
    async fn test_enrollment_uses_configured_chat_role() {
        let accounts = accounts();
        let registry = ServiceRegistry::assemble(
            accounts.clone(),
            Arc::new(InMemoryChatUserRepository::default()),
            None,
            Arc::new(MemoryCache::new()),
            settings(),
        );

        registry
            .enrollment_service
            .add_users(vec!["alice@example.com".to_string()])
            .await
            .unwrap();

        assert!(accounts.get("alice@example.com").unwrap().has_role("Raven User"));
    }

    #[actix_web::test]
    async fn test_index_failure_does_not_abort_startup() {
        let status = prepare_indexes("ChatUser", true, async {
            Err::<(), _>(AppError::DatabaseError(
                "E11000 duplicate key error index: user_unique dup key: { user: null }".to_string(),
            ))
        })
        .await;

        assert_eq!(status, "OK (indexes skipped)");
    }

    #[actix_web::test]
    async fn test_indexes_are_opt_in() {
        let ran = AtomicBool::new(false);
        let status = prepare_indexes("ChatUser", false, async {
            ran.store(true, Ordering::SeqCst);
            Ok::<(), AppError>(())
        })
        .await;

        assert_eq!(status, "OK");
        assert!(!ran.load(Ordering::SeqCst));
        assert_eq!(
            prepare_indexes("ChatUser", true, async { Ok::<(), AppError>(()) }).await,
            "OK (indexes)"
        );
    }
}
