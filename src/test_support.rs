//! 테스트 전용 메모리 구현체와 픽스처
//!
//! MongoDB/Redis 없이 서비스와 핸들러를 검증하기 위한 trait 구현체들입니다.
//! 저장소 접근 횟수와 역할 갱신 이력을 기록하여 "저장소에 닿지 않았음"을 확인할 수 있습니다.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use chrono::NaiveDate;
use crate::{
    caching::CacheStore,
    core::errors::{AppError, AppResult},
    domain::entities::{
        chat::ChatUser,
        hr::{Attendance, AttendanceStatus, DocStatus, Employee},
        users::Account,
    },
    repositories::{chat::ChatUserRepository, hr::HrRepository, users::AccountRepository},
};

pub fn chat_user(name: &str, user: &str, full_name: &str) -> ChatUser {
    let mut chat_user = ChatUser::new(name, user, full_name);
    chat_user.first_name = full_name.split_whitespace().next().map(str::to_string);
    chat_user
}

pub fn employee(name: &str, user_id: &str) -> Employee {
    Employee {
        name: name.to_string(),
        user_id: Some(user_id.to_string()),
        employee_name: None,
        status: Some("Active".to_string()),
    }
}

pub fn attendance(employee: &str, date: &str, status: AttendanceStatus, docstatus: DocStatus) -> Attendance {
    Attendance {
        name: format!("HR-ATT-{}-{}-{}", employee, date, docstatus.as_i32()),
        employee: employee.to_string(),
        attendance_date: date.to_string(),
        status,
        docstatus,
    }
}

/// 계정 메모리 저장소
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: Mutex<HashMap<String, Account>>,
    updated: Mutex<Vec<String>>,
    failing_update: Option<String>,
}

impl InMemoryAccountRepository {
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Mutex::new(accounts.into_iter().map(|a| (a.name.clone(), a)).collect()),
            ..Self::default()
        }
    }

    /// 지정한 계정의 역할 추가를 `DatabaseError`로 실패시킵니다.
    pub fn failing_update_for(mut self, id: &str) -> Self {
        self.failing_update = Some(id.to_string());
        self
    }

    pub fn get(&self, id: &str) -> Option<Account> {
        self.accounts.lock().unwrap().get(id).cloned()
    }

    /// 역할이 추가된 계정 ID (갱신 순서)
    pub fn updated_ids(&self) -> Vec<String> {
        self.updated.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>> {
        Ok(self.get(id))
    }

    async fn add_role(&self, id: &str, role: &str) -> AppResult<()> {
        if self.failing_update.as_deref() == Some(id) {
            return Err(AppError::DatabaseError("write failed".to_string()));
        }

        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        account.append_role(role);
        self.updated.lock().unwrap().push(id.to_string());
        Ok(())
    }
}

/// 채팅 프로필 메모리 저장소
///
/// 입력 순서를 그대로 유지하여 반환하므로 정렬은 서비스 책임입니다.
#[derive(Default)]
pub struct InMemoryChatUserRepository {
    users: Mutex<Vec<ChatUser>>,
    reads: AtomicUsize,
}

impl InMemoryChatUserRepository {
    pub fn with_users(users: Vec<ChatUser>) -> Self {
        Self {
            users: Mutex::new(users),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn insert(&self, user: ChatUser) {
        self.users.lock().unwrap().push(user);
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatUserRepository for InMemoryChatUserRepository {
    async fn find_by_user(&self, user: &str) -> AppResult<Option<ChatUser>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.users.lock().unwrap().iter().find(|u| u.user == user).cloned())
    }

    async fn list_all(&self) -> AppResult<Vec<ChatUser>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.users.lock().unwrap().clone())
    }
}

/// HR 메모리 저장소
pub struct InMemoryHrRepository {
    employees: Vec<Employee>,
    attendances: Vec<Attendance>,
    fail: bool,
}

impl InMemoryHrRepository {
    pub fn new(employees: Vec<Employee>, attendances: Vec<Attendance>) -> Self {
        Self { employees, attendances, fail: false }
    }

    /// 모든 조회가 `DatabaseError`를 반환하는 저장소
    pub fn failing() -> Self {
        Self { employees: Vec::new(), attendances: Vec::new(), fail: true }
    }

    fn check(&self) -> AppResult<()> {
        if self.fail {
            return Err(AppError::DatabaseError("hr store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl HrRepository for InMemoryHrRepository {
    async fn find_employee_by_user(&self, user_id: &str) -> AppResult<Option<Employee>> {
        self.check()?;
        Ok(self
            .employees
            .iter()
            .find(|e| e.user_id.as_deref() == Some(user_id))
            .cloned())
    }

    async fn attendance_exists(
        &self,
        employee: &str,
        date: NaiveDate,
        status: AttendanceStatus,
        docstatus: DocStatus,
    ) -> AppResult<bool> {
        self.check()?;
        Ok(self
            .attendances
            .iter()
            .any(|a| a.matches(employee, date, status, docstatus)))
    }
}

/// 모든 연산이 실패하는 캐시
pub struct FailingCache;

#[async_trait]
impl CacheStore for FailingCache {
    async fn get_raw(&self, _key: &str) -> AppResult<Option<String>> {
        Err(AppError::CacheError("cache unavailable".to_string()))
    }

    async fn set_raw(&self, _key: &str, _value: String, _ttl_seconds: Option<u64>) -> AppResult<()> {
        Err(AppError::CacheError("cache unavailable".to_string()))
    }

    async fn delete(&self, _key: &str) -> AppResult<()> {
        Err(AppError::CacheError("cache unavailable".to_string()))
    }
}
