//! # HR 리포지토리 구현
//!
//! 직원(`employees`)과 근태(`attendances`) 컬렉션을 조회합니다.

use std::sync::Arc;
use async_trait::async_trait;
use chrono::NaiveDate;
use mongodb::{bson::doc, options::IndexOptions, IndexModel};
use crate::{
    core::errors::{AppError, AppResult},
    db::{collections, Database},
    domain::entities::hr::{attendance::format_attendance_date, Attendance, AttendanceStatus, DocStatus, Employee},
};

/// HR 저장소 인터페이스
#[async_trait]
pub trait HrRepository: Send + Sync {
    /// 계정 ID에 연결된 직원을 조회합니다.
    async fn find_employee_by_user(&self, user_id: &str) -> AppResult<Option<Employee>>;

    /// 조건과 정확히 일치하는 근태 기록이 있는지 확인합니다.
    async fn attendance_exists(
        &self,
        employee: &str,
        date: NaiveDate,
        status: AttendanceStatus,
        docstatus: DocStatus,
    ) -> AppResult<bool>;
}

/// MongoDB 기반 HR 리포지토리
pub struct MongoHrRepository {
    db: Arc<Database>,
}

impl MongoHrRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// `employees.user_id`, `attendances.(employee, attendance_date)` 인덱스 생성
    pub async fn create_indexes(&self) -> AppResult<()> {
        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .name("user_id".to_string())
                .build())
            .build();

        self.db
            .collection::<Employee>(collections::EMPLOYEES)
            .create_index(user_id_index)
            .await?;

        let employee_date_index = IndexModel::builder()
            .keys(doc! { "employee": 1, "attendance_date": 1 })
            .options(IndexOptions::builder()
                .name("employee_attendance_date".to_string())
                .build())
            .build();

        self.db
            .collection::<Attendance>(collections::ATTENDANCES)
            .create_index(employee_date_index)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl HrRepository for MongoHrRepository {
    async fn find_employee_by_user(&self, user_id: &str) -> AppResult<Option<Employee>> {
        self.db
            .collection::<Employee>(collections::EMPLOYEES)
            .find_one(doc! { "user_id": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn attendance_exists(
        &self,
        employee: &str,
        date: NaiveDate,
        status: AttendanceStatus,
        docstatus: DocStatus,
    ) -> AppResult<bool> {
        let found = self.db
            .collection::<Attendance>(collections::ATTENDANCES)
            .find_one(doc! {
                "employee": employee,
                "attendance_date": format_attendance_date(date),
                "status": status.as_str(),
                "docstatus": docstatus.as_i32(),
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(found.is_some())
    }
}
