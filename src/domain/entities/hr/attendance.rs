//! Attendance Entity Implementation
//!
//! HR 모듈의 일별 근태 기록입니다. 같은 직원/날짜에 대해 취소된 기록과
//! 다시 제출된 기록이 함께 존재할 수 있으므로 조회 시 `docstatus`를 함께 봐야 합니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 저장되는 날짜 형식 (`YYYY-MM-DD`)
pub const ATTENDANCE_DATE_FORMAT: &str = "%Y-%m-%d";

/// 근태 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    #[serde(rename = "On Leave")]
    OnLeave,
    #[serde(rename = "Half Day")]
    HalfDay,
    #[serde(rename = "Work From Home")]
    WorkFromHome,
}

impl AttendanceStatus {
    /// 저장소에 기록되는 문자열 값
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::OnLeave => "On Leave",
            AttendanceStatus::HalfDay => "Half Day",
            AttendanceStatus::WorkFromHome => "Work From Home",
        }
    }
}

/// 문서 결재 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum DocStatus {
    Draft,
    Submitted,
    Cancelled,
}

impl DocStatus {
    pub fn as_i32(&self) -> i32 {
        match self {
            DocStatus::Draft => 0,
            DocStatus::Submitted => 1,
            DocStatus::Cancelled => 2,
        }
    }
}

impl From<DocStatus> for i32 {
    fn from(status: DocStatus) -> Self {
        status.as_i32()
    }
}

impl TryFrom<i32> for DocStatus {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DocStatus::Draft),
            1 => Ok(DocStatus::Submitted),
            2 => Ok(DocStatus::Cancelled),
            other => Err(format!("알 수 없는 docstatus 값: {}", other)),
        }
    }
}

/// 근태 문서
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    #[serde(rename = "_id")]
    pub name: String,
    /// 직원 ID
    pub employee: String,
    /// `YYYY-MM-DD`
    pub attendance_date: String,
    pub status: AttendanceStatus,
    pub docstatus: DocStatus,
}

impl Attendance {
    /// 주어진 조건과 정확히 일치하는 기록인지 확인
    pub fn matches(&self, employee: &str, date: NaiveDate, status: AttendanceStatus, docstatus: DocStatus) -> bool {
        self.employee == employee
            && self.attendance_date == format_attendance_date(date)
            && self.status == status
            && self.docstatus == docstatus
    }
}

pub fn format_attendance_date(date: NaiveDate) -> String {
    date.format(ATTENDANCE_DATE_FORMAT).to_string()
}
