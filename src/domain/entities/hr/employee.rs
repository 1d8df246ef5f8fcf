use serde::{Deserialize, Serialize};

/// HR 직원 문서
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// 직원 ID (예: "HR-EMP-00001")
    #[serde(rename = "_id")]
    pub name: String,
    /// 연결된 계정 ID. 계정이 없는 직원도 있습니다.
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub employee_name: Option<String>,
    /// 재직 상태 (Active, Inactive, Left ...)
    #[serde(default)]
    pub status: Option<String>,
}
