use serde::{Deserialize, Serialize};

/// 휴가 여부 응답 DTO
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveStatusResponse {
    pub on_leave: bool,
}
