use serde::{Deserialize, Serialize};
use validator::Validate;

/// `/api/v1/raven/users/on-leave?user=<id>` 쿼리 파라미터
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LeaveQuery {
    /// 확인할 계정 ID
    #[validate(length(min = 1, message = "user 파라미터가 필요합니다"))]
    pub user: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_user_fails_validation() {
        let query = LeaveQuery { user: String::new() };
        assert!(query.validate().is_err());

        let query = LeaveQuery { user: "alice@example.com".to_string() };
        assert!(query.validate().is_ok());
    }
}
