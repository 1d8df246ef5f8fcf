//! 채팅 사용자 일괄 추가 요청 DTO
//!
//! 프론트엔드는 계정 ID 목록을 JSON 배열로 보내거나,
//! 폼 전송 경로를 거치며 JSON 배열을 문자열로 인코딩해서 보냅니다.
//! 두 형태 모두 같은 ID 목록으로 해석됩니다.

use serde::{Deserialize, Serialize};
use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::validate_required_string;

/// 계정 ID 목록 입력
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UsersInput {
    /// `["a@example.com", "b@example.com"]`
    List(Vec<String>),
    /// `"[\"a@example.com\", \"b@example.com\"]"`
    Encoded(String),
}

impl UsersInput {
    /// 입력 형태와 무관하게 계정 ID 목록을 반환합니다.
    ///
    /// ## 에러
    ///
    /// - 문자열이 JSON 문자열 배열이 아닌 경우 `ValidationError`
    /// - 빈 ID가 포함된 경우 `ValidationError`
    ///
    /// 각 ID의 앞뒤 공백은 제거됩니다.
    pub fn into_ids(self) -> AppResult<Vec<String>> {
        let ids = match self {
            UsersInput::List(ids) => ids,
            UsersInput::Encoded(raw) => serde_json::from_str::<Vec<String>>(&raw).map_err(|e| {
                AppError::ValidationError(format!("users 값은 계정 ID의 JSON 배열이어야 합니다: {}", e))
            })?,
        };

        ids.iter()
            .map(|id| validate_required_string(id, "계정 ID"))
            .collect()
    }
}

/// `POST /api/v1/raven/users/add` 요청 본문
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddUsersRequest {
    pub users: UsersInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_and_encoded_inputs_are_equivalent() {
        let list: AddUsersRequest =
            serde_json::from_str(r#"{"users": ["a@example.com", "b@example.com"]}"#).unwrap();
        let encoded: AddUsersRequest =
            serde_json::from_str(r#"{"users": "[\"a@example.com\", \"b@example.com\"]"}"#).unwrap();

        assert!(matches!(list.users, UsersInput::List(_)));
        assert!(matches!(encoded.users, UsersInput::Encoded(_)));
        assert_eq!(list.users.into_ids().unwrap(), encoded.users.into_ids().unwrap());
    }

    #[test]
    fn test_malformed_encoded_input_is_validation_error() {
        let input = UsersInput::Encoded("[\"a@example.com\"".to_string());
        assert!(matches!(input.into_ids(), Err(AppError::ValidationError(_))));

        let not_a_list = UsersInput::Encoded("{\"a\": 1}".to_string());
        assert!(matches!(not_a_list.into_ids(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_blank_id_is_rejected() {
        let input = UsersInput::List(vec!["a@example.com".to_string(), " ".to_string()]);
        assert!(matches!(input.into_ids(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_ids_are_trimmed() {
        let input = UsersInput::List(vec!["  a@example.com ".to_string()]);
        assert_eq!(input.into_ids().unwrap(), vec!["a@example.com".to_string()]);
    }

    #[test]
    fn test_empty_list_is_allowed() {
        assert!(UsersInput::Encoded("[]".to_string()).into_ids().unwrap().is_empty());
    }
}
