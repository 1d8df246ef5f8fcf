//! # 문자열 유틸리티
//! 
//! 요청 값 검증과 저장소 문서의 빈 문자열 정리에 쓰이는 함수들입니다.
//! 호스트 시스템은 비어 있는 선택 필드를 `null` 대신 `""`로 저장하는 경우가 많습니다.

use serde::Deserialize;
use crate::core::errors::AppError;

/// 필수 문자열 값 검증
///
/// 앞뒤 공백을 제거한 값을 반환하며, 비어 있으면 `ValidationError`입니다.
///
/// ```rust,ignore
/// let id = validate_required_string("  a@example.com ", "계정 ID")?; // "a@example.com"
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 빈 문자열과 공백 문자열을 `None`으로 정리합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택 필드용 serde deserializer
///
/// `null`, `""`, 공백 문자열은 `None`이 되고 나머지는 trim 후 `Some`이 됩니다.
/// 필드가 아예 없는 문서도 읽을 수 있도록 `#[serde(default)]`와 함께 사용합니다.
///
/// ```rust,ignore
/// #[serde(default, deserialize_with = "deserialize_optional_string")]
/// pub custom_status: Option<String>,
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}
