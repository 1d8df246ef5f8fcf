//! # Application Error Handling System
//!
//! 채팅 사용자 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 핸들러가 `?` 만으로 일관된 HTTP 응답을 돌려줄 수 있도록 합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 요청 본문 파싱/검증 실패 |
//! | `AuthenticationError` | 401 Unauthorized | 신원 헤더 누락 |
//! | `PermissionError` | 403 Forbidden | 채팅 역할이 없는 호출자 |
//! | `NotFound` | 404 Not Found | 프로필 또는 계정 없음 |
//! | `DatabaseError` | 500 Internal Server Error | 문서 저장소 오류 |
//! | `CacheError` | 500 Internal Server Error | 캐시 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! 일반 에러는 `{"error": "..."}` 형태로 응답합니다.
//! `PermissionError`는 프론트엔드가 그대로 다이얼로그에 띄울 수 있도록
//! 메시지와 제목을 분리해서 내려보냅니다.
//!
//! ```json
//! {
//!   "error": "permission_denied",
//!   "message": "You do not have a <b>Raven User</b> role. ...",
//!   "title": "Insufficient permissions. Please contact your administrator."
//! }
//! ```
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn find_account(&self, id: &str) -> AppResult<Account> {
//!     self.account_repo
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// `actix_web::ResponseError` 구현을 통해 자동으로 HTTP 응답으로 변환됩니다.
///
/// ## 에러 카테고리
///
/// ### 1. 인프라 계층 에러
/// - `DatabaseError`: MongoDB 연산 실패
/// - `CacheError`: Redis/메모리 캐시 연산 실패, 캐시 값 직렬화 실패
///
/// ### 2. 비즈니스 계층 에러
/// - `ValidationError`: 입력값 검증 실패
/// - `NotFound`: 요청된 프로필/계정이 존재하지 않음
///
/// ### 3. 보안 계층 에러
/// - `AuthenticationError`: 상위 세션 계층이 신원을 전달하지 않음
/// - `PermissionError`: 필요한 역할이 없음 (사용자에게 보여줄 메시지/제목 포함)
///
/// ### 4. 시스템 계층 에러
/// - `InternalError`: 예상하지 못한 시스템 오류
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// 연결 타임아웃, 쿼리 실패, BSON 변환 실패 등을 나타냅니다.
    ///
    /// ```rust,ignore
    /// collection.find_one(doc! { "_id": id }).await
    ///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    /// ```
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 캐시 관련 에러
    ///
    /// 캐시 백엔드와의 통신 실패나 캐시 값 (역)직렬화 실패를 나타냅니다.
    #[error("Cache error: {0}")]
    CacheError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 예: `users` 필드가 JSON 배열로 파싱되지 않는 경우
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    ///
    /// 호출자가 필요한 역할을 가지고 있지 않을 때 발생합니다.
    /// `message`와 `title`은 가공 없이 클라이언트에 그대로 전달됩니다.
    #[error("Permission error: {title}")]
    PermissionError {
        /// 사용자에게 보여줄 본문 메시지
        message: String,
        /// 사용자에게 보여줄 제목
        title: String,
    },

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러 종류에 대응하는 HTTP 상태 코드를 반환합니다.
    pub fn http_status(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::PermissionError { .. } => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        self.http_status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에 원인을 남기고, 클라이언트에는 에러 문자열만 전달합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.http_status();

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        let body = match self {
            AppError::PermissionError { message, title } => serde_json::json!({
                "error": "permission_denied",
                "message": message,
                "title": title,
            }),
            _ => serde_json::json!({
                "error": self.to_string()
            }),
        };

        actix_web::HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::CacheError(e.to_string())
    }
}
