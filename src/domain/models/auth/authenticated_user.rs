use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;

/// 상위 세션 계층이 검증한 요청 신원
///
/// `IdentityMiddleware`가 요청 확장에 저장하며, 핸들러는 이 값을
/// 서비스 호출에 명시적으로 넘깁니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 계정 ID
    pub user_id: String,
}

impl AuthenticatedUser {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into() }
    }

    pub fn identity(&self) -> &str {
        &self.user_id
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string(),
            )
            .into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extract_from_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(AuthenticatedUser::new("alice@example.com"));

        let user = AuthenticatedUser::extract(&req).await.unwrap();
        assert_eq!(user.identity(), "alice@example.com");
    }

    #[actix_web::test]
    async fn test_missing_identity_is_unauthorized() {
        let req = TestRequest::default().to_http_request();

        let err = AuthenticatedUser::extract(&req).await.unwrap_err();
        assert_eq!(err.as_response_error().status_code(), actix_web::http::StatusCode::UNAUTHORIZED);
    }
}
