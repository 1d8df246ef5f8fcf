//! 요청 신원 미들웨어
//!
//! 상위 세션 계층이 설정한 신원 헤더를 읽어 [`AuthenticatedUser`]로 변환합니다.
//!
//! [`AuthenticatedUser`]: crate::domain::models::auth::AuthenticatedUser

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::config::IdentityConfig;
use crate::middlewares::identity_inner::IdentityMiddlewareService;

/// 신원 헤더 미들웨어
pub struct IdentityMiddleware {
    /// 신원이 담긴 헤더 이름
    header_name: Rc<str>,
}

impl IdentityMiddleware {
    pub fn new(header_name: impl Into<String>) -> Self {
        Self {
            header_name: Rc::from(header_name.into()),
        }
    }

    /// `IDENTITY_HEADER` 환경 변수의 헤더 이름 사용
    pub fn from_env() -> Self {
        Self::new(IdentityConfig::header_name())
    }
}

impl<S, B> Transform<S, ServiceRequest> for IdentityMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = IdentityMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(IdentityMiddlewareService {
            service: Rc::new(service),
            header_name: self.header_name.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};
    use crate::domain::models::auth::AuthenticatedUser;

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id)
    }

    #[actix_web::test]
    async fn test_identity_header_is_forwarded_to_handler() {
        let app = test::init_service(
            App::new().service(
                web::scope("/api")
                    .wrap(IdentityMiddleware::new("X-Authenticated-User"))
                    .route("/whoami", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/whoami")
            .insert_header(("X-Authenticated-User", "alice@example.com"))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "alice@example.com");
    }

    #[actix_web::test]
    async fn test_missing_or_blank_identity_is_rejected() {
        let app = test::init_service(
            App::new().service(
                web::scope("/api")
                    .wrap(IdentityMiddleware::new("X-Authenticated-User"))
                    .route("/whoami", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/whoami").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), actix_web::http::StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/api/whoami")
            .insert_header(("X-Authenticated-User", "   "))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }
}
