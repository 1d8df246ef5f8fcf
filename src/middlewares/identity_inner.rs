use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::core::AppError;
use crate::domain::models::auth::AuthenticatedUser;

/// 신원 미들웨어 서비스
///
/// 헤더 검사 후 다음 서비스로 요청을 전달합니다.
pub struct IdentityMiddlewareService<S> {
    pub service: Rc<S>,
    pub header_name: Rc<str>,
}

impl<S, B> Service<ServiceRequest> for IdentityMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let header_name = self.header_name.clone();

        Box::pin(async move {
            match extract_identity(&req, &header_name) {
                Err(err) => {
                    log::warn!("신원 확인 실패: {} {} ({})", req.method(), req.path(), err);
                    let response = HttpResponse::Unauthorized()
                        .json(serde_json::json!({
                            "error": "authentication_required",
                            "message": "인증된 사용자 정보가 필요합니다"
                        }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                }
                Ok(user) => {
                    log::debug!("요청 신원: {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn extract_identity(req: &ServiceRequest, header_name: &str) -> Result<AuthenticatedUser, AppError> {
    let value = req
        .headers()
        .get(header_name)
        .ok_or_else(|| AppError::AuthenticationError(format!("{} 헤더가 없습니다", header_name)))?
        .to_str()
        .map_err(|_| AppError::AuthenticationError(format!("{} 헤더 값이 올바르지 않습니다", header_name)))?
        .trim();

    if value.is_empty() {
        return Err(AppError::AuthenticationError(format!("{} 헤더가 비어 있습니다", header_name)));
    }

    Ok(AuthenticatedUser::new(value))
}
