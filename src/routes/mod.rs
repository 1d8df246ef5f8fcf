//! # Route Configuration
//!
//! 모든 HTTP 라우트를 등록합니다.
//!
//! | 경로 | 미들웨어 |
//! |------|----------|
//! | `/health` | 없음 |
//! | `/api/v1/raven/users/**` | [`IdentityMiddleware`] |

use crate::config::CacheConfig;
use crate::core::registry::ServiceRegistry;
use crate::handlers;
use crate::middlewares::IdentityMiddleware;
use actix_web::{web, HttpResponse};
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_chat_user_routes(cfg);
}

/// 채팅 사용자 라우트
///
/// `/me`, `/on-leave`, `/add`는 빈 경로(`""`)보다 먼저 등록합니다.
///
/// ```bash
/// curl http://localhost:8080/api/v1/raven/users/me \
///   -H "X-Authenticated-User: alice@example.com"
/// ```
fn configure_chat_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/raven/users")
            .wrap(IdentityMiddleware::from_env())
            .service(handlers::users::get_current_profile)
            .service(handlers::users::add_users)
            .route("/on-leave", web::route().to(handlers::users::is_user_on_leave))
            .service(handlers::users::list_users),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "chat_user_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "cache": "Redis",
///     "hr_module": false
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(registry: web::Data<ServiceRegistry>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "chat_user_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": CacheConfig::backend().label(),
            "hr_module": registry.leave_service.hr_installed()
        }
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{test, App};
    use serde_json::Value;
    use crate::caching::memory::MemoryCache;
    use crate::core::registry::RegistrySettings;
    use crate::test_support::{InMemoryAccountRepository, InMemoryChatUserRepository};
    use super::*;

    #[actix_web::test]
    async fn test_health_check_reports_hr_module() {
        let registry = web::Data::new(ServiceRegistry::assemble(
            Arc::new(InMemoryAccountRepository::default()),
            Arc::new(InMemoryChatUserRepository::default()),
            None,
            Arc::new(MemoryCache::new()),
            RegistrySettings {
                chat_role: "Raven User".to_string(),
                admin_identity: "Administrator".to_string(),
                user_manager_role: "System Manager".to_string(),
            },
        ));
        let app = test::init_service(App::new().app_data(registry).configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "chat_user_service");
        assert_eq!(body["features"]["hr_module"], false);
    }

    #[actix_web::test]
    async fn test_chat_user_scope_requires_identity() {
        let registry = web::Data::new(ServiceRegistry::assemble(
            Arc::new(InMemoryAccountRepository::default()),
            Arc::new(InMemoryChatUserRepository::default()),
            None,
            Arc::new(MemoryCache::new()),
            RegistrySettings {
                chat_role: "Raven User".to_string(),
                admin_identity: "Administrator".to_string(),
                user_manager_role: "System Manager".to_string(),
            },
        ));
        let app = test::init_service(App::new().app_data(registry).configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/api/v1/raven/users/me").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }
}
