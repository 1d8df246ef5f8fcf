//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 신원 미들웨어 (IdentityMiddleware)
//! - 인증은 상위 세션 계층(리버스 프록시, 호스트 시스템)이 수행
//! - 검증된 계정 ID가 담긴 헤더(`IDENTITY_HEADER`)를 읽어 request extension에 저장
//! - 헤더가 없거나 비어 있으면 401 응답
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::IdentityMiddleware;
//!
//! App::new()
//!     .service(
//!         web::scope("/api/v1/raven/users")
//!             .wrap(IdentityMiddleware::from_env())
//!             .route("", web::get().to(list_users))
//!     )
//!     .route("/health", web::get().to(health_check))
//! ```

pub mod identity_middleware;
mod identity_inner;

pub use identity_middleware::IdentityMiddleware;
