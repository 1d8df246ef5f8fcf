//! # Core Module
//!
//! 애플리케이션 전역에서 쓰이는 에러 타입과 서비스 조립을 담당합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 모든 계층이 공유하는 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 상태 코드와 JSON 본문 자동 변환
//! - **자동 변환**: MongoDB/Redis 에러의 `From` 구현
//!
//! ### [`registry`] - 서비스 조립
//! - **ServiceRegistry**: 저장소와 서비스를 시작 시 한 번 조립하는 컴포지션 루트
//! - **RegistrySettings**: 역할/관리자 신원 등 조립 시점 설정
//!
//! 서비스는 전역 상태를 조회하지 않고 생성자로 의존성을 받으므로,
//! 테스트에서는 메모리 구현체로 같은 그래프를 조립합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use actix_web::{web, App, HttpServer};
//! use crate::core::ServiceRegistry;
//!
//! let registry = web::Data::new(ServiceRegistry::initialize(database, cache).await);
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(registry.clone())
//!         .configure(configure_all_routes)
//! })
//! ```
//!
//! 핸들러에서는 `AppResult`를 그대로 반환하면 HTTP 응답으로 변환됩니다.
//!
//! ```rust,ignore
//! async fn handler(registry: web::Data<ServiceRegistry>, user: AuthenticatedUser) -> AppResult<HttpResponse> {
//!     let profile = registry.chat_user_service.get_current_profile(user.identity()).await?;
//!     Ok(HttpResponse::Ok().json(ChatUserResponse::from(profile)))
//! }
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
