//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청 파싱과 응답 변환만 담당하고, 권한 검사와 캐싱은 서비스 계층에 위임합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Raven 프론트엔드)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP + 신원 헤더
//! ┌─────────────────────▼───────────────────────┐
//!   IdentityMiddleware - 신원 추출                ← Middleware
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 권한 검사, 캐싱, 등록 정책          ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - MongoDB 접근                   ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 의존성 접근
//!
//! 서비스는 `web::Data<ServiceRegistry>`로 주입받습니다.
//!
//! ```rust,ignore
//! #[get("/me")]
//! pub async fn get_current_profile(
//!     registry: web::Data<ServiceRegistry>,
//!     user: AuthenticatedUser,
//! ) -> AppResult<HttpResponse> {
//!     let profile = registry.chat_user_service.get_current_profile(user.identity()).await?;
//!     Ok(HttpResponse::Ok().json(ChatUserResponse::from(profile)))
//! }
//! ```
//!
//! ## 에러 처리
//!
//! 핸들러는 `AppResult<HttpResponse>`를 반환하며, `AppError`의 `ResponseError` 구현이
//! 상태 코드와 JSON 본문을 결정합니다.

pub mod users;
