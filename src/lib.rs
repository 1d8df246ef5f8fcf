//! 채팅 사용자 서비스
//!
//! 채팅 앱(Raven)의 사용자 관련 엔드포인트를 제공하는 Rust 서비스입니다.
//! 인증은 상위 세션 계층이 담당하며, 이 서비스는 전달받은 신원으로 권한을 검사합니다.
//!
//! # Features
//!
//! - **현재 사용자 프로필**: 호출자 본인의 채팅 프로필 조회 (5분 캐시)
//! - **사용자 목록**: 전체 채팅 사용자를 이름순으로 정렬해 캐시
//! - **휴가 여부**: HR 모듈이 설치된 경우 오늘 근태 기록 확인
//! - **일괄 등록**: 기존 계정에 채팅 역할 부여
//! - **MongoDB**: 프로필/계정/HR 문서 저장소
//! - **Redis**: 프로세스 간 공유 캐시 (로컬 개발용 메모리 캐시 지원)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + IdentityMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 권한 검사, 캐싱, 등록 정책
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (trait + MongoDB 구현)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use chat_user_service::core::registry::ServiceRegistry;
//!
//! let registry = ServiceRegistry::initialize(database, cache).await;
//! let users = registry.chat_user_service.list_users("alice@example.com").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;

#[cfg(test)]
pub(crate) mod test_support;
