//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 채팅 사용자 서비스가 다루는
//! 문서 구조와 API 계약, 요청 신원 모델을 정의합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - MongoDB 문서와 1:1 대응되는 엔티티 (ChatUser, Account, Employee, Attendance)
//! ├── DTOs          - 데이터 전송 객체 (Request/Response)
//! └── Models        - 요청 처리 중에만 존재하는 모델 (인증된 신원)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB, Cache)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 저장소 문서
//!
//! 호스트 시스템이 소유한 컬렉션의 문서 구조입니다.
//! 이 서비스는 `Account`에 역할을 하나 추가하는 것 외에는 문서를 수정하지 않습니다.
//!
//! ### [`dto`] - API 계약
//!
//! 저장소 필드명(`_id`)을 외부에 노출하지 않도록 응답은 항상 DTO로 변환합니다.
//!
//! ```rust,ignore
//! use crate::domain::dto::users::response::ChatUserResponse;
//!
//! let profile = chat_user_service.get_current_profile(&identity).await?;
//! Ok(HttpResponse::Ok().json(ChatUserResponse::from(profile)))
//! ```
//!
//! ### [`models`] - 요청 모델
//!
//! 미들웨어가 요청 확장(extensions)에 넣어두는 [`models::auth::AuthenticatedUser`] 등
//! 영속화되지 않는 모델입니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use models::auth::AuthenticatedUser;
