//! # Data Transfer Objects Module
//!
//! HTTP 경계에서 사용하는 요청/응답 구조체를 정의합니다.
//!
//! ## 설계 원칙
//!
//! - **저장소 필드 은닉**: 엔티티의 `_id`는 응답에서 `name`으로 노출
//! - **입력 관대함**: 프론트엔드가 보내는 두 가지 형태(배열, JSON 문자열)를 모두 수용
//! - **검증**: `validator` 크레이트로 쿼리 파라미터 제약 검사
//!
//! ```text
//! dto/
//! └── users/
//!     ├── request/     - AddUsersRequest, LeaveQuery
//!     └── response/    - ChatUserResponse, ChatUserSummary, AddUsersResponse, LeaveStatusResponse
//! ```

pub mod users;

pub use users::*;
