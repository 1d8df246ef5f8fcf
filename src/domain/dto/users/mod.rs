//! # 채팅 사용자 DTO 모듈
//!
//! `/api/v1/raven/users` 하위 엔드포인트의 요청/응답 구조체입니다.
//!
//! ## JSON 예제
//!
//! ### 사용자 목록 (`GET /api/v1/raven/users`)
//! ```json
//! [
//!   {
//!     "name": "alice@example.com",
//!     "full_name": "Alice Kim",
//!     "first_name": "Alice",
//!     "user_image": "/files/alice.png",
//!     "enabled": true,
//!     "type": "User",
//!     "availability_status": "Available",
//!     "custom_status": null
//!   }
//! ]
//! ```
//!
//! ### 채팅 사용자 추가 (`POST /api/v1/raven/users/add`)
//! ```json
//! { "users": ["alice@example.com", "bob@example.com"] }
//! { "users": "[\"alice@example.com\", \"bob@example.com\"]" }
//! ```
//!
//! ```json
//! {
//!   "successful": [{ "name": "alice@example.com", "roles": [{ "role": "Raven User" }], ... }],
//!   "failed": [{ "name": "bob@example.com", "role_profile_name": "Sales", ... }]
//! }
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
