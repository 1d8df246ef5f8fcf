//! # 채팅 사용자 응답 DTO 모듈
//!
//! 엔티티를 그대로 직렬화하지 않고, 응답 전용 구조체로 변환하여 반환합니다.
//!
//! - [`ChatUserResponse`] - 현재 사용자의 전체 프로필
//! - [`ChatUserSummary`] - 사용자 목록의 공개 필드 (캐시에 저장되는 형태)
//! - [`AddUsersResponse`] - 일괄 등록 결과 (성공/실패 계정)
//! - [`LeaveStatusResponse`] - 휴가 여부

pub mod chat_user_response;
pub mod enrollment_response;
pub mod leave_status_response;

pub use chat_user_response::{ChatUserResponse, ChatUserSummary};
pub use enrollment_response::{AccountResponse, AddUsersResponse};
pub use leave_status_response::LeaveStatusResponse;
