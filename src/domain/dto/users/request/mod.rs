//! 채팅 사용자 요청 DTO

pub mod add_users_request;
pub mod leave_query;

pub use add_users_request::{AddUsersRequest, UsersInput};
pub use leave_query::LeaveQuery;
