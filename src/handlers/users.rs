//! # Chat User HTTP Handlers
//!
//! 채팅 사용자 관련 HTTP 엔드포인트 핸들러입니다.
//! 모든 핸들러는 [`IdentityMiddleware`]가 설정한 신원을 [`AuthenticatedUser`]로 받아
//! 서비스에 명시적으로 전달합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 권한 |
//! |--------|------|------|------|
//! | `GET` | `/api/v1/raven/users/me` | 현재 사용자 채팅 프로필 | 채팅 역할 |
//! | `GET` | `/api/v1/raven/users` | 전체 채팅 사용자 목록 | 채팅 역할 |
//! | 모든 메서드 | `/api/v1/raven/users/on-leave?user=<id>` | 오늘 휴가 여부 | 로그인 |
//! | `POST` | `/api/v1/raven/users/add` | 계정에 채팅 역할 일괄 부여 | 사용자 관리 역할 |
//!
//! [`IdentityMiddleware`]: crate::middlewares::IdentityMiddleware

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::{
    core::{
        errors::{AppError, AppResult},
        registry::ServiceRegistry,
    },
    domain::{
        dto::users::{
            request::{AddUsersRequest, LeaveQuery},
            response::{AccountResponse, AddUsersResponse, ChatUserResponse, LeaveStatusResponse},
        },
        models::auth::AuthenticatedUser,
    },
    services::permissions::ensure_manager_role,
    utils::string_utils::validate_required_string,
};

/// 현재 사용자 채팅 프로필 조회
///
/// # 응답
///
/// - `200 OK` - [`ChatUserResponse`]
/// - `403 Forbidden` - 채팅 역할 없음
/// - `404 Not Found` - 계정에 연결된 채팅 프로필 없음
#[get("/me")]
pub async fn get_current_profile(
    registry: web::Data<ServiceRegistry>,
    user: AuthenticatedUser,
) -> AppResult<HttpResponse> {
    let profile = registry
        .chat_user_service
        .get_current_profile(user.identity())
        .await?;

    Ok(HttpResponse::Ok().json(ChatUserResponse::from(profile)))
}

/// 전체 채팅 사용자 목록
///
/// `full_name` 오름차순으로 정렬된 요약 목록을 반환합니다.
///
/// ```bash
/// curl http://localhost:8080/api/v1/raven/users \
///   -H "X-Authenticated-User: alice@example.com"
/// ```
#[get("")]
pub async fn list_users(
    registry: web::Data<ServiceRegistry>,
    user: AuthenticatedUser,
) -> AppResult<HttpResponse> {
    let users = registry.chat_user_service.list_users(user.identity()).await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 오늘 휴가 여부 조회
///
/// HR 모듈이 없거나 조회에 실패해도 `{"on_leave": false}`로 응답합니다.
/// 메서드 제한이 없어 `web::route()`로 등록됩니다.
pub async fn is_user_on_leave(
    registry: web::Data<ServiceRegistry>,
    query: web::Query<LeaveQuery>,
) -> AppResult<HttpResponse> {
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;
    let user = validate_required_string(&query.user, "user")?;

    let on_leave = registry.leave_service.is_user_on_leave(&user).await;

    Ok(HttpResponse::Ok().json(LeaveStatusResponse { on_leave }))
}

/// 계정에 채팅 역할 일괄 부여
///
/// `users`는 JSON 배열 또는 JSON 배열을 인코딩한 문자열입니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/raven/users/add \
///   -H "X-Authenticated-User: Administrator" \
///   -H "Content-Type: application/json" \
///   -d '{"users": ["a@example.com", "b@example.com"]}'
/// ```
///
/// # 응답
///
/// - `200 OK` - [`AddUsersResponse`]
/// - `400 Bad Request` - `users` 파싱 실패
/// - `403 Forbidden` - 사용자 관리 역할 없음
/// - `404 Not Found` - 존재하지 않는 계정 (아무것도 수정되지 않음)
#[post("/add")]
pub async fn add_users(
    registry: web::Data<ServiceRegistry>,
    user: AuthenticatedUser,
    payload: web::Json<AddUsersRequest>,
) -> AppResult<HttpResponse> {
    ensure_manager_role(registry.permissions.as_ref(), user.identity(), &registry.user_manager_role).await?;

    let ids = payload.into_inner().users.into_ids()?;
    log::info!("채팅 사용자 일괄 등록 요청: {} ({}건)", user.identity(), ids.len());

    let outcome = registry.enrollment_service.add_users(ids).await?;

    Ok(HttpResponse::Ok().json(AddUsersResponse {
        successful: outcome.successful.into_iter().map(AccountResponse::from).collect(),
        failed: outcome.failed.into_iter().map(AccountResponse::from).collect(),
    }))
}
