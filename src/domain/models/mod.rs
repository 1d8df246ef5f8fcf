//! # Domain Models Module
//!
//! 영속화되지 않고 요청 처리 동안에만 존재하는 모델을 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - **영속성**: MongoDB 컬렉션에 저장되는 문서
//! - **정체성**: 문자열 `_id`로 식별
//!
//! ### Models (`./`)
//! - **요청 범위**: 미들웨어가 만들어 요청 확장에 저장하고, 핸들러가 추출
//! - **예시**: [`auth::AuthenticatedUser`]

pub mod auth;
