//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 단위 구조체의 연관 함수로 노출하며,
//! 서비스 계층은 설정을 직접 읽지 않고 조립 시점(`core::registry`)에 값을 주입받습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, MongoDB, 캐시 설정
//! - [`chat_config`] - 채팅 역할, 설치된 앱, 신원 헤더 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리
//!
//! `PROFILE` 값에 따라 `.env.dev` / `.env.prod` 파일이 로드되고,
//! `ENVIRONMENT` 값으로 개발/테스트/스테이징/프로덕션을 구분합니다.
//!
//! ### 2. 안전한 기본값
//!
//! 모든 설정은 로컬 개발에서 바로 동작하는 기본값을 가집니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ChatConfig, ServerConfig, InstalledAppsConfig, HR_APP_NAME};
//!
//! let role = ChatConfig::chat_role();               // "Raven User"
//! let bind = ServerConfig::bind_address();          // "127.0.0.1:8080"
//! let hr = InstalledAppsConfig::is_installed(HR_APP_NAME);
//! ```

pub mod data_config;
pub mod chat_config;

pub use data_config::*;
pub use chat_config::*;
