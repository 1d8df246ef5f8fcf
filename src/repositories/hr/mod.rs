//! HR 모듈 데이터 액세스
//!
//! HR 모듈이 설치된 경우에만 조립되며, 직원과 근태 컬렉션을 읽기 전용으로 조회합니다.

pub mod hr_repo;

pub use hr_repo::{HrRepository, MongoHrRepository};
