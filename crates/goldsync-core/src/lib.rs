//! # Goldsync Core
//!
//! 금 시세/환율 동기화 서비스의 핵심 타입을 제공합니다.
//!
//! - 동기화 대상 selector와 달력 날짜 값
//! - 업스트림 시세 제공자와 백엔드 저장소의 페이로드
//! - 동기화 결과 응답
//! - 에러 타입
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
