//! 금/환율 시계열 동기화 REST API.
//!
//! # 모듈 구성
//!
//! - [`state`]: 애플리케이션 공유 상태 (AppState)
//! - [`routes`]: REST API 엔드포인트
//! - [`services`]: 동기화 흐름
//! - [`clients`]: 백엔드/업스트림 HTTP 클라이언트
//! - [`openapi`]: OpenAPI 문서

pub mod clients;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod services;
pub mod state;

pub use clients::{AlphaVantageClient, BackendClient, FinnomenaClient};
pub use error::{api_error, ApiErrorResponse, ApiResult};
pub use routes::*;
pub use services::{FxPair, SyncService};
pub use state::AppState;

#[cfg(any(test, feature = "test-utils"))]
pub use state::create_test_state;
