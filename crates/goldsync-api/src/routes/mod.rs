//! API 라우트.
//!
//! # 라우트 구조
//!
//! - `/`, `/routes` - 사용 가능한 동기화 요청 목록
//! - `/add-current-data?data=...` - 시계열 동기화 트리거
//! - `/health` - 헬스 체크 (liveness)
//! - `/health/ready` - 버전/업타임 (readiness)
//! - `/openapi.json` - OpenAPI 문서

pub mod health;
pub mod listing;
pub mod sync;

pub use health::{health_router, HealthResponse};
pub use listing::{listing_router, RoutesResponse};
pub use sync::{sync_router, AddCurrentDataQuery};

use axum::Router;
use std::sync::Arc;

use crate::openapi::openapi_router;
use crate::state::AppState;

/// 전체 API 라우터 생성.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(listing_router())
        .merge(sync_router())
        .nest("/health", health_router())
        .merge(openapi_router())
}
