//! 라우트 목록 endpoint.
//!
//! `/`와 `/routes` 모두 같은 고정 목록을 반환합니다.

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use goldsync_core::SyncTarget;

use crate::state::AppState;

/// 라우트 목록 응답.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RoutesResponse {
    /// 동기화 요청 예시 경로
    pub routes: Vec<String>,
}

impl RoutesResponse {
    fn usage() -> Self {
        Self {
            routes: SyncTarget::ALL.iter().map(SyncTarget::usage_path).collect(),
        }
    }
}

/// 사용 가능한 API 라우트 목록.
///
/// GET /
#[utoipa::path(
    get,
    path = "/",
    tag = "routes",
    responses((status = 200, description = "동기화 요청 예시 목록", body = RoutesResponse))
)]
pub async fn list_routes() -> Json<RoutesResponse> {
    Json(RoutesResponse::usage())
}

/// 사용 가능한 API 라우트 목록 (별칭).
///
/// GET /routes
#[utoipa::path(
    get,
    path = "/routes",
    tag = "routes",
    responses((status = 200, description = "동기화 요청 예시 목록", body = RoutesResponse))
)]
pub async fn list_routes_alias() -> Json<RoutesResponse> {
    Json(RoutesResponse::usage())
}

pub fn listing_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_routes))
        .route("/routes", get(list_routes_alias))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn fetch_routes(uri: &str) -> RoutesResponse {
        let app = Router::new()
            .route("/", get(list_routes))
            .route("/routes", get(list_routes_alias));

        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_both_paths_return_same_listing() {
        let root = fetch_routes("/").await;
        let alias = fetch_routes("/routes").await;

        assert_eq!(
            root.routes,
            vec![
                "/add-current-data?data=goldus",
                "/add-current-data?data=goldth",
                "/add-current-data?data=currency",
            ]
        );
        assert_eq!(root.routes, alias.routes);
    }
}
