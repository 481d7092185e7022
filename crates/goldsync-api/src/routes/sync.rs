//! 시계열 동기화 endpoint.
//!
//! `GET /add-current-data?data=goldus|goldth|currency`

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, warn};
use utoipa::IntoParams;

use goldsync_core::{SyncError, SyncOutcome, SyncTarget};

use crate::error::{api_error, ApiErrorResponse, ApiResult};
use crate::state::AppState;

/// 동기화 요청 쿼리.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AddCurrentDataQuery {
    /// 동기화 대상 ("goldus", "goldth", "currency")
    pub data: Option<String>,
}

impl AddCurrentDataQuery {
    /// 대상 selector를 검증합니다. 누락도 잘못된 selector로 취급합니다.
    pub fn target(&self) -> Result<SyncTarget, SyncError> {
        match self.data.as_deref() {
            Some(raw) => raw.parse(),
            None => Err(SyncError::InvalidSelector("<missing>".to_string())),
        }
    }
}

/// 대상 시계열을 업스트림 최신 값으로 동기화.
///
/// GET /add-current-data
#[utoipa::path(
    get,
    path = "/add-current-data",
    tag = "sync",
    params(AddCurrentDataQuery),
    responses(
        (status = 200, description = "동기화 결과", body = SyncOutcome),
        (status = 400, description = "잘못된 data 파라미터", body = ApiErrorResponse),
        (status = 500, description = "백엔드/업스트림 실패", body = ApiErrorResponse)
    )
)]
pub async fn add_current_data(
    State(state): State<Arc<AppState>>,
    query: Result<Query<AddCurrentDataQuery>, QueryRejection>,
) -> ApiResult<Json<SyncOutcome>> {
    // 중복/깨진 쿼리도 같은 에러 본문으로 응답
    let Query(query) = query.map_err(|rejection| {
        warn!("Rejected sync query: {}", rejection.body_text());
        api_error(SyncError::InvalidSelector(rejection.body_text()))
    })?;

    let target = query.target().map_err(|e| {
        warn!(data = ?query.data, "Rejected sync request: {}", e);
        api_error(e)
    })?;

    let outcome = state.sync.run(target).await.map_err(|e| {
        error!(%target, "Sync failed: {}", e);
        api_error(e)
    })?;

    info!(%target, added = outcome.is_added(), "Sync finished");
    Ok(Json(outcome))
}

pub fn sync_router() -> Router<Arc<AppState>> {
    Router::new().route("/add-current-data", get(add_current_data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::create_test_state;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn app() -> Router {
        // 연결이 거부되는 주소: selector 검증 단계에서 끝나야 함
        let state = Arc::new(create_test_state("http://127.0.0.1:9"));
        sync_router().with_state(state)
    }

    async fn error_body(uri: &str) -> (StatusCode, ApiErrorResponse) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[test]
    fn test_query_target_parsing() {
        let query = AddCurrentDataQuery {
            data: Some("goldth".to_string()),
        };
        assert_eq!(query.target().unwrap(), SyncTarget::GoldTh);

        let missing = AddCurrentDataQuery { data: None };
        assert!(missing.target().unwrap_err().is_client_error());
    }

    #[tokio::test]
    async fn test_invalid_selector_returns_400() {
        let (status, body) = error_body("/add-current-data?data=silver").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "INVALID_ARGUMENT");
        assert_eq!(
            body.message,
            "Invalid data parameter: silver. Must be one of: 'goldus', 'goldth', 'currency'"
        );
    }

    #[tokio::test]
    async fn test_selector_is_case_sensitive() {
        let (status, _) = error_body("/add-current-data?data=GOLDTH").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_selector_returns_400() {
        let (status, body) = error_body("/add-current-data").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "INVALID_ARGUMENT");
    }

    #[tokio::test]
    async fn test_duplicate_selector_returns_json_400() {
        let (status, body) = error_body("/add-current-data?data=goldus&data=goldth").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "INVALID_ARGUMENT");
        assert!(body.timestamp.is_some());
    }

    #[tokio::test]
    async fn test_unreachable_backend_returns_500() {
        let (status, body) = error_body("/add-current-data?data=goldth").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "REQUEST_ERROR");
        assert!(body.message.starts_with("Request error: "));
    }
}
