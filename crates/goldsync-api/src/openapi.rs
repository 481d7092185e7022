//! OpenAPI 문서화 설정.
//!
//! utoipa로 OpenAPI 3.0 문서를 생성해 `/openapi.json`에서 제공합니다.
//! 대화형 문서 UI는 제공하지 않습니다.
//!
//! 새 endpoint를 추가할 때:
//!
//! 1. 응답 타입에 `#[derive(ToSchema)]` 추가
//! 2. 핸들러에 `#[utoipa::path(...)]` 어노테이션 추가
//! 3. 이 파일의 `components(schemas(...))` 및 `paths(...)` 섹션에 추가

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use goldsync_core::{SyncOutcome, SyncStatus, SyncTarget};

use crate::error::ApiErrorResponse;
use crate::routes::{HealthResponse, RoutesResponse};

/// Gold Sync API 문서.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gold Sync API",
        description = r#"
금/환율 시계열 동기화 서비스입니다.

`GET /add-current-data?data=...` 호출 시 업스트림(Finnomena, Alpha Vantage)의
최신 값이 백엔드 저장소보다 새로우면 한 건을 기록합니다.

- `goldth`: 태국 금 시세 (Finnomena)
- `goldus`: 미국 금 현물 일봉 (Finnomena/Polygon)
- `currency`: USD/THB 일간 환율 (Alpha Vantage)
"#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
    ),
    tags(
        (name = "routes", description = "사용 가능한 요청 목록"),
        (name = "sync", description = "시계열 동기화"),
        (name = "health", description = "서버 상태 확인"),
    ),
    components(
        schemas(
            RoutesResponse,
            SyncOutcome,
            SyncStatus,
            SyncTarget,
            ApiErrorResponse,
            HealthResponse,
        )
    ),
    paths(
        crate::routes::listing::list_routes,
        crate::routes::listing::list_routes_alias,
        crate::routes::sync::add_current_data,
        crate::routes::health::health_check,
        crate::routes::health::health_ready,
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// `/openapi.json` 라우터.
pub fn openapi_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/openapi.json", get(openapi_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_valid() {
        let spec = ApiDoc::openapi();
        let json = serde_json::to_string_pretty(&spec).unwrap();

        assert!(json.contains("Gold Sync API"));
        assert!(json.contains("/add-current-data"));
        assert!(json.contains("/routes"));
        assert!(json.contains("/health/ready"));
    }

    #[test]
    fn test_openapi_contains_schemas() {
        let spec = ApiDoc::openapi();
        let json = serde_json::to_string(&spec).unwrap();

        assert!(json.contains("SyncOutcome"));
        assert!(json.contains("ApiErrorResponse"));
        assert!(json.contains("RoutesResponse"));
        assert!(json.contains("HealthResponse"));
    }

    #[test]
    fn test_openapi_router_creates() {
        let _router: Router<()> = openapi_router();
    }
}
