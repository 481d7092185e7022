//! API 에러 응답 타입.
//!
//! 모든 엔드포인트가 같은 에러 형식을 사용합니다.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use goldsync_core::SyncError;

/// 잘못된 selector
pub const CODE_INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
/// 외부 서비스 통신 실패
pub const CODE_REQUEST_ERROR: &str = "REQUEST_ERROR";
/// 그 외 처리 실패
pub const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// API 에러 응답.
///
/// # 예시
///
/// ```json
/// {
///   "code": "INVALID_ARGUMENT",
///   "message": "Invalid data parameter: silver. Must be one of: 'goldus', 'goldth', 'currency'",
///   "timestamp": 1747796400
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// 에러 코드 (예: "INVALID_ARGUMENT", "REQUEST_ERROR")
    pub code: String,
    /// 사람이 읽을 수 있는 에러 메시지
    pub message: String,
    /// 에러 발생 타임스탬프 (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl ApiErrorResponse {
    /// 타임스탬프 포함 에러 생성.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            timestamp: Some(chrono::Utc::now().timestamp()),
        }
    }
}

impl std::fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiErrorResponse {}

impl From<&SyncError> for ApiErrorResponse {
    fn from(err: &SyncError) -> Self {
        let code = match err {
            SyncError::InvalidSelector(_) => CODE_INVALID_ARGUMENT,
            SyncError::Request(_) => CODE_REQUEST_ERROR,
            SyncError::Payload(_) | SyncError::Config(_) => CODE_INTERNAL_ERROR,
        };
        Self::new(code, err.to_string())
    }
}

/// 에러 종류별 HTTP 상태 코드.
pub fn status_for(err: &SyncError) -> StatusCode {
    if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// 핸들러에서 바로 반환할 수 있는 에러 튜플로 변환.
pub fn api_error(err: SyncError) -> (StatusCode, Json<ApiErrorResponse>) {
    (status_for(&err), Json(ApiErrorResponse::from(&err)))
}

/// API 핸들러 Result 타입 별칭.
pub type ApiResult<T> = Result<T, (StatusCode, Json<ApiErrorResponse>)>;
