//! 동기화 서비스의 에러 타입.
//!
//! 외부 호출 실패는 두 갈래로만 구분합니다:
//! 네트워크/HTTP 상태 실패(`Request`)와 그 외 모든 처리 실패(`Payload`).

use thiserror::Error;

/// 동기화 에러.
#[derive(Debug, Error)]
pub enum SyncError {
    /// 허용되지 않은 selector 값
    #[error("Invalid data parameter: {0}. Must be one of: 'goldus', 'goldth', 'currency'")]
    InvalidSelector(String),

    /// 백엔드/업스트림 통신 실패 (연결 실패, 비정상 상태 코드)
    #[error("Request error: {0}")]
    Request(String),

    /// 응답 본문 처리 실패 (잘못된 JSON, 누락 필드, 빈 시계열, 날짜 파싱 실패)
    #[error("An error occurred: {0}")]
    Payload(String),

    /// 설정 에러
    #[error("Configuration error: {0}")]
    Config(String),
}

/// 동기화 작업을 위한 Result 타입.
pub type SyncResult<T> = Result<T, SyncError>;

impl SyncError {
    /// 호출자 입력 오류인지 확인합니다.
    pub fn is_client_error(&self) -> bool {
        matches!(self, SyncError::InvalidSelector(_))
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Payload(err.to_string())
    }
}

impl From<config::ConfigError> for SyncError {
    fn from(err: config::ConfigError) -> Self {
        SyncError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_selector_message() {
        let err = SyncError::InvalidSelector("silver".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid data parameter: silver. Must be one of: 'goldus', 'goldth', 'currency'"
        );
        assert!(err.is_client_error());
    }

    #[test]
    fn test_request_and_payload_prefixes() {
        let request = SyncError::Request("connection refused".to_string());
        assert_eq!(request.to_string(), "Request error: connection refused");
        assert!(!request.is_client_error());

        let payload = SyncError::Payload("missing field `data`".to_string());
        assert_eq!(payload.to_string(), "An error occurred: missing field `data`");
        assert!(!payload.is_client_error());
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: SyncError = parse_err.into();
        assert!(matches!(err, SyncError::Payload(_)));
    }
}
