//! 공용 요청 처리.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use goldsync_core::{HttpConfig, SyncError};

/// 에러 메시지에 포함할 응답 본문 최대 길이.
const ERROR_BODY_LIMIT: usize = 200;

/// 설정에 맞춘 클라이언트 생성.
pub(crate) fn build_client(
    http: &HttpConfig,
    accept_invalid_certs: bool,
) -> Result<Client, SyncError> {
    Client::builder()
        .timeout(http.timeout())
        .user_agent(http.user_agent.as_str())
        .danger_accept_invalid_certs(accept_invalid_certs)
        .build()
        .map_err(|e| SyncError::Config(format!("failed to build HTTP client: {}", e)))
}

/// 요청을 보내고 JSON 본문을 디코딩합니다.
///
/// 전송 실패와 비정상 상태 코드는 `Request`, 디코딩 실패는 `Payload`.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
    source: &str,
) -> Result<T, SyncError> {
    let response = request
        .send()
        .await
        .map_err(|e| request_error(source, e))?;

    let status = response.status();
    // 쿼리에 API 키가 실리므로 경로만 남긴다
    let path = response.url().path().to_string();
    let body = response
        .text()
        .await
        .map_err(|e| request_error(source, e))?;

    if !status.is_success() {
        error!(source, %status, %path, "Non-success response");
        return Err(SyncError::Request(format!(
            "{} returned status {} for {}: {}",
            source,
            status,
            path,
            truncate(&body, ERROR_BODY_LIMIT)
        )));
    }

    debug!(source, %path, body = %truncate(&body, 2_000), "Response received");

    serde_json::from_str(&body)
        .map_err(|e| SyncError::Payload(format!("failed to parse {} response: {}", source, e)))
}

fn request_error(source: &str, err: reqwest::Error) -> SyncError {
    let path = err.url().map(|url| url.path().to_string()).unwrap_or_default();
    let err = err.without_url();
    error!(source, %path, error = %err, "Request failed");
    SyncError::Request(format!("{} {}: {}", source, path, err))
}

fn truncate(body: &str, limit: usize) -> &str {
    match body.char_indices().nth(limit) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("abc", 10), "abc");
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate("ทองคำ", 2), "ทอ");
    }

    #[test]
    fn test_build_client_from_defaults() {
        assert!(build_client(&HttpConfig::default(), true).is_ok());
    }
}
