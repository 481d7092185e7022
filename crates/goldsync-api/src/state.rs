//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! 요청 간에 변경되는 상태는 없습니다. `Arc<AppState>`로 공유됩니다.

use goldsync_core::{AppConfig, SyncError};

use crate::services::SyncService;

/// 애플리케이션 공유 상태.
#[derive(Debug, Clone)]
pub struct AppState {
    /// 시계열 동기화 서비스
    pub sync: SyncService,

    /// 서버 시작 시간 (업타임 계산용)
    pub started_at: chrono::DateTime<chrono::Utc>,

    /// API 버전
    pub version: String,
}

impl AppState {
    pub fn new(sync: SyncService) -> Self {
        Self {
            sync,
            started_at: chrono::Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// 설정에서 상태를 구성합니다.
    pub fn from_config(config: &AppConfig) -> Result<Self, SyncError> {
        Ok(Self::new(SyncService::from_config(config)?))
    }

    /// 서버 업타임(초).
    pub fn uptime_secs(&self) -> i64 {
        (chrono::Utc::now() - self.started_at).num_seconds()
    }
}

/// 테스트용 상태 생성 (모든 외부 URL을 `base_url`로).
#[cfg(any(test, feature = "test-utils"))]
pub fn create_test_state(base_url: &str) -> AppState {
    let mut config = AppConfig::default();
    config.backend.base_url = base_url.to_string();
    config.backend.accept_invalid_certs = false;
    config.providers.finnomena_base_url = base_url.to_string();
    config.providers.alphavantage_base_url = base_url.to_string();
    config.providers.alphavantage_api_key = "test-key".to_string();
    config.http.timeout_secs = 5;

    AppState::from_config(&config).expect("Failed to create test state")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_default_config() {
        let state = AppState::from_config(&AppConfig::default()).unwrap();
        assert!(!state.version.is_empty());
        assert!(state.uptime_secs() >= 0);
    }
}
