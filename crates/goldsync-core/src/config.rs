//! 설정 관리.
//!
//! 로드 순서: 내장 기본값 → TOML 파일(선택) → `GOLDSYNC__` 접두사 환경 변수.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use crate::logging::LogConfig;

/// 설정 파일 경로를 지정하는 환경 변수.
pub const CONFIG_PATH_ENV: &str = "GOLDSYNC_CONFIG";

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// 동기화 한 번에 일어나는 최대 순차 외부 호출 수 (환율: 조회, 조회, 기록, 재조회).
pub const MAX_SYNC_OUTBOUND_CALLS: u32 = 4;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 서버 설정
    pub server: ServerConfig,
    /// 백엔드 저장소 설정
    pub backend: BackendConfig,
    /// 시세 제공자 설정
    pub providers: ProvidersConfig,
    /// 외부 HTTP 클라이언트 설정
    pub http: HttpConfig,
    /// CORS 설정
    pub cors: CorsConfig,
    /// 로깅 설정
    pub logging: LogConfig,
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
    /// 요청 처리 제한 시간 (초). 외부 호출 타임아웃 합보다 커야 합니다.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            request_timeout_secs: 150,
        }
    }
}

impl ServerConfig {
    /// 소켓 주소 반환.
    ///
    /// # Errors
    /// `host:port` 형식이 유효하지 않으면 `AddrParseError`를 반환합니다.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// 백엔드 저장소 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// 기본 URL (끝의 `/` 없이)
    pub base_url: String,
    /// 자체 서명 인증서 허용 여부
    pub accept_invalid_certs: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "https://34.117.31.73.nip.io".to_string(),
            accept_invalid_certs: true,
        }
    }
}

/// 시세 제공자 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProvidersConfig {
    /// Finnomena API 기본 URL (태국 금 시세, 미국 금 현물 일봉)
    pub finnomena_base_url: String,
    /// Alpha Vantage API 기본 URL
    pub alphavantage_base_url: String,
    /// Alpha Vantage API 키
    pub alphavantage_api_key: String,
    /// 환율 기준 통화
    pub fx_from_symbol: String,
    /// 환율 대상 통화
    pub fx_to_symbol: String,
    /// 미국 금 일봉 조회 구간 (오늘 기준 N일 전부터)
    pub goldus_lookback_days: u32,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            finnomena_base_url: "https://www.finnomena.com".to_string(),
            alphavantage_base_url: "https://www.alphavantage.co".to_string(),
            alphavantage_api_key: "demo".to_string(),
            fx_from_symbol: "USD".to_string(),
            fx_to_symbol: "THB".to_string(),
            goldus_lookback_days: 7,
        }
    }
}

/// 외부 HTTP 클라이언트 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
    /// User-Agent 헤더
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: concat!("goldsync/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// CORS 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CorsConfig {
    /// 허용 origin 목록 (비어 있으면 모든 origin 허용)
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 기본값과 환경 변수만 사용합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // 기본값으로 시작
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // 파일에서 로드
            .add_source(config::File::from(path.as_ref()).required(false))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix("GOLDSYNC")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 외부 호출이 모두 타임아웃까지 걸릴 때의 동기화 소요 시간.
    pub fn worst_case_sync_duration(&self) -> Duration {
        self.http.timeout() * MAX_SYNC_OUTBOUND_CALLS
    }

    /// 서버 요청 타임아웃이 외부 호출 실패를 먼저 보고할 만큼 긴지 확인합니다.
    ///
    /// 짧으면 외부 호출 에러(500) 대신 본문 없는 408이 나갑니다.
    pub fn request_timeout_covers_sync(&self) -> bool {
        self.server.request_timeout() > self.worst_case_sync_duration()
    }

    /// `GOLDSYNC_CONFIG` 또는 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load(path)
    }
}
