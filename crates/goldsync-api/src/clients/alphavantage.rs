//! Alpha Vantage 환율 클라이언트.

use reqwest::Client;

use goldsync_core::{FxDailyResponse, FxDailySeries, HttpConfig, ProvidersConfig, SyncError};

use super::http::{build_client, fetch_json};

const SOURCE: &str = "alphavantage";

#[derive(Clone)]
pub struct AlphaVantageClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for AlphaVantageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlphaVantageClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .finish()
    }
}

impl AlphaVantageClient {
    pub fn new(config: &ProvidersConfig, http: &HttpConfig) -> Result<Self, SyncError> {
        Ok(Self {
            client: build_client(http, false)?,
            base_url: config.alphavantage_base_url.trim_end_matches('/').to_string(),
            api_key: config.alphavantage_api_key.clone(),
        })
    }

    /// `FX_DAILY` 일별 환율 시계열.
    pub async fn fx_daily(
        &self,
        from_symbol: &str,
        to_symbol: &str,
    ) -> Result<FxDailySeries, SyncError> {
        let url = format!("{}/query", self.base_url);
        let request = self.client.get(&url).query(&[
            ("function", "FX_DAILY"),
            ("from_symbol", from_symbol),
            ("to_symbol", to_symbol),
            ("apikey", self.api_key.as_str()),
        ]);
        let response: FxDailyResponse = fetch_json(request, SOURCE).await?;
        response.into_series()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_api_key() {
        let config = ProvidersConfig {
            alphavantage_api_key: "secret-key".to_string(),
            ..ProvidersConfig::default()
        };
        let client = AlphaVantageClient::new(&config, &HttpConfig::default()).unwrap();
        let rendered = format!("{:?}", client);
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("alphavantage.co"));
    }
}
