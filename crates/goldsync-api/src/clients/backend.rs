//! 백엔드 저장소 클라이언트.

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use goldsync_core::{
    BackendConfig, BackendSeries, CurrencyRecord, GoldCreateRequest, GoldSeries, HttpConfig,
    SyncError,
};

use super::http::{build_client, fetch_json};

const SOURCE: &str = "backend";

/// 금/환율 이력을 보관하는 REST 저장소.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &BackendConfig, http: &HttpConfig) -> Result<Self, SyncError> {
        Ok(Self {
            client: build_client(http, config.accept_invalid_certs)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 금 시계열 조회 (캐시 우회).
    ///
    /// GET /finnomenaGold/get-gold-data/?db_choice=..&cache=False&frame=..
    pub async fn gold_series(&self, series: GoldSeries) -> Result<BackendSeries, SyncError> {
        let url = format!("{}/finnomenaGold/get-gold-data/", self.base_url);
        let request = self.client.get(&url).query(&[
            ("db_choice", series.db_choice()),
            ("cache", "False"),
            ("frame", series.frame()),
        ]);
        fetch_json(request, SOURCE).await
    }

    /// 금 레코드 생성.
    ///
    /// POST /finnomenaGold/create-gold-data/
    pub async fn create_gold_record<R: Serialize>(
        &self,
        request: &GoldCreateRequest<R>,
    ) -> Result<Value, SyncError> {
        let url = format!("{}/finnomenaGold/create-gold-data/", self.base_url);
        let reply: Value = fetch_json(self.client.post(&url).json(request), SOURCE).await?;
        info!(db_choice = %request.db_choice, "Gold record created");
        Ok(reply)
    }

    /// 환율 시계열 조회 (일봉, 캐시 우회).
    ///
    /// GET /currency/get/?frame=1d&cache=False
    pub async fn currency_series(&self) -> Result<BackendSeries, SyncError> {
        let url = format!("{}/currency/get/", self.base_url);
        let request = self
            .client
            .get(&url)
            .query(&[("frame", "1d"), ("cache", "False")]);
        fetch_json(request, SOURCE).await
    }

    /// 환율 레코드 추가.
    ///
    /// POST /currency/add-crrencyth/ (백엔드 경로 철자 그대로)
    pub async fn add_currency_record(&self, record: &CurrencyRecord) -> Result<Value, SyncError> {
        let url = format!("{}/currency/add-crrencyth/", self.base_url);
        let reply: Value = fetch_json(self.client.post(&url).json(record), SOURCE).await?;
        info!(date = %record.date, "Currency record created");
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = BackendConfig {
            base_url: "https://backend.example/".to_string(),
            accept_invalid_certs: false,
        };
        let client = BackendClient::new(&config, &HttpConfig::default()).unwrap();
        assert_eq!(client.base_url, "https://backend.example");
    }
}
