//! Finnomena 시세 클라이언트.

use reqwest::Client;
use tracing::debug;

use goldsync_core::{
    HttpConfig, ProvidersConfig, SeriesDate, SyncError, ThaiGoldHistory, UsGoldAggregates,
};

use super::http::{build_client, fetch_json};

const SOURCE: &str = "finnomena";

/// Polygon 형식 XAU/USD 티커 (경로에 인코딩된 채로 들어간다).
const XAUUSD_TICKER: &str = "C%3AXAUUSD";

#[derive(Debug, Clone)]
pub struct FinnomenaClient {
    client: Client,
    base_url: String,
}

impl FinnomenaClient {
    pub fn new(config: &ProvidersConfig, http: &HttpConfig) -> Result<Self, SyncError> {
        Ok(Self {
            client: build_client(http, false)?,
            base_url: config.finnomena_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 최근 5일 태국 금 거래 이력.
    pub async fn thai_gold_history(&self) -> Result<ThaiGoldHistory, SyncError> {
        let url = format!("{}/fn3/api/gold/trader/history/graph", self.base_url);
        let request = self.client.get(&url).query(&[
            ("period", "5D"),
            ("sampling", "0"),
            ("startTimeframe", ""),
        ]);
        fetch_json(request, SOURCE).await
    }

    /// `from`..=`to` 구간의 XAU/USD 일봉.
    pub async fn us_gold_daily_bars(
        &self,
        from: SeriesDate,
        to: SeriesDate,
    ) -> Result<UsGoldAggregates, SyncError> {
        let url = format!(
            "{}/fn3/api/polygon/gold/spot/v2/aggs/ticker/{}/range/1/day/{}/{}",
            self.base_url,
            XAUUSD_TICKER,
            from.to_iso_string(),
            to.to_iso_string()
        );
        debug!(%from, %to, "Requesting US gold daily bars");
        fetch_json(self.client.get(&url), SOURCE).await
    }
}
