//! 시계열 동기화 서비스.
//!
//! 각 대상은 같은 흐름을 따릅니다: 백엔드 최신 날짜 조회, 업스트림 최신 봉 조회,
//! 날짜 비교, 더 새로우면 백엔드에 기록. 호출은 순차적이며 첫 실패에서 중단합니다.

use serde_json::Value;
use tracing::{info, instrument};

use goldsync_core::{
    AppConfig, CurrencyRecord, GoldCreateRequest, GoldSeries, SeriesDate, SyncError, SyncOutcome,
    SyncResult, SyncTarget, ThaiGoldBar, UsGoldBar,
};

use crate::clients::{AlphaVantageClient, BackendClient, FinnomenaClient};

/// 환율 통화쌍.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FxPair {
    pub from_symbol: String,
    pub to_symbol: String,
}

/// 금/환율 동기화 서비스.
#[derive(Debug, Clone)]
pub struct SyncService {
    backend: BackendClient,
    finnomena: FinnomenaClient,
    alphavantage: AlphaVantageClient,
    fx_pair: FxPair,
    goldus_lookback_days: u32,
}

impl SyncService {
    pub fn new(
        backend: BackendClient,
        finnomena: FinnomenaClient,
        alphavantage: AlphaVantageClient,
        fx_pair: FxPair,
        goldus_lookback_days: u32,
    ) -> Self {
        Self {
            backend,
            finnomena,
            alphavantage,
            fx_pair,
            goldus_lookback_days,
        }
    }

    /// 설정에서 클라이언트를 만들어 서비스를 구성합니다.
    pub fn from_config(config: &AppConfig) -> Result<Self, SyncError> {
        let backend = BackendClient::new(&config.backend, &config.http)?;
        let finnomena = FinnomenaClient::new(&config.providers, &config.http)?;
        let alphavantage = AlphaVantageClient::new(&config.providers, &config.http)?;
        let fx_pair = FxPair {
            from_symbol: config.providers.fx_from_symbol.clone(),
            to_symbol: config.providers.fx_to_symbol.clone(),
        };

        Ok(Self::new(
            backend,
            finnomena,
            alphavantage,
            fx_pair,
            config.providers.goldus_lookback_days,
        ))
    }

    /// 대상 시계열 하나를 동기화합니다.
    pub async fn run(&self, target: SyncTarget) -> SyncResult<SyncOutcome> {
        match target {
            SyncTarget::GoldTh => self.sync_thai_gold().await,
            SyncTarget::GoldUs => self.sync_us_gold().await,
            SyncTarget::Currency => self.sync_currency().await,
        }
    }

    #[instrument(name = "sync_goldth", skip(self))]
    async fn sync_thai_gold(&self) -> SyncResult<SyncOutcome> {
        let stored = self.backend.gold_series(GoldSeries::Thai).await?;
        let stored_raw = stored.latest_date_raw()?.to_string();
        let stored_date = stored.latest_date()?;

        let history = self.finnomena.thai_gold_history().await?;
        let raw_bar = history
            .latest()
            .ok_or_else(|| SyncError::Payload("thai gold history is empty".to_string()))?;
        let bar = ThaiGoldBar::from_raw(raw_bar)?;
        let record = bar.to_record()?;
        let upstream_date = bar.series_date()?;

        if upstream_date > stored_date {
            info!(%stored_date, %upstream_date, "New Thai gold bar, writing to backend");
            let request = GoldCreateRequest::single(GoldSeries::Thai, record);
            let reply = self.backend.create_gold_record(&request).await?;
            Ok(SyncOutcome::gold_added(reply, None))
        } else {
            info!(%stored_date, %upstream_date, "Thai gold already up to date");
            Ok(SyncOutcome::gold_up_to_date(stored_raw, raw_bar.clone()))
        }
    }

    #[instrument(name = "sync_goldus", skip(self))]
    async fn sync_us_gold(&self) -> SyncResult<SyncOutcome> {
        let stored = self.backend.gold_series(GoldSeries::Us).await?;
        let stored_raw = stored.latest_date_raw()?.to_string();
        let stored_date = stored.latest_date()?;

        let (from, to) = us_gold_window(SeriesDate::today_utc(), self.goldus_lookback_days);
        let aggregates = self.finnomena.us_gold_daily_bars(from, to).await?;
        let raw_bar = aggregates.latest().ok_or_else(|| {
            SyncError::Payload(format!("no US gold bars between {} and {}", from, to))
        })?;
        let bar = UsGoldBar::from_raw(raw_bar)?;
        let record = bar.to_record()?;
        let upstream_date = bar.series_date()?;

        if upstream_date > stored_date {
            info!(%stored_date, %upstream_date, "New US gold bar, writing to backend");
            let request = GoldCreateRequest::single(GoldSeries::Us, record);
            let form_data = serde_json::to_value(&request)?;
            let reply = self.backend.create_gold_record(&request).await?;
            Ok(SyncOutcome::gold_added(reply, Some(form_data)))
        } else {
            info!(%stored_date, %upstream_date, "US gold already up to date");
            Ok(SyncOutcome::gold_up_to_date(stored_raw, raw_bar.clone()))
        }
    }

    #[instrument(name = "sync_currency", skip(self), fields(from = %self.fx_pair.from_symbol, to = %self.fx_pair.to_symbol))]
    async fn sync_currency(&self) -> SyncResult<SyncOutcome> {
        let series = self
            .alphavantage
            .fx_daily(&self.fx_pair.from_symbol, &self.fx_pair.to_symbol)
            .await?;

        let stored = self.backend.currency_series().await?;
        let stored_raw = stored.latest_date_raw()?.to_string();
        let stored_date = stored.latest_date()?;

        let (upstream_date, latest) = series
            .latest()
            .ok_or_else(|| SyncError::Payload("currency time series is empty".to_string()))?;

        if upstream_date <= stored_date {
            info!(%stored_date, %upstream_date, "Currency already up to date");
            return Ok(SyncOutcome::currency_up_to_date(stored_raw));
        }

        let (_, prior) = series.previous().ok_or_else(|| {
            SyncError::Payload("currency time series needs two entries to compute change".to_string())
        })?;
        let record = CurrencyRecord::from_bars(upstream_date, latest, prior)?;

        info!(
            %stored_date,
            %upstream_date,
            percent = record.percent,
            diff = record.diff,
            "New currency rate, writing to backend"
        );
        self.backend.add_currency_record(&record).await?;

        let refreshed = self.backend.currency_series().await?;
        let new_data: Value = refreshed.latest_record()?.clone();
        Ok(SyncOutcome::currency_added(new_data))
    }
}

/// 미국 금 일봉 조회 구간 `[today - lookback_days, today]`.
pub fn us_gold_window(today: SeriesDate, lookback_days: u32) -> (SeriesDate, SeriesDate) {
    (today.days_before(lookback_days), today)
}
