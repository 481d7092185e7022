//! 환율 페이로드 (Alpha Vantage `FX_DAILY`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::SyncError;
use crate::types::SeriesDate;

/// 일별 환율 봉. 가격은 제공자가 보낸 문자열 그대로 보관합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FxDailyBar {
    #[serde(rename = "1. open")]
    pub open: String,
    #[serde(rename = "2. high")]
    pub high: String,
    #[serde(rename = "3. low")]
    pub low: String,
    #[serde(rename = "4. close")]
    pub close: String,
}

impl FxDailyBar {
    /// 종가 숫자 값.
    pub fn close_value(&self) -> Result<f64, SyncError> {
        self.close
            .trim()
            .parse::<f64>()
            .map_err(|e| SyncError::Payload(format!("invalid close price '{}': {}", self.close, e)))
    }
}

/// `FX_DAILY` 응답.
///
/// 호출 한도 초과나 잘못된 키는 HTTP 200과 함께 안내 문구만 담겨 옵니다.
#[derive(Debug, Clone, Deserialize)]
pub struct FxDailyResponse {
    #[serde(rename = "Time Series FX (Daily)")]
    pub time_series: Option<BTreeMap<NaiveDate, FxDailyBar>>,
    #[serde(rename = "Error Message")]
    pub error_message: Option<String>,
    #[serde(rename = "Note")]
    pub note: Option<String>,
    #[serde(rename = "Information")]
    pub information: Option<String>,
}

impl FxDailyResponse {
    /// 시계열을 꺼냅니다. 없으면 제공자 안내 문구를 에러로 돌려줍니다.
    pub fn into_series(self) -> Result<FxDailySeries, SyncError> {
        match self.time_series {
            Some(series) => Ok(FxDailySeries(series)),
            None => {
                let reason = self
                    .error_message
                    .or(self.note)
                    .or(self.information)
                    .unwrap_or_else(|| "missing 'Time Series FX (Daily)'".to_string());
                Err(SyncError::Payload(format!("alphavantage: {}", reason)))
            }
        }
    }
}

/// 날짜순으로 정렬된 일별 환율 시계열.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FxDailySeries(pub BTreeMap<NaiveDate, FxDailyBar>);

impl FxDailySeries {
    /// 가장 최근 거래일과 봉.
    pub fn latest(&self) -> Option<(SeriesDate, &FxDailyBar)> {
        self.0
            .iter()
            .next_back()
            .map(|(date, bar)| (SeriesDate::new(*date), bar))
    }

    /// 최근 거래일 직전 거래일과 봉.
    pub fn previous(&self) -> Option<(SeriesDate, &FxDailyBar)> {
        self.0
            .iter()
            .rev()
            .nth(1)
            .map(|(date, bar)| (SeriesDate::new(*date), bar))
    }
}

/// 백엔드에 기록하는 환율 레코드.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRecord {
    /// `YYYY-MM-DD`
    pub date: String,
    /// 종가
    pub price: String,
    pub open: String,
    pub high: String,
    pub low: String,
    /// 전일 종가 대비 변동률 (%)
    pub percent: f64,
    /// 전일 종가 대비 변동폭
    pub diff: f64,
}

impl CurrencyRecord {
    /// 최근 봉과 직전 봉으로 레코드를 만듭니다.
    pub fn from_bars(
        date: SeriesDate,
        latest: &FxDailyBar,
        prior: &FxDailyBar,
    ) -> Result<Self, SyncError> {
        let close = latest.close_value()?;
        let prior_close = prior.close_value()?;
        let (percent, diff) = price_change(close, prior_close)?;

        Ok(Self {
            date: date.to_iso_string(),
            price: latest.close.clone(),
            open: latest.open.clone(),
            high: latest.high.clone(),
            low: latest.low.clone(),
            percent,
            diff,
        })
    }
}

/// `(변동률 %, 변동폭)` 계산.
pub fn price_change(latest: f64, prior: f64) -> Result<(f64, f64), SyncError> {
    if prior == 0.0 || !prior.is_finite() || !latest.is_finite() {
        return Err(SyncError::Payload(format!(
            "cannot compute change from prior close {}",
            prior
        )));
    }
    let diff = latest - prior;
    Ok((diff / prior * 100.0, diff))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fx_json() -> serde_json::Value {
        json!({
            "Meta Data": {
                "1. Information": "Forex Daily Prices (open, high, low, close)",
                "2. From Symbol": "USD",
                "3. To Symbol": "THB"
            },
            "Time Series FX (Daily)": {
                "2025-05-21": {"1. open": "33.10", "2. high": "33.25", "3. low": "33.00", "4. close": "33.20"},
                "2025-05-20": {"1. open": "33.05", "2. high": "33.15", "3. low": "32.95", "4. close": "33.00"},
                "2025-05-19": {"1. open": "33.30", "2. high": "33.40", "3. low": "33.00", "4. close": "33.05"}
            }
        })
    }

    #[test]
    fn test_latest_and_previous_by_date() {
        let response: FxDailyResponse = serde_json::from_value(fx_json()).unwrap();
        let series = response.into_series().unwrap();

        let (latest_date, latest) = series.latest().unwrap();
        assert_eq!(latest_date.to_iso_string(), "2025-05-21");
        assert_eq!(latest.close, "33.20");

        let (prior_date, prior) = series.previous().unwrap();
        assert_eq!(prior_date.to_iso_string(), "2025-05-20");
        assert_eq!(prior.close, "33.00");
    }

    #[test]
    fn test_record_from_bars() {
        let response: FxDailyResponse = serde_json::from_value(fx_json()).unwrap();
        let series = response.into_series().unwrap();
        let (date, latest) = series.latest().unwrap();
        let (_, prior) = series.previous().unwrap();

        let record = CurrencyRecord::from_bars(date, latest, prior).unwrap();
        assert_eq!(record.date, "2025-05-21");
        assert_eq!(record.price, "33.20");
        assert_eq!(record.open, "33.10");
        assert!((record.diff - 0.2).abs() < 1e-9);
        assert!((record.percent - (0.2 / 33.0 * 100.0)).abs() < 1e-9);
    }

    #[test]
    fn test_price_change() {
        let (percent, diff) = price_change(110.0, 100.0).unwrap();
        assert!((percent - 10.0).abs() < 1e-12);
        assert!((diff - 10.0).abs() < 1e-12);

        let (percent, diff) = price_change(95.0, 100.0).unwrap();
        assert!((percent + 5.0).abs() < 1e-12);
        assert!((diff + 5.0).abs() < 1e-12);

        assert!(price_change(1.0, 0.0).is_err());
    }

    #[test]
    fn test_provider_note_surfaces_as_payload_error() {
        let response: FxDailyResponse = serde_json::from_value(json!({
            "Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute."
        }))
        .unwrap();

        let err = response.into_series().unwrap_err();
        assert!(matches!(err, SyncError::Payload(ref msg) if msg.contains("call frequency")));
    }

    #[test]
    fn test_invalid_close_is_error() {
        let bar = FxDailyBar {
            open: "1".to_string(),
            high: "1".to_string(),
            low: "1".to_string(),
            close: "n/a".to_string(),
        };
        assert!(bar.close_value().is_err());
    }
}
