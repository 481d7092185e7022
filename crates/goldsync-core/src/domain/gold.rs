//! 금 시세 페이로드.
//!
//! 업스트림 봉은 원본 JSON으로 받고, 레코드 생성에 필요한 필드만 타입으로 읽습니다.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::SyncError;
use crate::types::{SeriesDate, UTC_STAMP_FORMAT};

/// 백엔드의 금 시계열 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoldSeries {
    /// 태국 금 (일봉 프레임)
    Thai,
    /// 미국 금 현물 (7일 프레임)
    Us,
}

impl GoldSeries {
    /// 백엔드 `db_choice` 값.
    pub fn db_choice(&self) -> &'static str {
        match self {
            GoldSeries::Thai => "0",
            GoldSeries::Us => "1",
        }
    }

    /// 최신 기록 조회 시 사용하는 `frame` 값.
    pub fn frame(&self) -> &'static str {
        match self {
            GoldSeries::Thai => "1d",
            GoldSeries::Us => "7d",
        }
    }
}

/// 백엔드 금 기록 생성 요청 본문.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldCreateRequest<R> {
    pub db_choice: String,
    pub data: Vec<R>,
}

impl<R> GoldCreateRequest<R> {
    /// 단일 기록 요청.
    pub fn single(series: GoldSeries, record: R) -> Self {
        Self {
            db_choice: series.db_choice().to_string(),
            data: vec![record],
        }
    }
}

// ==================== 태국 금 ====================

/// Finnomena 금 거래 이력의 한 봉.
///
/// 가격은 받은 숫자 표현(정수/실수) 그대로 백엔드에 전달합니다.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThaiGoldBar {
    /// 생성 시각 (`YYYY-MM-DDTHH:MM:SSZ`)
    pub created_at: String,
    pub created_time: String,
    /// 금괴 매입가
    pub bar_buy_price: Number,
    /// 금괴 매도가
    pub bar_sell_price: Number,
    pub bar_price_change: Number,
    pub ornament_buy_price: Number,
    pub ornament_sell_price: Number,
    pub timestamp: Number,
}

/// `/fn3/api/gold/trader/history/graph` 응답.
///
/// 봉은 원본 JSON으로 보관합니다. 최신 봉은 "No new data added" 응답에 그대로 실립니다.
#[derive(Debug, Clone, Deserialize)]
pub struct ThaiGoldHistory {
    pub data: Vec<Value>,
}

impl ThaiGoldHistory {
    /// 가장 최근 봉 원본 (배열의 마지막 원소).
    pub fn latest(&self) -> Option<&Value> {
        self.data.last()
    }
}

/// 백엔드에 기록하는 태국 금 레코드.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThaiGoldRecord {
    pub created_at: String,
    pub created_time: String,
    /// 금괴 매입가
    pub price: Number,
    pub bar_sell_price: Number,
    pub bar_price_change: Number,
    pub ornament_buy_price: Number,
    pub ornament_sell_price: Number,
    pub timestamp: Number,
    /// `DD-MM-YY`
    pub date: String,
}

impl ThaiGoldBar {
    /// 원본 봉 JSON에서 필요한 필드를 읽습니다.
    pub fn from_raw(raw: &Value) -> Result<Self, SyncError> {
        Ok(Self::deserialize(raw)?)
    }

    /// 봉의 거래일.
    pub fn series_date(&self) -> Result<SeriesDate, SyncError> {
        SeriesDate::from_utc_stamp(&self.created_at)
    }

    /// 백엔드 레코드로 변환.
    pub fn to_record(&self) -> Result<ThaiGoldRecord, SyncError> {
        let date = self.series_date()?;
        Ok(ThaiGoldRecord {
            created_at: self.created_at.clone(),
            created_time: self.created_time.clone(),
            price: self.bar_buy_price.clone(),
            bar_sell_price: self.bar_sell_price.clone(),
            bar_price_change: self.bar_price_change.clone(),
            ornament_buy_price: self.ornament_buy_price.clone(),
            ornament_sell_price: self.ornament_sell_price.clone(),
            timestamp: self.timestamp.clone(),
            date: date.to_short_string(),
        })
    }
}

// ==================== 미국 금 ====================

/// Polygon 형식 XAU/USD 일봉.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UsGoldBar {
    /// 종가
    #[serde(rename = "c")]
    pub close: Number,
    /// 고가
    #[serde(rename = "h")]
    pub high: Number,
    /// 저가
    #[serde(rename = "l")]
    pub low: Number,
    /// 시가
    #[serde(rename = "o")]
    pub open: Number,
    /// 거래 건수
    #[serde(rename = "n")]
    pub transactions: Number,
    /// 봉 시작 시각 (epoch 밀리초)
    #[serde(rename = "t")]
    pub timestamp: i64,
    /// 거래량
    #[serde(rename = "v")]
    pub volume: Number,
    /// 거래량 가중 평균가
    #[serde(rename = "vw")]
    pub volume_weighted_avg: Number,
}

/// `/fn3/api/polygon/gold/spot/v2/aggs/...` 응답.
#[derive(Debug, Clone, Deserialize)]
pub struct UsGoldAggregates {
    pub data: UsGoldAggregatesData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsGoldAggregatesData {
    /// 조회 구간에 봉이 없으면 필드 자체가 빠진다
    #[serde(default)]
    pub results: Vec<Value>,
}

impl UsGoldAggregates {
    /// 가장 최근 봉 원본.
    pub fn latest(&self) -> Option<&Value> {
        self.data.results.last()
    }
}

/// 백엔드에 기록하는 미국 금 레코드.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsGoldRecord {
    /// `DD-MM-YY`
    pub date: String,
    pub close_price: Number,
    pub volume_weight_avg: Number,
    pub timestamp: i64,
    pub high_price: Number,
    pub low_price: Number,
    /// 시가
    pub price: Number,
    pub volume: Number,
    pub num_transactions: Number,
    /// `YYYY-MM-DDTHH:MM:SSZ`
    pub created_at: String,
}

impl UsGoldBar {
    pub fn from_raw(raw: &Value) -> Result<Self, SyncError> {
        Ok(Self::deserialize(raw)?)
    }

    pub fn series_date(&self) -> Result<SeriesDate, SyncError> {
        SeriesDate::from_epoch_millis(self.timestamp).ok_or_else(|| {
            SyncError::Payload(format!("timestamp out of range: {}", self.timestamp))
        })
    }

    pub fn to_record(&self) -> Result<UsGoldRecord, SyncError> {
        let created = chrono::DateTime::<chrono::Utc>::from_timestamp_millis(self.timestamp)
            .ok_or_else(|| {
                SyncError::Payload(format!("timestamp out of range: {}", self.timestamp))
            })?;

        Ok(UsGoldRecord {
            date: SeriesDate::new(created.date_naive()).to_short_string(),
            close_price: self.close.clone(),
            volume_weight_avg: self.volume_weighted_avg.clone(),
            timestamp: self.timestamp,
            high_price: self.high.clone(),
            low_price: self.low.clone(),
            price: self.open.clone(),
            volume: self.volume.clone(),
            num_transactions: self.transactions.clone(),
            created_at: created.format(UTC_STAMP_FORMAT).to_string(),
        })
    }
}
