//! 백엔드 저장소 응답.

use serde::Deserialize;
use serde_json::Value;

use crate::error::SyncError;
use crate::types::SeriesDate;

/// `get-gold-data`, `currency/get` 공통 응답.
///
/// 레코드 구조는 시계열마다 다르므로 원본 JSON으로 보관합니다.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendSeries {
    pub data: Vec<Value>,
}

impl BackendSeries {
    /// 마지막(최신) 레코드.
    pub fn latest_record(&self) -> Result<&Value, SyncError> {
        self.data
            .last()
            .ok_or_else(|| SyncError::Payload("backend returned an empty series".to_string()))
    }

    /// 최신 레코드의 `date` 원문.
    pub fn latest_date_raw(&self) -> Result<&str, SyncError> {
        self.latest_record()?
            .get("date")
            .and_then(Value::as_str)
            .ok_or_else(|| SyncError::Payload("latest backend record has no 'date' string".to_string()))
    }

    /// 최신 레코드의 날짜.
    pub fn latest_date(&self) -> Result<SeriesDate, SyncError> {
        self.latest_date_raw()?.parse()
    }
}
