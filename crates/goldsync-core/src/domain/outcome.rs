//! 동기화 결과 응답.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 동기화 결과 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub enum SyncStatus {
    /// 새 레코드를 백엔드에 기록함
    #[serde(rename = "New data added success")]
    Added,
    /// 백엔드가 이미 최신
    #[serde(rename = "No new data added")]
    UpToDate,
}

/// `/add-current-data` 응답 본문.
///
/// 대상과 결과에 따라 채워지는 필드가 다릅니다:
///
/// | 대상 | 결과 | 필드 |
/// |------|------|------|
/// | goldth | Added | `requests_data` |
/// | goldus | Added | `requests_data`, `form_data` |
/// | gold* | UpToDate | `latest_date_data_db`, `response` |
/// | currency | Added | `new_data` |
/// | currency | UpToDate | `latest_date_data_db` |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct SyncOutcome {
    pub status: SyncStatus,
    /// 백엔드 생성 API의 응답 원문
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests_data: Option<Value>,
    /// 백엔드로 보낸 요청 본문
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_data: Option<Value>,
    /// 백엔드에 저장된 최신 날짜 원문
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_date_data_db: Option<String>,
    /// 업스트림 최신 봉 원문
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    /// 기록 후 다시 조회한 백엔드 최신 레코드
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_data: Option<Value>,
}

impl SyncOutcome {
    fn empty(status: SyncStatus) -> Self {
        Self {
            status,
            requests_data: None,
            form_data: None,
            latest_date_data_db: None,
            response: None,
            new_data: None,
        }
    }

    /// 금 레코드 기록 완료.
    pub fn gold_added(requests_data: Value, form_data: Option<Value>) -> Self {
        Self {
            requests_data: Some(requests_data),
            form_data,
            ..Self::empty(SyncStatus::Added)
        }
    }

    /// 금 시계열이 이미 최신.
    pub fn gold_up_to_date(latest_date_data_db: impl Into<String>, response: Value) -> Self {
        Self {
            latest_date_data_db: Some(latest_date_data_db.into()),
            response: Some(response),
            ..Self::empty(SyncStatus::UpToDate)
        }
    }

    /// 환율 레코드 기록 완료.
    pub fn currency_added(new_data: Value) -> Self {
        Self {
            new_data: Some(new_data),
            ..Self::empty(SyncStatus::Added)
        }
    }

    /// 환율 시계열이 이미 최신.
    pub fn currency_up_to_date(latest_date_data_db: impl Into<String>) -> Self {
        Self {
            latest_date_data_db: Some(latest_date_data_db.into()),
            ..Self::empty(SyncStatus::UpToDate)
        }
    }

    pub fn is_added(&self) -> bool {
        self.status == SyncStatus::Added
    }
}
