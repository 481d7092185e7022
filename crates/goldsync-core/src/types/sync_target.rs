//! 동기화 대상 selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SyncError;

/// 동기화할 시계열 종류.
///
/// `/add-current-data?data=` 쿼리 값과 1:1로 대응합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SyncTarget {
    /// 미국 금 현물 (XAU/USD 일봉)
    GoldUs,
    /// 태국 금괴/장신구 시세
    GoldTh,
    /// USD/THB 환율
    Currency,
}

impl SyncTarget {
    /// 모든 대상 (라우트 목록 순서).
    pub const ALL: [SyncTarget; 3] = [SyncTarget::GoldUs, SyncTarget::GoldTh, SyncTarget::Currency];

    /// selector 문자열.
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncTarget::GoldUs => "goldus",
            SyncTarget::GoldTh => "goldth",
            SyncTarget::Currency => "currency",
        }
    }

    /// 이 대상을 트리거하는 요청 경로.
    pub fn usage_path(&self) -> String {
        format!("/add-current-data?data={}", self.as_str())
    }
}

impl fmt::Display for SyncTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SyncTarget {
    type Err = SyncError;

    /// 대소문자를 구분합니다. 목록 외 값은 `InvalidSelector`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "goldus" => Ok(SyncTarget::GoldUs),
            "goldth" => Ok(SyncTarget::GoldTh),
            "currency" => Ok(SyncTarget::Currency),
            other => Err(SyncError::InvalidSelector(other.to_string())),
        }
    }
}
