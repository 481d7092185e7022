//! 시계열 기준 날짜.
//!
//! 백엔드는 시계열마다 `DD-MM-YY`(금) 또는 `YYYY-MM-DD`(환율) 문자열을 저장합니다.
//! 두 형식 모두 달력 날짜로 파싱한 뒤 비교합니다.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::fmt;
use std::str::FromStr;

use crate::error::SyncError;

/// 금 시계열의 날짜 표기 (`21-05-25`).
pub const SHORT_DATE_FORMAT: &str = "%d-%m-%y";

/// 환율 시계열의 날짜 표기 (`2025-05-21`).
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// 백엔드에 기록하는 생성 시각 표기 (`2025-05-21T00:00:00Z`).
pub const UTC_STAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// 달력 날짜 값.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeriesDate(NaiveDate);

impl SeriesDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// 오늘 (UTC).
    pub fn today_utc() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Unix epoch 밀리초 (UTC)에서 생성.
    pub fn from_epoch_millis(millis: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| Self(dt.date_naive()))
    }

    /// `YYYY-MM-DDTHH:MM:SSZ` 형식 또는 RFC 3339 시각 문자열에서 생성.
    pub fn from_utc_stamp(stamp: &str) -> Result<Self, SyncError> {
        let stamp = stamp.trim();
        if let Ok(naive) = NaiveDateTime::parse_from_str(stamp, UTC_STAMP_FORMAT) {
            return Ok(Self(naive.date()));
        }
        DateTime::parse_from_rfc3339(stamp)
            .map(|dt| Self(dt.with_timezone(&Utc).date_naive()))
            .map_err(|e| SyncError::Payload(format!("invalid timestamp '{}': {}", stamp, e)))
    }

    /// `DD-MM-YY` 표기.
    pub fn to_short_string(&self) -> String {
        self.0.format(SHORT_DATE_FORMAT).to_string()
    }

    /// `YYYY-MM-DD` 표기.
    pub fn to_iso_string(&self) -> String {
        self.0.format(ISO_DATE_FORMAT).to_string()
    }

    /// 주어진 일수만큼 이전 날짜.
    pub fn days_before(&self, days: u32) -> Self {
        Self(self.0 - chrono::Duration::days(i64::from(days)))
    }
}

impl fmt::Display for SeriesDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso_string())
    }
}

impl FromStr for SeriesDate {
    type Err = SyncError;

    /// `DD-MM-YY`, `YYYY-MM-DD`, 또는 `YYYY-MM-DD`로 시작하는 시각 문자열을 받습니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let invalid = |reason: String| SyncError::Payload(format!("invalid date '{}': {}", raw, reason));

        // 형식 판별은 길이와 구분자 위치로 한다. chrono의 %Y는 두 자리 연도도 받아들인다.
        let parsed = if raw.len() == 8 {
            NaiveDate::parse_from_str(raw, SHORT_DATE_FORMAT)
        } else if raw.len() >= 10 && raw.as_bytes()[4] == b'-' && raw.is_char_boundary(10) {
            NaiveDate::parse_from_str(&raw[..10], ISO_DATE_FORMAT)
        } else {
            return Err(invalid("unrecognized date format".to_string()));
        };

        parsed.map(Self).map_err(|e| invalid(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> SeriesDate {
        SeriesDate::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_parse_both_backend_formats() {
        assert_eq!("20-05-25".parse::<SeriesDate>().unwrap(), ymd(2025, 5, 20));
        assert_eq!("2025-05-20".parse::<SeriesDate>().unwrap(), ymd(2025, 5, 20));
        assert_eq!(
            "2025-05-20T03:00:00Z".parse::<SeriesDate>().unwrap(),
            ymd(2025, 5, 20)
        );
        assert_eq!(" 2025-05-20 ".parse::<SeriesDate>().unwrap(), ymd(2025, 5, 20));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<SeriesDate>().is_err());
        assert!("yesterday".parse::<SeriesDate>().is_err());
        assert!("32-01-25".parse::<SeriesDate>().is_err());
        assert!("2025/05/20".parse::<SeriesDate>().is_err());
    }

    #[test]
    fn test_comparison_is_calendar_order() {
        let earlier: SeriesDate = "20-05-25".parse().unwrap();
        let later: SeriesDate = "21-05-25".parse().unwrap();
        assert!(later > earlier);

        // 문자열 비교라면 "01-06-25" < "31-05-25" 가 된다
        let end_of_may: SeriesDate = "31-05-25".parse().unwrap();
        let start_of_june: SeriesDate = "01-06-25".parse().unwrap();
        assert!(start_of_june > end_of_may);

        let iso: SeriesDate = "2025-05-21".parse().unwrap();
        assert_eq!(iso, later);
    }

    #[test]
    fn test_formatting() {
        let date = ymd(2025, 3, 7);
        assert_eq!(date.to_short_string(), "07-03-25");
        assert_eq!(date.to_iso_string(), "2025-03-07");
        assert_eq!(date.to_string(), "2025-03-07");
        assert_eq!(date.days_before(7), ymd(2025, 2, 28));
    }

    #[test]
    fn test_from_epoch_millis_is_utc() {
        // 2025-03-07T23:30:00Z
        let date = SeriesDate::from_epoch_millis(1_741_390_200_000).unwrap();
        assert_eq!(date, ymd(2025, 3, 7));
    }

    #[test]
    fn test_from_utc_stamp() {
        assert_eq!(
            SeriesDate::from_utc_stamp("2025-05-21T03:15:00Z").unwrap(),
            ymd(2025, 5, 21)
        );
        assert_eq!(
            SeriesDate::from_utc_stamp("2025-05-21T23:15:00.123+00:00").unwrap(),
            ymd(2025, 5, 21)
        );
        assert!(SeriesDate::from_utc_stamp("21-05-25").is_err());
    }
}
