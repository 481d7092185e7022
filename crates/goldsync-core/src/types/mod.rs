//! 서비스 전반에서 사용하는 기본 타입.

pub mod series_date;
pub mod sync_target;

pub use series_date::*;
pub use sync_target::*;
