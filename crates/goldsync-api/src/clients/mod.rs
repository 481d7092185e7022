//! 외부 서비스 HTTP 클라이언트.
//!
//! - [`BackendClient`]: 금/환율 이력을 보관하는 백엔드 저장소
//! - [`FinnomenaClient`]: 태국 금 시세, 미국 금 현물 일봉
//! - [`AlphaVantageClient`]: USD/THB 일별 환율

mod alphavantage;
mod backend;
mod finnomena;
mod http;

pub use alphavantage::AlphaVantageClient;
pub use backend::BackendClient;
pub use finnomena::FinnomenaClient;
