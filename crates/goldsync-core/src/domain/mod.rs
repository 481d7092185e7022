//! 동기화 도메인 모델: 업스트림/백엔드 페이로드와 결과 응답.

mod backend;
mod currency;
mod gold;
mod outcome;

pub use backend::*;
pub use currency::*;
pub use gold::*;
pub use outcome::*;
