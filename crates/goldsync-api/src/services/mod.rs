//! 비즈니스 로직 서비스.

pub mod sync;

pub use sync::{us_gold_window, FxPair, SyncService};
