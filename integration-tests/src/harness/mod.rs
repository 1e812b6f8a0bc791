pub mod logs;
pub mod tracing;

pub use logs::LogDir;
pub use tracing::{CapturedEvent, captured_events, init_test_tracing};
