//! The `logger` module is a simple utility that requires manual verification.
//! See `bin/services_demo.rs` for a binary that switches to the configured
//! filter and format at startup.

mod logger;
pub use logger::*;

pub use tracing::{debug, error, info, trace, warn};
