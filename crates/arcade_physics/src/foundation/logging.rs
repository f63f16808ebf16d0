//! Logging utilities

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Call once from the host binary before the first simulation tick.
pub fn init() {
    env_logger::init();
}
