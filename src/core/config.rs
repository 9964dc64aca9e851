use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Path to the JSON config store
/// Read from DATA_FILE environment variable
/// Default: data.json
pub static DATA_FILE: Lazy<String> = Lazy::new(|| env::var("DATA_FILE").unwrap_or_else(|_| "data.json".to_string()));

/// Log file path
/// Read from LOG_FILE environment variable
/// Default: opora.log
pub static LOG_FILE: Lazy<String> = Lazy::new(|| env::var("LOG_FILE").unwrap_or_else(|_| "opora.log".to_string()));

/// Network configuration for the Telegram client
pub mod network {
    use super::Duration;

    /// Timeout for Bot API requests (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Instruction-delivery follow-up configuration
pub mod followup {
    use super::Duration;

    /// Delay between sending the instruction and the thank-you message
    /// (in seconds)
    pub const THANKS_DELAY_SECS: u64 = 2 * 60;

    pub fn thanks_delay() -> Duration {
        Duration::from_secs(THANKS_DELAY_SECS)
    }
}
