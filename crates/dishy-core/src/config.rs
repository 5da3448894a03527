// ── Client configuration ──

use std::time::Duration;

/// The address the dish expects traffic on. Anything reaching the dish
/// must ultimately target this IP and port; override it only if a proxy
/// sits in between.
pub const DEFAULT_ADDRESS: &str = "192.168.100.1:9200";

/// Default connect and per-request timeout. The dish is one LAN hop
/// away, so a short deadline keeps unreachable-dish failures prompt.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for a dish connection.
#[derive(Debug, Clone)]
pub struct DishConfig {
    /// gRPC endpoint as `host:port`, no scheme.
    pub address: String,

    /// Connect implicitly on the first guarded access instead of
    /// requiring an explicit `connect()`. Honored by the blocking
    /// [`Dish`](crate::Dish) only; [`AsyncDish`](crate::AsyncDish)
    /// warns and disregards it.
    pub autoconnect: bool,

    /// Connect and per-request timeout.
    pub timeout: Duration,
}

impl Default for DishConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_owned(),
            autoconnect: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl DishConfig {
    /// Config pointing at a non-default address.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }
}
