//! Source endpoint configuration.

use std::env;
use std::time::Duration;

const DEFAULT_PRODUCTS_URL: &str = "https://fakestoreapi.com/products";
const DEFAULT_USERS_URL: &str = "https://randomuser.me/api/?results=20";
const DEFAULT_TRANSACTIONS_URL: &str = "https://my.api.mockaroo.com/orders.json?key=e49e6840";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the three raw collections come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub products_url: String,
    pub users_url: String,
    pub transactions_url: String,
    /// Applied to every request issued by the client.
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            products_url: DEFAULT_PRODUCTS_URL.to_string(),
            users_url: DEFAULT_USERS_URL.to_string(),
            transactions_url: DEFAULT_TRANSACTIONS_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SourceConfig {
    /// Read configuration from the environment, falling back to the default
    /// public endpoints for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let timeout = env::var("STORELENS_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);
        Self {
            products_url: env::var("STORELENS_PRODUCTS_URL").unwrap_or(defaults.products_url),
            users_url: env::var("STORELENS_USERS_URL").unwrap_or(defaults.users_url),
            transactions_url: env::var("STORELENS_TRANSACTIONS_URL")
                .unwrap_or(defaults.transactions_url),
            timeout,
        }
    }
}
