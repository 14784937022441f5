//! HTTP data-source client and the combined fetch entry point.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::SourceConfig;
use crate::error::FetchError;

/// Read access to the three upstream collections.
///
/// Implementations return whole collections of opaque JSON records so a
/// single malformed record can never fail its collection; record-level shape
/// decisions are the normalizer's job.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Value>, FetchError>;
    async fn fetch_users(&self) -> Result<Vec<Value>, FetchError>;
    async fn fetch_transactions(&self) -> Result<Vec<Value>, FetchError>;
}

/// The user source wraps its records in a page object; only the `results`
/// array is of interest, absent means empty.
#[derive(Debug, Deserialize)]
struct UserPage {
    #[serde(default)]
    results: Vec<Value>,
}

/// `reqwest`-backed [`DataSource`] over the configured endpoints.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    config: SourceConfig,
}

impl HttpSource {
    /// Build a client with the configured request timeout applied to every
    /// call it makes.
    pub fn new(config: SourceConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    async fn get_body(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        Ok(response.error_for_status()?.text().await?)
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch_products(&self) -> Result<Vec<Value>, FetchError> {
        let body = self.get_body(&self.config.products_url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn fetch_users(&self) -> Result<Vec<Value>, FetchError> {
        let body = self.get_body(&self.config.users_url).await?;
        let page: UserPage = serde_json::from_str(&body)?;
        Ok(page.results)
    }

    async fn fetch_transactions(&self) -> Result<Vec<Value>, FetchError> {
        let body = self.get_body(&self.config.transactions_url).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// One upstream fetch that failed, recorded instead of raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFailure {
    /// Which collection the failure belongs to (`products`, `users`,
    /// `transactions`).
    pub source: String,
    pub reason: String,
}

/// Combined outcome of fetching all three collections.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub products: Vec<Value>,
    pub users: Vec<Value>,
    pub transactions: Vec<Value>,
    /// Sources that failed this run; their collections above are empty.
    pub failures: Vec<SourceFailure>,
}

/// Fetch all three collections concurrently.
///
/// Never fails: each failed source degrades to an empty collection and a
/// [`SourceFailure`] entry, so callers can tell "no data upstream" apart from
/// "the fetch broke".
pub async fn fetch_all(source: &dyn DataSource) -> FetchOutcome {
    let (products, users, transactions) = tokio::join!(
        source.fetch_products(),
        source.fetch_users(),
        source.fetch_transactions(),
    );

    let mut failures = Vec::new();
    let products = absorb(products, "products", &mut failures);
    let users = absorb(users, "users", &mut failures);
    let transactions = absorb(transactions, "transactions", &mut failures);

    FetchOutcome {
        products,
        users,
        transactions,
        failures,
    }
}

fn absorb(
    result: Result<Vec<Value>, FetchError>,
    label: &str,
    failures: &mut Vec<SourceFailure>,
) -> Vec<Value> {
    match result {
        Ok(records) => {
            tracing::info!("Fetched {} {} records", records.len(), label);
            records
        }
        Err(err) => {
            tracing::warn!("Error fetching {}: {}", label, err);
            failures.push(SourceFailure {
                source: label.to_string(),
                reason: err.to_string(),
            });
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Source where every collection is present.
    struct HealthySource;

    #[async_trait]
    impl DataSource for HealthySource {
        async fn fetch_products(&self) -> Result<Vec<Value>, FetchError> {
            Ok(vec![serde_json::json!({"id": 1})])
        }

        async fn fetch_users(&self) -> Result<Vec<Value>, FetchError> {
            Ok(vec![serde_json::json!({"email": "a@b.c"})])
        }

        async fn fetch_transactions(&self) -> Result<Vec<Value>, FetchError> {
            Ok(vec![serde_json::json!({"transaction_id": 7})])
        }
    }

    /// Source where the transactions endpoint is down.
    struct BrokenTransactions;

    #[async_trait]
    impl DataSource for BrokenTransactions {
        async fn fetch_products(&self) -> Result<Vec<Value>, FetchError> {
            Ok(vec![serde_json::json!({"id": 1})])
        }

        async fn fetch_users(&self) -> Result<Vec<Value>, FetchError> {
            Ok(Vec::new())
        }

        async fn fetch_transactions(&self) -> Result<Vec<Value>, FetchError> {
            Err(FetchError::Decode(
                serde_json::from_str::<Vec<Value>>("not json").unwrap_err(),
            ))
        }
    }

    #[tokio::test]
    async fn fetch_all_collects_every_source() {
        let outcome = fetch_all(&HealthySource).await;

        assert_eq!(outcome.products.len(), 1);
        assert_eq!(outcome.users.len(), 1);
        assert_eq!(outcome.transactions.len(), 1);
        assert!(outcome.failures.is_empty());
    }

    #[tokio::test]
    async fn failed_source_degrades_to_empty_with_recorded_failure() {
        let outcome = fetch_all(&BrokenTransactions).await;

        assert_eq!(outcome.products.len(), 1);
        assert!(outcome.transactions.is_empty());
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].source, "transactions");
        assert!(outcome.failures[0].reason.contains("invalid JSON"));
    }

    #[test]
    fn user_page_results_default_to_empty() {
        let page: UserPage = serde_json::from_str(r#"{"info": {"page": 1}}"#).unwrap();
        assert!(page.results.is_empty());

        let page: UserPage =
            serde_json::from_str(r#"{"results": [{"email": "x@y.z"}]}"#).unwrap();
        assert_eq!(page.results.len(), 1);
    }
}
