use chrono::{DateTime, Utc};

use storelens_core::{Envelope, ProductData, TransactionData, UserData};
use storelens_enrich::{
    join_with_products, join_with_users, TransactionWithProduct, TransactionWithUser,
};
use storelens_insights::{product_insights, user_insights, ProductInsights, UserInsights};
use storelens_normalize::transform;
use storelens_sources::{fetch_all, DataSource, FetchOutcome};

use crate::report::PipelineReport;

/// Everything one pipeline run produced, frozen at build time.
///
/// Handlers and writers only ever borrow from a snapshot; replacing data
/// means building a new snapshot and swapping the whole thing.
#[derive(Debug, Clone)]
pub struct Snapshot {
    built_at: DateTime<Utc>,
    products: Vec<Envelope<ProductData>>,
    users: Vec<Envelope<UserData>>,
    transactions: Vec<Envelope<TransactionData>>,
    transactions_with_products: Vec<TransactionWithProduct>,
    transactions_with_users: Vec<TransactionWithUser>,
    user_insights: UserInsights,
    product_insights: ProductInsights,
    report: PipelineReport,
}

impl Snapshot {
    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    pub fn products(&self) -> &[Envelope<ProductData>] {
        &self.products
    }

    pub fn users(&self) -> &[Envelope<UserData>] {
        &self.users
    }

    pub fn transactions(&self) -> &[Envelope<TransactionData>] {
        &self.transactions
    }

    pub fn transactions_with_products(&self) -> &[TransactionWithProduct] {
        &self.transactions_with_products
    }

    pub fn transactions_with_users(&self) -> &[TransactionWithUser] {
        &self.transactions_with_users
    }

    pub fn user_insights(&self) -> &UserInsights {
        &self.user_insights
    }

    pub fn product_insights(&self) -> &ProductInsights {
        &self.product_insights
    }

    pub fn report(&self) -> &PipelineReport {
        &self.report
    }
}

/// Build a snapshot from already-fetched raw collections.
///
/// `as_of` fixes the clock the snapshot is stamped with and the one the age
/// statistics are computed against, so a snapshot built twice from the same
/// outcome carries the same aggregates.
pub fn build_snapshot(outcome: FetchOutcome, as_of: DateTime<Utc>) -> Snapshot {
    let normalized = transform(&outcome.products, &outcome.users, &outcome.transactions);

    let transactions_with_products =
        join_with_products(&normalized.transactions, &normalized.products);
    let transactions_with_users = join_with_users(&normalized.transactions, &normalized.users);
    let user_insights = user_insights(&normalized.users, &normalized.transactions, as_of);
    let product_insights = product_insights(&normalized.products);

    tracing::info!(
        "Snapshot built: {} products, {} users, {} transactions ({} records skipped, {} sources failed)",
        normalized.products.len(),
        normalized.users.len(),
        normalized.transactions.len(),
        normalized.skipped.len(),
        outcome.failures.len(),
    );

    Snapshot {
        built_at: as_of,
        products: normalized.products,
        users: normalized.users,
        transactions: normalized.transactions,
        transactions_with_products,
        transactions_with_users,
        user_insights,
        product_insights,
        report: PipelineReport {
            source_failures: outcome.failures,
            skipped_records: normalized.skipped,
        },
    }
}

/// Fetch every source and build a fresh snapshot.
///
/// Never fails: failed sources degrade to empty collections and malformed
/// records are skipped, all of it recorded in the snapshot's report.
pub async fn run(source: &dyn DataSource) -> Snapshot {
    let outcome = fetch_all(source).await;
    build_snapshot(outcome, Utc::now())
}
