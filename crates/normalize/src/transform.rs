//! Collection-level transformation with per-record failure accumulation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use storelens_core::{EntityKind, Envelope, ProductData, TransactionData, UserData};

use crate::product::normalize_product;
use crate::transaction::normalize_transaction;
use crate::user::normalize_user;

/// One raw record that failed normalization and was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    pub entity_type: EntityKind,
    /// Position of the record in its source collection.
    pub index: usize,
    pub reason: String,
}

/// Result of normalizing the three raw collections.
///
/// `skipped` lets callers tell "empty because no data" apart from "empty
/// because everything failed".
#[derive(Debug, Default)]
pub struct TransformOutcome {
    pub products: Vec<Envelope<ProductData>>,
    pub users: Vec<Envelope<UserData>>,
    pub transactions: Vec<Envelope<TransactionData>>,
    /// Records that failed normalization, in source order.
    pub skipped: Vec<SkippedRecord>,
}

/// Normalize all three collections.
///
/// Users and products are normalized first so transaction cross-references
/// can resolve against them. A record that fails normalization is logged and
/// recorded in `skipped`; it never fails its collection.
pub fn transform(
    raw_products: &[Value],
    raw_users: &[Value],
    raw_transactions: &[Value],
) -> TransformOutcome {
    let mut skipped = Vec::new();

    let mut products = Vec::with_capacity(raw_products.len());
    for (index, raw) in raw_products.iter().enumerate() {
        match normalize_product(raw) {
            Ok(envelope) => products.push(envelope),
            Err(err) => skip(EntityKind::Product, index, err, &mut skipped),
        }
    }

    let mut users = Vec::with_capacity(raw_users.len());
    for (index, raw) in raw_users.iter().enumerate() {
        match normalize_user(raw) {
            Ok(envelope) => users.push(envelope),
            Err(err) => skip(EntityKind::User, index, err, &mut skipped),
        }
    }

    let mut transactions = Vec::with_capacity(raw_transactions.len());
    for (index, raw) in raw_transactions.iter().enumerate() {
        match normalize_transaction(raw, &users, &products) {
            Ok(envelope) => transactions.push(envelope),
            Err(err) => skip(EntityKind::Transaction, index, err, &mut skipped),
        }
    }

    TransformOutcome {
        products,
        users,
        transactions,
        skipped,
    }
}

fn skip(
    entity_type: EntityKind,
    index: usize,
    err: crate::NormalizeError,
    skipped: &mut Vec<SkippedRecord>,
) {
    tracing::warn!("Skipping {} record {}: {}", entity_type, index, err);
    skipped.push(SkippedRecord {
        entity_type,
        index,
        reason: err.to_string(),
    });
}
