//! Transaction normalization (order-feed shape).

use serde::Deserialize;
use serde_json::Value;

use storelens_core::{EntityKind, Envelope, ProductData, TransactionData, UserData};

use crate::error::NormalizeError;
use crate::raw::{opt_string_or_number, string_or_unknown, unknown};

const SOURCE: &str = "mockaroo";

#[derive(Debug, Deserialize)]
struct RawTransaction {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    id: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    parcel_id: Option<String>,
    #[serde(default = "unknown", deserialize_with = "string_or_unknown")]
    status: String,
    #[serde(default = "unknown", deserialize_with = "string_or_unknown")]
    sender: String,
    #[serde(default = "unknown", deserialize_with = "string_or_unknown")]
    user_phone: String,
    #[serde(default = "unknown", deserialize_with = "string_or_unknown")]
    user_name: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    user_id: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    product_id: Option<String>,
}

/// Normalize one raw transaction record.
///
/// Every scalar is best-effort: absent keys fall back to `"Unknown"` (the
/// raw `id` becomes `transaction_id`). The optional `user_id`/`product_id`
/// cross-references are resolved against the already-normalized collections
/// and attached as entity ids, a secondary join path separate from the
/// string-key joins the enrichment layer runs.
pub fn normalize_transaction(
    raw: &Value,
    users: &[Envelope<UserData>],
    products: &[Envelope<ProductData>],
) -> Result<Envelope<TransactionData>, NormalizeError> {
    let raw = RawTransaction::deserialize(raw)
        .map_err(|e| NormalizeError::shape(EntityKind::Transaction, e))?;

    let user_ref = raw.user_id.as_deref().and_then(|user_id| {
        users
            .iter()
            .find(|user| user.data().id == user_id)
            .map(|user| user.entity_id())
    });
    let product_ref = raw.product_id.as_deref().and_then(|product_id| {
        products
            .iter()
            .find(|product| product.data().id == product_id)
            .map(|product| product.entity_id())
    });

    Ok(Envelope::new(
        EntityKind::Transaction,
        SOURCE,
        TransactionData {
            transaction_id: raw.id.unwrap_or_else(unknown),
            parcel_id: raw.parcel_id.unwrap_or_else(unknown),
            status: raw.status,
            sender: raw.sender,
            user_phone: raw.user_phone,
            user_name: raw.user_name,
            user_ref,
            product_ref,
        },
    ))
}
