//! `storelens-enrich` — transaction enrichment joins.
//!
//! Two independent O(n+m) joins that deliberately use different user-side
//! keys: the product-centric join carries the transaction's `user_name`
//! through untouched, while the user-centric join matches that `user_name`
//! against the user's derived full `name`. The source schemas genuinely
//! disagree here; the two lookups encode two distinct reporting needs and
//! must not be unified.
//!
//! A join can miss but never fail: missing keys were normalized to
//! `"Unknown"` upstream and simply match nothing, producing a sentinel row.

use std::collections::HashMap;

use serde::{Serialize, Serializer};

use storelens_core::{
    Envelope, ProductData, TransactionData, UserData, PRODUCT_NOT_FOUND, USER_NOT_FOUND,
};

/// Transaction enriched with the matched product title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionWithProduct {
    pub transaction_id: String,
    pub user_name: String,
    pub user_phone: String,
    pub status: String,
    pub sender: String,
    /// Matched product title, or `"Product Not Found"`.
    pub product: String,
}

/// Transaction enriched with the matched user payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionWithUser {
    pub transaction_id: String,
    pub user: UserMatch,
    pub user_phone: String,
    pub status: String,
    pub sender: String,
    pub parcel_id: String,
}

/// Outcome of the user-side lookup.
///
/// Serializes as the full user payload when matched, as the
/// `"User Not Found"` sentinel string otherwise; downstream consumers of
/// the enriched rows expect exactly that shape.
#[derive(Debug, Clone, PartialEq)]
pub enum UserMatch {
    Found(UserData),
    NotFound,
}

impl UserMatch {
    pub fn is_found(&self) -> bool {
        matches!(self, UserMatch::Found(_))
    }

    pub fn as_user(&self) -> Option<&UserData> {
        match self {
            UserMatch::Found(user) => Some(user),
            UserMatch::NotFound => None,
        }
    }
}

impl Serialize for UserMatch {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            UserMatch::Found(user) => user.serialize(serializer),
            UserMatch::NotFound => serializer.serialize_str(USER_NOT_FOUND),
        }
    }
}

/// Enrich transactions with product details matched on `parcel_id`.
///
/// Products are indexed by their stringified source id; a duplicate id keeps
/// the last product seen, matching the legacy lookup construction. Every
/// transaction yields exactly one row.
pub fn join_with_products(
    transactions: &[Envelope<TransactionData>],
    products: &[Envelope<ProductData>],
) -> Vec<TransactionWithProduct> {
    let product_lookup: HashMap<&str, &ProductData> = products
        .iter()
        .map(|product| (product.data().id.as_str(), product.data()))
        .collect();

    transactions
        .iter()
        .map(|transaction| {
            let data = transaction.data();
            let product = match product_lookup.get(data.parcel_id.as_str()) {
                Some(product) => product.title.clone(),
                None => PRODUCT_NOT_FOUND.to_string(),
            };
            TransactionWithProduct {
                transaction_id: data.transaction_id.clone(),
                user_name: data.user_name.clone(),
                user_phone: data.user_phone.clone(),
                status: data.status.clone(),
                sender: data.sender.clone(),
                product,
            }
        })
        .collect()
}

/// Enrich transactions with the full user payload matched on the user's
/// derived full `name`, not the login `user_name` (see the module docs).
pub fn join_with_users(
    transactions: &[Envelope<TransactionData>],
    users: &[Envelope<UserData>],
) -> Vec<TransactionWithUser> {
    let user_lookup: HashMap<&str, &UserData> = users
        .iter()
        .map(|user| (user.data().name.as_str(), user.data()))
        .collect();

    transactions
        .iter()
        .map(|transaction| {
            let data = transaction.data();
            let user = match user_lookup.get(data.user_name.as_str()) {
                Some(user) => UserMatch::Found((*user).clone()),
                None => UserMatch::NotFound,
            };
            TransactionWithUser {
                transaction_id: data.transaction_id.clone(),
                user,
                user_phone: data.user_phone.clone(),
                status: data.status.clone(),
                sender: data.sender.clone(),
                parcel_id: data.parcel_id.clone(),
            }
        })
        .collect()
}
