//! Normalized payload shapes for the three entity kinds.
//!
//! Field names here are the wire names: envelopes serialize these payloads
//! directly. Source-origin keys stay string-typed regardless of how the
//! upstream system encoded them (numbers or strings), so lookups always
//! compare strings.

use serde::{Deserialize, Serialize};

use crate::id::EntityId;

/// Product rating block.
///
/// Defaults to the zero-valued object when the source omits it; it is never
/// absent from a normalized product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductData {
    /// Source-origin product key, string-coerced. Join target for
    /// transaction `parcel_id`.
    pub id: String,
    pub title: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub rating: Rating,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    /// Source-origin user key (the upstream login uuid).
    pub id: String,
    /// Derived full name, `"{first} {last}"`. Join target for transaction
    /// `user_name` in the user-centric enrichment.
    pub name: String,
    pub gender: String,
    pub email: String,
    /// Derived `"{state} , {country}"` (legacy spacing kept as-is).
    pub location: String,
    /// Upstream login username.
    pub user_name: String,
    /// ISO date string, e.g. `1974-02-13T12:34:56.000Z`.
    pub dob: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionData {
    pub transaction_id: String,
    /// Join key to a product `id`, string-coerced.
    pub parcel_id: String,
    pub status: String,
    pub sender: String,
    pub user_phone: String,
    /// Join key to a user `name`.
    pub user_name: String,
    /// Entity id of the user matched through the optional `user_id`
    /// cross-reference, when the source carried one and it resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_ref: Option<EntityId>,
    /// Entity id of the product matched through the optional `product_id`
    /// cross-reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_ref: Option<EntityId>,
}
