//! Product normalization (fakestore shape).

use serde::Deserialize;
use serde_json::Value;

use storelens_core::{EntityKind, Envelope, ProductData, Rating};

use crate::error::NormalizeError;
use crate::raw::{string_or_number, string_or_unknown, unknown};

const SOURCE: &str = "fakestoreapi";

#[derive(Debug, Deserialize)]
struct RawProduct {
    #[serde(deserialize_with = "string_or_number")]
    id: String,
    title: String,
    #[serde(default = "unknown", deserialize_with = "string_or_unknown")]
    category: String,
    price: f64,
    #[serde(default)]
    rating: Rating,
}

/// Normalize one raw product record.
///
/// `id`, `title`, and `price` are required; `category` falls back to the
/// `"Unknown"` sentinel and a missing `rating` becomes the zero-valued
/// object, so the normalized payload never carries an absent rating.
pub fn normalize_product(raw: &Value) -> Result<Envelope<ProductData>, NormalizeError> {
    let raw = RawProduct::deserialize(raw)
        .map_err(|e| NormalizeError::shape(EntityKind::Product, e))?;

    Ok(Envelope::new(
        EntityKind::Product,
        SOURCE,
        ProductData {
            id: raw.id,
            title: raw.title,
            category: raw.category,
            price: raw.price,
            rating: raw.rating,
        },
    ))
}
