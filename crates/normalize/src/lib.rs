//! `storelens-normalize` — raw source records to entity envelopes.
//!
//! One normalizer per source shape, each mapping a single opaque JSON record
//! to exactly one envelope or a typed error. The collection-level entry point
//! ([`transform`]) accumulates failures per record instead of failing whole
//! collections.

pub mod error;
pub mod product;
pub mod raw;
pub mod transaction;
pub mod transform;
pub mod user;

pub use error::NormalizeError;
pub use product::normalize_product;
pub use transaction::normalize_transaction;
pub use transform::{transform, SkippedRecord, TransformOutcome};
pub use user::normalize_user;
