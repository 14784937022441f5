//! `storelens-core` — shared data-model building blocks.
//!
//! This crate contains **pure model** primitives (no I/O concerns).

pub mod envelope;
pub mod error;
pub mod id;
pub mod record;
pub mod sentinel;

pub use envelope::{EntityKind, Envelope, SourceMeta};
pub use error::CoreError;
pub use id::EntityId;
pub use record::{ProductData, Rating, TransactionData, UserData};
pub use sentinel::{PRODUCT_NOT_FOUND, UNKNOWN, USER_NOT_FOUND};
