use chrono::{DateTime, Utc};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::EntityId;

/// Kind discriminator carried by every envelope, fixed at creation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Product,
    User,
    Transaction,
}

impl EntityKind {
    /// All kinds, in the order they are reported to callers.
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Product,
        EntityKind::User,
        EntityKind::Transaction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Product => "product",
            EntityKind::User => "user",
            EntityKind::Transaction => "transaction",
        }
    }
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "product" => Ok(EntityKind::Product),
            "user" => Ok(EntityKind::User),
            "transaction" => Ok(EntityKind::Transaction),
            other => Err(CoreError::unknown_entity_kind(other)),
        }
    }
}

/// Provenance recorded on every envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMeta {
    /// Fixed name of the upstream system the record came from.
    pub source: String,
    pub processed_at: DateTime<Utc>,
}

/// Envelope for one normalized entity.
///
/// This is the unit held in the snapshot and served to callers.
///
/// Notes:
/// - `entity_id` is issued fresh at construction and never reused.
/// - `timestamp` is the normalization instant (informational; no ordering
///   logic reads it).
/// - `data` is the kind-specific normalized payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<D> {
    entity_id: EntityId,
    entity_type: EntityKind,
    timestamp: DateTime<Utc>,
    data: D,
    metadata: SourceMeta,
}

impl<D> Envelope<D> {
    pub fn new(entity_type: EntityKind, source: impl Into<String>, data: D) -> Self {
        Self {
            entity_id: EntityId::new(),
            entity_type,
            timestamp: Utc::now(),
            data,
            metadata: SourceMeta {
                source: source.into(),
                processed_at: Utc::now(),
            },
        }
    }

    pub fn entity_id(&self) -> EntityId {
        self.entity_id
    }

    pub fn entity_type(&self) -> EntityKind {
        self.entity_type
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn metadata(&self) -> &SourceMeta {
        &self.metadata
    }

    pub fn into_data(self) -> D {
        self.data
    }
}
