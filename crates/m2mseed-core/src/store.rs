use std::collections::BTreeMap;

use thiserror::Error;

use crate::entity::{EntityKind, Identifier, PivotMap};

/// Errors surfaced by a data-access backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unknown entity kind '{0}'")]
    UnknownKind(String),
    #[error("unknown relation '{0}'")]
    UnknownRelation(String),
    #[error("backend error: {0}")]
    Backend(String),
}

/// Narrow data-access surface the seeding engine drives.
///
/// Reads (`count`, `list_identifiers`) and writes (`materialize`,
/// `attach`) are assumed synchronous and atomic from the engine's point
/// of view; the engine performs no retries of its own.
pub trait EntityStore {
    /// Whether `kind` names a collection whose instances can be
    /// materialized, counted and related.
    fn is_relatable(&self, kind: &EntityKind) -> bool;

    /// Create `count` new persisted instances of `kind`.
    fn materialize(&mut self, kind: &EntityKind, count: u64) -> Result<(), StoreError>;

    /// Number of currently persisted instances of `kind`.
    fn count(&self, kind: &EntityKind) -> Result<u64, StoreError>;

    /// Identifiers of all currently persisted instances of `kind`.
    fn list_identifiers(&self, kind: &EntityKind) -> Result<Vec<Identifier>, StoreError>;

    /// Persist one association row per target between `source` and each
    /// key of `targets`, carrying that key's pivot attributes.
    fn attach(
        &mut self,
        source: &Identifier,
        relation: &str,
        targets: &BTreeMap<Identifier, PivotMap>,
    ) -> Result<(), StoreError>;
}
