use std::fmt;

use serde::{Deserialize, Serialize};

/// Pivot attributes stored alongside one source-target association.
pub type PivotMap = serde_json::Map<String, serde_json::Value>;

/// Opaque handle naming an entity collection inside a store.
///
/// A kind is only usable for seeding when the store reports it as
/// relatable, i.e. its instances can be materialized, counted and related.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityKind(String);

impl EntityKind {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityKind {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for EntityKind {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Identifier of one persisted entity instance.
///
/// Integer and textual keys both occur in practice (serial columns,
/// uuid strings), so the engine stays agnostic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Identifier {
    Int(i64),
    Text(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Int(value) => write!(f, "{value}"),
            Identifier::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Identifier::Int(value)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::Text(value.to_string())
    }
}
