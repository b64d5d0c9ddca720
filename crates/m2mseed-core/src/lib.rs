//! Shared vocabulary for the m2mseed workspace.
//!
//! This crate defines the entity kind and identifier handles the seeding
//! engine works with, the [`EntityStore`] data-access boundary it drives,
//! and an in-memory reference store used by tests and demos.

pub mod entity;
pub mod memory;
pub mod store;

pub use entity::{EntityKind, Identifier, PivotMap};
pub use memory::{LinkRow, MemoryStore};
pub use store::{EntityStore, StoreError};
