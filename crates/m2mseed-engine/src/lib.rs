//! Randomized many-to-many relation seeding for test fixtures.
//!
//! A seeding run is configured through the fluent [`M2mSeeding`] builder
//! and executed once against any [`EntityStore`] backend: for every
//! source entity it draws a relation count within configured bounds,
//! samples that many distinct targets, and attaches them with optional
//! generated pivot attributes.

pub mod builder;
pub mod engine;
pub mod errors;
pub mod sampler;

pub use builder::M2mSeeding;
pub use errors::SeedingError;
pub use m2mseed_core::{EntityKind, EntityStore, Identifier, MemoryStore, PivotMap, StoreError};
