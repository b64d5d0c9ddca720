use std::fmt;

use m2mseed_core::{EntityKind, EntityStore, PivotMap};

use crate::errors::SeedingError;

/// Boxed pivot attribute generator, invoked once per sampled target.
pub type PivotGenerator = Box<dyn FnMut() -> PivotMap>;

/// Fluent configuration for one many-to-many seeding run.
///
/// Setters consume and return the configuration so a whole run chains
/// with `?`:
///
/// ```no_run
/// # use m2mseed_core::MemoryStore;
/// # use m2mseed_engine::{M2mSeeding, SeedingError};
/// # fn demo() -> Result<(), SeedingError> {
/// let mut store = MemoryStore::new()
///     .with_collection("users")
///     .with_collection("roles");
///
/// M2mSeeding::new(&store, "users", "roles", "role_links")?
///     .with_factory(10, 5)?
///     .relation_range(1, 3)?
///     .run(&mut store)?;
/// # Ok(())
/// # }
/// ```
pub struct M2mSeeding {
    pub(crate) first: EntityKind,
    pub(crate) second: EntityKind,
    pub(crate) relation: String,
    pub(crate) count_first: u64,
    pub(crate) count_second: u64,
    pub(crate) min_relation: u64,
    pub(crate) max_relation: u64,
    pub(crate) pivot: Option<PivotGenerator>,
}

impl M2mSeeding {
    /// Start a configuration associating `first` to `second` through the
    /// named relation.
    ///
    /// Both kinds must be relatable in `store` and the relation name must
    /// be non-empty. Defaults: no materialization, relation count drawn
    /// from `[0, 3]`, no pivot generator.
    pub fn new<S: EntityStore + ?Sized>(
        store: &S,
        first: impl Into<EntityKind>,
        second: impl Into<EntityKind>,
        relation: impl Into<String>,
    ) -> Result<Self, SeedingError> {
        let first = first.into();
        let second = second.into();
        let relation = relation.into();

        if !store.is_relatable(&first) {
            return Err(SeedingError::InvalidType(first.to_string()));
        }
        if !store.is_relatable(&second) {
            return Err(SeedingError::InvalidType(second.to_string()));
        }
        if relation.is_empty() {
            return Err(SeedingError::InvalidArgument(
                "relation name must not be empty".to_string(),
            ));
        }

        Ok(Self {
            first,
            second,
            relation,
            count_first: 0,
            count_second: 0,
            min_relation: 0,
            max_relation: 3,
            pivot: None,
        })
    }

    /// Number of fresh instances of each kind to materialize before
    /// associating. Both counts must be non-negative.
    pub fn with_factory(
        mut self,
        count_first: i64,
        count_second: i64,
    ) -> Result<Self, SeedingError> {
        let count_first = non_negative(count_first, "count_first")?;
        let count_second = non_negative(count_second, "count_second")?;
        self.count_first = count_first;
        self.count_second = count_second;
        Ok(self)
    }

    /// Minimum number of relations per source entity.
    pub fn min_relation(mut self, count: i64) -> Result<Self, SeedingError> {
        self.min_relation = non_negative(count, "min_relation")?;
        Ok(self)
    }

    /// Maximum number of relations per source entity.
    pub fn max_relation(mut self, count: i64) -> Result<Self, SeedingError> {
        self.max_relation = non_negative(count, "max_relation")?;
        Ok(self)
    }

    /// Set both relation bounds at once.
    pub fn relation_range(self, min: i64, max: i64) -> Result<Self, SeedingError> {
        self.min_relation(min)?.max_relation(max)
    }

    /// Attach a pivot attribute generator.
    ///
    /// Shape validation is by type alone; the generator is never probed
    /// at configuration time and runs exactly once per sampled target, so
    /// side-effecting generators observe one call per attached pair.
    pub fn with_pivot<F>(mut self, generator: F) -> Self
    where
        F: FnMut() -> PivotMap + 'static,
    {
        self.pivot = Some(Box::new(generator));
        self
    }
}

impl fmt::Debug for M2mSeeding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("M2mSeeding")
            .field("first", &self.first)
            .field("second", &self.second)
            .field("relation", &self.relation)
            .field("count_first", &self.count_first)
            .field("count_second", &self.count_second)
            .field("min_relation", &self.min_relation)
            .field("max_relation", &self.max_relation)
            .field("pivot", &self.pivot.is_some())
            .finish()
    }
}

fn non_negative(count: i64, what: &str) -> Result<u64, SeedingError> {
    u64::try_from(count)
        .map_err(|_| SeedingError::InvalidArgument(format!("{what} must be >= 0, got {count}")))
}

#[cfg(test)]
mod tests {
    use m2mseed_core::MemoryStore;

    use super::*;

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with_collection("users")
            .with_collection("roles")
    }

    #[test]
    fn new_applies_defaults() {
        let seeding = M2mSeeding::new(&store(), "users", "roles", "role_links").expect("create");

        assert_eq!(seeding.count_first, 0);
        assert_eq!(seeding.count_second, 0);
        assert_eq!(seeding.min_relation, 0);
        assert_eq!(seeding.max_relation, 3);
        assert!(seeding.pivot.is_none());
    }

    #[test]
    fn new_rejects_unknown_kind() {
        let err = M2mSeeding::new(&store(), "users", "missing", "role_links").unwrap_err();
        assert!(matches!(err, SeedingError::InvalidType(kind) if kind == "missing"));
    }

    #[test]
    fn new_rejects_empty_relation_name() {
        let err = M2mSeeding::new(&store(), "users", "roles", "").unwrap_err();
        assert!(matches!(err, SeedingError::InvalidArgument(_)));
    }

    #[test]
    fn with_factory_rejects_negative_counts() {
        let seeding = M2mSeeding::new(&store(), "users", "roles", "role_links").expect("create");
        let err = seeding.with_factory(-1, 0).unwrap_err();
        assert!(matches!(err, SeedingError::InvalidArgument(_)));
    }

    #[test]
    fn relation_bounds_reject_negative_counts() {
        let seeding = M2mSeeding::new(&store(), "users", "roles", "role_links").expect("create");
        assert!(matches!(
            seeding.min_relation(-2),
            Err(SeedingError::InvalidArgument(_))
        ));

        let seeding = M2mSeeding::new(&store(), "users", "roles", "role_links").expect("create");
        assert!(matches!(
            seeding.relation_range(0, -1),
            Err(SeedingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn setters_chain_in_any_order() {
        let seeding = M2mSeeding::new(&store(), "users", "roles", "role_links")
            .and_then(|seeding| seeding.max_relation(5))
            .and_then(|seeding| seeding.with_factory(4, 6))
            .and_then(|seeding| seeding.min_relation(2))
            .expect("chain");

        assert_eq!(seeding.min_relation, 2);
        assert_eq!(seeding.max_relation, 5);
        assert_eq!(seeding.count_first, 4);
        assert_eq!(seeding.count_second, 6);
    }
}
