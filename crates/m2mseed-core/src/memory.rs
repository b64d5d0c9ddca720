use std::collections::BTreeMap;

use crate::entity::{EntityKind, Identifier, PivotMap};
use crate::store::{EntityStore, StoreError};

/// One attached source-target pair as recorded by [`MemoryStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRow {
    pub source: Identifier,
    pub relation: String,
    pub target: Identifier,
    pub pivot: PivotMap,
}

/// `BTreeMap`-backed store for tests and demos.
///
/// Collections must be registered up front; materialization allocates
/// sequential integer identifiers per collection.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: BTreeMap<EntityKind, Vec<Identifier>>,
    next_id: BTreeMap<EntityKind, i64>,
    links: Vec<LinkRow>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty collection under `kind`.
    pub fn with_collection(mut self, kind: impl Into<EntityKind>) -> Self {
        let kind = kind.into();
        self.collections.entry(kind.clone()).or_default();
        self.next_id.entry(kind).or_insert(1);
        self
    }

    /// Register a collection pre-populated with integer identifiers.
    pub fn with_rows(
        mut self,
        kind: impl Into<EntityKind>,
        ids: impl IntoIterator<Item = i64>,
    ) -> Self {
        let kind = kind.into();
        let rows: Vec<Identifier> = ids.into_iter().map(Identifier::Int).collect();
        let next = rows
            .iter()
            .filter_map(|id| match id {
                Identifier::Int(value) => Some(*value),
                Identifier::Text(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;
        self.collections.insert(kind.clone(), rows);
        self.next_id.insert(kind, next);
        self
    }

    /// All link rows attached so far, in attach order.
    pub fn links(&self) -> &[LinkRow] {
        &self.links
    }

    /// Link rows attached for `source` under `relation`.
    pub fn links_for(&self, source: &Identifier, relation: &str) -> Vec<&LinkRow> {
        self.links
            .iter()
            .filter(|row| &row.source == source && row.relation == relation)
            .collect()
    }

    fn rows(&self, kind: &EntityKind) -> Result<&Vec<Identifier>, StoreError> {
        self.collections
            .get(kind)
            .ok_or_else(|| StoreError::UnknownKind(kind.to_string()))
    }
}

impl EntityStore for MemoryStore {
    fn is_relatable(&self, kind: &EntityKind) -> bool {
        self.collections.contains_key(kind)
    }

    fn materialize(&mut self, kind: &EntityKind, count: u64) -> Result<(), StoreError> {
        if !self.collections.contains_key(kind) {
            return Err(StoreError::UnknownKind(kind.to_string()));
        }
        let next = self.next_id.entry(kind.clone()).or_insert(1);
        let rows = self.collections.entry(kind.clone()).or_default();
        for _ in 0..count {
            rows.push(Identifier::Int(*next));
            *next += 1;
        }
        Ok(())
    }

    fn count(&self, kind: &EntityKind) -> Result<u64, StoreError> {
        Ok(self.rows(kind)?.len() as u64)
    }

    fn list_identifiers(&self, kind: &EntityKind) -> Result<Vec<Identifier>, StoreError> {
        Ok(self.rows(kind)?.clone())
    }

    fn attach(
        &mut self,
        source: &Identifier,
        relation: &str,
        targets: &BTreeMap<Identifier, PivotMap>,
    ) -> Result<(), StoreError> {
        if relation.is_empty() {
            return Err(StoreError::UnknownRelation(relation.to_string()));
        }
        for (target, pivot) in targets {
            self.links.push(LinkRow {
                source: source.clone(),
                relation: relation.to_string(),
                target: target.clone(),
                pivot: pivot.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn materialize_allocates_sequential_ids() {
        let mut store = MemoryStore::new().with_collection("users");
        let kind = EntityKind::from("users");

        store.materialize(&kind, 3).expect("materialize");

        assert_eq!(store.count(&kind).expect("count"), 3);
        assert_eq!(
            store.list_identifiers(&kind).expect("list"),
            vec![
                Identifier::Int(1),
                Identifier::Int(2),
                Identifier::Int(3)
            ]
        );
    }

    #[test]
    fn materialize_continues_after_preloaded_rows() {
        let mut store = MemoryStore::new().with_rows("roles", [4, 7]);
        let kind = EntityKind::from("roles");

        store.materialize(&kind, 1).expect("materialize");

        assert_eq!(
            store.list_identifiers(&kind).expect("list"),
            vec![
                Identifier::Int(4),
                Identifier::Int(7),
                Identifier::Int(8)
            ]
        );
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let store = MemoryStore::new().with_collection("users");
        let missing = EntityKind::from("missing");

        assert!(matches!(
            store.count(&missing),
            Err(StoreError::UnknownKind(_))
        ));
        assert!(!store.is_relatable(&missing));
    }

    #[test]
    fn attach_records_one_row_per_target() {
        let mut store = MemoryStore::new().with_rows("users", [1]).with_rows("roles", [1, 2]);
        let source = Identifier::Int(1);

        let mut targets = BTreeMap::new();
        targets.insert(Identifier::Int(1), PivotMap::new());
        targets.insert(Identifier::Int(2), PivotMap::new());
        store.attach(&source, "role_links", &targets).expect("attach");

        let rows = store.links_for(&source, "role_links");
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.relation == "role_links"));
    }
}
