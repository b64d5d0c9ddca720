use std::collections::BTreeMap;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use m2mseed_core::{EntityStore, Identifier, PivotMap};

use crate::builder::M2mSeeding;
use crate::errors::SeedingError;
use crate::sampler::{draw_count, sample_distinct};

impl M2mSeeding {
    /// Execute the run with OS-entropy randomness.
    pub fn run<S: EntityStore + ?Sized>(&mut self, store: &mut S) -> Result<(), SeedingError> {
        let mut rng = ChaCha8Rng::from_os_rng();
        self.run_with_rng(store, &mut rng)
    }

    /// Execute the run with a fixed seed for reproducible fixtures.
    pub fn run_seeded<S: EntityStore + ?Sized>(
        &mut self,
        store: &mut S,
        seed: u64,
    ) -> Result<(), SeedingError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.run_with_rng(store, &mut rng)
    }

    /// Execute the run against `store`, drawing all randomness from `rng`.
    ///
    /// Feasibility is checked before any write; an attach failure aborts
    /// immediately and leaves the remaining source entities unprocessed.
    pub fn run_with_rng<S, R>(&mut self, store: &mut S, rng: &mut R) -> Result<(), SeedingError>
    where
        S: EntityStore + ?Sized,
        R: RngCore,
    {
        self.check_before_run(store)?;

        info!(
            first = %self.first,
            second = %self.second,
            relation = %self.relation,
            min = self.min_relation,
            max = self.max_relation,
            "seeding started"
        );

        self.materialize(store)?;

        let sources = store.list_identifiers(&self.first)?;
        let targets = store.list_identifiers(&self.second)?;

        let mut attach_calls = 0_u64;
        let mut pairs_written = 0_u64;
        for source in &sources {
            let Some(associations) = self.associations_for(rng, &targets)? else {
                continue;
            };
            pairs_written += associations.len() as u64;
            store.attach(source, &self.relation, &associations)?;
            attach_calls += 1;
        }

        info!(
            sources = sources.len(),
            attach_calls,
            pairs_written,
            "seeding completed"
        );
        Ok(())
    }

    /// Bounds consistency and target-pool feasibility, checked before any
    /// store write.
    fn check_before_run<S: EntityStore + ?Sized>(&self, store: &S) -> Result<(), SeedingError> {
        if self.min_relation > self.max_relation {
            return Err(SeedingError::Configuration(format!(
                "min_relation ({}) must be <= max_relation ({})",
                self.min_relation, self.max_relation
            )));
        }

        let available = store.count(&self.second)? + self.count_second;
        if self.max_relation > available {
            return Err(SeedingError::Configuration(format!(
                "max_relation ({}) exceeds the {} available '{}' targets",
                self.max_relation, available, self.second
            )));
        }

        Ok(())
    }

    fn materialize<S: EntityStore + ?Sized>(&self, store: &mut S) -> Result<(), SeedingError> {
        if self.count_first > 0 {
            info!(kind = %self.first, count = self.count_first, "materializing instances");
            store.materialize(&self.first, self.count_first)?;
        }
        if self.count_second > 0 {
            info!(kind = %self.second, count = self.count_second, "materializing instances");
            store.materialize(&self.second, self.count_second)?;
        }
        Ok(())
    }

    /// Association set for one source entity, `None` when the drawn count
    /// is zero.
    fn associations_for<R: RngCore>(
        &mut self,
        rng: &mut R,
        targets: &[Identifier],
    ) -> Result<Option<BTreeMap<Identifier, PivotMap>>, SeedingError> {
        let drawn = draw_count(rng, self.min_relation, self.max_relation);
        if drawn == 0 {
            return Ok(None);
        }

        let sampled = sample_distinct(rng, targets, drawn as usize)?;
        let mut associations = BTreeMap::new();
        for target in sampled {
            let pivot = match self.pivot.as_mut() {
                Some(generator) => generator(),
                None => PivotMap::new(),
            };
            associations.insert(target, pivot);
        }
        Ok(Some(associations))
    }
}
