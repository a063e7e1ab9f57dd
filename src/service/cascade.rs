//! Level cascade: builds one draw, tier by tier.
//!
//! Tiers are processed smallest first. The numbers selected at a tier seed
//! the next one, and only the shortfall is drawn fresh, so every level is a
//! subset of every larger level.
//!
//! Shortfall priority:
//! 1. guaranteed numbers (uniform choice among them when they exceed the
//!    shortfall),
//! 2. weighted candidates with weight > 1, weight descending then number
//!    ascending,
//! 3. weight-1 candidates, uniformly,
//! 4. anything left in the pool, uniformly.

use rand::Rng;

use crate::domain::{Draw, Ladder, Level, Number};
use crate::service::pool::{BasePool, NumberSet};
use crate::service::resolver::{ResolvedCriteria, WeightedCandidate};
use crate::service::sampler;

/// Generates draws for a fixed pool and resolved criteria.
pub struct LevelCascadeGenerator<'a> {
    pool: &'a BasePool,
    resolved: &'a ResolvedCriteria,
    ladder: &'a Ladder,
}

impl<'a> LevelCascadeGenerator<'a> {
    /// `resolved` must already be restricted to `pool`.
    #[must_use]
    pub const fn new(
        pool: &'a BasePool,
        resolved: &'a ResolvedCriteria,
        ladder: &'a Ladder,
    ) -> Self {
        Self {
            pool,
            resolved,
            ladder,
        }
    }

    /// Generate one draw.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Draw {
        let mut selected = NumberSet::default();
        let mut levels = Vec::with_capacity(self.ladder.tiers().len());

        for &target in self.ladder.tiers() {
            let shortfall = target.saturating_sub(selected.len());
            if shortfall > 0 {
                let added = self.fill(&selected, shortfall, rng);
                selected.extend(added);
            }
            levels.push(Level {
                target,
                numbers: selected.to_sorted_vec(),
            });
        }

        Draw::new(levels)
    }

    /// Pick up to `capacity` numbers from the pool outside `seed`.
    fn fill<R: Rng + ?Sized>(&self, seed: &NumberSet, capacity: usize, rng: &mut R) -> Vec<Number> {
        let guaranteed: Vec<Number> = self
            .resolved
            .guaranteed
            .iter()
            .copied()
            .filter(|n| !seed.contains(*n))
            .collect();
        if guaranteed.len() >= capacity {
            return sampler::choose(rng, &guaranteed, capacity);
        }

        let mut chosen: NumberSet = guaranteed.iter().copied().collect();
        let mut picked = guaranteed;
        let is_free = |n: Number, chosen: &NumberSet| !seed.contains(n) && !chosen.contains(n);

        let (heavy, light): (Vec<&WeightedCandidate>, Vec<&WeightedCandidate>) = self
            .resolved
            .weighted
            .iter()
            .filter(|c| is_free(c.number, &chosen))
            .partition(|c| c.weight > 1);

        for c in heavy.into_iter().take(capacity - picked.len()) {
            chosen.insert(c.number);
            picked.push(c.number);
        }

        if picked.len() < capacity {
            let light: Vec<Number> = light.into_iter().map(|c| c.number).collect();
            for n in sampler::choose(rng, &light, capacity - picked.len()) {
                chosen.insert(n);
                picked.push(n);
            }
        }

        if picked.len() < capacity {
            let rest: Vec<Number> = self
                .pool
                .numbers()
                .iter()
                .copied()
                .filter(|n| is_free(*n, &chosen))
                .collect();
            picked.extend(sampler::choose(rng, &rest, capacity - picked.len()));
        }

        picked
    }
}
