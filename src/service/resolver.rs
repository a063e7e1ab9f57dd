//! Expansion of criteria into guaranteed and weighted candidates.
//!
//! Special sets, touches and sums are three criterion kinds. Each kind's
//! expansion is deduplicated first, so a number's weight is the number of
//! kinds that produced it (1..=3).

use std::collections::BTreeMap;

use crate::domain::{Criteria, Number, NumberUniverse, special_set};
use crate::service::pool::{BasePool, NumberSet};

/// A candidate with its tie-break weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedCandidate {
    pub number: Number,
    pub weight: u8,
}

/// Output of criteria resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedCriteria {
    /// Numbers to guarantee, input order, no duplicates.
    pub guaranteed: Vec<Number>,
    /// Weighted candidates, weight descending then number ascending.
    pub weighted: Vec<WeightedCandidate>,
}

impl ResolvedCriteria {
    /// Resolve criteria without regard to the pool.
    #[must_use]
    pub fn resolve(criteria: &Criteria) -> Self {
        let mut guaranteed = Vec::with_capacity(criteria.inclusion.len());
        let mut seen = NumberSet::default();
        for &n in &criteria.inclusion {
            if seen.insert(n) {
                guaranteed.push(n);
            }
        }

        let expansions: [NumberSet; 3] = [
            criteria
                .special_sets
                .iter()
                .flat_map(|id| special_set::resolve(*id).members)
                .collect(),
            criteria
                .touches
                .iter()
                .flat_map(|d| NumberUniverse::touching(*d))
                .collect(),
            criteria
                .sums
                .iter()
                .flat_map(|d| NumberUniverse::summing_to(*d))
                .collect(),
        ];

        let mut weights: BTreeMap<Number, u8> = BTreeMap::new();
        for expansion in &expansions {
            for n in expansion.to_sorted_vec() {
                *weights.entry(n).or_default() += 1;
            }
        }

        let mut weighted: Vec<WeightedCandidate> = weights
            .into_iter()
            .map(|(number, weight)| WeightedCandidate { number, weight })
            .collect();
        weighted.sort_by(|a, b| b.weight.cmp(&a.weight).then(a.number.cmp(&b.number)));

        Self {
            guaranteed,
            weighted,
        }
    }

    /// Resolve criteria and drop everything outside `pool`.
    ///
    /// Guaranteed numbers keep their input order and are never truncated
    /// here: each level chooses among them when they exceed its capacity.
    #[must_use]
    pub fn for_pool(criteria: &Criteria, pool: &BasePool) -> Self {
        let resolved = Self::resolve(criteria);
        Self {
            guaranteed: resolved
                .guaranteed
                .into_iter()
                .filter(|n| pool.contains(*n))
                .collect(),
            weighted: resolved
                .weighted
                .into_iter()
                .filter(|c| pool.contains(c.number))
                .collect(),
        }
    }
}
