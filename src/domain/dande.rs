//! Generated ladder types: levels, draws and batches.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::domain::criteria::Criteria;
use crate::domain::number::Number;

/// Algorithm tag reported with every batch.
pub const ALGORITHM: &str = "priority-cascade";

/// Algorithm version reported with every batch.
pub const ALGORITHM_VERSION: &str = "5.0.0";

/// Ascending target sizes for one draw.
///
/// Tiers step by ten from 8 while they stay strictly below the pool size,
/// then a final tier equal to the pool size closes the ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ladder(Vec<usize>);

impl Ladder {
    /// Smallest stepped tier.
    pub const FIRST_TIER: usize = 8;
    /// Distance between stepped tiers.
    pub const STEP: usize = 10;
    /// Maximum number of stepped tiers before the closing tier.
    pub const MAX_STEPPED_TIERS: usize = 9;

    /// Build the ladder for a pool of `pool_size` numbers.
    #[must_use]
    pub fn for_pool_size(pool_size: usize) -> Self {
        let mut tiers: Vec<usize> = (0..Self::MAX_STEPPED_TIERS)
            .map(|k| Self::FIRST_TIER + k * Self::STEP)
            .take_while(|tier| *tier < pool_size)
            .collect();
        tiers.push(pool_size);
        Self(tiers)
    }

    /// Tier sizes, ascending.
    #[must_use]
    pub fn tiers(&self) -> &[usize] {
        &self.0
    }

    /// The closing tier.
    #[must_use]
    pub fn last(&self) -> usize {
        self.0.last().copied().unwrap_or(0)
    }
}

/// One tier of a draw: a target size and the numbers selected for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    /// Target size of this tier.
    pub target: usize,
    /// Selected numbers, ascending. May be shorter than `target` when the
    /// pool runs out.
    pub numbers: Vec<Number>,
}

impl Level {
    /// Whether every number of this level is also in `other`.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.numbers
            .iter()
            .all(|n| other.numbers.binary_search(n).is_ok())
    }
}

/// One independent generation: levels in ascending target order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    levels: Vec<Level>,
}

impl Draw {
    #[must_use]
    pub const fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Level with the given target size.
    #[must_use]
    pub fn level(&self, target: usize) -> Option<&Level> {
        self.levels.iter().find(|l| l.target == target)
    }

    /// Count of numbers across all levels.
    #[must_use]
    pub fn total_selected(&self) -> usize {
        self.levels.iter().map(|l| l.numbers.len()).sum()
    }
}

/// Serialized as `{ "<target>": ["..", ..], ... }`.
impl Serialize for Draw {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.levels.iter().map(|l| (l.target, &l.numbers)))
    }
}

/// Algorithm description attached to a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchMetadata {
    pub level_counts: Ladder,
    pub algorithm: &'static str,
    pub version: &'static str,
}

impl BatchMetadata {
    #[must_use]
    pub const fn new(level_counts: Ladder) -> Self {
        Self {
            level_counts,
            algorithm: ALGORITHM,
            version: ALGORITHM_VERSION,
        }
    }
}

/// `quantity` draws generated from one set of criteria.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    /// Draws in generation order.
    #[serde(rename = "levelsList")]
    pub draws: Vec<Draw>,

    /// Numbers selected across every level of every draw.
    pub total_selected: usize,

    /// Echo of the resolved criteria.
    #[serde(flatten)]
    pub criteria: Criteria,

    pub timestamp: DateTime<Utc>,

    pub metadata: BatchMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pool_ladder() {
        let ladder = Ladder::for_pool_size(100);
        assert_eq!(
            ladder.tiers(),
            &[8, 18, 28, 38, 48, 58, 68, 78, 88, 100]
        );
        assert_eq!(ladder.last(), 100);
    }

    #[test]
    fn test_ladder_clamps_to_pool() {
        assert_eq!(Ladder::for_pool_size(90).last(), 90);
        assert_eq!(Ladder::for_pool_size(90).tiers().len(), 10);
        assert_eq!(
            Ladder::for_pool_size(85).tiers(),
            &[8, 18, 28, 38, 48, 58, 68, 78, 85]
        );
        assert_eq!(Ladder::for_pool_size(18).tiers(), &[8, 18]);
        assert_eq!(Ladder::for_pool_size(12).tiers(), &[8, 12]);
        assert_eq!(Ladder::for_pool_size(8).tiers(), &[8]);
        assert_eq!(Ladder::for_pool_size(5).tiers(), &[5]);
        assert_eq!(Ladder::for_pool_size(0).tiers(), &[0]);
    }

    #[test]
    fn test_ladder_strictly_increasing() {
        for size in 0..=100 {
            let ladder = Ladder::for_pool_size(size);
            assert!(ladder.tiers().windows(2).all(|w| w[0] < w[1]), "pool {size}");
            assert!(ladder.tiers().len() <= 10);
        }
    }

    #[test]
    fn test_draw_serializes_as_map() {
        let n = |v| Number::new(v).unwrap();
        let draw = Draw::new(vec![
            Level {
                target: 2,
                numbers: vec![n(1), n(2)],
            },
            Level {
                target: 3,
                numbers: vec![n(1), n(2), n(30)],
            },
        ]);
        assert!(draw.levels()[0].is_subset_of(&draw.levels()[1]));
        assert_eq!(draw.total_selected(), 5);

        let json = serde_json::to_value(&draw).unwrap();
        assert_eq!(json, serde_json::json!({"2": ["01", "02"], "3": ["01", "02", "30"]}));
    }
}
