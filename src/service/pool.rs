//! Base working pool and number sets.

use crate::domain::number::UNIVERSE_SIZE;
use crate::domain::{Criteria, Number, NumberUniverse};

/// Membership set over the 100-number universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberSet {
    mask: [bool; UNIVERSE_SIZE],
    len: usize,
}

impl Default for NumberSet {
    fn default() -> Self {
        Self {
            mask: [false; UNIVERSE_SIZE],
            len: 0,
        }
    }
}

impl NumberSet {
    #[must_use]
    pub const fn contains(&self, n: Number) -> bool {
        self.mask[n.value() as usize]
    }

    /// Insert `n`, returning whether it was newly added.
    pub const fn insert(&mut self, n: Number) -> bool {
        let slot = &mut self.mask[n.value() as usize];
        if *slot {
            return false;
        }
        *slot = true;
        self.len += 1;
        true
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Members in ascending order.
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<Number> {
        Number::all().filter(|n| self.contains(*n)).collect()
    }
}

impl Extend<Number> for NumberSet {
    fn extend<I: IntoIterator<Item = Number>>(&mut self, iter: I) {
        for n in iter {
            self.insert(n);
        }
    }
}

impl FromIterator<Number> for NumberSet {
    fn from_iter<I: IntoIterator<Item = Number>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

/// Every number a draw may select: the universe minus doubles (when
/// excluded) minus the explicit exclusion list.
///
/// Nothing outside this pool is ever selected.
#[derive(Debug, Clone)]
pub struct BasePool {
    numbers: Vec<Number>,
    members: NumberSet,
}

impl BasePool {
    /// Compute the pool.
    #[must_use]
    pub fn new(exclude_doubles: bool, exclusion: &[Number]) -> Self {
        let numbers: Vec<Number> = NumberUniverse::all()
            .into_iter()
            .filter(|n| !(exclude_doubles && n.is_double()))
            .filter(|n| !exclusion.contains(n))
            .collect();
        let members = numbers.iter().copied().collect();
        Self { numbers, members }
    }

    /// Pool for a set of criteria.
    #[must_use]
    pub fn for_criteria(criteria: &Criteria) -> Self {
        Self::new(criteria.exclude_doubles, &criteria.exclusion)
    }

    /// Numbers in the pool, ascending.
    #[must_use]
    pub fn numbers(&self) -> &[Number] {
        &self.numbers
    }

    #[must_use]
    pub const fn contains(&self, n: Number) -> bool {
        self.members.contains(n)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}
