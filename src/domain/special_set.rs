//! Special number groups ("bo so").
//!
//! The universe is partitioned into 15 groups closed under swapping digits
//! and replacing a digit with its shadow. A group is addressed by any of its
//! members; its canonical id is the member whose digits are both below 5 with
//! tens <= units (`00`, `01`, ..., `44`).

use crate::domain::number::Number;
use crate::domain::universe::shadow_digit;

/// Number of special groups.
pub const SPECIAL_SET_COUNT: usize = 15;

/// A resolved special group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialSet {
    /// Canonical id.
    pub id: Number,
    /// Members, ascending.
    pub members: Vec<Number>,
}

const fn base_digit(d: u8) -> u8 {
    if d < 5 { d } else { shadow_digit(d) }
}

/// Canonical id of the group containing `n`.
#[must_use]
pub fn canonical_id(n: Number) -> Number {
    let a = base_digit(n.tens());
    let b = base_digit(n.units());
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    Number::from_digits(lo, hi).unwrap_or(n)
}

/// Resolve an id into its group.
///
/// Every number `00..=99` resolves, so the lookup is total.
#[must_use]
pub fn resolve(id: Number) -> SpecialSet {
    let canonical = canonical_id(id);
    let mut members: Vec<Number> = Number::all()
        .filter(|n| canonical_id(*n) == canonical)
        .collect();
    members.sort_unstable();
    SpecialSet {
        id: canonical,
        members,
    }
}

/// The full table, ordered by canonical id.
#[must_use]
pub fn table() -> Vec<SpecialSet> {
    Number::all()
        .filter(|n| canonical_id(*n) == *n)
        .map(resolve)
        .collect()
}
