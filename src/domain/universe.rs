//! The closed universe of numbers `00..=99` and its fixed partitions.

use serde::Serialize;

use crate::domain::number::{Number, UNIVERSE_SIZE};

/// Shadow ("bong") of a digit: 0<->5, 1<->6, 2<->7, 3<->8, 4<->9.
#[must_use]
pub const fn shadow_digit(digit: u8) -> u8 {
    (digit + 5) % 10
}

/// Static definitions over the 100-number universe.
pub struct NumberUniverse;

impl NumberUniverse {
    /// All 100 numbers, ascending.
    #[must_use]
    pub fn all() -> Vec<Number> {
        let all: Vec<Number> = Number::all().collect();
        debug_assert_eq!(all.len(), UNIVERSE_SIZE);
        all
    }

    /// The ten doubles: 00, 11, ..., 99.
    #[must_use]
    pub fn doubles() -> Vec<Number> {
        Number::all().filter(|n| n.is_double()).collect()
    }

    /// Numbers containing `digit` in either position (19 numbers).
    #[must_use]
    pub fn touching(digit: u8) -> Vec<Number> {
        Number::all().filter(|n| n.touches(digit)).collect()
    }

    /// Numbers whose digit sum mod 10 equals `digit` (10 numbers).
    #[must_use]
    pub fn summing_to(digit: u8) -> Vec<Number> {
        Number::all()
            .filter(|n| n.digit_sum_mod10() == digit)
            .collect()
    }
}

/// Fixed digit-class categories of the universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    HeadEven,
    HeadOdd,
    HeadSmall,
    HeadLarge,
    TailEven,
    TailOdd,
    TailSmall,
    TailLarge,
    SumEven,
    SumOdd,
    SumSmall,
    SumLarge,
    EvenEven,
    EvenOdd,
    OddEven,
    OddOdd,
    SmallSmall,
    SmallLarge,
    LargeSmall,
    LargeLarge,
    /// Kep bang: both digits equal.
    Double,
    /// Kep lech: digits one apart. Served with the same members as sat kep.
    OffsetDouble,
    /// Kep am: digits sum to ten.
    SumTenDouble,
    /// Sat kep: digits differ by one.
    NearDouble,
}

const fn is_even(d: u8) -> bool {
    d % 2 == 0
}

const fn is_small(d: u8) -> bool {
    d < 5
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 24] = [
        Self::HeadEven,
        Self::HeadOdd,
        Self::HeadSmall,
        Self::HeadLarge,
        Self::TailEven,
        Self::TailOdd,
        Self::TailSmall,
        Self::TailLarge,
        Self::SumEven,
        Self::SumOdd,
        Self::SumSmall,
        Self::SumLarge,
        Self::EvenEven,
        Self::EvenOdd,
        Self::OddEven,
        Self::OddOdd,
        Self::SmallSmall,
        Self::SmallLarge,
        Self::LargeSmall,
        Self::LargeLarge,
        Self::Double,
        Self::OffsetDouble,
        Self::SumTenDouble,
        Self::NearDouble,
    ];

    /// Human-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HeadEven => "Đầu chẵn",
            Self::HeadOdd => "Đầu lẻ",
            Self::HeadSmall => "Đầu bé",
            Self::HeadLarge => "Đầu lớn",
            Self::TailEven => "Đuôi chẵn",
            Self::TailOdd => "Đuôi lẻ",
            Self::TailSmall => "Đuôi bé",
            Self::TailLarge => "Đuôi lớn",
            Self::SumEven => "Tổng chẵn",
            Self::SumOdd => "Tổng lẻ",
            Self::SumSmall => "Tổng bé",
            Self::SumLarge => "Tổng lớn",
            Self::EvenEven => "Chẵn/Chẵn",
            Self::EvenOdd => "Chẵn/Lẻ",
            Self::OddEven => "Lẻ/Chẵn",
            Self::OddOdd => "Lẻ/Lẻ",
            Self::SmallSmall => "Bé/Bé",
            Self::SmallLarge => "Bé/Lớn",
            Self::LargeSmall => "Lớn/Bé",
            Self::LargeLarge => "Lớn/Lớn",
            Self::Double => "Kép bằng",
            Self::OffsetDouble => "Kép lệch",
            Self::SumTenDouble => "Kép âm",
            Self::NearDouble => "Sát kép",
        }
    }

    /// Stable key, as serialized.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::HeadEven => "head_even",
            Self::HeadOdd => "head_odd",
            Self::HeadSmall => "head_small",
            Self::HeadLarge => "head_large",
            Self::TailEven => "tail_even",
            Self::TailOdd => "tail_odd",
            Self::TailSmall => "tail_small",
            Self::TailLarge => "tail_large",
            Self::SumEven => "sum_even",
            Self::SumOdd => "sum_odd",
            Self::SumSmall => "sum_small",
            Self::SumLarge => "sum_large",
            Self::EvenEven => "even_even",
            Self::EvenOdd => "even_odd",
            Self::OddEven => "odd_even",
            Self::OddOdd => "odd_odd",
            Self::SmallSmall => "small_small",
            Self::SmallLarge => "small_large",
            Self::LargeSmall => "large_small",
            Self::LargeLarge => "large_large",
            Self::Double => "double",
            Self::OffsetDouble => "offset_double",
            Self::SumTenDouble => "sum_ten_double",
            Self::NearDouble => "near_double",
        }
    }

    /// Look a category up by key or by label.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.key() == name || c.label() == name)
    }

    /// Whether `n` belongs to this category.
    #[must_use]
    pub const fn contains(self, n: Number) -> bool {
        let (t, u) = (n.tens(), n.units());
        match self {
            Self::HeadEven => is_even(t),
            Self::HeadOdd => !is_even(t),
            Self::HeadSmall => is_small(t),
            Self::HeadLarge => !is_small(t),
            Self::TailEven => is_even(u),
            Self::TailOdd => !is_even(u),
            Self::TailSmall => is_small(u),
            Self::TailLarge => !is_small(u),
            Self::SumEven => is_even(n.digit_sum()),
            Self::SumOdd => !is_even(n.digit_sum()),
            Self::SumSmall => n.digit_sum() < 9,
            Self::SumLarge => n.digit_sum() >= 9,
            Self::EvenEven => is_even(t) && is_even(u),
            Self::EvenOdd => is_even(t) && !is_even(u),
            Self::OddEven => !is_even(t) && is_even(u),
            Self::OddOdd => !is_even(t) && !is_even(u),
            Self::SmallSmall => is_small(t) && is_small(u),
            Self::SmallLarge => is_small(t) && !is_small(u),
            Self::LargeSmall => !is_small(t) && is_small(u),
            Self::LargeLarge => !is_small(t) && !is_small(u),
            Self::Double => n.is_double(),
            Self::SumTenDouble => n.digit_sum() == 10,
            Self::OffsetDouble | Self::NearDouble => t.abs_diff(u) == 1,
        }
    }

    /// Members of this category, ascending.
    #[must_use]
    pub fn members(self) -> Vec<Number> {
        Number::all().filter(|n| self.contains(*n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: u8) -> Number {
        Number::new(v).unwrap()
    }

    #[test]
    fn test_universe_size() {
        assert_eq!(NumberUniverse::all().len(), 100);
    }

    #[test]
    fn test_doubles() {
        let doubles = NumberUniverse::doubles();
        assert_eq!(doubles.len(), 10);
        assert_eq!(doubles[0], n(0));
        assert_eq!(doubles[9], n(99));
        assert!(doubles.iter().all(|d| d.tens() == d.units()));
    }

    #[test]
    fn test_touch_expansion() {
        for digit in 0..10 {
            let touched = NumberUniverse::touching(digit);
            assert_eq!(touched.len(), 19, "touch {digit}");
        }
        let zero = NumberUniverse::touching(0);
        assert!(zero.contains(&n(0)));
        assert!(zero.contains(&n(90)));
        assert!(!zero.contains(&n(11)));
    }

    #[test]
    fn test_sum_expansion() {
        for digit in 0..10 {
            assert_eq!(NumberUniverse::summing_to(digit).len(), 10);
        }
        let zero = NumberUniverse::summing_to(0);
        assert_eq!(
            zero,
            vec![n(0), n(19), n(28), n(37), n(46), n(55), n(64), n(73), n(82), n(91)]
        );
    }

    #[test]
    fn test_category_sizes() {
        assert_eq!(Category::HeadEven.members().len(), 50);
        assert_eq!(Category::SmallSmall.members().len(), 25);
        assert_eq!(Category::Double.members().len(), 10);
        assert_eq!(Category::OffsetDouble.members().len(), 18);
        assert_eq!(Category::SumTenDouble.members().len(), 9);
        assert_eq!(Category::NearDouble.members().len(), 18);
        assert_eq!(
            Category::SumSmall.members().len() + Category::SumLarge.members().len(),
            100
        );
    }

    #[test]
    fn test_lookup_by_key_or_label() {
        for category in Category::ALL {
            let serialized = serde_json::to_value(category).unwrap();
            assert_eq!(serialized, category.key());
            assert_eq!(Category::from_name(category.key()), Some(category));
            assert_eq!(Category::from_name(category.label()), Some(category));
        }
        assert_eq!(Category::from_name(" Đầu chẵn "), Some(Category::HeadEven));
        assert_eq!(Category::from_name("Kép"), None);
    }

    #[test]
    fn test_shadow_digit() {
        assert_eq!(shadow_digit(0), 5);
        assert_eq!(shadow_digit(7), 2);
    }

    fn numbers(values: &[u8]) -> Vec<Number> {
        values.iter().copied().map(n).collect()
    }

    #[test]
    fn test_double_kind_members() {
        let adjacent = numbers(&[
            1, 10, 12, 21, 23, 32, 34, 43, 45, 54, 56, 65, 67, 76, 78, 87, 89, 98,
        ]);

        assert_eq!(
            Category::Double.members(),
            numbers(&[0, 11, 22, 33, 44, 55, 66, 77, 88, 99])
        );
        assert_eq!(Category::OffsetDouble.members(), adjacent);
        assert_eq!(Category::NearDouble.members(), adjacent);
        assert_eq!(
            Category::SumTenDouble.members(),
            numbers(&[19, 28, 37, 46, 55, 64, 73, 82, 91])
        );
    }
}
