//! Validated inputs for the deterministic "dan dac biet" filters.
//!
//! Each filter starts from a base set (a head/tail product, the numbers
//! touching some digits, or a category), narrows it by digit sum, appends
//! explicit additions and finally drops removals.

use crate::domain::criteria::{ValidationError, parse_digits, parse_numbers, parse_sums, tokens};
use crate::domain::dto::{CategoryDanRequest, HeadTailRequest, QuickDanRequest, TouchDanRequest};
use crate::domain::number::{Number, UNIVERSE_SIZE};
use crate::domain::universe::Category;

const MAX_DIGIT_TOKENS: usize = 10;
const MAX_SUM_TOKENS: usize = 19;
const MAX_NUMBER_TOKENS: usize = UNIVERSE_SIZE;

/// Head digits crossed with tail digits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadTailFilter {
    pub heads: Vec<u8>,
    pub tails: Vec<u8>,
    /// Exact digit sums (0-18) to keep.
    pub sums: Vec<u8>,
    pub add: Vec<Number>,
    /// Drop any number containing one of these digits.
    pub remove_digits: Vec<u8>,
}

impl HeadTailFilter {
    /// # Errors
    ///
    /// Returns the first malformed or oversized field.
    pub fn try_from_request(request: &HeadTailRequest) -> Result<Self, ValidationError> {
        Ok(Self {
            heads: parse_digits("heads", tokens(request.heads.as_ref()), MAX_DIGIT_TOKENS)?,
            tails: parse_digits("tails", tokens(request.tails.as_ref()), MAX_DIGIT_TOKENS)?,
            sums: parse_sums("sums", tokens(request.sums.as_ref()), MAX_SUM_TOKENS)?,
            add: parse_numbers(
                "addNumbers",
                tokens(request.add_numbers.as_ref()),
                MAX_NUMBER_TOKENS,
            )?,
            remove_digits: parse_digits(
                "removeDigits",
                tokens(request.remove_digits.as_ref()),
                MAX_DIGIT_TOKENS,
            )?,
        })
    }
}

/// Numbers touching any of the given digits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchFilter {
    pub touches: Vec<u8>,
    /// A number is kept when its digit sum, or the last digit of that sum,
    /// is listed.
    pub sums: Vec<u8>,
    pub add: Vec<Number>,
    /// Exact numbers to drop.
    pub remove: Vec<Number>,
}

impl TouchFilter {
    /// # Errors
    ///
    /// Returns the first malformed or oversized field.
    pub fn try_from_request(request: &TouchDanRequest) -> Result<Self, ValidationError> {
        Ok(Self {
            touches: parse_digits("touches", tokens(request.touches.as_ref()), MAX_DIGIT_TOKENS)?,
            sums: parse_sums("sums", tokens(request.sums.as_ref()), MAX_SUM_TOKENS)?,
            add: parse_numbers(
                "addNumbers",
                tokens(request.add_numbers.as_ref()),
                MAX_NUMBER_TOKENS,
            )?,
            remove: parse_numbers(
                "removeNumbers",
                tokens(request.remove_numbers.as_ref()),
                MAX_NUMBER_TOKENS,
            )?,
        })
    }
}

/// Members of one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    /// No category means an empty base set.
    pub category: Option<Category>,
    /// Exact digit sums (0-18) to keep.
    pub sums: Vec<u8>,
    pub add: Vec<Number>,
    /// Drop any number containing one of these digits.
    pub remove_digits: Vec<u8>,
}

impl CategoryFilter {
    /// # Errors
    ///
    /// Returns the first malformed or oversized field, or
    /// [`ValidationError::UnknownCategory`].
    pub fn try_from_request(request: &CategoryDanRequest) -> Result<Self, ValidationError> {
        Ok(Self {
            category: request
                .category
                .as_deref()
                .filter(|name| !name.trim().is_empty())
                .map(category_named)
                .transpose()?,
            sums: parse_sums("sums", tokens(request.sums.as_ref()), MAX_SUM_TOKENS)?,
            add: parse_numbers(
                "addNumbers",
                tokens(request.add_numbers.as_ref()),
                MAX_NUMBER_TOKENS,
            )?,
            remove_digits: parse_digits(
                "removeDigits",
                tokens(request.remove_digits.as_ref()),
                MAX_DIGIT_TOKENS,
            )?,
        })
    }
}

/// The category named by a quick lookup.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] for an absent or blank filter
/// and [`ValidationError::UnknownCategory`] for an unknown one.
pub fn quick_category(request: &QuickDanRequest) -> Result<Category, ValidationError> {
    match request.filter.as_deref() {
        Some(name) if !name.trim().is_empty() => category_named(name),
        _ => Err(ValidationError::MissingField { field: "filter" }),
    }
}

fn category_named(name: &str) -> Result<Category, ValidationError> {
    Category::from_name(name).ok_or_else(|| ValidationError::UnknownCategory(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(tokens: &[&str]) -> Option<Vec<String>> {
        Some(tokens.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_head_tail_parsing() {
        let request = HeadTailRequest {
            heads: strings(&["1", "2", "1"]),
            tails: strings(&["3"]),
            sums: strings(&["4", "13"]),
            add_numbers: strings(&["99"]),
            remove_digits: None,
        };
        let filter = HeadTailFilter::try_from_request(&request).unwrap();
        assert_eq!(filter.heads, vec![1, 2]);
        assert_eq!(filter.tails, vec![3]);
        assert_eq!(filter.sums, vec![4, 13]);
        assert_eq!(filter.add, vec![Number::new(99).unwrap()]);
        assert!(filter.remove_digits.is_empty());
    }

    #[test]
    fn test_malformed_filter_tokens() {
        let request = HeadTailRequest {
            heads: strings(&["12"]),
            ..Default::default()
        };
        assert!(matches!(
            HeadTailFilter::try_from_request(&request),
            Err(ValidationError::InvalidDigit { field: "heads", .. })
        ));

        let request = TouchDanRequest {
            sums: strings(&["19"]),
            ..Default::default()
        };
        assert!(matches!(
            TouchFilter::try_from_request(&request),
            Err(ValidationError::InvalidSum { field: "sums", .. })
        ));

        let request = TouchDanRequest {
            remove_numbers: strings(&["7"]),
            ..Default::default()
        };
        assert!(matches!(
            TouchFilter::try_from_request(&request),
            Err(ValidationError::InvalidNumber {
                field: "removeNumbers",
                ..
            })
        ));
    }

    #[test]
    fn test_category_lookup() {
        let request = CategoryDanRequest {
            category: Some("Kép âm".to_string()),
            ..Default::default()
        };
        let filter = CategoryFilter::try_from_request(&request).unwrap();
        assert_eq!(filter.category, Some(Category::SumTenDouble));

        let blank = CategoryDanRequest {
            category: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(CategoryFilter::try_from_request(&blank).unwrap().category, None);

        let unknown = CategoryDanRequest {
            category: Some("lucky".to_string()),
            ..Default::default()
        };
        assert_eq!(
            CategoryFilter::try_from_request(&unknown),
            Err(ValidationError::UnknownCategory("lucky".to_string()))
        );
    }

    #[test]
    fn test_quick_category() {
        let request = QuickDanRequest {
            filter: Some("near_double".to_string()),
        };
        assert_eq!(quick_category(&request), Ok(Category::NearDouble));

        assert_eq!(
            quick_category(&QuickDanRequest::default()),
            Err(ValidationError::MissingField { field: "filter" })
        );
    }
}
