//! Validated generation criteria.
//!
//! [`Criteria`] is the only input the engine accepts. It is built from a raw
//! [`GenerateDanDeRequest`] by [`Criteria::try_from_request`], which checks
//! token format, list bounds and cross-field conflicts before any generation
//! work happens.

use serde::{Serialize, Serializer};

use crate::config::GenerationConfig;
use crate::domain::dto::GenerateDanDeRequest;
use crate::domain::number::{Number, parse_digit};

/// Reasons a request is rejected before generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `quantity` was not provided.
    #[error("quantity is required")]
    QuantityMissing,

    /// `quantity` outside `1..=max`.
    #[error("quantity must be between 1 and {max}, got {value}")]
    QuantityOutOfRange { value: i64, max: u32 },

    /// A number token is not `00`..`99`.
    #[error("{field}: '{token}' is not a two-digit number between 00 and 99")]
    InvalidNumber { field: &'static str, token: String },

    /// A digit token is not `0`..`9`.
    #[error("{field}: '{token}' is not a single digit between 0 and 9")]
    InvalidDigit { field: &'static str, token: String },

    /// A digit-sum token is not `0`..`18`.
    #[error("{field}: '{token}' is not a digit sum between 0 and 18")]
    InvalidSum { field: &'static str, token: String },

    /// A required field was not provided.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// A category name matches neither a key nor a label.
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    /// A list exceeds its bound.
    #[error("{field} cannot contain more than {max} entries, got {actual}")]
    TooMany {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// Numbers requested for inclusion are also excluded.
    #[error("numbers {} cannot be both included and excluded", join(.0))]
    InclusionExcluded(Vec<Number>),

    /// Numbers requested for inclusion are doubles while doubles are excluded.
    #[error("numbers {} cannot be included while doubles are excluded", join(.0))]
    InclusionDouble(Vec<Number>),
}

impl ValidationError {
    /// Whether the request left out a required value, as opposed to sending a bad one.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::QuantityMissing | Self::MissingField { .. })
    }
}

fn join(numbers: &[Number]) -> String {
    numbers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Strictly validated, normalized criteria for one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    /// Number of independent draws.
    pub quantity: u32,

    /// Numbers to guarantee when capacity allows, input order preserved.
    #[serde(rename = "combinationNumbers")]
    pub inclusion: Vec<Number>,

    /// Numbers never selected.
    #[serde(rename = "excludeNumbers")]
    pub exclusion: Vec<Number>,

    /// Drop the ten doubles from the pool.
    pub exclude_doubles: bool,

    /// Special group ids.
    pub special_sets: Vec<Number>,

    /// Touch digits.
    #[serde(serialize_with = "digits_as_strings")]
    pub touches: Vec<u8>,

    /// Sum digits.
    #[serde(serialize_with = "digits_as_strings")]
    pub sums: Vec<u8>,
}

#[allow(clippy::ptr_arg)]
fn digits_as_strings<S: Serializer>(digits: &Vec<u8>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(digits.iter().map(ToString::to_string))
}

impl Criteria {
    /// Criteria with no filters.
    #[must_use]
    pub const fn with_quantity(quantity: u32) -> Self {
        Self {
            quantity,
            inclusion: Vec::new(),
            exclusion: Vec::new(),
            exclude_doubles: false,
            special_sets: Vec::new(),
            touches: Vec::new(),
            sums: Vec::new(),
        }
    }

    /// Validate a raw request against the configured limits.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn try_from_request(
        request: &GenerateDanDeRequest,
        limits: &GenerationConfig,
    ) -> Result<Self, ValidationError> {
        let quantity = request.quantity.ok_or(ValidationError::QuantityMissing)?;
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| (1..=limits.max_quantity).contains(q))
            .ok_or(ValidationError::QuantityOutOfRange {
                value: quantity,
                max: limits.max_quantity,
            })?;

        let inclusion = parse_numbers(
            "combinationNumbers",
            tokens(request.combination_numbers.as_ref()),
            limits.max_inclusion,
        )?;
        let exclusion = parse_numbers(
            "excludeNumbers",
            tokens(request.exclude_numbers.as_ref()),
            limits.max_exclusion,
        )?;
        let special_sets = parse_numbers(
            "specialSets",
            tokens(request.special_sets.as_ref()),
            limits.max_special_sets,
        )?;
        let touches = parse_digits(
            "touches",
            tokens(request.touches.as_ref()),
            limits.max_touches,
        )?;
        let sums = parse_digits("sums", tokens(request.sums.as_ref()), limits.max_sums)?;

        let criteria = Self {
            quantity,
            inclusion,
            exclusion,
            exclude_doubles: request.exclude_doubles.unwrap_or(false),
            special_sets,
            touches,
            sums,
        };
        criteria.check_conflicts()?;

        Ok(criteria)
    }

    /// Check that `quantity` lies in `1..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::QuantityOutOfRange`] otherwise.
    pub fn check_quantity(&self, max: u32) -> Result<(), ValidationError> {
        if (1..=max).contains(&self.quantity) {
            Ok(())
        } else {
            Err(ValidationError::QuantityOutOfRange {
                value: i64::from(self.quantity),
                max,
            })
        }
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns an error if an included number is excluded, either explicitly
    /// or as a double.
    pub fn check_conflicts(&self) -> Result<(), ValidationError> {
        let excluded: Vec<Number> = self
            .inclusion
            .iter()
            .copied()
            .filter(|n| self.exclusion.contains(n))
            .collect();
        if !excluded.is_empty() {
            return Err(ValidationError::InclusionExcluded(excluded));
        }

        if self.exclude_doubles {
            let doubles: Vec<Number> = self
                .inclusion
                .iter()
                .copied()
                .filter(|n| n.is_double())
                .collect();
            if !doubles.is_empty() {
                return Err(ValidationError::InclusionDouble(doubles));
            }
        }

        Ok(())
    }
}

/// An absent or `null` list reads as empty.
pub(crate) fn tokens(list: Option<&Vec<String>>) -> &[String] {
    list.map(Vec::as_slice).unwrap_or_default()
}

/// Parse and deduplicate number tokens, keeping first-seen order.
pub(crate) fn parse_numbers(
    field: &'static str,
    tokens: &[String],
    max: usize,
) -> Result<Vec<Number>, ValidationError> {
    check_len(field, tokens.len(), max)?;

    let mut numbers: Vec<Number> = Vec::with_capacity(tokens.len());
    for token in tokens {
        let n: Number = token.parse().map_err(|_| ValidationError::InvalidNumber {
            field,
            token: token.clone(),
        })?;
        if !numbers.contains(&n) {
            numbers.push(n);
        }
    }
    Ok(numbers)
}

/// Parse and deduplicate digit tokens, keeping first-seen order.
pub(crate) fn parse_digits(
    field: &'static str,
    tokens: &[String],
    max: usize,
) -> Result<Vec<u8>, ValidationError> {
    check_len(field, tokens.len(), max)?;

    let mut digits: Vec<u8> = Vec::with_capacity(tokens.len());
    for token in tokens {
        let d = parse_digit(token).ok_or_else(|| ValidationError::InvalidDigit {
            field,
            token: token.clone(),
        })?;
        if !digits.contains(&d) {
            digits.push(d);
        }
    }
    Ok(digits)
}

/// Parse and deduplicate digit-sum tokens (`0`..`18`), keeping first-seen order.
pub(crate) fn parse_sums(
    field: &'static str,
    tokens: &[String],
    max: usize,
) -> Result<Vec<u8>, ValidationError> {
    check_len(field, tokens.len(), max)?;

    let mut sums: Vec<u8> = Vec::with_capacity(tokens.len());
    for token in tokens {
        let sum = parse_sum(token).ok_or_else(|| ValidationError::InvalidSum {
            field,
            token: token.clone(),
        })?;
        if !sums.contains(&sum) {
            sums.push(sum);
        }
    }
    Ok(sums)
}

fn parse_sum(token: &str) -> Option<u8> {
    if token.is_empty() || token.len() > 2 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<u8>().ok().filter(|s| *s <= MAX_DIGIT_SUM)
}

/// Largest digit sum of a two-digit number (9 + 9).
pub const MAX_DIGIT_SUM: u8 = 18;

fn check_len(field: &'static str, actual: usize, max: usize) -> Result<(), ValidationError> {
    if actual > max {
        return Err(ValidationError::TooMany { field, max, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    fn request(quantity: i64) -> GenerateDanDeRequest {
        GenerateDanDeRequest {
            quantity: Some(quantity),
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_request() {
        let criteria =
            Criteria::try_from_request(&request(3), &GenerationConfig::default()).unwrap();
        assert_eq!(criteria, Criteria::with_quantity(3));
    }

    #[test]
    fn test_quantity_bounds() {
        let limits = GenerationConfig::default();

        let missing = GenerateDanDeRequest::default();
        assert_eq!(
            Criteria::try_from_request(&missing, &limits),
            Err(ValidationError::QuantityMissing)
        );

        for bad in [0, -1, 51] {
            assert!(matches!(
                Criteria::try_from_request(&request(bad), &limits),
                Err(ValidationError::QuantityOutOfRange { .. })
            ));
        }
        assert!(Criteria::try_from_request(&request(50), &limits).is_ok());
    }

    #[test]
    fn test_malformed_tokens() {
        let limits = GenerationConfig::default();

        let mut req = request(1);
        req.combination_numbers = Some(strings(&["5"]));
        assert!(matches!(
            Criteria::try_from_request(&req, &limits),
            Err(ValidationError::InvalidNumber {
                field: "combinationNumbers",
                ..
            })
        ));

        let mut req = request(1);
        req.touches = Some(strings(&["12"]));
        assert!(matches!(
            Criteria::try_from_request(&req, &limits),
            Err(ValidationError::InvalidDigit { field: "touches", .. })
        ));
    }

    #[test]
    fn test_list_bounds() {
        let limits = GenerationConfig::default();

        let mut req = request(1);
        req.exclude_numbers = Some((0..11).map(|v| format!("{v:02}")).collect());
        assert_eq!(
            Criteria::try_from_request(&req, &limits),
            Err(ValidationError::TooMany {
                field: "excludeNumbers",
                max: 10,
                actual: 11
            })
        );

        let mut req = request(1);
        req.special_sets = Some(strings(&["00", "01", "02", "03", "04", "11"]));
        assert!(matches!(
            Criteria::try_from_request(&req, &limits),
            Err(ValidationError::TooMany { field: "specialSets", .. })
        ));
    }

    #[test]
    fn test_inclusion_exclusion_conflict() {
        let mut req = request(1);
        req.combination_numbers = Some(strings(&["07", "08"]));
        req.exclude_numbers = Some(strings(&["07"]));

        let err = Criteria::try_from_request(&req, &GenerationConfig::default()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InclusionExcluded(vec![Number::new(7).unwrap()])
        );
        assert_eq!(
            err.to_string(),
            "numbers 07 cannot be both included and excluded"
        );
    }

    #[test]
    fn test_inclusion_double_conflict() {
        let mut req = request(1);
        req.combination_numbers = Some(strings(&["11", "12"]));
        req.exclude_doubles = Some(true);
        assert!(matches!(
            Criteria::try_from_request(&req, &GenerationConfig::default()),
            Err(ValidationError::InclusionDouble(_))
        ));

        req.exclude_doubles = Some(false);
        assert!(Criteria::try_from_request(&req, &GenerationConfig::default()).is_ok());
    }

    #[test]
    fn test_duplicates_collapse_in_order() {
        let mut req = request(1);
        req.combination_numbers = Some(strings(&["50", "05", "50"]));
        req.sums = Some(strings(&["3", "3"]));

        let criteria = Criteria::try_from_request(&req, &GenerationConfig::default()).unwrap();
        assert_eq!(
            criteria.inclusion,
            vec![Number::new(50).unwrap(), Number::new(5).unwrap()]
        );
        assert_eq!(criteria.sums, vec![3]);
    }

    #[test]
    fn test_null_lists_read_as_empty() {
        let req: GenerateDanDeRequest = serde_json::from_str(
            r#"{"quantity": 1, "touches": null, "combinationNumbers": null, "excludeDoubles": null}"#,
        )
        .unwrap();
        let criteria = Criteria::try_from_request(&req, &GenerationConfig::default()).unwrap();
        assert_eq!(criteria, Criteria::with_quantity(1));
    }

    #[test]
    fn test_check_quantity() {
        assert!(Criteria::with_quantity(1).check_quantity(50).is_ok());
        assert!(Criteria::with_quantity(50).check_quantity(50).is_ok());
        assert_eq!(
            Criteria::with_quantity(0).check_quantity(50),
            Err(ValidationError::QuantityOutOfRange { value: 0, max: 50 })
        );
        assert!(Criteria::with_quantity(10_000).check_quantity(50).is_err());
    }

    #[test]
    fn test_parse_sums() {
        assert_eq!(
            parse_sums("sums", &strings(&["0", "18", "07", "18"]), 19),
            Ok(vec![0, 18, 7])
        );
        for bad in ["19", "-1", "", "1a", "100"] {
            assert!(
                matches!(
                    parse_sums("sums", &strings(&[bad]), 19),
                    Err(ValidationError::InvalidSum { .. })
                ),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_missing_errors() {
        assert!(ValidationError::QuantityMissing.is_missing());
        assert!(ValidationError::MissingField { field: "filter" }.is_missing());
        assert!(!ValidationError::UnknownCategory("x".to_string()).is_missing());
    }

    #[test]
    fn test_echo_serialization() {
        let mut criteria = Criteria::with_quantity(2);
        criteria.touches = vec![1, 7];
        criteria.inclusion = vec![Number::new(5).unwrap()];

        let json = serde_json::to_value(&criteria).unwrap();
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["combinationNumbers"][0], "05");
        assert_eq!(json["touches"], serde_json::json!(["1", "7"]));
        assert_eq!(json["excludeDoubles"], false);
    }
}
