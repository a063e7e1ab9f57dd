//! Data Transfer Objects for API requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::number::Number;
use crate::domain::special_set::SpecialSet;
use crate::domain::universe::Category;

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (0 = success, non-zero = error).
    pub code: i32,

    /// Human-readable message.
    pub message: String,

    /// Response data (null on error).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a success response.
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data: Some(data),
        }
    }
}

/// Request body for `POST /v1/dande/generate`.
///
/// Tokens are kept as raw strings here; they are parsed and bounded by
/// [`Criteria::try_from_request`](crate::domain::Criteria::try_from_request).
/// Absent and `null` fields are equivalent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDanDeRequest {
    /// Number of draws (1-50).
    #[serde(default)]
    pub quantity: Option<i64>,

    /// Numbers to include.
    #[serde(default)]
    pub combination_numbers: Option<Vec<String>>,

    /// Numbers to exclude.
    #[serde(default)]
    pub exclude_numbers: Option<Vec<String>>,

    /// Exclude the ten doubles.
    #[serde(default)]
    pub exclude_doubles: Option<bool>,

    /// Special group ids.
    #[serde(default)]
    pub special_sets: Option<Vec<String>>,

    /// Touch digits.
    #[serde(default)]
    pub touches: Option<Vec<String>>,

    /// Sum digits.
    #[serde(default)]
    pub sums: Option<Vec<String>>,
}

/// Request body for `POST /v1/dande/special/quick`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuickDanRequest {
    /// Category key or label.
    #[serde(default)]
    pub filter: Option<String>,
}

/// Request body for `POST /v1/dande/special/head-tail`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadTailRequest {
    #[serde(default)]
    pub heads: Option<Vec<String>>,
    #[serde(default)]
    pub tails: Option<Vec<String>>,
    #[serde(default)]
    pub sums: Option<Vec<String>>,
    #[serde(default)]
    pub add_numbers: Option<Vec<String>>,
    #[serde(default)]
    pub remove_digits: Option<Vec<String>>,
}

/// Request body for `POST /v1/dande/special/touch`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchDanRequest {
    #[serde(default)]
    pub touches: Option<Vec<String>>,
    #[serde(default)]
    pub sums: Option<Vec<String>>,
    #[serde(default)]
    pub add_numbers: Option<Vec<String>>,
    #[serde(default)]
    pub remove_numbers: Option<Vec<String>>,
}

/// Request body for `POST /v1/dande/special/category`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDanRequest {
    /// Category key or label.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sums: Option<Vec<String>>,
    #[serde(default)]
    pub add_numbers: Option<Vec<String>>,
    #[serde(default)]
    pub remove_digits: Option<Vec<String>>,
}

/// A filtered dan: ascending numbers and their count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialDanResponse {
    pub result: Vec<Number>,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Category>,
}

impl SpecialDanResponse {
    #[must_use]
    pub fn new(result: Vec<Number>) -> Self {
        Self {
            total: result.len(),
            result,
            filter: None,
        }
    }

    #[must_use]
    pub fn with_filter(mut self, filter: Category) -> Self {
        self.filter = Some(filter);
        self
    }
}

/// One entry of the special group table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialSetResponse {
    pub id: Number,
    pub members: Vec<Number>,
}

impl From<SpecialSet> for SpecialSetResponse {
    fn from(set: SpecialSet) -> Self {
        Self {
            id: set.id,
            members: set.members,
        }
    }
}

/// One digit-class category with its members.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub key: Category,
    pub label: &'static str,
    pub members: Vec<Number>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            key: category,
            label: category.label(),
            members: category.members(),
        }
    }
}
