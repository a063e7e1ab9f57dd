//! Special dan ("dan dac biet") builders.
//!
//! Unlike the cascade these are deterministic: the same filter always yields
//! the same ascending list. Additions are applied before removals, so a
//! removal also drops an explicitly added number.

use tracing::debug;

use crate::domain::{
    Category, CategoryDanRequest, CategoryFilter, HeadTailFilter, HeadTailRequest, Number,
    QuickDanRequest, TouchDanRequest, TouchFilter,
};
use crate::domain::filter::quick_category;
use crate::error::Result;
use crate::service::dande::rejected;
use crate::service::pool::NumberSet;

/// Head digits crossed with tail digits, then narrowed.
///
/// Either side empty gives an empty product.
#[must_use]
pub fn head_tail(filter: &HeadTailFilter) -> Vec<Number> {
    let product = filter.heads.iter().flat_map(|&head| {
        filter
            .tails
            .iter()
            .filter_map(move |&tail| Number::from_digits(head, tail))
    });
    let base = product.filter(|n| exact_sum(&filter.sums, *n));

    assemble(base, &filter.add, |n| !touches_any(&filter.remove_digits, n))
}

/// Numbers touching any listed digit, then narrowed.
#[must_use]
pub fn touch(filter: &TouchFilter) -> Vec<Number> {
    let base = Number::all()
        .filter(|n| touches_any(&filter.touches, *n))
        .filter(|n| sum_or_last_digit(&filter.sums, *n));

    assemble(base, &filter.add, |n| !filter.remove.contains(&n))
}

/// Category members, then narrowed.
#[must_use]
pub fn category(filter: &CategoryFilter) -> Vec<Number> {
    let base = filter
        .category
        .map(Category::members)
        .unwrap_or_default()
        .into_iter()
        .filter(|n| exact_sum(&filter.sums, *n));

    assemble(base, &filter.add, |n| !touches_any(&filter.remove_digits, n))
}

/// Validate and build a head/tail dan.
///
/// # Errors
///
/// Returns [`AppError::Validation`](crate::error::AppError::Validation) for a
/// malformed request.
pub fn head_tail_from_request(request: &HeadTailRequest) -> Result<Vec<Number>> {
    let filter = HeadTailFilter::try_from_request(request).map_err(rejected)?;
    let result = head_tail(&filter);
    record("head_tail", result.len());
    Ok(result)
}

/// Validate and build a touch dan.
///
/// # Errors
///
/// Returns [`AppError::Validation`](crate::error::AppError::Validation) for a
/// malformed request.
pub fn touch_from_request(request: &TouchDanRequest) -> Result<Vec<Number>> {
    let filter = TouchFilter::try_from_request(request).map_err(rejected)?;
    let result = touch(&filter);
    record("touch", result.len());
    Ok(result)
}

/// Validate and build a category dan.
///
/// # Errors
///
/// Returns [`AppError::Validation`](crate::error::AppError::Validation) for a
/// malformed request or an unknown category.
pub fn category_from_request(request: &CategoryDanRequest) -> Result<Vec<Number>> {
    let filter = CategoryFilter::try_from_request(request).map_err(rejected)?;
    let result = category(&filter);
    record("category", result.len());
    Ok(result)
}

/// Resolve a quick lookup to its category.
///
/// # Errors
///
/// Returns [`AppError::Validation`](crate::error::AppError::Validation) for a
/// missing or unknown filter.
pub fn quick_from_request(request: &QuickDanRequest) -> Result<Category> {
    let category = quick_category(request).map_err(rejected)?;
    record("quick", category.members().len());
    Ok(category)
}

fn record(kind: &'static str, total: usize) {
    debug!(kind, total, "Special dan built");
    metrics::counter!("dande_special_dans_total", "kind" => kind).increment(1);
}

fn assemble(
    base: impl Iterator<Item = Number>,
    add: &[Number],
    keep: impl Fn(Number) -> bool,
) -> Vec<Number> {
    let mut set: NumberSet = base.collect();
    set.extend(add.iter().copied());

    let mut result = set.to_sorted_vec();
    result.retain(|n| keep(*n));
    result
}

fn touches_any(digits: &[u8], n: Number) -> bool {
    digits.iter().any(|&d| n.touches(d))
}

/// Empty `sums` keeps everything.
fn exact_sum(sums: &[u8], n: Number) -> bool {
    sums.is_empty() || sums.contains(&n.digit_sum())
}

/// Empty `sums` keeps everything. Sum 15 matches both `15` and `5`.
fn sum_or_last_digit(sums: &[u8], n: Number) -> bool {
    sums.is_empty() || sums.contains(&n.digit_sum()) || sums.contains(&n.digit_sum_mod10())
}
