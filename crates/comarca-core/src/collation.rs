//! Orderings used for option lists and the sidebar.
//!
//! [`collate`] approximates Portuguese locale ordering: letters compare
//! without regard to accents or case first, then unaccented before accented,
//! then lowercase before uppercase.

use std::cmp::Ordering;
use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

use crate::normalize::is_combining_diacritic;

/// Locale-like comparison of two display strings.
pub fn collate(a: &str, b: &str) -> Ordering {
    let (a_lower, b_lower) = (a.to_lowercase(), b.to_lowercase());
    base_letters(&a_lower)
        .cmp(&base_letters(&b_lower))
        .then_with(|| a_lower.cmp(&b_lower))
        .then_with(|| case_order(a, b))
}

/// Order by the first integer in each value (0 when absent), then [`collate`].
///
/// Puts "2ª Vara" before "10ª Vara".
pub fn numeric_leading_cmp(a: &str, b: &str) -> Ordering {
    compare_digits(first_number(a), first_number(b)).then_with(|| collate(a, b))
}

/// Order PJE codes by numeric value; non-numeric codes follow, collated.
pub fn code_cmp(a: &str, b: &str) -> Ordering {
    match (code_number(a), code_number(b)) {
        (Some(x), Some(y)) => compare_digits(x, y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => collate(a, b),
    }
}

/// Distinct values in first-occurrence order, then stably sorted.
pub fn distinct_sorted<'a, I>(values: I, compare: fn(&str, &str) -> Ordering) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    distinct_sorted_refs(values, compare)
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// [`distinct_sorted`] without copying the values.
pub fn distinct_sorted_refs<'a, I>(values: I, compare: fn(&str, &str) -> Ordering) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut distinct: Vec<&'a str> = values
        .into_iter()
        .filter(|value| seen.insert(*value))
        .collect();
    distinct.sort_by(|a, b| compare(a, b));
    distinct
}

fn base_letters(lowered: &str) -> String {
    lowered
        .nfd()
        .filter(|ch| !is_combining_diacritic(*ch))
        .collect()
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        let ordering = x
            .is_uppercase()
            .cmp(&y.is_uppercase())
            .then_with(|| x.cmp(&y));
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    a.chars().count().cmp(&b.chars().count())
}

/// First run of ASCII digits, or `""` when there is none.
fn first_number(value: &str) -> &str {
    let Some(start) = value.find(|ch: char| ch.is_ascii_digit()) else {
        return "";
    };
    let tail = &value[start..];
    let end = tail
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(tail.len());
    &tail[..end]
}

fn code_number(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit())).then_some(trimmed)
}

/// Compare digit strings as unbounded non-negative integers.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
