//! Bound-name ordering
//!
//! The single comparator implementation behind every identifier sort and
//! every "already sorted" check in the crate. The reconciler's evaluation
//! and the generator's re-sort both call into this module; a second copy of
//! the comparison logic anywhere else can make the two disagree and leave
//! the transformer rewriting its own output forever.

use std::cmp::Ordering;

use crate::types::Binding;

/// Compare two imported names
///
/// When the first characters are the same letter ignoring case but differ
/// in case, the uppercase one sorts first, so `CustomTypeValues` lands
/// before `customType`. Otherwise the comparison is natural: digit runs by
/// numeric value (`item2` before `item10`), letters case-insensitively,
/// with a full case-sensitive pass breaking remaining ties.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    if let (Some(first_a), Some(first_b)) = (a.chars().next(), b.chars().next())
        && first_a != first_b
        && first_a.to_ascii_lowercase() == first_b.to_ascii_lowercase()
    {
        return if first_a.is_ascii_uppercase() {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    natural_cmp(a, b, true).then_with(|| natural_cmp(a, b, false))
}

/// Case-sensitive, numeric-aware comparison for raw specifier tie-breaks
pub fn compare_sources(a: &str, b: &str) -> Ordering {
    natural_cmp(a, b, false)
}

/// Return a copy of `bindings` in canonical order
///
/// The sort is stable: bindings with equal names keep their input order.
/// Type markers and aliases never participate in the ordering.
pub fn sort_bindings(bindings: &[Binding]) -> Vec<Binding> {
    let mut sorted = bindings.to_vec();
    sorted.sort_by(|a, b| compare_names(&a.imported, &b.imported));
    sorted
}

/// Whether `bindings` already matches the [`sort_bindings`] output
///
/// Deliberately defined as equality with the sorted copy rather than a
/// second comparison walk, so this check can never drift from the sort it
/// is validating.
pub fn bindings_sorted(bindings: &[Binding]) -> bool {
    bindings == sort_bindings(bindings).as_slice()
}

/// Natural comparison over byte runs: digits by value, everything else
/// bytewise, optionally ASCII-case-folded
fn natural_cmp(a: &str, b: &str, fold_case: bool) -> Ordering {
    let bytes_a = a.as_bytes();
    let bytes_b = b.as_bytes();
    let mut i = 0;
    let mut j = 0;

    while i < bytes_a.len() && j < bytes_b.len() {
        if bytes_a[i].is_ascii_digit() && bytes_b[j].is_ascii_digit() {
            let end_a = digit_run_end(bytes_a, i);
            let end_b = digit_run_end(bytes_b, j);
            let ordering = compare_digit_runs(&a[i..end_a], &b[j..end_b]);
            if ordering != Ordering::Equal {
                return ordering;
            }
            i = end_a;
            j = end_b;
        } else {
            let byte_a = fold(bytes_a[i], fold_case);
            let byte_b = fold(bytes_b[j], fold_case);
            if byte_a != byte_b {
                return byte_a.cmp(&byte_b);
            }
            i += 1;
            j += 1;
        }
    }

    (bytes_a.len() - i).cmp(&(bytes_b.len() - j))
}

fn fold(byte: u8, fold_case: bool) -> u8 {
    if fold_case { byte.to_ascii_lowercase() } else { byte }
}

fn digit_run_end(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    end
}

/// Digit runs compare by numeric value; equal values with different zero
/// padding compare by run length so the ordering stays total
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let trimmed_a = a.trim_start_matches('0');
    let trimmed_b = b.trim_start_matches('0');
    trimmed_a
        .len()
        .cmp(&trimmed_b.len())
        .then_with(|| trimmed_a.cmp(trimmed_b))
        .then_with(|| a.len().cmp(&b.len()))
}

#[cfg(test)]
mod tests;
