//! Tests for the growth arithmetic
//!
//! The examples in the module docs cover the common cases, these go over the boundaries.

#![expect(
    clippy::arithmetic_side_effects,
    clippy::unwrap_used,
    reason = "Okay in tests"
)]

use super::*;

// -----------------------------------------------------------------------------
// needs_growth
// -----------------------------------------------------------------------------

#[test]
fn test_needs_growth_empty() {
    // Nothing requested never needs growth, even with no storage
    assert!(!needs_growth(0, 0, 0));

    // Anything requested on an empty buffer does
    assert!(needs_growth(0, 1, 0));
}

#[test]
fn test_needs_growth_exact_fit() {
    // Filling the capacity to the brim is fine
    assert!(!needs_growth(500, 12, 512));

    // One more is not
    assert!(needs_growth(500, 13, 512));
}

#[test]
fn test_needs_growth_overflow() {
    assert!(needs_growth(usize::MAX, 1, usize::MAX));
    assert!(needs_growth(1, usize::MAX, usize::MAX));
}

// -----------------------------------------------------------------------------
// grown_capacity
// -----------------------------------------------------------------------------

#[test]
fn test_grown_capacity_bytes() {
    // Byte buffers land on multiples of the granularity
    for required in [1, 2, 100, 511, 512, 513, 1000, 1024, 1025, 4096] {
        let cap = grown_capacity(required, 1).unwrap();
        assert!(cap >= required);
        assert_eq!(cap % GROWTH_GRANULARITY, 0);
        assert!(cap - required < GROWTH_GRANULARITY);
    }
}

#[test]
fn test_grown_capacity_zero_required() {
    assert_eq!(grown_capacity(0, 1), Some(0));
    assert_eq!(grown_capacity(0, 16), Some(0));
}

#[test]
fn test_grown_capacity_wide_elements() {
    // Element sizes that divide the granularity
    assert_eq!(grown_capacity(1, 8), Some(64));
    assert_eq!(grown_capacity(64, 8), Some(64));
    assert_eq!(grown_capacity(65, 8), Some(128));

    // Element sizes that don't divide it still never under-allocate
    for elt_size in [3, 24, 100, 513, 1000] {
        for required in [1, 2, 5, 21, 22, 23, 500] {
            let cap = grown_capacity(required, elt_size).unwrap();
            assert!(cap >= required, "{required} x {elt_size} -> {cap}");
        }
    }
}

#[test]
fn test_grown_capacity_elements_larger_than_granularity() {
    // 1000-byte elements: 1000 bytes round to 1024, which holds one element
    assert_eq!(grown_capacity(1, 1000), Some(1));

    // 3000 bytes round to 3072, still three elements
    assert_eq!(grown_capacity(3, 1000), Some(3));
}

#[test]
fn test_grown_capacity_zero_sized() {
    assert_eq!(grown_capacity(123, 0), Some(123));
    assert_eq!(grown_capacity(usize::MAX, 0), Some(usize::MAX));
}

#[test]
fn test_grown_capacity_deterministic() {
    assert_eq!(grown_capacity(777, 16), grown_capacity(777, 16));
}

#[test]
fn test_grown_capacity_overflow() {
    // The multiplication overflows
    assert_eq!(grown_capacity(usize::MAX / 2 + 1, 2), None);

    // The rounding overflows
    assert_eq!(grown_capacity(usize::MAX, 1), None);
    assert_eq!(grown_capacity(usize::MAX - GROWTH_GRANULARITY + 2, 1), None);

    // The largest byte count that still rounds
    let max = usize::MAX - (GROWTH_GRANULARITY - 1);
    assert_eq!(grown_capacity(max, 1), Some(max));
}
