//! Capacity arithmetic for growing buffers.
//!
//! Growth is decided on element counts but rounded on bytes: the number of elements a buffer
//! must hold is converted to bytes, rounded up to the next multiple of [`GROWTH_GRANULARITY`] and
//! converted back. A byte buffer therefore always has a capacity that is a multiple of 512, and a
//! list of fragments grows by as many elements as fit in the rounded byte count.
//!
//! Capacity never shrinks through these functions; the only way back to zero is
//! [`destroy`](crate::StrBuf::destroy).
//!
//! # Example
//!
//! ```
//! use genbuf::growth::{grown_capacity, needs_growth};
//!
//! // 10 bytes in an empty byte buffer
//! assert!(needs_growth(0, 10, 0));
//! assert_eq!(grown_capacity(10, 1), Some(512));
//!
//! // Enough room left, nothing to do
//! assert!(!needs_growth(10, 502, 512));
//! ```

use crate::constants::GROWTH_GRANULARITY;

/// Returns `true` if `len + additional` elements do not fit in `cap`.
///
/// An overflowing sum always needs growth; the growth itself will then report the overflow.
///
/// # Examples
///
/// ```
/// # use genbuf::growth::needs_growth;
/// assert!(!needs_growth(4, 4, 8));
/// assert!(needs_growth(4, 5, 8));
/// assert!(needs_growth(usize::MAX, 1, usize::MAX));
/// ```
#[inline]
pub fn needs_growth(len: usize, additional: usize, cap: usize) -> bool {
    len.checked_add(additional).is_none_or(|required| required > cap)
}

/// Computes the capacity, in elements, to grow to so that `required` elements fit.
///
/// The byte requirement `required * elt_size` is rounded up to the next multiple of
/// [`GROWTH_GRANULARITY`] and divided back by `elt_size`. The result is never below `required`.
/// Zero-sized elements need no storage, so `required` is returned unchanged for them.
///
/// Returns `None` if the byte requirement overflows `usize`.
///
/// # Examples
///
/// ```
/// # use genbuf::growth::grown_capacity;
/// // Byte buffers grow to multiples of 512
/// assert_eq!(grown_capacity(1, 1), Some(512));
/// assert_eq!(grown_capacity(512, 1), Some(512));
/// assert_eq!(grown_capacity(513, 1), Some(1024));
///
/// // Wider elements share the same byte rounding
/// assert_eq!(grown_capacity(1, 16), Some(32));
/// assert_eq!(grown_capacity(33, 16), Some(64));
///
/// // Overflow is reported, not wrapped
/// assert_eq!(grown_capacity(usize::MAX, 2), None);
/// ```
#[inline]
#[expect(clippy::arithmetic_side_effects, reason = "Divisor is non-zero")]
pub fn grown_capacity(required: usize, elt_size: usize) -> Option<usize> {
    if elt_size == 0 {
        return Some(required);
    }

    let bytes = required.checked_mul(elt_size)?;
    let rounded = bytes.checked_next_multiple_of(GROWTH_GRANULARITY)?;

    // `rounded >= required * elt_size`, so the quotient is at least `required`
    Some(rounded / elt_size)
}

#[cfg(test)]
mod tests;
