//! Growable element storage shared by the string buffer and the string list.
//!
//! [`ElementBuf`] is the single place where buffer storage is written. It tracks a logical length
//! and a capacity chosen by the [`growth`](crate::growth) policy, and it reports allocation
//! failure to its [`FatalHandler`] instead of returning it.
//!
//! # Example
//!
//! ```
//! use genbuf::elements::ElementBuf;
//!
//! let mut buf: ElementBuf<u32> = ElementBuf::new("numbers");
//! buf.append(&[1, 2, 3]);
//! assert_eq!(buf.as_slice(), &[1, 2, 3]);
//! assert_eq!(buf.cap(), 128); // 512 bytes of u32
//! ```

use crate::error::{AllocError, FatalHandler, exit_on_alloc_failure};
use crate::growth::{grown_capacity, needs_growth};
use std::mem::size_of;

/// An append-only buffer of `T` with 512-byte-granular growth.
///
/// # Invariants
///
/// `len <= elts.len() <= cap <= elts.capacity()` at all times, and `cap == 0` whenever no storage
/// has been allocated. `elts` may hold elements past `len`: string buffers keep their NUL
/// sentinel there. Those elements are overwritten by the next append.
#[derive(Debug)]
pub struct ElementBuf<T> {
    /// Storage, including any trailing elements past `len`.
    elts: Vec<T>,
    /// Number of logical elements.
    len: usize,
    /// Number of elements the storage was grown to hold.
    cap: usize,
    /// Description of the buffer for diagnostics.
    label: &'static str,
    /// Called when growth cannot obtain memory.
    on_fatal: FatalHandler,
}

impl<T> ElementBuf<T> {
    /// Creates an empty buffer without allocating.
    ///
    /// `label` names the buffer in diagnostics. Allocation failure ends the process through
    /// [`exit_on_alloc_failure`].
    #[inline]
    pub fn new(label: &'static str) -> Self {
        Self::with_fatal_handler(label, exit_on_alloc_failure)
    }

    /// Creates an empty buffer that reports allocation failure to `on_fatal`.
    #[inline]
    pub fn with_fatal_handler(label: &'static str, on_fatal: FatalHandler) -> Self {
        Self {
            elts: Vec::new(),
            len: 0,
            cap: 0,
            label,
            on_fatal,
        }
    }

    /// Returns the logical elements.
    #[expect(clippy::indexing_slicing, reason = "Safe by invariant")]
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elts[..self.len]
    }

    /// Returns the logical elements followed by any element kept past the end.
    #[inline]
    pub fn as_slice_with_tail(&self) -> &[T] {
        &self.elts
    }

    /// Returns the number of logical elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer holds no logical elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the buffer can hold before growing.
    #[inline]
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Returns the label used in diagnostics.
    #[inline]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the handler called on allocation failure.
    #[inline]
    pub fn fatal_handler(&self) -> FatalHandler {
        self.on_fatal
    }

    /// Makes room for at least `additional` more logical elements.
    ///
    /// Does nothing if they already fit. Otherwise grows to the capacity computed by
    /// [`grown_capacity`]. If that overflows or the allocator fails, the fatal handler is called
    /// before any state changes.
    pub fn reserve(&mut self, additional: usize) {
        if !needs_growth(self.len, additional, self.cap) {
            return;
        }

        let next = match self.next_capacity(additional) {
            Ok(next) => next,
            Err(err) => (self.on_fatal)(&err),
        };

        // `next > cap >= elts.len()`, so the subtraction can't underflow
        #[expect(clippy::arithmetic_side_effects, reason = "Safe by invariant")]
        let extra = next - self.elts.len();

        if let Err(source) = self.elts.try_reserve_exact(extra) {
            let err = AllocError::Reserve {
                what: self.label,
                capacity: next,
                source,
            };
            (self.on_fatal)(&err);
        }

        tracing::trace!(label = self.label, old = self.cap, new = next, "buffer grown");
        self.cap = next;
    }

    fn next_capacity(&self, additional: usize) -> Result<usize, AllocError> {
        let overflow = AllocError::CapacityOverflow {
            what: self.label,
            requested: self.len.saturating_add(additional),
        };
        let required = self.len.checked_add(additional).ok_or_else(|| overflow.clone())?;

        grown_capacity(required, size_of::<T>()).ok_or(overflow)
    }

    /// Lowers the logical length by `n`, leaving the storage untouched.
    ///
    /// The retracted elements stay readable through
    /// [`as_slice_with_tail`](Self::as_slice_with_tail) until the next append overwrites them.
    #[inline]
    pub(crate) fn retract(&mut self, n: usize) {
        debug_assert!(n <= self.len);
        self.len = self.len.saturating_sub(n);
    }

    /// Releases the storage and returns to the empty state.
    ///
    /// The buffer keeps its label and fatal handler and can be appended to again.
    pub fn destroy(&mut self) {
        tracing::debug!(label = self.label, len = self.len, cap = self.cap, "buffer destroyed");
        self.elts = Vec::new();
        self.len = 0;
        self.cap = 0;
    }
}

impl<T: Clone> Clone for ElementBuf<T> {
    /// Copies the elements, sentinel included, into storage of the same capacity.
    fn clone(&self) -> Self {
        let mut elts = Vec::new();
        if let Err(source) = elts.try_reserve_exact(self.cap) {
            let err = AllocError::Reserve {
                what: self.label,
                capacity: self.cap,
                source,
            };
            (self.on_fatal)(&err);
        }
        elts.extend_from_slice(&self.elts);

        Self {
            elts,
            len: self.len,
            cap: self.cap,
            label: self.label,
            on_fatal: self.on_fatal,
        }
    }
}

impl<T: Clone> ElementBuf<T> {
    /// Appends `src` after the last logical element, growing as needed.
    ///
    /// Any element kept past the logical end is overwritten. Appending an empty slice does
    /// nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use genbuf::elements::ElementBuf;
    /// let mut buf = ElementBuf::new("bytes");
    /// buf.append(b"abc");
    /// buf.append(b"");
    /// buf.append(b"de");
    /// assert_eq!(buf.as_slice(), b"abcde");
    /// ```
    #[expect(clippy::arithmetic_side_effects, reason = "Bounded by reserve")]
    pub fn append(&mut self, src: &[T]) -> &mut Self {
        if src.is_empty() {
            return self;
        }

        self.reserve(src.len());

        self.elts.truncate(self.len);
        self.elts.extend_from_slice(src);
        self.len += src.len();

        self
    }
}
