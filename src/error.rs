//! Allocation failure, the only error a buffer can run into.
//!
//! Buffers never hand an [`AllocError`] back to the code that appends to them. Instead every
//! buffer carries a [`FatalHandler`] that is called with the error and must not return. The
//! default, [`exit_on_alloc_failure`], ends the process the way a code generator is expected to
//! when it runs out of memory. [`panic_on_alloc_failure`] unwinds instead, which keeps failures
//! observable in tests and in hosts that catch panics.

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors that can occur while growing a buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocError {
    /// The requested size does not fit in `usize` once rounded to the growth granularity.
    #[error("allocation of {what} failed: {requested} elements overflow the address space")]
    CapacityOverflow {
        /// What was being allocated.
        what: &'static str,
        /// Number of elements the buffer needed to hold.
        requested: usize,
    },

    /// The allocator refused to provide the storage.
    #[error("allocation of {what} failed: could not reserve {capacity} elements")]
    Reserve {
        /// What was being allocated.
        what: &'static str,
        /// Capacity that was asked for.
        capacity: usize,
        /// Error reported by the allocator.
        #[source]
        source: TryReserveError,
    },
}

impl AllocError {
    /// Returns the description of the allocation that failed.
    pub fn what(&self) -> &'static str {
        match self {
            Self::CapacityOverflow { what, .. } | Self::Reserve { what, .. } => what,
        }
    }
}

/// Handler invoked when a buffer cannot obtain memory. It never returns.
pub type FatalHandler = fn(&AllocError) -> !;

/// Reports the failure and terminates the process with exit status 1.
pub fn exit_on_alloc_failure(err: &AllocError) -> ! {
    tracing::error!(what = err.what(), "{err}");
    eprintln!("genbuf: fatal internal error, {err}");
    std::process::exit(1)
}

/// Reports the failure by panicking with the error message.
pub fn panic_on_alloc_failure(err: &AllocError) -> ! {
    tracing::error!(what = err.what(), "{err}");
    panic!("genbuf: fatal internal error, {err}")
}
