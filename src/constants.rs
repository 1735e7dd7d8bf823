//! Allocation and output constants shared by the buffers.
//!
//! All buffer growth is expressed in bytes and rounded to [`GROWTH_GRANULARITY`], whatever the
//! element type of the buffer. The directive literals are the constant parts of the text emitted
//! by [`StrBuf`](crate::StrBuf) and [`StrList`](crate::StrList).
//!
//! # Invariant
//!
//! - `GROWTH_GRANULARITY` is a power of 2
//! - `GROWTH_GRANULARITY` can hold at least one list element, so every growth step of a list
//!   makes room for one more fragment

/// Allocation granularity (512 bytes) used when a buffer has to grow.
///
/// Byte requirements are rounded up to the next multiple of this value, which amortizes the many
/// small appends a generation pass makes against the allocator's per-call overhead.
pub const GROWTH_GRANULARITY: usize =
    // 2^9 = 512
    1 << 9;

/// Constant parts of a line directive, used to size its scratch buffer.
pub const LINE_DIRECTIVE_LITERAL: &str = "#line \"\"\n";

/// Format of an m4 macro definition pushed by [`StrList::m4_define`](crate::StrList::m4_define).
pub const M4_DEFINE_FORMAT: &str = "m4_define( [[%s]], [[%s]])m4_dnl\n";

/// Format of an m4 macro removal pushed by [`StrList::m4_undefine`](crate::StrList::m4_undefine).
pub const M4_UNDEFINE_FORMAT: &str = "m4_undefine( [[%s]])m4_dnl\n";
