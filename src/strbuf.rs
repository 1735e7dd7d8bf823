//! A growing string that keeps a NUL byte past its end.
//!
//! [`StrBuf`] accumulates one piece of generated text. Its string appenders write one NUL byte
//! past the new end and then retract it, so the content stays usable as a C string while
//! [`len()`](StrBuf::len) counts only the text.
//!
//! # Example
//!
//! ```
//! use genbuf::{EmitConfig, StrBuf};
//!
//! let config = EmitConfig::default();
//! let mut out = StrBuf::new();
//!
//! out.line_dir(&config, "scan.l", 7)
//!     .str_define("YY_NUM_RULES", "3")
//!     .prints("#include <%s>\n", "stdio.h");
//!
//! assert_eq!(
//!     out.to_str().unwrap(),
//!     "#line 7 \"scan.l\"\n#define YY_NUM_RULES 3\n#include <stdio.h>\n",
//! );
//! assert_eq!(out.as_bytes_with_nul().unwrap().last(), Some(&0));
//! ```

use crate::config::EmitConfig;
use crate::constants::LINE_DIRECTIVE_LITERAL;
use crate::elements::ElementBuf;
use crate::error::{FatalHandler, exit_on_alloc_failure};
use crate::render::{render_into, scratch};
use std::fmt::{self, Write};
use std::str::{self, Utf8Error};

/// A growable byte string for generated output.
///
/// # Invariants
///
/// After any string append ([`strn_append`](Self::strn_append) and everything built on it) the
/// byte at offset [`len()`](Self::len) is `0` and is not counted in the length. A raw
/// [`append`](Self::append) writes over that byte without putting a new one in place.
#[derive(Debug, Clone)]
pub struct StrBuf {
    inner: ElementBuf<u8>,
}

impl Default for StrBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl StrBuf {
    /// Creates an empty string buffer without allocating.
    ///
    /// Allocation failure ends the process.
    #[inline]
    pub fn new() -> Self {
        Self::labelled("string buffer", exit_on_alloc_failure)
    }

    /// Creates an empty string buffer named `label` in diagnostics, reporting allocation failure
    /// to `on_fatal`.
    #[inline]
    pub fn labelled(label: &'static str, on_fatal: FatalHandler) -> Self {
        Self {
            inner: ElementBuf::with_fatal_handler(label, on_fatal),
        }
    }

    /// Returns the text, without the sentinel.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_slice()
    }

    /// Returns the text followed by its NUL sentinel.
    ///
    /// Returns `None` if no sentinel is in place, which is the case for an empty buffer that was
    /// never string-appended to, or after a raw [`append`](Self::append).
    pub fn as_bytes_with_nul(&self) -> Option<&[u8]> {
        let bytes = self.inner.as_slice_with_tail();
        match bytes.get(self.inner.len()) {
            Some(0) => bytes.get(..=self.inner.len()),
            _ => None,
        }
    }

    /// Returns the text as a `str`.
    ///
    /// # Errors
    ///
    /// Returns the [`Utf8Error`] if raw appends or byte-bounded appends left the text with
    /// invalid UTF-8.
    #[inline]
    pub fn to_str(&self) -> Result<&str, Utf8Error> {
        str::from_utf8(self.as_bytes())
    }

    /// Returns the length of the text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the buffer holds no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the capacity in bytes, sentinel included.
    #[inline]
    pub fn cap(&self) -> usize {
        self.inner.cap()
    }

    /// Returns the label used in diagnostics.
    #[inline]
    pub fn label(&self) -> &'static str {
        self.inner.label()
    }

    /// Makes room for `additional` more bytes.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.inner.reserve(additional);
    }

    /// Appends raw bytes. No sentinel is written.
    #[inline]
    pub fn append(&mut self, bytes: &[u8]) -> &mut Self {
        self.inner.append(bytes);
        self
    }

    /// Appends the first `n` bytes of `s` and keeps a NUL byte after them.
    ///
    /// `n` is clamped to the length of `s`. The length grows by exactly `n`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use genbuf::StrBuf;
    /// let mut buf = StrBuf::new();
    /// buf.strn_append("yylex", 2);
    /// assert_eq!(buf.as_bytes(), b"yy");
    /// assert_eq!(buf.as_bytes_with_nul(), Some(&b"yy\0"[..]));
    /// ```
    pub fn strn_append(&mut self, s: &str, n: usize) -> &mut Self {
        let bytes = s.as_bytes();
        let bytes = bytes.get(..n).unwrap_or(bytes);

        // Text and sentinel in one growth step
        self.inner.reserve(bytes.len().saturating_add(1));
        self.inner.append(bytes);
        self.inner.append(&[0]);

        // Undo the sentinel in the length
        self.inner.retract(1);

        self
    }

    /// Appends all of `s` and keeps a NUL byte after it.
    #[inline]
    pub fn str_append(&mut self, s: &str) -> &mut Self {
        self.strn_append(s, s.len())
    }

    /// Appends `fmt` with its `%s` replaced by `value`.
    ///
    /// `%%` renders as `%`. The text is rendered into a scratch string sized for the format plus
    /// the value before being appended.
    ///
    /// # Examples
    ///
    /// ```
    /// # use genbuf::StrBuf;
    /// let mut buf = StrBuf::new();
    /// buf.prints("#define YY_%s 1\n", "REENTRANT");
    /// assert_eq!(buf.to_str().unwrap(), "#define YY_REENTRANT 1\n");
    /// ```
    pub fn prints(&mut self, fmt: &str, value: &str) -> &mut Self {
        let capacity = fmt.len().saturating_add(value.len()).saturating_add(1);
        let mut t = scratch("buffer to print string", capacity, self.inner.fatal_handler());
        render_into(&mut t, fmt, &[value]);

        self.str_append(&t)
    }

    /// Appends a `#line` directive for `filename` and `lineno`.
    ///
    /// Backslashes in `filename` are doubled so the name survives as a C string literal. Nothing
    /// is appended when `config` has line directives turned off.
    ///
    /// # Examples
    ///
    /// ```
    /// # use genbuf::{EmitConfig, StrBuf};
    /// let mut buf = StrBuf::new();
    /// buf.line_dir(&EmitConfig::default(), r"src\scan.l", 12);
    /// assert_eq!(buf.to_str().unwrap(), "#line 12 \"src\\\\scan.l\"\n");
    ///
    /// let quiet = EmitConfig::default().with_line_directives(false);
    /// buf.line_dir(&quiet, "other.l", 1);
    /// assert_eq!(buf.to_str().unwrap(), "#line 12 \"src\\\\scan.l\"\n");
    /// ```
    pub fn line_dir(&mut self, config: &EmitConfig, filename: &str, lineno: u32) -> &mut Self {
        if !config.line_directives() {
            return self;
        }

        let capacity = LINE_DIRECTIVE_LITERAL
            .len()
            .saturating_add(filename.len().saturating_mul(2))
            .saturating_add(decimal_digits(lineno))
            .saturating_add(1);
        let mut t = scratch("buffer for line directive", capacity, self.inner.fatal_handler());

        // Writing to a String can't fail
        let _: fmt::Result = write!(t, "#line {lineno} \"");
        for c in filename.chars() {
            if c == '\\' {
                t.push('\\');
            }
            t.push(c);
        }
        t.push_str("\"\n");

        self.str_append(&t)
    }

    /// Appends `#define <name> <value>` and a newline.
    ///
    /// # Examples
    ///
    /// ```
    /// # use genbuf::StrBuf;
    /// let mut buf = StrBuf::new();
    /// buf.str_define("YY_USES_REJECT", "1");
    /// assert_eq!(buf.to_str().unwrap(), "#define YY_USES_REJECT 1\n");
    /// ```
    pub fn str_define(&mut self, name: &str, value: &str) -> &mut Self {
        self.str_append("#define ")
            .str_append(name)
            .str_append(" ")
            .str_append(value)
            .str_append("\n")
    }

    /// Releases the storage. The buffer is empty afterwards and can be reused.
    #[inline]
    pub fn destroy(&mut self) {
        self.inner.destroy();
    }
}

/// Number of decimal digits needed to print `n`.
#[expect(clippy::arithmetic_side_effects, reason = "ilog10 of u32 is at most 9")]
fn decimal_digits(n: u32) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}
