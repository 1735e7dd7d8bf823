//! An ordered list of shared string fragments.
//!
//! [`StrList`] collects whole pieces of generated text, one element per piece, and writes them
//! out in order at the end of a run. Fragments are reference counted: concatenating lists shares
//! the fragments instead of copying them, so the same definition can sit in several lists.
//!
//! # Example
//!
//! ```
//! use genbuf::StrList;
//!
//! let mut m4defs = StrList::new();
//! m4defs.m4_define("M4_YY_PREFIX", Some("yy")).m4_undefine("M4_YY_MAIN");
//!
//! let mut out = Vec::new();
//! m4defs.print(&mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "m4_define( [[M4_YY_PREFIX]], [[yy]])m4_dnl\nm4_undefine( [[M4_YY_MAIN]])m4_dnl\n",
//! );
//! ```

use crate::constants::{M4_DEFINE_FORMAT, M4_UNDEFINE_FORMAT};
use crate::elements::ElementBuf;
use crate::error::{FatalHandler, exit_on_alloc_failure};
use crate::render::{render_into, scratch};
use std::io::{self, Write};
use std::rc::Rc;

/// One element of a [`StrList`]: a shared string, or `None` for an empty slot.
pub type Fragment = Option<Rc<str>>;

/// A growable list of string fragments.
///
/// Empty slots (`None`) are allowed and skipped when printing.
#[derive(Debug, Clone)]
pub struct StrList {
    inner: ElementBuf<Fragment>,
}

impl Default for StrList {
    fn default() -> Self {
        Self::new()
    }
}

impl StrList {
    /// Creates an empty list without allocating.
    ///
    /// Allocation failure ends the process.
    #[inline]
    pub fn new() -> Self {
        Self::labelled("string list", exit_on_alloc_failure)
    }

    /// Creates an empty list named `label` in diagnostics, reporting allocation failure to
    /// `on_fatal`.
    #[inline]
    pub fn labelled(label: &'static str, on_fatal: FatalHandler) -> Self {
        Self {
            inner: ElementBuf::with_fatal_handler(label, on_fatal),
        }
    }

    /// Returns the fragments.
    #[inline]
    pub fn as_slice(&self) -> &[Fragment] {
        self.inner.as_slice()
    }

    /// Returns the fragment at `index`, or `None` if the slot is empty or out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.as_slice().get(index)?.as_deref()
    }

    /// Iterates over the non-empty fragments in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.as_slice().iter().filter_map(|s| s.as_deref())
    }

    /// Returns the number of elements, empty slots included.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the list holds before growing.
    #[inline]
    pub fn cap(&self) -> usize {
        self.inner.cap()
    }

    /// Returns the label used in diagnostics.
    #[inline]
    pub fn label(&self) -> &'static str {
        self.inner.label()
    }

    /// Makes room for `additional` more elements.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.inner.reserve(additional);
    }

    /// Appends `fragments` in order.
    #[inline]
    pub fn append(&mut self, fragments: &[Fragment]) -> &mut Self {
        self.inner.append(fragments);
        self
    }

    /// Appends one fragment.
    pub fn push(&mut self, fragment: impl Into<Rc<str>>) -> &mut Self {
        self.append(&[Some(fragment.into())])
    }

    /// Appends an empty slot.
    pub fn push_null(&mut self) -> &mut Self {
        self.append(&[None])
    }

    /// Appends every element of `src`, in order, sharing the fragments.
    ///
    /// `src` is left as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// # use genbuf::StrList;
    /// let mut defs = StrList::new();
    /// defs.push("a");
    ///
    /// let mut more = StrList::new();
    /// more.push("b").push("c");
    ///
    /// defs.concat(&more);
    /// assert_eq!(defs.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
    /// assert_eq!(more.len(), 2);
    /// ```
    #[inline]
    pub fn concat(&mut self, src: &StrList) -> &mut Self {
        self.append(src.as_slice())
    }

    /// Writes every non-empty fragment to `out`, in order and without separators.
    ///
    /// # Errors
    ///
    /// Returns any I/O error encountered while writing to `out`.
    pub fn print(&self, mut out: impl Write) -> io::Result<()> {
        for s in self.iter() {
            out.write_all(s.as_bytes())?;
        }
        Ok(())
    }

    /// Appends an m4 definition of `name` as a single fragment.
    ///
    /// A missing `value` defines `name` as the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// # use genbuf::StrList;
    /// let mut list = StrList::new();
    /// list.m4_define("FOO", None);
    /// assert_eq!(list.len(), 1);
    /// assert_eq!(list.get(0), Some("m4_define( [[FOO]], [[]])m4_dnl\n"));
    /// ```
    pub fn m4_define(&mut self, name: &str, value: Option<&str>) -> &mut Self {
        let value = value.unwrap_or_default();
        let capacity = M4_DEFINE_FORMAT
            .len()
            .saturating_add(name.len())
            .saturating_add(value.len())
            .saturating_add(2);
        let mut s = scratch("buffer for m4 def", capacity, self.inner.fatal_handler());
        render_into(&mut s, M4_DEFINE_FORMAT, &[name, value]);

        self.push(s)
    }

    /// Appends an m4 removal of `name` as a single fragment.
    ///
    /// # Examples
    ///
    /// ```
    /// # use genbuf::StrList;
    /// let mut list = StrList::new();
    /// list.m4_undefine("FOO");
    /// assert_eq!(list.get(0), Some("m4_undefine( [[FOO]])m4_dnl\n"));
    /// ```
    pub fn m4_undefine(&mut self, name: &str) -> &mut Self {
        let capacity = M4_UNDEFINE_FORMAT
            .len()
            .saturating_add(name.len())
            .saturating_add(2);
        let mut s = scratch("buffer for m4 undef", capacity, self.inner.fatal_handler());
        render_into(&mut s, M4_UNDEFINE_FORMAT, &[name]);

        self.push(s)
    }

    /// Releases the storage and this list's share of every fragment.
    ///
    /// The list is empty afterwards and can be reused.
    #[inline]
    pub fn destroy(&mut self) {
        self.inner.destroy();
    }
}
