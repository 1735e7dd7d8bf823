//! Growable buffers for accumulating generated source code.
//!
//! A code generator emits its output piece by piece and writes it out once at the end. This
//! crate provides the two accumulators such a generator needs, both growing in 512-byte steps:
//!
//! - [`StrBuf`] — one growing string that always keeps a NUL byte past its end, with helpers for
//!   `#line` directives, `#define`s and `%s`-formatted text.
//! - [`StrList`] — an ordered list of shared string fragments, with helpers for m4 macro
//!   definitions and removals.
//!
//! # Quick start
//!
//! ```
//! use genbuf::{EmitConfig, StrBuf, StrList};
//!
//! let config = EmitConfig::default();
//!
//! let mut code = StrBuf::new();
//! code.line_dir(&config, "scan.l", 1).str_define("YY_BUF_SIZE", "16384");
//! assert_eq!(code.to_str().unwrap(), "#line 1 \"scan.l\"\n#define YY_BUF_SIZE 16384\n");
//!
//! let mut preamble = StrList::new();
//! preamble.m4_define("M4_YY_PREFIX", Some("yy"));
//!
//! let mut out = Vec::new();
//! preamble.print(&mut out).unwrap();
//! assert_eq!(out, b"m4_define( [[M4_YY_PREFIX]], [[yy]])m4_dnl\n");
//! ```
//!
//! # Allocation failure
//!
//! Appends never return errors. When a buffer can't grow it calls its [`FatalHandler`], which
//! by default logs the [`AllocError`] and exits the process. Pass
//! [`panic_on_alloc_failure`] (or your own handler) to change that.
//!
//! # Crate organisation
//!
//! - [`StrBuf`] and [`StrList`] — the two buffer shapes.
//! - [`GenBuffers`] — the named buffers of one generation run, built with
//!   [`GenBuffersBuilder`].
//! - [`EmitConfig`] — switches of a run, such as turning `#line` directives off.
//! - [`elements::ElementBuf`] — the growable storage under both buffer shapes.
//! - [`growth`] — the capacity arithmetic.
//! - [`constants`] — the growth granularity and directive formats.

pub mod constants;
pub mod elements;
pub mod growth;

mod config;
mod context;
mod error;
mod render;
mod strbuf;
mod strlist;

pub use config::EmitConfig;
pub use context::{GenBuffers, GenBuffersBuilder};
pub use error::{AllocError, FatalHandler, exit_on_alloc_failure, panic_on_alloc_failure};
pub use strbuf::StrBuf;
pub use strlist::{Fragment, StrList};
