//! The accumulators of one generation run.
//!
//! A scanner generator fills several buffers while it reads its input and only writes them out
//! at the end. [`GenBuffers`] holds them together with the [`EmitConfig`] of the run, so that
//! they are passed around explicitly and released together.
//!
//! # Example
//!
//! ```
//! use genbuf::GenBuffers;
//!
//! let mut run = GenBuffers::builder().line_directives(false).build();
//!
//! run.m4defs.m4_define("M4_YY_PREFIX", Some("yy"));
//! run.userdef.str_define("YY_NO_INPUT", "1");
//! run.top.line_dir(&run.config(), "scan.l", 3).str_append("#include <stdint.h>\n");
//!
//! let mut out = Vec::new();
//! run.write_m4_preamble(&mut out).unwrap();
//! assert_eq!(out, b"m4_define( [[M4_YY_PREFIX]], [[yy]])m4_dnl\n");
//! assert_eq!(run.top.to_str().unwrap(), "#include <stdint.h>\n");
//!
//! run.destroy();
//! assert!(run.top.is_empty());
//! ```

use crate::config::EmitConfig;
use crate::error::{FatalHandler, exit_on_alloc_failure};
use crate::strbuf::StrBuf;
use crate::strlist::StrList;
use std::io;

/// The buffers a generation run writes into.
#[derive(Debug, Clone)]
pub struct GenBuffers {
    config: EmitConfig,
    /// `#define`s triggered by command-line options.
    pub userdef: StrBuf,
    /// Autogenerated `#define`s, one fragment each.
    pub defs: StrList,
    /// Entries of the data-map table.
    pub yydmap: StrBuf,
    /// m4 definitions that form the preamble of the skeleton.
    pub m4defs: StrList,
    /// Code to place verbatim at the top of the output.
    pub top: StrBuf,
}

impl Default for GenBuffers {
    fn default() -> Self {
        Self::new()
    }
}

impl GenBuffers {
    /// Creates empty buffers with the default configuration.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Returns a [`GenBuffersBuilder`] for configuring a run.
    pub fn builder() -> GenBuffersBuilder {
        GenBuffersBuilder {
            config: EmitConfig::default(),
            on_fatal: None,
        }
    }

    /// Returns the configuration of the run.
    pub const fn config(&self) -> EmitConfig {
        self.config
    }

    /// Writes the m4 preamble to `out`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error encountered while writing to `out`.
    pub fn write_m4_preamble(&self, out: impl io::Write) -> io::Result<()> {
        self.m4defs.print(out)
    }

    /// Releases every buffer. They are empty afterwards and can be filled again.
    pub fn destroy(&mut self) {
        self.userdef.destroy();
        self.defs.destroy();
        self.yydmap.destroy();
        self.m4defs.destroy();
        self.top.destroy();
    }
}

/// A builder for [`GenBuffers`].
#[must_use]
pub struct GenBuffersBuilder {
    config: EmitConfig,
    on_fatal: Option<FatalHandler>,
}

impl GenBuffersBuilder {
    /// Replaces the whole configuration.
    pub fn config(mut self, config: EmitConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets whether `#line` directives are written. On by default.
    pub fn line_directives(mut self, enabled: bool) -> Self {
        self.config = self.config.with_line_directives(enabled);
        self
    }

    /// Sets the handler every buffer calls on allocation failure. Defaults to
    /// [`exit_on_alloc_failure`].
    pub fn fatal_handler(mut self, on_fatal: FatalHandler) -> Self {
        self.on_fatal = Some(on_fatal);
        self
    }

    /// Builds the empty buffers.
    pub fn build(self) -> GenBuffers {
        let on_fatal = self.on_fatal.unwrap_or(exit_on_alloc_failure);

        GenBuffers {
            config: self.config,
            userdef: StrBuf::labelled("user definitions", on_fatal),
            defs: StrList::labelled("autogenerated definitions", on_fatal),
            yydmap: StrBuf::labelled("data map", on_fatal),
            m4defs: StrList::labelled("m4 definitions", on_fatal),
            top: StrBuf::labelled("top code", on_fatal),
        }
    }
}
