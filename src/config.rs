//! Switches that change what the emitters write.

/// Configuration shared by the emission helpers of a generation run.
///
/// # Examples
///
/// ```
/// use genbuf::EmitConfig;
///
/// let config = EmitConfig::default();
/// assert!(config.line_directives());
///
/// let config = config.with_line_directives(false);
/// assert!(!config.line_directives());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct EmitConfig {
    line_directives: bool,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            line_directives: true,
        }
    }
}

impl EmitConfig {
    /// Sets whether `#line` directives are written. On by default.
    pub const fn with_line_directives(mut self, enabled: bool) -> Self {
        self.line_directives = enabled;
        self
    }

    /// Returns `true` if `#line` directives are written.
    pub const fn line_directives(&self) -> bool {
        self.line_directives
    }
}
