//! Scratch strings and `%s` substitution for the directive emitters.

use crate::error::{AllocError, FatalHandler};

/// Allocates an empty string able to hold `capacity` bytes.
///
/// Failure is reported to `on_fatal` with `what` naming the scratch buffer.
pub(crate) fn scratch(what: &'static str, capacity: usize, on_fatal: FatalHandler) -> String {
    let mut s = String::new();
    if let Err(source) = s.try_reserve_exact(capacity) {
        on_fatal(&AllocError::Reserve {
            what,
            capacity,
            source,
        });
    }
    s
}

/// Appends `fmt` to `out`, replacing each `%s` with the next argument.
///
/// `%%` yields a single `%`. A `%s` with no argument left renders as nothing, and any other `%`
/// sequence is copied as is.
pub(crate) fn render_into(out: &mut String, fmt: &str, args: &[&str]) {
    let mut args = args.iter();
    let mut rest = fmt;

    while let Some(at) = rest.find('%') {
        let (text, directive) = rest.split_at(at);
        out.push_str(text);

        if let Some(after) = directive.strip_prefix("%s") {
            if let Some(arg) = args.next() {
                out.push_str(arg);
            }
            rest = after;
        } else if let Some(after) = directive.strip_prefix("%%") {
            out.push('%');
            rest = after;
        } else {
            out.push('%');
            rest = directive.get(1..).unwrap_or_default();
        }
    }

    out.push_str(rest);
}
