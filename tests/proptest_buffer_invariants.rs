//! Property tests for the buffer invariants.
//!
//! Each property drives a buffer through a random sequence of operations and checks the
//! invariants after every step.

#![expect(
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing,
    clippy::unwrap_used,
    reason = "Okay in tests"
)]

use genbuf::{EmitConfig, Fragment, StrBuf, StrList, panic_on_alloc_failure};
use proptest::prelude::*;
use std::rc::Rc;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum StrOp {
    Append(String),
    AppendN(String, usize),
    Prints(String),
    Define(String, String),
    LineDir(String, u32),
}

fn text_strategy() -> impl Strategy<Value = String> {
    // Mostly short pieces, sometimes long enough to cross a growth step
    prop_oneof![
        4 => "[a-zA-Z0-9_ \\\\\n]{0,24}",
        1 => "[a-z]{200,700}",
    ]
}

fn str_op_strategy() -> impl Strategy<Value = StrOp> {
    prop_oneof![
        text_strategy().prop_map(StrOp::Append),
        (text_strategy(), 0usize..32).prop_map(|(s, n)| StrOp::AppendN(s, n)),
        "[a-z ]{0,16}".prop_map(StrOp::Prints),
        ("[A-Z_]{1,12}", "[0-9]{0,6}").prop_map(|(n, v)| StrOp::Define(n, v)),
        ("[a-z\\\\./]{0,16}", any::<u32>()).prop_map(|(f, l)| StrOp::LineDir(f, l)),
    ]
}

/// Applies `op` to `buf` and returns the text it should have added.
fn apply(buf: &mut StrBuf, config: &EmitConfig, op: &StrOp) -> String {
    match op {
        StrOp::Append(s) => {
            buf.str_append(s);
            s.clone()
        }
        StrOp::AppendN(s, n) => {
            buf.strn_append(s, *n);
            s[..(*n).min(s.len())].to_owned()
        }
        StrOp::Prints(v) => {
            buf.prints("<%s>", v);
            format!("<{v}>")
        }
        StrOp::Define(n, v) => {
            buf.str_define(n, v);
            format!("#define {n} {v}\n")
        }
        StrOp::LineDir(f, l) => {
            buf.line_dir(config, f, *l);
            if config.line_directives() {
                format!("#line {l} \"{}\"\n", f.replace('\\', "\\\\"))
            } else {
                String::new()
            }
        }
    }
}

fn fragment_strategy() -> impl Strategy<Value = Fragment> {
    proptest::option::weighted(0.8, "[a-z]{0,8}".prop_map(|s: String| Rc::<str>::from(s)))
}

fn list_of(fragments: &[Fragment]) -> StrList {
    let mut list = StrList::labelled("prop", panic_on_alloc_failure);
    list.append(fragments);
    list
}

// ═════════════════════════════════════════════════════════════════════════
// 1. String appends concatenate and keep the sentinel
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn strbuf_content_is_concatenation(
        ops in prop::collection::vec(str_op_strategy(), 0..40),
        line_directives in any::<bool>(),
    ) {
        let config = EmitConfig::default().with_line_directives(line_directives);
        let mut buf = StrBuf::labelled("prop", panic_on_alloc_failure);
        let mut expected = String::new();

        // Put the sentinel in place, a disabled line directive alone wouldn't
        buf.str_append("");
        let mut last_cap = buf.cap();

        for op in &ops {
            let before = buf.len();
            let added = apply(&mut buf, &config, op);
            expected.push_str(&added);

            // Length grows by the text only, never by the sentinel
            prop_assert_eq!(buf.len(), before + added.len());

            // Capacity is monotonic and always fits the text and the sentinel
            prop_assert!(buf.cap() >= last_cap);
            prop_assert!(buf.cap() > buf.len());
            last_cap = buf.cap();

            // The byte at offset len is NUL
            let with_nul = buf.as_bytes_with_nul();
            prop_assert!(with_nul.is_some(), "no sentinel after {:?}", op);
            prop_assert_eq!(with_nul.unwrap()[buf.len()], 0);
        }

        prop_assert_eq!(buf.as_bytes(), expected.as_bytes());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Byte buffers grow in whole granularity steps
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn strbuf_capacity_is_granular(pieces in prop::collection::vec("[a-z]{0,300}", 1..20)) {
        let mut buf = StrBuf::labelled("prop", panic_on_alloc_failure);

        for piece in &pieces {
            buf.str_append(piece);
            prop_assert_eq!(buf.cap() % genbuf::constants::GROWTH_GRANULARITY, 0);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Concatenation keeps the prefix and appends the source in order
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn strlist_concat(
        dest in prop::collection::vec(fragment_strategy(), 0..80),
        src in prop::collection::vec(fragment_strategy(), 0..80),
    ) {
        let mut dest_list = list_of(&dest);
        let src_list = list_of(&src);

        dest_list.concat(&src_list);

        prop_assert_eq!(dest_list.len(), dest.len() + src.len());
        prop_assert_eq!(&dest_list.as_slice()[..dest.len()], dest.as_slice());
        prop_assert_eq!(&dest_list.as_slice()[dest.len()..], src.as_slice());
        prop_assert_eq!(src_list.as_slice(), src.as_slice());
        prop_assert!(dest_list.cap() >= dest_list.len());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Printing writes the non-empty fragments in order
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn strlist_print(fragments in prop::collection::vec(fragment_strategy(), 0..50)) {
        let list = list_of(&fragments);

        let mut out = Vec::new();
        list.print(&mut out).unwrap();

        let expected: String = fragments.iter().flatten().map(|s| &**s).collect();
        prop_assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Destroy returns to the freshly created state
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn destroy_resets(pieces in prop::collection::vec("[a-z]{0,100}", 0..20)) {
        let mut buf = StrBuf::labelled("prop", panic_on_alloc_failure);
        let mut list = StrList::labelled("prop", panic_on_alloc_failure);

        for piece in &pieces {
            buf.str_append(piece);
            list.push(piece.as_str());
        }

        buf.destroy();
        list.destroy();

        prop_assert_eq!((buf.len(), buf.cap()), (0, 0));
        prop_assert_eq!((list.len(), list.cap()), (0, 0));
    }
}
