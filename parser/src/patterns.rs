//! Compiled patterns for the navigation table grammar.
//!
//! Matching is linear in the input length (`regex` crate), including for the
//! overlapping character classes of the title grammar. Every line pattern is
//! anchored at the start of its input only; trailing text after a match is
//! ignored.

use regex::Regex;
use std::sync::LazyLock;

/// ASCII punctuation allowed in navlink titles.
pub(crate) const TITLE_PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

const WHITESPACE: &str = r"\s*";

pub(crate) static PATTERNS: LazyLock<TablePatterns> = LazyLock::new(TablePatterns::new);

pub(crate) struct TablePatterns {
    /// `| level | path | navlink |`, case-insensitive.
    pub(crate) header: Regex,
    /// Whole page up to the end, provided a header occurs somewhere.
    pub(crate) table: Regex,
    /// `| --- | --- | --- |`
    pub(crate) filler: Regex,
    /// `| <level> | <path> | [<title>](<link>) |` with four capture groups.
    pub(crate) row: Regex,
}

impl TablePatterns {
    fn new() -> Self {
        let header = header_regex();
        let filler_column = format!(r"{WHITESPACE}-+{WHITESPACE}\|");
        let level = format!(r"{WHITESPACE}([0-9]+){WHITESPACE}");
        let path = format!(r"{WHITESPACE}([\w-]+){WHITESPACE}");
        let title = format!(r"[\w\- {}]+?", regex::escape(TITLE_PUNCTUATION));
        let link = r"[\w/-]*";
        let navlink = format!(
            r"{WHITESPACE}\[{WHITESPACE}({title}){WHITESPACE}\]{WHITESPACE}\({WHITESPACE}({link}){WHITESPACE}\){WHITESPACE}"
        );

        // All patterns are compile-time constants. An expect() failure is a
        // programmer error in the pattern, not a runtime condition.
        Self {
            header: Regex::new(&format!(r"(?i)^{header}")).expect("static regex must compile"),
            table: Regex::new(&format!(r"(?i)^[\s\S]*{header}[\s\S]*\|?"))
                .expect("static regex must compile"),
            filler: Regex::new(&format!(
                r"^{WHITESPACE}\|(?:{filler_column}){{3}}{WHITESPACE}"
            ))
            .expect("static regex must compile"),
            row: Regex::new(&format!(r"^{WHITESPACE}\|{level}\|{path}\|{navlink}\|"))
                .expect("static regex must compile"),
        }
    }
}

fn header_regex() -> String {
    format!(
        r"{WHITESPACE}\|{WHITESPACE}level{WHITESPACE}\|{WHITESPACE}path{WHITESPACE}\|{WHITESPACE}navlink{WHITESPACE}\|{WHITESPACE}"
    )
}
