use regex::Regex;

/// Checklist item marker, e.g. `- [ ] ` or `* [x] `.
pub const TODO: &str = r"[-*+] \[.?\] ";

/// Unordered list marker, e.g. `- ` or `* `.
pub const UL: &str = r"[-*+] ";

/// Ordered list marker, e.g. `3. `.
pub const OL: &str = r"\d+\. ";

/// Blockquote marker.
pub const QUOTE: &str = "> ";

/// Heading marker. The group captures the `#` run so callers can inspect
/// the heading level.
pub const HEADING: &str = r"(#+) ";

/// Every known prefix family, most specific first.
///
/// Ordering matters: the regex crate's alternation is leftmost-first, so the
/// checklist fragment must come before the bullet fragment or `- [ ] ` would
/// be stripped as a bare `- `.
pub const PREFIXES: &[&str] = &[TODO, OL, UL, QUOTE, HEADING];

/// Classify a line by the first prefix family matching after its indent,
/// trying families in `PREFIXES` order so a checklist line reports `TODO`
/// rather than the bullet fragment it also happens to match.
pub fn classify(line: &str) -> Option<&'static str> {
    PREFIXES
        .iter()
        .copied()
        .find(|&fragment| combine(&[fragment]).is_match(line))
}

/// Order fragments most specific first, following `PREFIXES` precedence.
/// Strip unions built from caller-supplied sets go through this so the
/// checklist fragment is always tried before the bullet fragment, whatever
/// order the caller listed them in. Unknown fragments keep their relative
/// order at the end.
pub fn by_specificity<'a>(fragments: &[&'a str]) -> Vec<&'a str> {
    let mut ordered = fragments.to_vec();
    ordered.sort_by_key(|fragment| {
        PREFIXES
            .iter()
            .position(|known| known == fragment)
            .unwrap_or(PREFIXES.len())
    });
    ordered
}

/// Union a set of prefix fragments into one pattern anchored at the start of
/// a line, after any indentation.
///
/// Zero matches is a normal outcome for callers: testing an unformatted line
/// reports no match, and stripping with the result is a no-op.
pub fn combine(fragments: &[&str]) -> Regex {
    Regex::new(&format!("^[ \t]*(?:{})", fragments.join("|")))
        .expect("prefix fragments form a valid pattern")
}
