use regex::{Captures, Regex};

use crate::editing::patterns;

/// Split a line into its leading whitespace run and the rest.
pub fn split_indent(line: &str) -> (&str, &str) {
    let rest = line.trim_start_matches([' ', '\t']);
    line.split_at(line.len() - rest.len())
}

/// Rewrite every line of `content`, stripping any of the `strip` prefix
/// families and inserting `prefix` in their place.
///
/// With `preserve_indent` the rewrite runs per line: the leading whitespace
/// is carried over untouched and the prefix lands right after it. The strip
/// pattern carries an implicit empty catch-all, so there is exactly one
/// insertion point per line whether or not an old prefix was present.
///
/// Without `preserve_indent` the rewrite is a single multiline pass used by
/// the removal paths: each line's matched prefix is replaced while the
/// captured indent stays in place, and lines without a match are untouched.
pub fn prefix_lines(content: &str, prefix: &str, strip: &[&str], preserve_indent: bool) -> String {
    if preserve_indent {
        let pattern = strip_pattern(strip);
        content
            .split('\n')
            .map(|line| {
                let (indent, _) = split_indent(line);
                let rest = pattern.replace(line, "");
                format!("{indent}{prefix}{rest}")
            })
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        let Some(pattern) = multiline_strip_pattern(strip) else {
            return content.to_string();
        };
        pattern
            .replace_all(content, |caps: &Captures| format!("{}{}", &caps[1], prefix))
            .into_owned()
    }
}

/// Matches the indent plus at most one old prefix; always matches.
fn strip_pattern(strip: &[&str]) -> Regex {
    let source = if strip.is_empty() {
        "^[ \t]*".to_string()
    } else {
        let ordered = patterns::by_specificity(strip);
        format!("^[ \t]*(?:{})?", ordered.join("|"))
    };
    Regex::new(&source).expect("prefix fragments form a valid pattern")
}

/// Matches an old prefix on any line, capturing the indent so the
/// replacement can keep it.
fn multiline_strip_pattern(strip: &[&str]) -> Option<Regex> {
    if strip.is_empty() {
        return None;
    }
    let ordered = patterns::by_specificity(strip);
    let source = format!("(?m)^([ \t]*)(?:{})", ordered.join("|"));
    Some(Regex::new(&source).expect("prefix fragments form a valid pattern"))
}
