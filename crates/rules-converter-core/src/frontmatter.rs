//! Rule file header parsing.
//!
//! Rule files start with an optional header delimited by `---` lines:
//!
//! ```text
//! ---
//! description: Use strict typing
//! globs: **/*.ts, **/*.tsx
//! alwaysApply: false
//! ---
//! body...
//! ```
//!
//! Values are split line by line instead of going through a YAML parser, because
//! glob lists such as `*.{ts,tsx}` or `**/*.js, *.jsx` are usually written unquoted.

use std::collections::BTreeMap;

const OPENING: &str = "---\n";
const CLOSING: &str = "\n---\n";

/// A single header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    Bool(bool),
    Empty,
    Text(String),
}

impl MetaValue {
    fn from_raw(raw: &str) -> Self {
        match raw {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            "" => Self::Empty,
            other => Self::Text(other.to_string()),
        }
    }
}

/// Parsed header key-value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    entries: BTreeMap<String, MetaValue>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: MetaValue) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.entries.get(key)
    }

    /// Boolean value for `key`, `None` if missing or not a boolean.
    pub fn bool(&self, key: &str) -> Option<bool> {
        match self.entries.get(key) {
            Some(MetaValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// String value for `key`. Empty values yield `""`; booleans yield `None`.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(MetaValue::Text(s)) => Some(s.as_str()),
            Some(MetaValue::Empty) => Some(""),
            _ => None,
        }
    }

    /// Whether `key` holds text that is non-empty after trimming.
    pub fn has_text(&self, key: &str) -> bool {
        self.text(key).is_some_and(|s| !s.trim().is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &MetaValue)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split `content` into `(header, body)`.
///
/// The header closes at the first `\n---\n` after the opening line, so the
/// closing delimiter must itself end with a newline. Returns `None` when the
/// content does not open with a `---` line or the header is never closed;
/// callers then treat the whole content as body.
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix(OPENING)?;
    let end = rest.find(CLOSING)?;
    Some((&rest[..end], &rest[end + CLOSING.len()..]))
}

/// Parse header text into key-value pairs. Lines without a colon are skipped.
pub fn parse_frontmatter(header: &str) -> Frontmatter {
    let mut frontmatter = Frontmatter::new();

    for line in header.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        frontmatter.insert(key.trim(), MetaValue::from_raw(value.trim()));
    }

    frontmatter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_header() {
        let content = "---\nalwaysApply: true\n---\n# Body\n";
        let (header, body) = split_frontmatter(content).unwrap();
        assert_eq!(header, "alwaysApply: true");
        assert_eq!(body, "# Body\n");
    }

    #[test]
    fn test_split_without_header() {
        assert!(split_frontmatter("# Just a body\n").is_none());
    }

    #[test]
    fn test_split_unterminated_header() {
        assert!(split_frontmatter("---\nalwaysApply: true\n# Body\n").is_none());
    }

    #[test]
    fn test_split_requires_newline_after_opening() {
        assert!(split_frontmatter("---alwaysApply: true\n---\n").is_none());
    }

    #[test]
    fn test_split_closing_at_end_of_input_is_not_a_header() {
        assert!(split_frontmatter("---\nglobs: *.rs\n---").is_none());
        assert!(split_frontmatter("---\nalwaysApply: true\n---").is_none());
    }

    #[test]
    fn test_split_empty_header_is_not_a_header() {
        assert!(split_frontmatter("---\n---\nbody").is_none());
    }

    #[test]
    fn test_split_blank_header_line() {
        let (header, body) = split_frontmatter("---\n\n---\nbody").unwrap();
        assert_eq!(header, "");
        assert_eq!(body, "body");
    }

    #[test]
    fn test_split_closes_at_first_delimiter() {
        let (header, body) = split_frontmatter("---\na: b\n---\n---\nc: d\n---\n").unwrap();
        assert_eq!(header, "a: b");
        assert_eq!(body, "---\nc: d\n---\n");
    }

    #[test]
    fn test_split_ignores_indented_delimiter() {
        let content = "---\na: b\n ---\nc: d\n---\nbody";
        let (header, body) = split_frontmatter(content).unwrap();
        assert_eq!(header, "a: b\n ---\nc: d");
        assert_eq!(body, "body");
    }

    #[test]
    fn test_parse_value_coercion() {
        let fm = parse_frontmatter("alwaysApply: true\nother: false\nglobs:\ndescription: Keep it short\n");
        assert_eq!(fm.get("alwaysApply"), Some(&MetaValue::Bool(true)));
        assert_eq!(fm.get("other"), Some(&MetaValue::Bool(false)));
        assert_eq!(fm.get("globs"), Some(&MetaValue::Empty));
        assert_eq!(fm.text("description"), Some("Keep it short"));
    }

    #[test]
    fn test_parse_keeps_glob_characters_verbatim() {
        let fm = parse_frontmatter("globs: src/**/*.{ts,tsx}, *.js\n");
        assert_eq!(fm.text("globs"), Some("src/**/*.{ts,tsx}, *.js"));
    }

    #[test]
    fn test_parse_splits_at_first_colon() {
        let fm = parse_frontmatter("description: Note: read this first\n");
        assert_eq!(fm.text("description"), Some("Note: read this first"));
    }

    #[test]
    fn test_parse_skips_lines_without_colon() {
        let fm = parse_frontmatter("just some text\nalwaysApply: true\n");
        assert_eq!(fm.len(), 1);
        assert_eq!(fm.bool("alwaysApply"), Some(true));
    }

    #[test]
    fn test_parse_does_not_coerce_quoted_or_cased_booleans() {
        let fm = parse_frontmatter("a: \"true\"\nb: True\n");
        assert_eq!(fm.text("a"), Some("\"true\""));
        assert_eq!(fm.text("b"), Some("True"));
        assert_eq!(fm.bool("a"), None);
    }

    #[test]
    fn test_parse_later_duplicate_wins() {
        let fm = parse_frontmatter("alwaysApply: true\nalwaysApply: false\n");
        assert_eq!(fm.bool("alwaysApply"), Some(false));
    }

    #[test]
    fn test_has_text() {
        let fm = parse_frontmatter("a:    \nb: x\nc: true\n");
        assert!(!fm.has_text("a"));
        assert!(fm.has_text("b"));
        assert!(!fm.has_text("c"));
        assert!(!fm.has_text("missing"));
    }
}
