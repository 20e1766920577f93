//! Front-matter codec for blog post documents.
//!
//! Parses the restricted YAML-like key/value block Docusaurus puts at the top
//! of a post (delimited by lines containing only `---`) and can rewrite or
//! insert a single key while leaving every other byte of the document alone.
//! This is deliberately not a YAML parser: values are opaque strings, except
//! for the bracket list notation (`tags: [a, b]`) the site actually uses.

use indexmap::IndexMap;

const DELIMITER: &str = "---";

/// A single front-matter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Plain string value, trimmed at both ends.
    Scalar(String),
    /// Bracket list (`[a, b]`), split on commas with each item trimmed.
    List(Vec<String>),
}

impl FieldValue {
    /// Returns the scalar string, or `None` for list values.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::List(_) => None,
        }
    }
}

/// Parsed front-matter: key → value in document order.
///
/// Duplicate keys keep the position of the first occurrence and the value of
/// the last one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: IndexMap<String, FieldValue>,
}

impl FrontMatter {
    /// Looks up a field by exact key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Looks up a field and returns it only if it is a scalar.
    #[must_use]
    pub fn scalar(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_scalar)
    }

    /// Number of parsed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no fields were parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Raw front-matter block located in a document.
struct RawBlock<'a> {
    /// Text between the delimiter lines, without the newline that precedes
    /// the closing delimiter. `None` when the delimiters are adjacent, which
    /// is distinct from `Some("")` (one blank line between them).
    inner: Option<&'a str>,
    /// Byte offset of the closing delimiter line.
    close_start: usize,
}

/// Finds the front-matter block, if any.
///
/// The opening delimiter must be the very first line of the document and the
/// closing delimiter must be a later line containing only `---` (possibly at
/// end of input). Documents with CRLF line endings have no block.
fn find_block(content: &str) -> Option<RawBlock<'_>> {
    let rest = content.strip_prefix("---\n")?;
    let base = DELIMITER.len() + 1;

    if rest == DELIMITER || rest.starts_with("---\n") {
        return Some(RawBlock {
            inner: None,
            close_start: base,
        });
    }

    let mut search_from = 0;
    while let Some(found) = rest[search_from..].find("\n---") {
        let newline = search_from + found;
        let line_start = newline + 1;
        let line_end = line_start + DELIMITER.len();
        if rest.len() == line_end || rest.as_bytes()[line_end] == b'\n' {
            return Some(RawBlock {
                inner: Some(&rest[..newline]),
                close_start: base + line_start,
            });
        }
        search_from = newline + 1;
    }
    None
}

/// True when the document begins with a complete front-matter block.
#[must_use]
pub fn has_front_matter(content: &str) -> bool {
    find_block(content).is_some()
}

/// Splits a front-matter line at its first colon into trimmed key and value.
///
/// Only the first colon delimits, so values may themselves contain colons. A
/// colon in the first column does not count; such lines, and lines without
/// any colon, yield nothing and are skipped by parsing and rewriting alike.
fn split_line(line: &str) -> Option<(&str, &str)> {
    let idx = line.find(':')?;
    (idx > 0).then(|| (line[..idx].trim(), line[idx + 1..].trim()))
}

fn parse_value(raw: &str) -> FieldValue {
    if let Some(inner) = raw.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        FieldValue::List(inner.split(',').map(|item| item.trim().to_string()).collect())
    } else {
        FieldValue::Scalar(raw.to_string())
    }
}

/// Parses the front-matter block of a document.
///
/// Returns the parsed fields and the body. The body is everything after the
/// closing delimiter characters, so it usually starts with a newline; when no
/// block is present the fields are empty and the body is the whole document.
#[must_use]
pub fn parse(content: &str) -> (FrontMatter, &str) {
    let Some(block) = find_block(content) else {
        return (FrontMatter::default(), content);
    };

    let mut fields = IndexMap::new();
    for line in block.inner.unwrap_or_default().split('\n') {
        let Some((key, value)) = split_line(line) else {
            continue;
        };
        fields.insert(key.to_string(), parse_value(value));
    }

    let body = &content[block.close_start + DELIMITER.len()..];
    (FrontMatter { fields }, body)
}

/// Rewrites or inserts one front-matter field.
///
/// The first line whose key matches is replaced with the normalized form
/// `key: value`; if no line matches, the field is appended as the last line
/// of the block. Every other byte of the document is preserved, including
/// comment lines, blank lines, and all content after the block. A document
/// without a front-matter block is returned unchanged.
#[must_use]
pub fn set_field(content: &str, key: &str, value: &str) -> String {
    let Some(block) = find_block(content) else {
        return content.to_string();
    };

    let new_line = format!("{key}: {value}");
    let suffix = &content[block.close_start..];

    let rebuilt = match block.inner {
        None => new_line,
        Some(inner) => {
            let mut out = String::with_capacity(inner.len() + new_line.len() + 1);
            let mut replaced = false;
            for (i, line) in inner.split('\n').enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                if !replaced && split_line(line).is_some_and(|(k, _)| k == key) {
                    out.push_str(&new_line);
                    replaced = true;
                } else {
                    out.push_str(line);
                }
            }
            if !replaced {
                out.push('\n');
                out.push_str(&new_line);
            }
            out
        }
    };

    format!("---\n{rebuilt}\n{suffix}")
}

// ============================================================================
// Tests
// ============================================================================
