//! Composite key codec.
//!
//! Layout: `\0 ns \0 part_1 \0 ... part_n \0`, where every segment is escaped
//! so it can never contain the delimiter itself:
//!
//! - `\` becomes `\\`
//! - `\0` (U+0000) becomes `\` followed by `0`
//!
//! Escaping is injective and escaped text is delimiter-free, so a key splits
//! back into exactly one `(namespace, parts)` tuple.

use super::{KeyError, KeyResult, COMPOSITE_KEY_DELIMITER};

const ESCAPE: char = '\\';
const ESCAPED_DELIMITER: char = '0';

/// Decoded composite key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeKey {
    pub namespace: String,
    pub parts: Vec<String>,
}

/// Encodes `namespace` and ordered `parts` into one canonical store key.
///
/// # Errors
/// - Returns `KeyError::EmptyNamespace` when `namespace` is empty.
pub fn composite_key<S: AsRef<str>>(namespace: &str, parts: &[S]) -> KeyResult<String> {
    if namespace.is_empty() {
        return Err(KeyError::EmptyNamespace);
    }

    let capacity = parts
        .iter()
        .map(|part| part.as_ref().len() + 1)
        .sum::<usize>()
        + namespace.len()
        + 2;
    let mut key = String::with_capacity(capacity);

    key.push(COMPOSITE_KEY_DELIMITER);
    push_escaped(&mut key, namespace);
    key.push(COMPOSITE_KEY_DELIMITER);
    for part in parts {
        push_escaped(&mut key, part.as_ref());
        key.push(COMPOSITE_KEY_DELIMITER);
    }

    Ok(key)
}

/// Splits a key produced by [`composite_key`] back into its segments.
///
/// # Errors
/// - Returns `KeyError::Malformed` when the key is not framed by delimiters,
///   has an empty namespace, or contains an invalid escape sequence.
pub fn split_composite_key(key: &str) -> KeyResult<CompositeKey> {
    let body = key
        .strip_prefix(COMPOSITE_KEY_DELIMITER)
        .ok_or_else(|| KeyError::Malformed("missing leading delimiter".to_string()))?;
    let body = body
        .strip_suffix(COMPOSITE_KEY_DELIMITER)
        .ok_or_else(|| KeyError::Malformed("missing trailing delimiter".to_string()))?;

    let mut segments = body.split(COMPOSITE_KEY_DELIMITER);
    let namespace = match segments.next() {
        Some(segment) if !segment.is_empty() => unescape(segment)?,
        _ => return Err(KeyError::Malformed("empty namespace".to_string())),
    };
    let parts = segments.map(unescape).collect::<KeyResult<Vec<_>>>()?;

    Ok(CompositeKey { namespace, parts })
}

/// Validates a caller-supplied identifier used verbatim as a store key.
///
/// # Errors
/// - Returns `KeyError::EmptyKey` for an empty id.
/// - Returns `KeyError::ReservedPrefix` when the id could shadow a composite key.
pub fn simple_key(id: &str) -> KeyResult<&str> {
    if id.is_empty() {
        return Err(KeyError::EmptyKey);
    }
    if id.starts_with(COMPOSITE_KEY_DELIMITER) {
        return Err(KeyError::ReservedPrefix(id.to_string()));
    }
    Ok(id)
}

fn push_escaped(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            ESCAPE => {
                out.push(ESCAPE);
                out.push(ESCAPE);
            }
            COMPOSITE_KEY_DELIMITER => {
                out.push(ESCAPE);
                out.push(ESCAPED_DELIMITER);
            }
            other => out.push(other),
        }
    }
}

fn unescape(segment: &str) -> KeyResult<String> {
    let mut out = String::with_capacity(segment.len());
    let mut chars = segment.chars();

    while let Some(c) = chars.next() {
        if c != ESCAPE {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(ESCAPE) => out.push(ESCAPE),
            Some(ESCAPED_DELIMITER) => out.push(COMPOSITE_KEY_DELIMITER),
            Some(other) => {
                return Err(KeyError::Malformed(format!(
                    "invalid escape sequence `\\{}`",
                    other.escape_default()
                )));
            }
            None => return Err(KeyError::Malformed("dangling escape".to_string())),
        }
    }

    Ok(out)
}
