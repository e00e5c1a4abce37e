//! # Composite State Keys
//!
//! Keys are laid out as `\0 namespace \0 part1 \0 ... partN \0`. Every
//! component is terminated by the separator, so a key built from a prefix of
//! parts is a byte prefix of every key that extends it and `scan_prefix`
//! over a partial key returns exactly the entries under it.
//!
//! Components must not contain `U+0000` (the separator) or `U+10FFFF`
//! (reserved as an upper bound for range scans). Binary data such as role
//! identifiers must be hex-encoded before it is used as a part.

use thiserror::Error;

/// Component separator.
pub const KEY_SEPARATOR: char = '\u{0000}';

/// Reserved maximum code point, never allowed inside a component.
pub const MAX_UNICODE_RUNE: char = '\u{10FFFF}';

/// Composite key construction errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyError {
    /// Namespace was empty.
    #[error("composite key namespace must not be empty")]
    EmptyNamespace,

    /// A component contained a reserved character.
    #[error("composite key component {0:?} contains a reserved character")]
    ReservedCharacter(String),

    /// Input was not a composite key.
    #[error("not a composite key")]
    NotComposite,
}

fn check_component(component: &str) -> Result<(), KeyError> {
    if component.contains(KEY_SEPARATOR) || component.contains(MAX_UNICODE_RUNE) {
        return Err(KeyError::ReservedCharacter(component.to_string()));
    }
    Ok(())
}

/// Builds a full composite key.
pub fn composite_key<S: AsRef<str>>(namespace: &str, parts: &[S]) -> Result<String, KeyError> {
    partial_composite_key(namespace, parts)
}

/// Builds the key prefix shared by every key under `namespace` + `parts`.
///
/// Identical in layout to [`composite_key`]; kept separate so call sites say
/// which of the two they mean.
pub fn partial_composite_key<S: AsRef<str>>(
    namespace: &str,
    parts: &[S],
) -> Result<String, KeyError> {
    if namespace.is_empty() {
        return Err(KeyError::EmptyNamespace);
    }
    check_component(namespace)?;

    let mut key = String::with_capacity(namespace.len() + 2);
    key.push(KEY_SEPARATOR);
    key.push_str(namespace);
    key.push(KEY_SEPARATOR);
    for part in parts {
        let part = part.as_ref();
        check_component(part)?;
        key.push_str(part);
        key.push(KEY_SEPARATOR);
    }
    Ok(key)
}

/// Splits a composite key back into its namespace and parts.
pub fn split_composite_key(key: &str) -> Result<(String, Vec<String>), KeyError> {
    let body = key
        .strip_prefix(KEY_SEPARATOR)
        .and_then(|rest| rest.strip_suffix(KEY_SEPARATOR))
        .ok_or(KeyError::NotComposite)?;

    let mut components = body.split(KEY_SEPARATOR).map(str::to_string);
    let namespace = components
        .next()
        .filter(|ns| !ns.is_empty())
        .ok_or(KeyError::NotComposite)?;
    Ok((namespace, components.collect()))
}
