//! SQL identifier validation.
//!
//! Descriptor metadata quotes every identifier when rendering SQL, but the
//! names themselves still have to be plain identifiers: generated code bakes
//! them into statics, path aliases derive from them, and a stray quote or
//! whitespace would only surface much later inside a rendered statement.

use once_cell::sync::Lazy;
use regex::Regex;

static IDENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex is valid"));

/// Check whether `name` is a plain SQL identifier (letters, digits,
/// underscores, not starting with a digit).
pub fn is_valid_identifier(name: &str) -> bool {
    IDENT_RE.is_match(name)
}

/// Assert that `name` is a valid identifier, with context for the panic
/// message. Used by metadata constructors; generated code is trusted, so a
/// violation here is a programming error, not a runtime condition.
pub(crate) fn require_identifier(kind: &str, name: &str) {
    assert!(
        is_valid_identifier(name),
        "{kind} {name:?} is not a valid SQL identifier"
    );
}
