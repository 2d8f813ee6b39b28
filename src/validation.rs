//! Pure input classification for the validated operations
//!
//! This module contains classification functions that can be tested in
//! isolation without touching the operations or the error type.

use std::fmt;

/// Why a join input was rejected.
///
/// Missing models the absent/null input of the reference behavior; Empty and
/// Whitespace distinguish `""` from strings made entirely of whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankKind {
    Missing,
    Empty,
    Whitespace,
}

impl fmt::Display for BlankKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::Empty => write!(f, "empty"),
            Self::Whitespace => write!(f, "whitespace-only"),
        }
    }
}

/// Returns true if the string is empty or entirely whitespace.
///
/// Uses `char::is_whitespace`, so full-width spaces (U+3000) and tabs count as
/// whitespace alongside ASCII spaces.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

/// Classifies an optional join input into a usable slice or a [`BlankKind`].
pub fn classify_join_input(input: Option<&str>) -> Result<&str, BlankKind> {
    match input {
        None => Err(BlankKind::Missing),
        Some("") => Err(BlankKind::Empty),
        Some(s) if is_blank(s) => Err(BlankKind::Whitespace),
        Some(s) => Ok(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank_empty() {
        assert!(is_blank(""));
    }

    #[test]
    fn test_is_blank_whitespace_variants() {
        assert!(is_blank(" "));
        assert!(is_blank("\t"));
        assert!(is_blank("　")); // full-width space, U+3000
        assert!(is_blank(" \t 　 "));
    }

    #[test]
    fn test_is_blank_rejects_content() {
        assert!(!is_blank("a"));
        assert!(!is_blank(" a "));
        assert!(!is_blank("　あ　"));
    }

    #[test]
    fn test_classify_missing() {
        assert_eq!(classify_join_input(None), Err(BlankKind::Missing));
    }

    #[test]
    fn test_classify_empty() {
        assert_eq!(classify_join_input(Some("")), Err(BlankKind::Empty));
    }

    #[test]
    fn test_classify_whitespace() {
        assert_eq!(classify_join_input(Some("   ")), Err(BlankKind::Whitespace));
        assert_eq!(classify_join_input(Some("　")), Err(BlankKind::Whitespace));
        assert_eq!(
            classify_join_input(Some(" 　 ")),
            Err(BlankKind::Whitespace)
        );
    }

    #[test]
    fn test_classify_valid_preserves_slice() {
        assert_eq!(classify_join_input(Some(" Z ")), Ok(" Z "));
        assert_eq!(classify_join_input(Some("A")), Ok("A"));
    }

    #[test]
    fn test_blank_kind_display() {
        assert_eq!(BlankKind::Missing.to_string(), "missing");
        assert_eq!(BlankKind::Empty.to_string(), "empty");
        assert_eq!(BlankKind::Whitespace.to_string(), "whitespace-only");
    }
}
