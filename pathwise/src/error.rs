//! Error types for the pathwise library.
//!
//! This module provides the error hierarchy for all operations in the
//! pathwise library, using `thiserror` for ergonomic error handling.
//!
//! Errors fall into two families: parse-time defects in the input string
//! (reserved characters, malformed drive specifiers) and precondition
//! violations in the path algebra (mismatched anchors, forbidden
//! replacement components, escaping safe joins). Every error is local and
//! synchronous; there is no transient failure mode and nothing to retry.

use thiserror::Error;

/// Result type alias for operations that may fail with a pathwise error.
///
/// # Examples
///
/// ```
/// use pathwise::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/usr/lib".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathwise library.
///
/// This enum encompasses all error conditions that can occur while
/// parsing path strings or applying algebra operations to path values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A path string contains a character the platform forbids.
    #[error("invalid path {path:?}: reserved character {character:?}")]
    ReservedCharacter {
        /// The original input string.
        path: String,
        /// The offending character.
        character: char,
    },

    /// A path string starts with an unparseable drive specifier.
    #[error("invalid path {path:?}: {reason}")]
    MalformedDrive {
        /// The original input string.
        path: String,
        /// The reason the drive specifier is malformed.
        reason: String,
    },

    /// Two paths with different anchors were given to an operation that
    /// requires them to share drive and root.
    #[error("anchor mismatch: {path:?} is not anchored like {other:?}")]
    AnchorMismatch {
        /// The path being relativized.
        path: String,
        /// The would-be ancestor.
        other: String,
    },

    /// A path was asked for its suffix relative to a non-ancestor.
    #[error("{other:?} is not an ancestor of {path:?}")]
    NotAncestor {
        /// The path being relativized.
        path: String,
        /// The would-be ancestor.
        other: String,
    },

    /// A component replacement string decomposes into more than the
    /// targeted component.
    #[error("invalid replacement {replacement:?} for {operation}: {reason}")]
    ComponentViolation {
        /// The operation that rejected the replacement.
        operation: &'static str,
        /// The rejected replacement string.
        replacement: String,
        /// The reason the replacement is invalid.
        reason: String,
    },

    /// A safe join was given an anchored fragment.
    #[error("safe join requires a relative fragment, got {fragment:?}")]
    AnchoredFragment {
        /// The rejected fragment.
        fragment: String,
    },

    /// A safe join fragment would climb out of the base path.
    #[error("fragment {fragment:?} escapes base {base:?}")]
    EscapesBase {
        /// The base path of the join.
        base: String,
        /// The escaping fragment.
        fragment: String,
    },

    /// An environment variable referenced during expansion is not set.
    #[error("undefined environment variable ${name}")]
    UnknownVariable {
        /// The variable name.
        name: String,
    },

    /// The home directory could not be determined during tilde expansion.
    #[error("cannot determine home directory")]
    NoHomeDirectory,

    /// Tilde expansion was asked to resolve another user's home directory.
    #[error("invalid path {path:?}: ~user expansion is not supported; use ~ or ~/path")]
    UnsupportedUserExpansion {
        /// The original input string.
        path: String,
    },
}

impl Error {
    /// Check if this error is a parse-time input defect.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::Error;
    ///
    /// let err = Error::ReservedCharacter {
    ///     path: "a*b".to_string(),
    ///     character: '*',
    /// };
    /// assert!(err.is_parse_error());
    /// ```
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::ReservedCharacter { .. } | Self::MalformedDrive { .. }
        )
    }

    /// Check if this error is an algebra precondition violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::Error;
    ///
    /// let err = Error::AnchoredFragment {
    ///     fragment: "/etc".to_string(),
    /// };
    /// assert!(err.is_precondition_error());
    /// ```
    #[must_use]
    pub fn is_precondition_error(&self) -> bool {
        matches!(
            self,
            Self::AnchorMismatch { .. }
                | Self::NotAncestor { .. }
                | Self::ComponentViolation { .. }
                | Self::AnchoredFragment { .. }
                | Self::EscapesBase { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_character_error() {
        let err = Error::ReservedCharacter {
            path: "tmp/a|b".to_string(),
            character: '|',
        };
        let display = format!("{err}");
        assert!(display.contains("reserved character"));
        assert!(display.contains("tmp/a|b"));
        assert!(display.contains('|'));
        assert!(err.is_parse_error());
        assert!(!err.is_precondition_error());
    }

    #[test]
    fn test_malformed_drive_error() {
        let err = Error::MalformedDrive {
            path: "\\\\host".to_string(),
            reason: "UNC path is missing a share name".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path"));
        assert!(display.contains("missing a share"));
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_anchor_mismatch_error() {
        let err = Error::AnchorMismatch {
            path: "C:\\a".to_string(),
            other: "D:\\a".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("anchor mismatch"));
        assert!(err.is_precondition_error());
        assert!(!err.is_parse_error());
    }

    #[test]
    fn test_not_ancestor_error() {
        let err = Error::NotAncestor {
            path: "/a/abc".to_string(),
            other: "/a/ab".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("not an ancestor"));
        assert!(err.is_precondition_error());
    }

    #[test]
    fn test_component_violation_error() {
        let err = Error::ComponentViolation {
            operation: "with_extension",
            replacement: "tar.gz".to_string(),
            reason: "extension must not contain a dot".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("with_extension"));
        assert!(display.contains("tar.gz"));
        assert!(err.is_precondition_error());
    }

    #[test]
    fn test_escapes_base_error() {
        let err = Error::EscapesBase {
            base: "/srv/data".to_string(),
            fragment: "../../etc/passwd".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("escapes"));
        assert!(display.contains("/srv/data"));
    }

    #[test]
    fn test_unknown_variable_error() {
        let err = Error::UnknownVariable {
            name: "PATHWISE_MISSING".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("PATHWISE_MISSING"));
        assert!(!err.is_parse_error());
        assert!(!err.is_precondition_error());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<()> {
            Err(Error::NoHomeDirectory)
        }

        assert!(returns_result().is_err());
    }
}
