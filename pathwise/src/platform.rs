//! Platform rules for path parsing and comparison.
//!
//! This module defines the [`Platform`] tag that parameterizes every other
//! part of the engine: the separator character, the case rule used for
//! equality and ordering, the reserved character set, and the reserved
//! device names. Keeping all of these behind one type guarantees that the
//! grammar and the comparison logic can never disagree about them.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Characters rejected anywhere in a Windows path (after the drive).
const WINDOWS_RESERVED_CHARS: &[char] = &['<', '>', ':', '|', '"', '?', '*', '\0'];

/// Characters rejected anywhere in a POSIX path.
const POSIX_RESERVED_CHARS: &[char] = &['\0'];

/// Device names reserved by Windows regardless of extension.
const WINDOWS_RESERVED_NAMES: &[&str] = &["CON", "PRN", "AUX", "NUL"];

/// Path grammar and comparison rules for a target platform.
///
/// A `Platform` is an explicit, caller-supplied tag. Nothing in this crate
/// inspects the machine it runs on except [`Platform::host`], which exists
/// so callers can opt into the ambient platform deliberately.
///
/// # Examples
///
/// ```
/// use pathwise::Platform;
///
/// assert_eq!(Platform::Posix.separator(), '/');
/// assert_eq!(Platform::Windows.separator(), '\\');
/// assert!(Platform::Windows.case_insensitive());
/// assert!(!Platform::Posix.case_insensitive());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// POSIX rules: `/` separator, case-sensitive, no drive concept.
    Posix,
    /// Windows rules: `\` separator, case-insensitive, drive letters and
    /// UNC shares, reserved device names.
    Windows,
}

impl Platform {
    /// Returns the platform of the machine this code runs on.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::Platform;
    ///
    /// let host = Platform::host();
    /// assert!(matches!(host, Platform::Posix | Platform::Windows));
    /// ```
    #[must_use]
    pub fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Returns the native separator character.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }

    /// Returns the native separator as a string slice.
    #[must_use]
    pub const fn separator_str(self) -> &'static str {
        match self {
            Self::Posix => "/",
            Self::Windows => "\\",
        }
    }

    /// Returns `true` if the character acts as a separator on input.
    ///
    /// `/` is accepted everywhere; `\` only on Windows.
    #[must_use]
    pub const fn is_separator(self, c: char) -> bool {
        match self {
            Self::Posix => c == '/',
            Self::Windows => c == '/' || c == '\\',
        }
    }

    /// Returns `true` if string comparison ignores case on this platform.
    #[must_use]
    pub const fn case_insensitive(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Returns `true` if this platform has a drive component.
    #[must_use]
    pub const fn supports_drives(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Returns the characters that may never appear in a path.
    ///
    /// On Windows the list applies to everything after the drive specifier
    /// (the drive itself legitimately contains a colon).
    #[must_use]
    pub const fn reserved_characters(self) -> &'static [char] {
        match self {
            Self::Posix => POSIX_RESERVED_CHARS,
            Self::Windows => WINDOWS_RESERVED_CHARS,
        }
    }

    /// Folds a string according to the platform case rule.
    ///
    /// POSIX returns the input unchanged; Windows lowercases it. Folding
    /// is idempotent.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::Platform;
    ///
    /// assert_eq!(Platform::Windows.fold_case("FOO"), "foo");
    /// assert_eq!(Platform::Posix.fold_case("FOO"), "FOO");
    /// ```
    #[must_use]
    pub fn fold_case(self, s: &str) -> Cow<'_, str> {
        match self {
            Self::Posix => Cow::Borrowed(s),
            Self::Windows => Cow::Owned(s.to_lowercase()),
        }
    }

    /// Compares two strings under the platform case rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::Platform;
    ///
    /// assert!(Platform::Windows.compare("FOO", "foo"));
    /// assert!(!Platform::Posix.compare("FOO", "foo"));
    /// ```
    #[must_use]
    pub fn compare(self, a: &str, b: &str) -> bool {
        match self {
            Self::Posix => a == b,
            Self::Windows => a == b || a.to_lowercase() == b.to_lowercase(),
        }
    }

    /// Returns `true` if `filename` is a reserved device name.
    ///
    /// Reserved names are matched by filename prefix: everything before
    /// the first dot is compared case-insensitively against the device
    /// list, so `CON`, `con.txt` and `COM1.tar.gz` are all reserved.
    /// POSIX reserves nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::Platform;
    ///
    /// assert!(Platform::Windows.is_reserved_name("NUL"));
    /// assert!(Platform::Windows.is_reserved_name("con.txt"));
    /// assert!(Platform::Windows.is_reserved_name("COM3"));
    /// assert!(!Platform::Windows.is_reserved_name("console"));
    /// assert!(!Platform::Posix.is_reserved_name("CON"));
    /// ```
    #[must_use]
    pub fn is_reserved_name(self, filename: &str) -> bool {
        if !matches!(self, Self::Windows) {
            return false;
        }
        let stem = filename.split('.').next().unwrap_or(filename);
        let upper = stem.to_ascii_uppercase();
        if WINDOWS_RESERVED_NAMES.contains(&upper.as_str()) {
            return true;
        }
        // COM1-COM9 and LPT1-LPT9
        if let Some(digit) = upper.strip_prefix("COM").or_else(|| upper.strip_prefix("LPT")) {
            return matches!(digit.as_bytes(), [b'1'..=b'9']);
        }
        false
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "posix" => Ok(Self::Posix),
            "windows" => Ok(Self::Windows),
            _ => Err(format!("unknown platform: {s}")),
        }
    }
}
