//! Restricted glob matching over path values.
//!
//! Patterns understand exactly two wildcards: `*` matches any run of
//! non-separator characters and `?` matches exactly one. Both are scoped
//! to a single segment; nothing ever matches across a separator. A
//! rooted pattern is anchored to the whole path; a relative pattern may
//! match any run of whole trailing segments. Matching follows the
//! platform case rule.
//!
//! The pattern is split into segments up front and matched with a
//! bounded, linear backtracking scan. No regular expressions are
//! involved.

use crate::error::Result;
use crate::grammar::Grammar;
use crate::platform::Platform;
use crate::pure::PurePath;

/// A compiled glob pattern.
///
/// # Examples
///
/// ```
/// use pathwise::{GlobPattern, Platform, PurePath};
///
/// let pattern = GlobPattern::new(Platform::Posix, "*.rs").unwrap();
/// let path = PurePath::parse(Platform::Posix, "/src/main.rs").unwrap();
/// assert!(pattern.matches(&path));
///
/// let rooted = GlobPattern::new(Platform::Posix, "/src/*.rs").unwrap();
/// assert!(rooted.matches(&path));
///
/// let elsewhere = PurePath::parse(Platform::Posix, "/lib/main.rs").unwrap();
/// assert!(!rooted.matches(&elsewhere));
/// ```
#[derive(Debug, Clone)]
pub struct GlobPattern {
    platform: Platform,
    drive: String,
    root: String,
    segments: Vec<String>,
}

impl GlobPattern {
    /// Compiles a pattern for the given platform.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDrive`] if the pattern begins with an
    /// unparseable UNC prefix. Wildcard characters are legal here even
    /// where the platform reserves them for paths.
    ///
    /// [`Error::MalformedDrive`]: crate::Error::MalformedDrive
    pub fn new(platform: Platform, pattern: &str) -> Result<Self> {
        let (drive, root, segments) = Grammar::new(platform).split_for_pattern(pattern)?;
        Ok(Self {
            platform,
            drive,
            root,
            segments,
        })
    }

    /// Returns the platform this pattern was compiled for.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Returns `true` if the pattern carries a drive or root and is
    /// therefore anchored to the full path.
    #[must_use]
    pub fn is_anchored(&self) -> bool {
        !self.drive.is_empty() || !self.root.is_empty()
    }

    /// Tests a path value against this pattern.
    ///
    /// A path of a different platform never matches. An empty pattern
    /// matches nothing.
    #[must_use]
    pub fn matches(&self, path: &PurePath) -> bool {
        if path.platform() != self.platform {
            return false;
        }
        let parts = path.relative_parts();

        if self.is_anchored() {
            return self.platform.compare(&self.drive, path.drive())
                && self.root == path.root()
                && self.match_run(parts);
        }

        if self.segments.is_empty() || self.segments.len() > parts.len() {
            return false;
        }
        self.match_run(&parts[parts.len() - self.segments.len()..])
    }

    /// Matches the pattern segments one-to-one against `parts`.
    fn match_run(&self, parts: &[String]) -> bool {
        self.segments.len() == parts.len()
            && self
                .segments
                .iter()
                .zip(parts.iter())
                .all(|(pattern, part)| match_segment(self.platform, part, pattern))
    }
}

impl PurePath {
    /// Tests this path against a glob pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern fails to compile; see
    /// [`GlobPattern::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Platform, PurePath};
    ///
    /// let path = PurePath::parse(Platform::Windows, r"C:\src\Main.RS").unwrap();
    /// assert!(path.matches("*.rs").unwrap());
    /// assert!(path.matches(r"C:\src\*.rs").unwrap());
    /// assert!(!path.matches(r"D:\src\*.rs").unwrap());
    /// ```
    pub fn matches(&self, pattern: &str) -> Result<bool> {
        Ok(GlobPattern::new(self.platform, pattern)?.matches(self))
    }
}

/// Matches one path segment against one pattern segment.
fn match_segment(platform: Platform, text: &str, pattern: &str) -> bool {
    let folded_text = platform.fold_case(text);
    let folded_pattern = platform.fold_case(pattern);
    let text: Vec<char> = folded_text.chars().collect();
    let pattern: Vec<char> = folded_pattern.chars().collect();
    wildcard_match(&text, &pattern)
}

/// Two-pointer wildcard scan with star backtracking.
fn wildcard_match(text: &[char], pattern: &[char]) -> bool {
    let mut t = 0;
    let mut p = 0;
    let mut star: Option<usize> = None;
    let mut star_t = 0;

    while t < text.len() {
        if p < pattern.len() && (pattern[p] == '?' || pattern[p] == text[t]) {
            t += 1;
            p += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            star = Some(p);
            star_t = t;
            p += 1;
        } else if let Some(sp) = star {
            star_t += 1;
            t = star_t;
            p = sp + 1;
        } else {
            return false;
        }
    }

    while p < pattern.len() && pattern[p] == '*' {
        p += 1;
    }
    p == pattern.len()
}
