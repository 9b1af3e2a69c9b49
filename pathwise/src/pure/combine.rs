//! Joining path values and fragments.
//!
//! Combining follows native path-combine semantics: a later rooted
//! fragment discards everything accumulated so far and becomes the new
//! base, while a fragment that supplies only a drive overwrites the
//! tracked drive without disturbing the accumulated directories. The
//! most recently seen non-empty drive wins even when the final result is
//! rootless.
//!
//! [`PurePath::safe_join`] is the traversal-safe variant: it only accepts
//! relative fragments and fails outright when a `..` token would climb
//! out of the base.

use crate::error::{Error, Result};
use crate::grammar::Grammar;
use crate::platform::Platform;
use crate::pure::PurePath;

/// Running state of a combine scan.
struct Accumulator {
    drive: String,
    root: String,
    segments: Vec<String>,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            drive: String::new(),
            root: String::new(),
            segments: Vec::new(),
        }
    }

    fn seeded_from(path: &PurePath) -> Self {
        Self {
            drive: path.drive.clone(),
            root: path.root.clone(),
            segments: path.relative_parts().to_vec(),
        }
    }

    fn push(&mut self, fragment: &PurePath) {
        if !fragment.root.is_empty() {
            // A rooted fragment becomes the new base. The tracked drive
            // survives unless the fragment brings its own.
            self.root = fragment.root.clone();
            self.segments.clear();
            if !fragment.drive.is_empty() {
                self.drive = fragment.drive.clone();
            }
        } else if !fragment.drive.is_empty() {
            self.drive = fragment.drive.clone();
        }
        self.segments.extend(fragment.relative_parts().iter().cloned());
    }

    fn finish(self, platform: Platform) -> PurePath {
        PurePath::rebuild(platform, &self.drive, &self.root, &self.segments)
    }
}

impl PurePath {
    /// Builds a value by combining raw fragments in order.
    ///
    /// Zero fragments yield the current-directory value.
    ///
    /// # Errors
    ///
    /// Returns a parse error if any fragment fails the grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Platform, PurePath};
    ///
    /// let path =
    ///     PurePath::from_segments(Platform::Posix, ["/home/dan", "/lib", "lib64"]).unwrap();
    /// assert_eq!(path.to_string(), "/lib/lib64");
    ///
    /// let here = PurePath::from_segments(Platform::Posix, [] as [&str; 0]).unwrap();
    /// assert_eq!(here.to_string(), ".");
    /// ```
    pub fn from_segments<I, S>(platform: Platform, fragments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let grammar = Grammar::new(platform);
        let mut accumulator = Accumulator::new();
        for fragment in fragments {
            accumulator.push(&grammar.parse(fragment.as_ref())?);
        }
        Ok(accumulator.finish(platform))
    }

    /// Joins this path with one raw fragment.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the fragment fails the grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Platform, PurePath};
    ///
    /// let base = PurePath::parse(Platform::Windows, r"C:\Users\nemec").unwrap();
    /// let joined = base.join("tmp").unwrap();
    /// assert_eq!(joined.to_string(), r"C:\Users\nemec\tmp");
    /// assert_eq!(joined.dirname(), r"Users\nemec");
    ///
    /// // A rooted fragment wins over the base.
    /// let reset = base.join(r"\x").unwrap();
    /// assert_eq!(reset.to_string(), r"C:\x");
    /// ```
    pub fn join(&self, fragment: &str) -> Result<Self> {
        self.join_all([fragment])
    }

    /// Joins this path with raw fragments in order.
    ///
    /// Equivalent to repeated [`PurePath::join`] calls: `join(join(p, a), b)`
    /// and `join_all(p, [a, b])` produce the same value.
    ///
    /// # Errors
    ///
    /// Returns a parse error if any fragment fails the grammar.
    pub fn join_all<I, S>(&self, fragments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let grammar = Grammar::new(self.platform);
        let mut accumulator = Accumulator::seeded_from(self);
        for fragment in fragments {
            accumulator.push(&grammar.parse(fragment.as_ref())?);
        }
        Ok(accumulator.finish(self.platform))
    }

    /// Joins this path with an already-parsed value of the same platform.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Platform, PurePath};
    ///
    /// let base = PurePath::parse(Platform::Posix, "/srv").unwrap();
    /// let tail = PurePath::parse(Platform::Posix, "data/logs").unwrap();
    /// assert_eq!(base.join_path(&tail).to_string(), "/srv/data/logs");
    /// ```
    #[must_use]
    pub fn join_path(&self, other: &Self) -> Self {
        let mut accumulator = Accumulator::seeded_from(self);
        accumulator.push(other);
        accumulator.finish(self.platform)
    }

    /// Joins a relative fragment onto this path, forbidding escape.
    ///
    /// The fragment must be unanchored. Its `..` tokens may only cancel
    /// segments the fragment itself contributed; one that would climb
    /// into the base fails the whole operation, so a successful result
    /// always stays inside the base.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AnchoredFragment`] for a rooted or drive-carrying
    /// fragment, [`Error::EscapesBase`] when a `..` token would climb out
    /// of the base, or a parse error if the fragment fails the grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Platform, PurePath};
    ///
    /// let base = PurePath::parse(Platform::Posix, "/srv/data").unwrap();
    ///
    /// let ok = base.safe_join("reports/2024/summary.csv").unwrap();
    /// assert!(ok.to_string().starts_with("/srv/data/"));
    ///
    /// // Internal `..` is fine as long as it stays inside the fragment.
    /// let ok = base.safe_join("tmp/../final").unwrap();
    /// assert_eq!(ok.to_string(), "/srv/data/final");
    ///
    /// assert!(base.safe_join("../escape").is_err());
    /// assert!(base.safe_join("/etc/passwd").is_err());
    /// ```
    pub fn safe_join(&self, fragment: &str) -> Result<Self> {
        let parsed = Grammar::new(self.platform).parse(fragment)?;
        if !parsed.drive.is_empty() || !parsed.root.is_empty() {
            return Err(Error::AnchoredFragment {
                fragment: fragment.to_string(),
            });
        }

        let mut stack = self.relative_parts().to_vec();
        let floor = stack.len();
        for segment in parsed.relative_parts() {
            if segment == ".." {
                if stack.len() == floor {
                    return Err(Error::EscapesBase {
                        base: self.to_string(),
                        fragment: fragment.to_string(),
                    });
                }
                stack.pop();
            } else {
                stack.push(segment.clone());
            }
        }

        Ok(Self::rebuild(self.platform, &self.drive, &self.root, &stack))
    }

    /// Joins a relative fragment onto this path, returning `None` when
    /// the join is rejected for any reason.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Platform, PurePath};
    ///
    /// let base = PurePath::parse(Platform::Posix, "/srv/data").unwrap();
    /// assert!(base.try_safe_join("ok").is_some());
    /// assert!(base.try_safe_join("../escape").is_none());
    /// ```
    #[must_use]
    pub fn try_safe_join(&self, fragment: &str) -> Option<Self> {
        self.safe_join(fragment).ok()
    }
}
