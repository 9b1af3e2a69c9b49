//! Ancestors and relative paths.
//!
//! [`PurePath::parents`] walks the ancestry lazily by rebuilding
//! decreasing-length prefixes of the parts sequence. For rooted paths the
//! walk stops before the bare anchor; for relative paths it stops at the
//! shortest non-empty prefix. [`PurePath::relative_to`] is the inverse of
//! joining: it strips an ancestor and returns the unconsumed suffix.

use crate::error::{Error, Result};
use crate::pure::PurePath;

/// Lazy iterator over a path's ancestors, most specific first.
///
/// Created by [`PurePath::parents`].
#[derive(Debug)]
pub struct Parents<'a> {
    path: &'a PurePath,
    next_len: usize,
    floor: usize,
}

impl Iterator for Parents<'_> {
    type Item = PurePath;

    fn next(&mut self) -> Option<PurePath> {
        if self.next_len < self.floor {
            return None;
        }
        let parts = self.path.parts();
        let prefix = &parts[..self.next_len];
        self.next_len -= 1;

        let segments = if self.path.anchor().is_empty() {
            prefix
        } else {
            &prefix[1..]
        };
        Some(PurePath::rebuild(
            self.path.platform,
            &self.path.drive,
            &self.path.root,
            segments,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.next_len + 1).saturating_sub(self.floor);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Parents<'_> {}

impl PurePath {
    /// Returns a lazy iterator over this path's ancestors, most specific
    /// first.
    ///
    /// The bare anchor is excluded for rooted paths; relative paths stop
    /// at their shortest non-empty prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Platform, PurePath};
    ///
    /// let path = PurePath::parse(Platform::Posix, "/a/b/c").unwrap();
    /// let ancestors: Vec<String> =
    ///     path.parents().map(|p| p.to_string()).collect();
    /// assert_eq!(ancestors, vec!["/a/b", "/a"]);
    ///
    /// let relative = PurePath::parse(Platform::Posix, "a/b/c").unwrap();
    /// let ancestors: Vec<String> =
    ///     relative.parents().map(|p| p.to_string()).collect();
    /// assert_eq!(ancestors, vec!["a/b", "a"]);
    /// ```
    #[must_use]
    pub fn parents(&self) -> Parents<'_> {
        let floor = if self.anchor().is_empty() { 1 } else { 2 };
        Parents {
            path: self,
            next_len: self.parts().len().saturating_sub(1),
            floor,
        }
    }

    /// Returns the immediate parent, or `None` at the top of the walk.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Platform, PurePath};
    ///
    /// let path = PurePath::parse(Platform::Windows, r"C:\Users\nemec\tmp").unwrap();
    /// let parent = path.parent().unwrap();
    /// assert_eq!(parent.dirname(), "Users");
    /// assert_eq!(parent.basename(), "nemec");
    ///
    /// let root = PurePath::parse(Platform::Posix, "/").unwrap();
    /// assert!(root.parent().is_none());
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.parents().next()
    }

    /// Returns this path's suffix relative to `parent`.
    ///
    /// Both paths must share drive and root (the drive compared under the
    /// platform case rule), and `parent`'s relative segments must be a
    /// prefix of this path's. A path relative to itself is the
    /// current-directory value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AnchorMismatch`] when drive or root differ, and
    /// [`Error::NotAncestor`] when the segment walk fails, including the
    /// case where `parent` names a sibling that is merely a string prefix
    /// (`/a/ab` is not an ancestor of `/a/abc`).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Platform, PurePath};
    ///
    /// let path = PurePath::parse(Platform::Posix, "/home/dan/src/lib.rs").unwrap();
    /// let base = PurePath::parse(Platform::Posix, "/home/dan").unwrap();
    ///
    /// let rel = path.relative_to(&base).unwrap();
    /// assert_eq!(rel.to_string(), "src/lib.rs");
    /// assert!(!rel.is_absolute());
    ///
    /// let other = PurePath::parse(Platform::Posix, "/opt").unwrap();
    /// assert!(path.relative_to(&other).is_err());
    /// ```
    pub fn relative_to(&self, parent: &Self) -> Result<Self> {
        let anchors_match = self.platform == parent.platform
            && self.platform.compare(&self.drive, &parent.drive)
            && self.root == parent.root;
        if !anchors_match {
            return Err(Error::AnchorMismatch {
                path: self.to_string(),
                other: parent.to_string(),
            });
        }

        let mine = self.relative_parts();
        let theirs = parent.relative_parts();
        let is_prefix = theirs.len() <= mine.len()
            && theirs
                .iter()
                .zip(mine.iter())
                .all(|(t, m)| self.platform.compare(t, m));
        if !is_prefix {
            return Err(Error::NotAncestor {
                path: self.to_string(),
                other: parent.to_string(),
            });
        }

        Ok(Self::rebuild(self.platform, "", "", &mine[theirs.len()..]))
    }

    /// Returns this path's suffix relative to `parent`, or `None` when
    /// `parent` is not an ancestor.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Platform, PurePath};
    ///
    /// let path = PurePath::parse(Platform::Posix, "/a/b/c").unwrap();
    /// let base = PurePath::parse(Platform::Posix, "/a").unwrap();
    /// assert!(path.try_relative_to(&base).is_some());
    ///
    /// let other = PurePath::parse(Platform::Posix, "/z").unwrap();
    /// assert!(path.try_relative_to(&other).is_none());
    /// ```
    #[must_use]
    pub fn try_relative_to(&self, parent: &Self) -> Option<Self> {
        self.relative_to(parent).ok()
    }
}
