//! The immutable pure path value.
//!
//! A [`PurePath`] holds the five normalized components produced by the
//! grammar (drive, root, dirname, basename, extension) together with its
//! platform tag. Values are immutable; every transformation elsewhere in
//! the crate returns a new value. The only mutable state is a pair of
//! write-once caches for derived projections (the parts sequence and the
//! case-folded canonical form), both pure functions of the immutable
//! fields, so racing first computations are benign.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;
use crate::grammar::{Components, Grammar};
use crate::platform::Platform;

/// An immutable, platform-tagged path value with no filesystem ties.
///
/// # Examples
///
/// ```
/// use pathwise::{Platform, PurePath};
///
/// let path = PurePath::parse(Platform::Posix, "/home/dan/notes.txt").unwrap();
/// assert_eq!(path.root(), "/");
/// assert_eq!(path.dirname(), "home/dan");
/// assert_eq!(path.basename(), "notes");
/// assert_eq!(path.extension(), ".txt");
/// assert_eq!(path.filename(), "notes.txt");
/// assert_eq!(path.anchor(), "/");
/// assert!(path.is_absolute());
/// assert_eq!(path.to_string(), "/home/dan/notes.txt");
/// ```
#[derive(Debug, Clone)]
pub struct PurePath {
    pub(crate) platform: Platform,
    pub(crate) drive: String,
    pub(crate) root: String,
    pub(crate) dirname: String,
    pub(crate) basename: String,
    pub(crate) extension: String,
    parts: OnceLock<Vec<String>>,
    folded: OnceLock<String>,
}

impl PurePath {
    /// Parses a raw string into a path value for the given platform.
    ///
    /// # Errors
    ///
    /// Returns a parse error for reserved characters or a malformed
    /// drive specifier; see [`Grammar::parse`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Platform, PurePath};
    ///
    /// let path = PurePath::parse(Platform::Windows, r"\\host\share\docs").unwrap();
    /// assert_eq!(path.drive(), r"\\host\share");
    /// ```
    pub fn parse(platform: Platform, raw: &str) -> Result<Self> {
        Grammar::new(platform).parse(raw)
    }

    /// Parses a raw string, returning `None` instead of an error.
    #[must_use]
    pub fn try_parse(platform: Platform, raw: &str) -> Option<Self> {
        Grammar::new(platform).try_parse(raw)
    }

    /// Returns the current-directory value (`.`).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Platform, PurePath};
    ///
    /// let here = PurePath::current_dir(Platform::Posix);
    /// assert_eq!(here.to_string(), ".");
    /// assert_eq!(here.dirname(), ".");
    /// assert!(!here.is_absolute());
    /// ```
    #[must_use]
    pub fn current_dir(platform: Platform) -> Self {
        Self::from_components(platform, Components::current_dir())
    }

    /// Builds a value from already-parsed components.
    pub(crate) fn from_components(platform: Platform, components: Components) -> Self {
        Self {
            platform,
            drive: components.drive,
            root: components.root,
            dirname: components.dirname,
            basename: components.basename,
            extension: components.extension,
            parts: OnceLock::new(),
            folded: OnceLock::new(),
        }
    }

    /// Rebuilds a value from an anchor and a list of relative segments.
    ///
    /// The final segment becomes the filename and is re-split into
    /// basename and extension. Callers never pass a `.` segment.
    pub(crate) fn rebuild(
        platform: Platform,
        drive: &str,
        root: &str,
        segments: &[String],
    ) -> Self {
        let grammar = Grammar::new(platform);
        let components = match segments.split_last() {
            None => {
                if drive.is_empty() && root.is_empty() {
                    Components::current_dir()
                } else {
                    Components {
                        drive: drive.to_string(),
                        root: root.to_string(),
                        ..Components::default()
                    }
                }
            }
            Some((filename, dirs)) => {
                let (basename, extension) = grammar.split_filename(filename);
                Components {
                    drive: drive.to_string(),
                    root: root.to_string(),
                    dirname: dirs.join(platform.separator_str()),
                    basename,
                    extension,
                }
            }
        };
        Self::from_components(platform, components)
    }

    /// Returns the platform this value was parsed for.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Returns the drive component (`C:` or `\\host\share`), empty on
    /// POSIX and on driveless Windows paths.
    #[must_use]
    pub fn drive(&self) -> &str {
        &self.drive
    }

    /// Returns the root separator string, empty for relative paths.
    ///
    /// On POSIX this is `/` or the preserved double-slash root `//`.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Returns the directory text between anchor and filename.
    #[must_use]
    pub fn dirname(&self) -> &str {
        &self.dirname
    }

    /// Returns the filename minus its final extension.
    #[must_use]
    pub fn basename(&self) -> &str {
        &self.basename
    }

    /// Returns the final extension including its dot, or the empty string.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Returns the anchor: drive and root concatenated.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Platform, PurePath};
    ///
    /// let path = PurePath::parse(Platform::Windows, r"C:\tmp").unwrap();
    /// assert_eq!(path.anchor(), "C:\\");
    /// ```
    #[must_use]
    pub fn anchor(&self) -> String {
        let mut out = String::with_capacity(self.drive.len() + self.root.len());
        out.push_str(&self.drive);
        out.push_str(&self.root);
        out
    }

    /// Returns the full filename: basename plus extension.
    #[must_use]
    pub fn filename(&self) -> String {
        let mut out = String::with_capacity(self.basename.len() + self.extension.len());
        out.push_str(&self.basename);
        out.push_str(&self.extension);
        out
    }

    /// Returns `true` if the path is rooted.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        !self.root.is_empty()
    }

    /// Returns `true` if the filename is a reserved device name on this
    /// value's platform (`CON`, `COM1`, `nul.txt`, ...).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Platform, PurePath};
    ///
    /// let path = PurePath::parse(Platform::Windows, r"C:\logs\CON.txt").unwrap();
    /// assert!(path.is_reserved());
    ///
    /// let path = PurePath::parse(Platform::Posix, "CON").unwrap();
    /// assert!(!path.is_reserved());
    /// ```
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        self.platform.is_reserved_name(&self.filename())
    }

    /// Returns the parts sequence: the anchor (when present), each
    /// dirname segment, then the filename.
    ///
    /// The sequence is computed once per value and cached.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Platform, PurePath};
    ///
    /// let path = PurePath::parse(Platform::Windows, r"C:\Users\nemec\tmp").unwrap();
    /// assert_eq!(path.parts(), &["C:\\", "Users", "nemec", "tmp"]);
    /// ```
    #[must_use]
    pub fn parts(&self) -> &[String] {
        self.parts.get_or_init(|| {
            let mut parts = Vec::new();
            let anchor = self.anchor();
            if !anchor.is_empty() {
                parts.push(anchor);
            }
            parts.extend(
                self.dirname
                    .split(self.platform.separator())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
            );
            let filename = self.filename();
            if !filename.is_empty() {
                parts.push(filename);
            }
            parts
        })
    }

    /// Returns the parts after the anchor, with the current-directory
    /// token stripped.
    pub(crate) fn relative_parts(&self) -> &[String] {
        let parts = self.parts();
        let rest = if self.anchor().is_empty() {
            parts
        } else {
            &parts[1..]
        };
        if rest.first().map(String::as_str) == Some(".") {
            &rest[1..]
        } else {
            rest
        }
    }

    /// Returns every extension of the filename in order, outermost last.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Platform, PurePath};
    ///
    /// let path = PurePath::parse(Platform::Posix, "file.txt.tar.gz").unwrap();
    /// assert_eq!(path.suffixes(), vec![".txt", ".tar", ".gz"]);
    /// assert_eq!(path.extension(), ".gz");
    ///
    /// let dotfile = PurePath::parse(Platform::Posix, ".bashrc").unwrap();
    /// assert!(dotfile.suffixes().is_empty());
    /// ```
    #[must_use]
    pub fn suffixes(&self) -> Vec<String> {
        let name = self.filename();
        if name.is_empty() || name == ".." {
            return Vec::new();
        }
        let body = name.strip_prefix('.').unwrap_or(&name);
        body.split('.')
            .skip(1)
            .filter(|chunk| !chunk.is_empty())
            .map(|chunk| format!(".{chunk}"))
            .collect()
    }

    /// Returns a case-normalized copy of this value.
    ///
    /// On Windows all components are lowercased; on POSIX the value is
    /// returned unchanged. The operation is idempotent.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Platform, PurePath};
    ///
    /// let path = PurePath::parse(Platform::Windows, r"C:\Users\NEMEC").unwrap();
    /// assert_eq!(path.normalize_case().to_string(), r"c:\users\nemec");
    /// ```
    #[must_use]
    pub fn normalize_case(&self) -> Self {
        if !self.platform.case_insensitive() {
            return self.clone();
        }
        Self::from_components(
            self.platform,
            Components {
                drive: self.platform.fold_case(&self.drive).into_owned(),
                root: self.root.clone(),
                dirname: self.platform.fold_case(&self.dirname).into_owned(),
                basename: self.platform.fold_case(&self.basename).into_owned(),
                extension: self.platform.fold_case(&self.extension).into_owned(),
            },
        )
    }

    /// Returns the selected components concatenated in canonical order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{ComponentSelection, Platform, PurePath};
    ///
    /// let path = PurePath::parse(Platform::Posix, "/var/log/syslog").unwrap();
    /// assert_eq!(path.component_string(ComponentSelection::ANCHOR), "/");
    /// assert_eq!(
    ///     path.component_string(ComponentSelection::ALL),
    ///     "/var/log/syslog"
    /// );
    /// assert_eq!(
    ///     path.component_string(ComponentSelection::FILENAME),
    ///     "syslog"
    /// );
    /// ```
    #[must_use]
    pub fn component_string(&self, selection: ComponentSelection) -> String {
        let mut out = String::new();
        if selection.drive {
            out.push_str(&self.drive);
        }
        if selection.root {
            out.push_str(&self.root);
        }
        if selection.dirname {
            out.push_str(&self.dirname);
        }
        if selection.filename {
            let filename = self.filename();
            if !filename.is_empty() {
                if selection.dirname && !self.dirname.is_empty() {
                    out.push(self.platform.separator());
                }
                out.push_str(&filename);
            }
        }
        out
    }

    /// Returns the case-folded canonical string used for equality and
    /// hashing, computing and caching it on first use.
    pub(crate) fn folded(&self) -> &str {
        self.folded
            .get_or_init(|| self.platform.fold_case(&self.to_string()).into_owned())
    }
}

impl fmt::Display for PurePath {
    /// Renders the canonical, normalized, native-separator form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.drive, self.root)?;
        f.write_str(&self.dirname)?;
        let filename = self.filename();
        if !filename.is_empty() {
            if !self.dirname.is_empty() {
                write!(f, "{}", self.platform.separator())?;
            }
            f.write_str(&filename)?;
        }
        Ok(())
    }
}

impl PartialEq for PurePath {
    fn eq(&self, other: &Self) -> bool {
        self.platform == other.platform && self.folded() == other.folded()
    }
}

impl Eq for PurePath {}

impl Hash for PurePath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.platform.hash(state);
        self.folded().hash(state);
    }
}

impl PartialOrd for PurePath {
    /// Orders by strict ancestry: `a < b` iff `a`'s parts are a strict
    /// component-wise prefix of `b`'s under the platform case rule.
    /// Unrelated paths (and paths of different platforms) are
    /// incomparable.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Platform, PurePath};
    ///
    /// let parent = PurePath::parse(Platform::Posix, "/a/b").unwrap();
    /// let child = PurePath::parse(Platform::Posix, "/a/b/c").unwrap();
    /// let sibling = PurePath::parse(Platform::Posix, "/a/x").unwrap();
    ///
    /// assert!(parent < child);
    /// assert!(!(child < parent));
    /// assert_eq!(parent.partial_cmp(&sibling), None);
    /// ```
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.platform != other.platform {
            return None;
        }
        if self == other {
            return Some(Ordering::Equal);
        }
        let a = self.parts();
        let b = other.parts();
        let prefix = |shorter: &[String], longer: &[String]| {
            shorter.len() < longer.len()
                && shorter
                    .iter()
                    .zip(longer.iter())
                    .all(|(x, y)| self.platform.compare(x, y))
        };
        if prefix(a, b) {
            Some(Ordering::Less)
        } else if prefix(b, a) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

/// Serialized form of a path value: platform tag plus canonical string.
#[derive(Serialize, Deserialize)]
struct PurePathRepr {
    platform: Platform,
    path: String,
}

impl Serialize for PurePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        PurePathRepr {
            platform: self.platform,
            path: self.to_string(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PurePath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let repr = PurePathRepr::deserialize(deserializer)?;
        Self::parse(repr.platform, &repr.path).map_err(D::Error::custom)
    }
}

/// A subset of path components for [`PurePath::component_string`].
///
/// # Examples
///
/// ```
/// use pathwise::ComponentSelection;
///
/// let anchor = ComponentSelection::ANCHOR;
/// assert!(anchor.drive && anchor.root);
/// assert!(!anchor.dirname && !anchor.filename);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComponentSelection {
    /// Include the drive.
    pub drive: bool,
    /// Include the root.
    pub root: bool,
    /// Include the dirname.
    pub dirname: bool,
    /// Include the filename (basename plus extension).
    pub filename: bool,
}

impl ComponentSelection {
    /// Drive only.
    pub const DRIVE: Self = Self {
        drive: true,
        root: false,
        dirname: false,
        filename: false,
    };

    /// Root only.
    pub const ROOT: Self = Self {
        drive: false,
        root: true,
        dirname: false,
        filename: false,
    };

    /// Dirname only.
    pub const DIRNAME: Self = Self {
        drive: false,
        root: false,
        dirname: true,
        filename: false,
    };

    /// Filename only.
    pub const FILENAME: Self = Self {
        drive: false,
        root: false,
        dirname: false,
        filename: true,
    };

    /// Drive and root.
    pub const ANCHOR: Self = Self {
        drive: true,
        root: true,
        dirname: false,
        filename: false,
    };

    /// Everything: the canonical string form.
    pub const ALL: Self = Self {
        drive: true,
        root: true,
        dirname: true,
        filename: true,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn posix(s: &str) -> PurePath {
        PurePath::parse(Platform::Posix, s).unwrap()
    }

    fn windows(s: &str) -> PurePath {
        PurePath::parse(Platform::Windows, s).unwrap()
    }

    fn hash_of(p: &PurePath) -> u64 {
        let mut hasher = DefaultHasher::new();
        p.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_round_trip_posix() {
        for raw in [
            "/home/dan/notes.txt",
            "a/b/c",
            "/",
            "//mount/data",
            ".",
            "..",
            "../a",
            ".bashrc",
            "/a/b.tar.gz",
        ] {
            let path = posix(raw);
            let rendered = path.to_string();
            let reparsed = posix(&rendered);
            assert_eq!(path, reparsed, "{raw}");
            assert_eq!(rendered, reparsed.to_string(), "{raw}");
        }
    }

    #[test]
    fn test_round_trip_windows() {
        for raw in [
            r"C:\Users\nemec",
            r"C:",
            r"C:tmp",
            r"\\host\share",
            r"\\host\share\docs\a.txt",
            r"relative\path",
            r"\rooted\no\drive",
        ] {
            let path = windows(raw);
            let rendered = path.to_string();
            let reparsed = windows(&rendered);
            assert_eq!(path, reparsed, "{raw}");
            assert_eq!(rendered, reparsed.to_string(), "{raw}");
        }
    }

    #[test]
    fn test_display_normalizes() {
        assert_eq!(posix("/a//b/./c").to_string(), "/a/b/c");
        assert_eq!(windows("C:/Users//nemec").to_string(), r"C:\Users\nemec");
    }

    #[test]
    fn test_anchor_identity() {
        for path in [
            posix("/a/b"),
            posix("a/b"),
            posix("//x/y"),
            windows(r"C:\a"),
            windows(r"C:a"),
            windows(r"\\h\s\x"),
        ] {
            assert_eq!(path.anchor(), format!("{}{}", path.drive(), path.root()));
        }
    }

    #[test]
    fn test_parts_posix() {
        assert_eq!(posix("/a/b/c.txt").parts(), &["/", "a", "b", "c.txt"]);
        assert_eq!(posix("a/b").parts(), &["a", "b"]);
        assert_eq!(posix("/").parts(), &["/"]);
        assert_eq!(posix(".").parts(), &["."]);
        assert_eq!(posix("//m/d").parts(), &["//", "m", "d"]);
    }

    #[test]
    fn test_parts_windows() {
        assert_eq!(
            windows(r"C:\Users\nemec\tmp").parts(),
            &["C:\\", "Users", "nemec", "tmp"]
        );
        assert_eq!(windows(r"C:tmp").parts(), &["C:", "tmp"]);
        assert_eq!(windows(r"\\h\s\docs").parts(), &[r"\\h\s\", "docs"]);
    }

    #[test]
    fn test_relative_parts() {
        assert_eq!(posix("/a/b").relative_parts(), &["a", "b"]);
        assert_eq!(posix("a/b").relative_parts(), &["a", "b"]);
        assert!(posix(".").relative_parts().is_empty());
        assert!(posix("/").relative_parts().is_empty());
    }

    #[test]
    fn test_case_rule_equality() {
        assert_eq!(windows("FOO"), windows("foo"));
        assert_ne!(posix("FOO"), posix("foo"));
        assert_eq!(posix("foo"), posix("foo"));
    }

    #[test]
    fn test_platforms_never_equal() {
        assert_ne!(posix("a"), PurePath::parse(Platform::Windows, "a").unwrap());
    }

    #[test]
    fn test_hash_follows_equality() {
        assert_eq!(hash_of(&windows("FOO")), hash_of(&windows("foo")));
        assert_ne!(hash_of(&posix("FOO")), hash_of(&posix("foo")));
    }

    #[test]
    fn test_ancestor_ordering() {
        let a = posix("/a/b");
        let b = posix("/a/b/c");
        assert!(a < b);
        assert!(b > a);
        assert!(!(b < a));
        assert!(!(a < a));
        assert!(a <= a);
        assert_eq!(posix("/a/b").partial_cmp(&posix("/a/x")), None);
    }

    #[test]
    fn test_ordering_respects_case_rule() {
        assert!(windows(r"C:\a") < windows(r"c:\A\b"));
        assert_eq!(posix("/A").partial_cmp(&posix("/a/b")), None);
    }

    #[test]
    fn test_extension_edges() {
        let dotfile = posix(".bashrc");
        assert_eq!(dotfile.basename(), ".bashrc");
        assert_eq!(dotfile.extension(), "");

        let tarball = posix("file.txt.tar.gz");
        assert_eq!(tarball.extension(), ".gz");
        assert_eq!(tarball.suffixes(), vec![".txt", ".tar", ".gz"]);
    }

    #[test]
    fn test_suffixes_empty_cases() {
        assert!(posix("..").suffixes().is_empty());
        assert!(posix("/").suffixes().is_empty());
        assert!(posix("plain").suffixes().is_empty());
    }

    #[test]
    fn test_normalize_case_idempotent() {
        let path = windows(r"C:\Users\NeMeC\File.TXT");
        let once = path.normalize_case();
        let twice = once.normalize_case();
        assert_eq!(once.to_string(), twice.to_string());
        assert_eq!(once, path);
    }

    #[test]
    fn test_normalize_case_posix_unchanged() {
        let path = posix("/A/B");
        assert_eq!(path.normalize_case().to_string(), "/A/B");
    }

    #[test]
    fn test_component_string() {
        let path = windows(r"C:\Users\nemec\file.txt");
        assert_eq!(path.component_string(ComponentSelection::DRIVE), "C:");
        assert_eq!(path.component_string(ComponentSelection::ROOT), "\\");
        assert_eq!(path.component_string(ComponentSelection::ANCHOR), "C:\\");
        assert_eq!(
            path.component_string(ComponentSelection::DIRNAME),
            r"Users\nemec"
        );
        assert_eq!(
            path.component_string(ComponentSelection::FILENAME),
            "file.txt"
        );
        assert_eq!(
            path.component_string(ComponentSelection::ALL),
            path.to_string()
        );
    }

    #[test]
    fn test_is_reserved() {
        assert!(windows(r"C:\logs\CON").is_reserved());
        assert!(windows("nul.txt").is_reserved());
        assert!(!windows(r"C:\logs\console.txt").is_reserved());
        assert!(!posix("CON").is_reserved());
    }

    #[test]
    fn test_serde_round_trip() {
        let path = windows(r"C:\Users\nemec");
        let json = serde_json::to_string(&path).unwrap();
        let back: PurePath = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
        assert_eq!(back.platform(), Platform::Windows);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let json = r#"{"platform":"windows","path":"a|b"}"#;
        assert!(serde_json::from_str::<PurePath>(json).is_err());
    }

    #[test]
    fn test_values_share_across_threads() {
        let path = std::sync::Arc::new(posix("/a/b/c"));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let p = std::sync::Arc::clone(&path);
                std::thread::spawn(move || p.parts().len())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 4);
        }
    }
}
