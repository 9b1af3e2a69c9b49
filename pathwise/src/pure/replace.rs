//! Targeted component replacement.
//!
//! Each `with_*` operation validates that the supplied replacement
//! decomposes into nothing beyond the targeted component, then returns a
//! new value with exactly that component substituted and every other
//! component preserved byte for byte.

use crate::error::{Error, Result};
use crate::grammar::{Components, Grammar};
use crate::pure::PurePath;

impl PurePath {
    /// Returns a copy with the dirname replaced.
    ///
    /// The replacement may span several segments (`a/b`) but must not
    /// carry a drive or root. An empty or `.` replacement clears the
    /// dirname.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentViolation`] for an anchored replacement,
    /// or a parse error if the replacement fails the grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Platform, PurePath};
    ///
    /// let path = PurePath::parse(Platform::Posix, "/srv/old/file.txt").unwrap();
    /// let moved = path.with_dirname("new/place").unwrap();
    /// assert_eq!(moved.to_string(), "/new/place/file.txt");
    ///
    /// assert!(path.with_dirname("/rooted").is_err());
    /// ```
    pub fn with_dirname(&self, replacement: &str) -> Result<Self> {
        let parsed = Grammar::new(self.platform).parse(replacement)?;
        if !parsed.drive.is_empty() || !parsed.root.is_empty() {
            return Err(Error::ComponentViolation {
                operation: "with_dirname",
                replacement: replacement.to_string(),
                reason: "replacement must not carry a drive or root".to_string(),
            });
        }
        let dirname = parsed
            .relative_parts()
            .join(self.platform.separator_str());
        Ok(Self::from_components(
            self.platform,
            Components {
                drive: self.drive.clone(),
                root: self.root.clone(),
                dirname,
                basename: self.basename.clone(),
                extension: self.extension.clone(),
            },
        ))
    }

    /// Returns a copy with the basename replaced, keeping the extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentViolation`] if the replacement carries
    /// anything besides a bare basename: a drive, root or directory text,
    /// an extension of its own (use [`PurePath::with_filename`]), or a
    /// traversal token.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Platform, PurePath};
    ///
    /// let path = PurePath::parse(Platform::Posix, "/srv/report.txt").unwrap();
    /// let renamed = path.with_basename("summary").unwrap();
    /// assert_eq!(renamed.to_string(), "/srv/summary.txt");
    ///
    /// assert!(path.with_basename("summary.csv").is_err());
    /// assert!(path.with_basename("a/b").is_err());
    /// ```
    pub fn with_basename(&self, replacement: &str) -> Result<Self> {
        let parsed = self.parse_filename_replacement("with_basename", replacement)?;
        if !parsed.extension.is_empty() {
            return Err(Error::ComponentViolation {
                operation: "with_basename",
                replacement: replacement.to_string(),
                reason: "replacement carries an extension; use with_filename".to_string(),
            });
        }
        Ok(Self::from_components(
            self.platform,
            Components {
                drive: self.drive.clone(),
                root: self.root.clone(),
                dirname: self.dirname.clone(),
                basename: parsed.basename,
                extension: self.extension.clone(),
            },
        ))
    }

    /// Returns a copy with the whole filename (basename plus extension)
    /// replaced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentViolation`] if the replacement carries a
    /// drive, root or directory text, or is empty or a traversal token.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Platform, PurePath};
    ///
    /// let path = PurePath::parse(Platform::Posix, "/srv/report.txt").unwrap();
    /// let swapped = path.with_filename("summary.csv").unwrap();
    /// assert_eq!(swapped.basename(), "summary");
    /// assert_eq!(swapped.extension(), ".csv");
    /// ```
    pub fn with_filename(&self, replacement: &str) -> Result<Self> {
        let parsed = self.parse_filename_replacement("with_filename", replacement)?;
        Ok(Self::from_components(
            self.platform,
            Components {
                drive: self.drive.clone(),
                root: self.root.clone(),
                dirname: self.dirname.clone(),
                basename: parsed.basename,
                extension: parsed.extension,
            },
        ))
    }

    /// Returns a copy with the extension replaced.
    ///
    /// The replacement may be given with or without its leading dot; an
    /// empty replacement removes the extension. The path must have a real
    /// basename to attach to.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentViolation`] if the replacement contains
    /// a separator, a dot of its own, or a reserved character, or if this
    /// path has no filename.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Platform, PurePath};
    ///
    /// let path = PurePath::parse(Platform::Posix, "/srv/report.txt").unwrap();
    /// assert_eq!(path.with_extension("csv").unwrap().to_string(), "/srv/report.csv");
    /// assert_eq!(path.with_extension(".csv").unwrap().to_string(), "/srv/report.csv");
    /// assert_eq!(path.with_extension("").unwrap().to_string(), "/srv/report");
    ///
    /// assert!(path.with_extension("tar.gz").is_err());
    /// let root = PurePath::parse(Platform::Posix, "/").unwrap();
    /// assert!(root.with_extension("txt").is_err());
    /// ```
    pub fn with_extension(&self, replacement: &str) -> Result<Self> {
        let violation = |reason: &str| Error::ComponentViolation {
            operation: "with_extension",
            replacement: replacement.to_string(),
            reason: reason.to_string(),
        };

        if self.basename.is_empty() || self.basename == ".." {
            return Err(violation("path has no filename to attach an extension to"));
        }

        let extension = if replacement.is_empty() {
            String::new()
        } else {
            if replacement.chars().any(|c| self.platform.is_separator(c)) {
                return Err(violation("extension must not contain a separator"));
            }
            let body = replacement.strip_prefix('.').unwrap_or(replacement);
            if body.is_empty() {
                return Err(violation("extension has no characters after the dot"));
            }
            if body.contains('.') {
                return Err(violation("extension must not contain a dot"));
            }
            let reserved = self.platform.reserved_characters();
            if body.chars().any(|c| reserved.contains(&c)) {
                return Err(violation("extension contains a reserved character"));
            }
            format!(".{body}")
        };

        Ok(Self::from_components(
            self.platform,
            Components {
                drive: self.drive.clone(),
                root: self.root.clone(),
                dirname: self.dirname.clone(),
                basename: self.basename.clone(),
                extension,
            },
        ))
    }

    /// Parses and validates a replacement that must be a bare filename.
    fn parse_filename_replacement(
        &self,
        operation: &'static str,
        replacement: &str,
    ) -> Result<Self> {
        let violation = |reason: &str| Error::ComponentViolation {
            operation,
            replacement: replacement.to_string(),
            reason: reason.to_string(),
        };

        let parsed = Grammar::new(self.platform).parse(replacement)?;
        if !parsed.drive.is_empty() || !parsed.root.is_empty() {
            return Err(violation("replacement must not carry a drive or root"));
        }
        if !parsed.dirname.is_empty() {
            return Err(violation("replacement must not carry directory text"));
        }
        if parsed.basename.is_empty() {
            return Err(violation("replacement names no file"));
        }
        if parsed.basename == ".." {
            return Err(violation("replacement must not be a traversal token"));
        }
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;

    fn posix(s: &str) -> PurePath {
        PurePath::parse(Platform::Posix, s).unwrap()
    }

    fn windows(s: &str) -> PurePath {
        PurePath::parse(Platform::Windows, s).unwrap()
    }

    #[test]
    fn test_with_dirname_multi_segment() {
        let moved = posix("/srv/old/file.txt").with_dirname("a/b/c").unwrap();
        assert_eq!(moved.to_string(), "/a/b/c/file.txt");
        assert_eq!(moved.basename(), "file");
        assert_eq!(moved.extension(), ".txt");
    }

    #[test]
    fn test_with_dirname_clears_on_empty() {
        let flat = posix("/srv/old/file.txt").with_dirname("").unwrap();
        assert_eq!(flat.to_string(), "/file.txt");
        let flat = posix("a/b").with_dirname(".").unwrap();
        assert_eq!(flat.to_string(), "b");
    }

    #[test]
    fn test_with_dirname_rejects_anchor() {
        assert!(posix("/srv/f").with_dirname("/abs").is_err());
        assert!(windows(r"C:\f").with_dirname(r"D:x").is_err());
        assert!(windows(r"C:\f").with_dirname(r"\rooted").is_err());
    }

    #[test]
    fn test_with_dirname_preserves_other_components() {
        let moved = windows(r"C:\old\f.txt").with_dirname("new").unwrap();
        assert_eq!(moved.drive(), "C:");
        assert_eq!(moved.root(), "\\");
        assert_eq!(moved.dirname(), "new");
        assert_eq!(moved.filename(), "f.txt");
    }

    #[test]
    fn test_with_basename_keeps_extension() {
        let renamed = posix("/srv/report.txt").with_basename("summary").unwrap();
        assert_eq!(renamed.to_string(), "/srv/summary.txt");
    }

    #[test]
    fn test_with_basename_accepts_dotfile() {
        let renamed = posix("config").with_basename(".bashrc").unwrap();
        assert_eq!(renamed.basename(), ".bashrc");
    }

    #[test]
    fn test_with_basename_rejections() {
        let path = posix("/srv/report.txt");
        assert!(path.with_basename("summary.csv").is_err());
        assert!(path.with_basename("a/b").is_err());
        assert!(path.with_basename("/x").is_err());
        assert!(path.with_basename("").is_err());
        assert!(path.with_basename("..").is_err());
    }

    #[test]
    fn test_with_filename_replaces_both() {
        let swapped = posix("/srv/report.txt").with_filename("data.tar.gz").unwrap();
        assert_eq!(swapped.basename(), "data.tar");
        assert_eq!(swapped.extension(), ".gz");
        assert_eq!(swapped.dirname(), "srv");
    }

    #[test]
    fn test_with_filename_rejections() {
        let path = posix("/srv/report.txt");
        assert!(path.with_filename("a/b.txt").is_err());
        assert!(path.with_filename("").is_err());
        assert!(path.with_filename("..").is_err());
    }

    #[test]
    fn test_with_extension_forms() {
        let path = posix("/srv/report.txt");
        assert_eq!(path.with_extension("csv").unwrap().extension(), ".csv");
        assert_eq!(path.with_extension(".csv").unwrap().extension(), ".csv");
        assert_eq!(path.with_extension("").unwrap().extension(), "");
        assert_eq!(path.with_extension("").unwrap().to_string(), "/srv/report");
    }

    #[test]
    fn test_with_extension_rejections() {
        let path = posix("/srv/report.txt");
        assert!(path.with_extension("tar.gz").is_err());
        assert!(path.with_extension("a/b").is_err());
        assert!(path.with_extension(".").is_err());
        assert!(windows(r"C:\report.txt").with_extension("t*t").is_err());
    }

    #[test]
    fn test_with_extension_requires_filename() {
        assert!(posix("/").with_extension("txt").is_err());
        assert!(posix(".").with_extension("txt").is_err());
        assert!(posix("..").with_extension("txt").is_err());
    }

    #[test]
    fn test_with_extension_on_dotfile() {
        let path = posix(".bashrc").with_extension("bak").unwrap();
        assert_eq!(path.basename(), ".bashrc");
        assert_eq!(path.extension(), ".bak");
        assert_eq!(path.to_string(), ".bashrc.bak");
    }

    #[test]
    fn test_replacements_do_not_mutate_original() {
        let path = posix("/srv/report.txt");
        let _ = path.with_extension("csv").unwrap();
        let _ = path.with_basename("x").unwrap();
        assert_eq!(path.to_string(), "/srv/report.txt");
    }
}
