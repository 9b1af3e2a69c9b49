//! The path grammar: raw strings to path components.
//!
//! A [`Grammar`] consumes a raw path string left to right, stripping one
//! component at a time: drive, root, dirname, basename, extension. Both
//! `/` and the platform's native separator are accepted on input; output
//! components always carry the native separator.
//!
//! The grammar rejects reserved characters at parse time. Reserved device
//! names are deliberately not checked here; they are a property of the
//! finished value (see [`PurePath::is_reserved`]).
//!
//! [`PurePath::is_reserved`]: crate::PurePath::is_reserved

use crate::error::{Error, Result};
use crate::platform::Platform;
use crate::pure::PurePath;

/// The five raw components produced by a parse.
///
/// Empty strings mean "absent". The dirname of the current-directory
/// value is the literal `.` token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Components {
    pub(crate) drive: String,
    pub(crate) root: String,
    pub(crate) dirname: String,
    pub(crate) basename: String,
    pub(crate) extension: String,
}

impl Components {
    /// The current-directory value: `dirname = "."`, everything else empty.
    pub(crate) fn current_dir() -> Self {
        Self {
            dirname: ".".to_string(),
            ..Self::default()
        }
    }
}

/// Path parser for one platform.
///
/// # Examples
///
/// ```
/// use pathwise::{Grammar, Platform};
///
/// let grammar = Grammar::new(Platform::Posix);
/// let path = grammar.parse("/home/dan/notes.txt").unwrap();
/// assert_eq!(path.root(), "/");
/// assert_eq!(path.dirname(), "home/dan");
/// assert_eq!(path.basename(), "notes");
/// assert_eq!(path.extension(), ".txt");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Grammar {
    platform: Platform,
}

impl Grammar {
    /// Creates a grammar for the given platform.
    #[must_use]
    pub const fn new(platform: Platform) -> Self {
        Self { platform }
    }

    /// Returns the platform this grammar parses for.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Parses a raw string into an immutable path value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservedCharacter`] if the input contains a
    /// character the platform forbids, or [`Error::MalformedDrive`] if a
    /// UNC prefix is missing its host or share name.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Grammar, Platform};
    ///
    /// let grammar = Grammar::new(Platform::Windows);
    ///
    /// let path = grammar.parse(r"C:\Users\nemec").unwrap();
    /// assert_eq!(path.drive(), "C:");
    /// assert_eq!(path.root(), "\\");
    ///
    /// assert!(grammar.parse("tmp/a|b").is_err());
    /// ```
    pub fn parse(&self, raw: &str) -> Result<PurePath> {
        let components = self.components(raw)?;
        Ok(PurePath::from_components(self.platform, components))
    }

    /// Parses a raw string, returning `None` instead of an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Grammar, Platform};
    ///
    /// let grammar = Grammar::new(Platform::Windows);
    /// assert!(grammar.try_parse(r"C:\ok").is_some());
    /// assert!(grammar.try_parse("not|ok").is_none());
    /// ```
    #[must_use]
    pub fn try_parse(&self, raw: &str) -> Option<PurePath> {
        self.parse(raw).ok()
    }

    /// Runs the full component pipeline over a raw string.
    pub(crate) fn components(&self, raw: &str) -> Result<Components> {
        if raw.contains('\0') {
            return Err(Error::ReservedCharacter {
                path: raw.to_string(),
                character: '\0',
            });
        }

        let native = self.normalize_separators(raw);
        let (drive, rest) = self.parse_drive(&native, raw)?;

        // A drive letter legitimately contains a colon; everything else,
        // UNC host and share names included, is subject to the platform's
        // reserved set.
        let reserved = self.platform.reserved_characters();
        let checked = drive.strip_prefix("\\\\").into_iter().chain([rest]);
        for section in checked {
            if let Some(character) = section.chars().find(|c| reserved.contains(c)) {
                return Err(Error::ReservedCharacter {
                    path: raw.to_string(),
                    character,
                });
            }
        }

        let (root, rest) = self.parse_root(&drive, rest);
        let (dirname, filename) = self.parse_dirname(rest);

        if drive.is_empty() && root.is_empty() && dirname.is_empty() && filename.is_empty() {
            return Ok(Components::current_dir());
        }

        let (basename, rest) = self.parse_basename(filename);
        let extension = self.parse_extension(rest);

        Ok(Components {
            drive,
            root,
            dirname,
            basename,
            extension,
        })
    }

    /// Splits a pattern string into anchor and segments without applying
    /// the reserved-character check (patterns contain `*` and `?`).
    pub(crate) fn split_for_pattern(&self, raw: &str) -> Result<(String, String, Vec<String>)> {
        let native = self.normalize_separators(raw);
        let (drive, rest) = self.parse_drive(&native, raw)?;
        let (root, rest) = self.parse_root(&drive, rest);
        let segments = rest
            .split(self.platform.separator())
            .filter(|s| !s.is_empty() && *s != ".")
            .map(str::to_string)
            .collect();
        Ok((drive, root, segments))
    }

    /// Splits a filename into basename and extension in one step.
    pub(crate) fn split_filename(&self, filename: &str) -> (String, String) {
        let (basename, rest) = self.parse_basename(filename);
        (basename, self.parse_extension(rest))
    }

    /// Rewrites accepted separators to the platform's native one.
    pub(crate) fn normalize_separators(&self, raw: &str) -> String {
        match self.platform {
            Platform::Posix => raw.to_string(),
            Platform::Windows => raw.replace('/', "\\"),
        }
    }

    /// Strips a leading drive specifier (`X:` or `\\host\share`).
    ///
    /// `path` must already be in native-separator form; `original` is the
    /// untouched input, used for error reporting.
    fn parse_drive<'a>(&self, path: &'a str, original: &str) -> Result<(String, &'a str)> {
        if !self.platform.supports_drives() {
            return Ok((String::new(), path));
        }

        if let Some(body) = path.strip_prefix("\\\\") {
            let Some(host_end) = body.find('\\') else {
                return Err(Error::MalformedDrive {
                    path: original.to_string(),
                    reason: "UNC path is missing a share name".to_string(),
                });
            };
            if host_end == 0 {
                return Err(Error::MalformedDrive {
                    path: original.to_string(),
                    reason: "UNC path is missing a host name".to_string(),
                });
            }
            let after_host = &body[host_end + 1..];
            let share_end = after_host.find('\\').unwrap_or(after_host.len());
            if share_end == 0 {
                return Err(Error::MalformedDrive {
                    path: original.to_string(),
                    reason: "UNC path is missing a share name".to_string(),
                });
            }
            let drive_len = 2 + host_end + 1 + share_end;
            return Ok((path[..drive_len].to_string(), &path[drive_len..]));
        }

        let bytes = path.as_bytes();
        if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
            return Ok((path[..2].to_string(), &path[2..]));
        }

        Ok((String::new(), path))
    }

    /// Strips the root separator, if rooted.
    ///
    /// POSIX preserves a doubled leading separator as a distinct root;
    /// three or more collapse to one. A UNC drive always implies a root.
    fn parse_root<'a>(&self, drive: &str, path: &'a str) -> (String, &'a str) {
        let sep = self.platform.separator();
        let stripped = path.trim_start_matches(sep);
        let leading = path.len() - stripped.len();

        let root = match self.platform {
            Platform::Windows => {
                if drive.starts_with("\\\\") || leading > 0 {
                    "\\"
                } else {
                    ""
                }
            }
            Platform::Posix => match leading {
                0 => "",
                1 => "/",
                2 => "//",
                _ => "/",
            },
        };

        (root.to_string(), stripped)
    }

    /// Splits the remainder into directory text and a trailing filename.
    ///
    /// Separator runs and `.` segments disappear here; `..` segments are
    /// kept verbatim.
    fn parse_dirname<'a>(&self, path: &'a str) -> (String, &'a str) {
        let mut segments: Vec<&str> = path
            .split(self.platform.separator())
            .filter(|s| !s.is_empty() && *s != ".")
            .collect();
        let filename = segments.pop().unwrap_or("");
        (segments.join(self.platform.separator_str()), filename)
    }

    /// Splits the filename at the last meaningful dot.
    ///
    /// A `..` token and a pure dotfile (`.bashrc`) are kept whole, as is
    /// a name whose only dot is trailing (`archive.`).
    #[allow(clippy::unused_self)]
    fn parse_basename<'a>(&self, filename: &'a str) -> (String, &'a str) {
        if filename == ".." {
            return ("..".to_string(), "");
        }
        match filename.rfind('.') {
            Some(idx) if idx > 0 && idx < filename.len() - 1 => {
                (filename[..idx].to_string(), &filename[idx..])
            }
            _ => (filename.to_string(), ""),
        }
    }

    /// Consumes the remaining text as the extension, dot included.
    #[allow(clippy::unused_self)]
    fn parse_extension(&self, rest: &str) -> String {
        rest.to_string()
    }
}
