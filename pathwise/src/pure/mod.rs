//! Pure path values and their algebra.
//!
//! This module provides [`PurePath`], an immutable, platform-tagged path
//! value parsed once into five components, together with the operations
//! defined over it:
//!
//! - joining ([`PurePath::join`], [`PurePath::join_all`],
//!   [`PurePath::safe_join`])
//! - ancestry ([`PurePath::parents`], [`PurePath::relative_to`])
//! - targeted replacement ([`PurePath::with_dirname`],
//!   [`PurePath::with_basename`], [`PurePath::with_filename`],
//!   [`PurePath::with_extension`])
//! - comparison (`==`, `<` as strict-ancestor-of, hashing)
//! - glob matching ([`PurePath::matches`], [`GlobPattern`])
//!
//! Everything here is string-only. Nothing touches the filesystem, and
//! no operation ever mutates an existing value.
//!
//! # Examples
//!
//! ```
//! use pathwise::{Platform, PurePath};
//!
//! let home = PurePath::parse(Platform::Posix, "/home/dan").unwrap();
//! let notes = home.join("notes/todo.txt").unwrap();
//!
//! assert_eq!(notes.to_string(), "/home/dan/notes/todo.txt");
//! assert!(home < notes);
//! assert_eq!(
//!     notes.relative_to(&home).unwrap().to_string(),
//!     "notes/todo.txt"
//! );
//! ```

mod combine;
mod glob;
mod relative;
mod replace;
mod value;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use glob::GlobPattern;
pub use relative::Parents;
pub use value::{ComponentSelection, PurePath};
