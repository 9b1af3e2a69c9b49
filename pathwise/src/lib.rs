#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathwise
//!
//! A library for pure, platform-parameterized path manipulation.
//!
//! pathwise parses path strings into structural components and provides
//! an algebra over them (joining, relativizing, comparing, glob
//! matching) without ever touching the filesystem. Two grammars are
//! supported behind one engine: POSIX (case-sensitive, `/`-separated)
//! and Windows (case-insensitive, `\`-separated, with drive letters,
//! UNC shares and reserved device names).
//!
//! ## Core Types
//!
//! - [`Platform`]: the explicit platform tag carrying separator, case
//!   rule and reserved-name rules
//! - [`Grammar`]: raw string to path value, rejecting reserved characters
//! - [`PurePath`]: the immutable path value and its algebra
//! - [`GlobPattern`]: restricted `*`/`?` matching
//! - [`PathFactory`]: construction with optional expansion and
//!   normalization passes
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use pathwise::{Platform, PurePath};
//!
//! let path = PurePath::parse(Platform::Windows, r"C:\Users\nemec").unwrap();
//! let tmp = path.join("tmp").unwrap();
//!
//! assert_eq!(tmp.to_string(), r"C:\Users\nemec\tmp");
//! assert_eq!(tmp.parent().unwrap(), path);
//! assert!(tmp.matches(r"users\*\tmp").unwrap());
//! assert!(path < tmp);
//! ```

pub mod error;
pub mod expand;
pub mod factory;
pub mod grammar;
pub mod logging;
pub mod platform;
pub mod pure;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use factory::PathFactory;
pub use grammar::Grammar;
pub use logging::{init_logger, LogLevel, Logger};
pub use platform::Platform;
pub use pure::{ComponentSelection, GlobPattern, Parents, PurePath};
