//! String expansion helpers.
//!
//! These helpers sit just outside the pure algebra: they are the only
//! place the crate reads anything from its surroundings (environment
//! variables and the home directory), and they operate on raw strings
//! before the grammar ever sees them. The [`crate::PathFactory`] composes
//! them as optional pre-parse passes.

use std::env;

use crate::error::{Error, Result};

/// Expand `$VAR` and `${VAR}` references against the environment.
///
/// Variable names consist of ASCII letters, digits and underscores and
/// must start with a letter or underscore. A `$` that introduces no
/// well-formed reference (including an unclosed `${`) is kept literally.
///
/// # Errors
///
/// Returns [`Error::UnknownVariable`] if a referenced variable is not
/// set.
///
/// # Examples
///
/// ```
/// use pathwise::expand::expand_env;
///
/// std::env::set_var("PATHWISE_DOCTEST_DIR", "/srv/data");
/// assert_eq!(
///     expand_env("$PATHWISE_DOCTEST_DIR/logs").unwrap(),
///     "/srv/data/logs"
/// );
/// assert_eq!(
///     expand_env("${PATHWISE_DOCTEST_DIR}/logs").unwrap(),
///     "/srv/data/logs"
/// );
/// assert_eq!(expand_env("no references").unwrap(), "no references");
/// assert!(expand_env("$PATHWISE_DOCTEST_UNSET").is_err());
/// ```
pub fn expand_env(input: &str) -> Result<String> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('{') => {
                chars.next();
                let mut name = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                if closed && !name.is_empty() {
                    out.push_str(&lookup(&name)?);
                } else {
                    // Unclosed or empty braces stay literal.
                    out.push_str("${");
                    out.push_str(&name);
                    if closed {
                        out.push('}');
                    }
                }
            }
            Some(c) if c.is_ascii_alphabetic() || *c == '_' => {
                let mut name = String::new();
                while let Some(c) = chars.peek() {
                    if c.is_ascii_alphanumeric() || *c == '_' {
                        name.push(*c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                out.push_str(&lookup(&name)?);
            }
            _ => out.push('$'),
        }
    }

    Ok(out)
}

/// Expand a leading tilde (`~`) to the home directory.
///
/// This handles `~` and `~/path` but not `~user` syntax. Strings that do
/// not start with a tilde are returned unchanged.
///
/// # Errors
///
/// Returns [`Error::NoHomeDirectory`] if the home directory cannot be
/// determined, or [`Error::UnsupportedUserExpansion`] for `~user` syntax.
///
/// # Examples
///
/// ```
/// use pathwise::expand::expand_home;
///
/// let expanded = expand_home("~/project").unwrap();
/// assert!(expanded.ends_with("/project") || expanded.ends_with("\\project"));
/// assert!(!expanded.starts_with('~'));
///
/// assert_eq!(expand_home("/absolute").unwrap(), "/absolute");
/// assert!(expand_home("~user/path").is_err());
/// ```
pub fn expand_home(input: &str) -> Result<String> {
    if !input.starts_with('~') {
        return Ok(input.to_string());
    }

    let home = home::home_dir().ok_or(Error::NoHomeDirectory)?;
    let home = home.to_string_lossy();
    log::debug!("expanding leading tilde to {home}");

    let rest = &input[1..];
    if rest.is_empty() {
        Ok(home.into_owned())
    } else if rest.starts_with('/') || rest.starts_with('\\') {
        Ok(format!("{home}{rest}"))
    } else {
        Err(Error::UnsupportedUserExpansion {
            path: input.to_string(),
        })
    }
}

/// Look up one variable, logging the substitution.
fn lookup(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) => {
            log::debug!("expanding ${name}");
            Ok(value)
        }
        Err(_) => Err(Error::UnknownVariable {
            name: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_env_plain_string_unchanged() {
        assert_eq!(expand_env("a/b/c").unwrap(), "a/b/c");
    }

    #[test]
    fn test_expand_env_bare_and_braced() {
        env::set_var("PATHWISE_TEST_BARE", "/srv");
        assert_eq!(expand_env("$PATHWISE_TEST_BARE/x").unwrap(), "/srv/x");
        assert_eq!(expand_env("${PATHWISE_TEST_BARE}/x").unwrap(), "/srv/x");
        env::remove_var("PATHWISE_TEST_BARE");
    }

    #[test]
    fn test_expand_env_name_boundary() {
        env::set_var("PATHWISE_TEST_NAME", "v");
        assert_eq!(expand_env("$PATHWISE_TEST_NAME.txt").unwrap(), "v.txt");
        env::remove_var("PATHWISE_TEST_NAME");
    }

    #[test]
    fn test_expand_env_unknown_variable() {
        env::remove_var("PATHWISE_TEST_MISSING");
        let err = expand_env("$PATHWISE_TEST_MISSING").unwrap_err();
        assert_eq!(
            err,
            Error::UnknownVariable {
                name: "PATHWISE_TEST_MISSING".to_string(),
            }
        );
    }

    #[test]
    fn test_expand_env_literal_dollar() {
        assert_eq!(expand_env("price$").unwrap(), "price$");
        assert_eq!(expand_env("a$/b").unwrap(), "a$/b");
        assert_eq!(expand_env("100$5").unwrap(), "100$5");
    }

    #[test]
    fn test_expand_env_unclosed_brace_is_literal() {
        assert_eq!(expand_env("${NOPE").unwrap(), "${NOPE");
        assert_eq!(expand_env("${}").unwrap(), "${}");
    }

    #[test]
    fn test_expand_home_tilde_only() {
        let home = home::home_dir().unwrap();
        assert_eq!(expand_home("~").unwrap(), home.to_string_lossy());
    }

    #[test]
    fn test_expand_home_with_path() {
        let home = home::home_dir().unwrap();
        let expanded = expand_home("~/notes").unwrap();
        assert_eq!(expanded, format!("{}/notes", home.to_string_lossy()));
    }

    #[test]
    fn test_expand_home_non_tilde_unchanged() {
        assert_eq!(expand_home("/etc/hosts").unwrap(), "/etc/hosts");
        assert_eq!(expand_home("relative/~").unwrap(), "relative/~");
    }

    #[test]
    fn test_expand_home_user_syntax_not_supported() {
        let err = expand_home("~dan/notes").unwrap_err();
        assert!(matches!(err, Error::UnsupportedUserExpansion { .. }));
    }
}
