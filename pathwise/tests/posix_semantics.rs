//! Integration tests for POSIX path semantics.
//!
//! This test suite verifies that:
//! - Parsing decomposes strings into the five components correctly
//! - The leading double-slash root is preserved as a distinct root
//! - Rendering round-trips through the grammar
//! - Equality and ordering are case-sensitive
//! - Multi-absolute joins discard earlier absolute fragments

use pathwise::{Platform, PurePath};

fn parse(s: &str) -> PurePath {
    PurePath::parse(Platform::Posix, s).unwrap()
}

// =============================================================================
// Component decomposition
// =============================================================================

#[test]
fn test_components_of_absolute_file() {
    let path = parse("/home/dan/notes.txt");
    assert_eq!(path.drive(), "");
    assert_eq!(path.root(), "/");
    assert_eq!(path.dirname(), "home/dan");
    assert_eq!(path.basename(), "notes");
    assert_eq!(path.extension(), ".txt");
    assert_eq!(path.filename(), "notes.txt");
    assert_eq!(path.anchor(), "/");
    assert!(path.is_absolute());
}

#[test]
fn test_components_of_relative_path() {
    let path = parse("src/lib.rs");
    assert_eq!(path.root(), "");
    assert!(!path.is_absolute());
    assert_eq!(path.anchor(), "");
}

#[test]
fn test_current_directory_value() {
    // No input and "." both produce the current-directory value.
    let implicit = PurePath::current_dir(Platform::Posix);
    let explicit = parse(".");
    assert_eq!(implicit, explicit);
    assert_eq!(implicit.dirname(), ".");
    assert_eq!(implicit.basename(), "");
    assert_eq!(implicit.to_string(), ".");
}

#[test]
fn test_double_slash_root_is_distinct() {
    // Exactly two leading slashes are a separate root; three or more
    // collapse to one.
    assert_eq!(parse("//mount/data").root(), "//");
    assert_eq!(parse("///mount/data").root(), "/");
    assert_eq!(parse("/mount/data").root(), "/");
    assert_ne!(parse("//a/b"), parse("/a/b"));
}

#[test]
fn test_dotfile_and_suffix_edges() {
    let dotfile = parse(".bashrc");
    assert_eq!(dotfile.basename(), ".bashrc");
    assert_eq!(dotfile.extension(), "");

    let layered = parse("file.txt.tar.gz");
    assert_eq!(layered.extension(), ".gz");
    assert_eq!(layered.suffixes(), vec![".txt", ".tar", ".gz"]);
}

// =============================================================================
// Round-trips
// =============================================================================

#[test]
fn test_round_trip_preserves_value() {
    for raw in [
        "/home/dan",
        "a/b/c",
        "//net/share/x",
        "../up/two.txt",
        ".hidden/dir/.config.bak",
        "/",
        ".",
    ] {
        let path = parse(raw);
        let reparsed = parse(&path.to_string());
        assert_eq!(path, reparsed, "round-trip failed for {raw}");
        assert_eq!(path.to_string(), reparsed.to_string());
    }
}

#[test]
fn test_rendering_collapses_noise() {
    assert_eq!(parse("/a//b/./c/").to_string(), "/a/b/c");
    assert_eq!(parse("./x").to_string(), "x");
}

// =============================================================================
// Case rule, ordering, joining
// =============================================================================

#[test]
fn test_posix_is_case_sensitive() {
    assert_ne!(parse("FOO"), parse("foo"));
    assert_ne!(parse("/A/b"), parse("/a/b"));
}

#[test]
fn test_ancestor_ordering() {
    let a = parse("/a/b");
    let b = parse("/a/b/c");
    assert!(a < b);
    assert!(!(b < a));
    #[allow(clippy::eq_op)]
    {
        assert!(!(a < a));
    }
}

#[test]
fn test_multi_absolute_join_keeps_last_base() {
    // The first absolute fragment is fully discarded by the second.
    let joined =
        PurePath::from_segments(Platform::Posix, ["/home/dan", "/lib", "lib64"]).unwrap();
    assert_eq!(joined.to_string(), "/lib/lib64");
    assert_eq!(joined.dirname(), "lib");
    assert_eq!(joined.basename(), "lib64");
}

#[test]
fn test_backslash_is_a_plain_character() {
    let path = parse("dir/we\\ird");
    assert_eq!(path.basename(), "we\\ird");
    assert_eq!(path.parts().len(), 2);
}
