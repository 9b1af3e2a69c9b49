//! Property-based tests for the path algebra.
//!
//! Note: the glob module already has property tests for the wildcard
//! matcher. This module focuses on cross-operation laws: round-trips,
//! ordering, and safe-join containment.

use proptest::prelude::*;

use crate::platform::Platform;
use crate::pure::PurePath;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,10}"
}

fn posix_path_strategy() -> impl Strategy<Value = String> {
    (
        prop::bool::ANY,
        prop::collection::vec(segment_strategy(), 1..6),
    )
        .prop_map(|(absolute, parts)| {
            let joined = parts.join("/");
            if absolute {
                format!("/{joined}")
            } else {
                joined
            }
        })
}

fn windows_path_strategy() -> impl Strategy<Value = String> {
    (
        "[A-Z]",
        prop::collection::vec(segment_strategy(), 1..6),
    )
        .prop_map(|(letter, parts)| format!("{letter}:\\{}", parts.join("\\")))
}

fn fragment_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![Just("..".to_string()), segment_strategy()],
        1..6,
    )
    .prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    /// Rendering and re-parsing a value reproduces it exactly.
    #[test]
    fn round_trip_posix(raw in posix_path_strategy()) {
        let path = PurePath::parse(Platform::Posix, &raw).unwrap();
        let rendered = path.to_string();
        let reparsed = PurePath::parse(Platform::Posix, &rendered).unwrap();
        prop_assert_eq!(&path, &reparsed);
        prop_assert_eq!(rendered, reparsed.to_string());
    }

    /// Round-trip holds on Windows with drives in play.
    #[test]
    fn round_trip_windows(raw in windows_path_strategy()) {
        let path = PurePath::parse(Platform::Windows, &raw).unwrap();
        let reparsed = PurePath::parse(Platform::Windows, &path.to_string()).unwrap();
        prop_assert_eq!(path, reparsed);
    }

    /// Case normalization is idempotent.
    #[test]
    fn normalize_case_idempotent(raw in windows_path_strategy()) {
        let path = PurePath::parse(Platform::Windows, &raw).unwrap();
        let once = path.normalize_case();
        let twice = once.normalize_case();
        prop_assert_eq!(once.to_string(), twice.to_string());
    }

    /// The anchor is always drive and root concatenated.
    #[test]
    fn anchor_identity(raw in posix_path_strategy()) {
        let path = PurePath::parse(Platform::Posix, &raw).unwrap();
        prop_assert_eq!(
            path.anchor(),
            format!("{}{}", path.drive(), path.root())
        );
    }

    /// Chained joins equal one flat join.
    #[test]
    fn join_chaining(base in posix_path_strategy(),
                     a in segment_strategy(),
                     b in segment_strategy()) {
        let path = PurePath::parse(Platform::Posix, &base).unwrap();
        let chained = path.join(&a).unwrap().join(&b).unwrap();
        let flat = path.join_all([&a, &b]).unwrap();
        prop_assert_eq!(chained, flat);
    }

    /// A successful safe join stays inside the base; escapes fail.
    #[test]
    fn safe_join_containment(base in posix_path_strategy(), fragment in fragment_strategy()) {
        let base = PurePath::parse(Platform::Posix, &base).unwrap();
        let mut depth: i64 = 0;
        let escapes = fragment.split('/').any(|seg| {
            if seg == ".." { depth -= 1; } else { depth += 1; }
            depth < 0
        });

        match base.try_safe_join(&fragment) {
            None => prop_assert!(escapes),
            Some(joined) => {
                prop_assert!(!escapes);
                prop_assert!(joined.to_string().starts_with(&base.to_string()));
            }
        }
    }

    /// Every parent is a strict ancestor under the partial order.
    #[test]
    fn parents_are_ancestors(raw in posix_path_strategy()) {
        let path = PurePath::parse(Platform::Posix, &raw).unwrap();
        for parent in path.parents() {
            prop_assert!(parent < path);
            prop_assert!(!(path < parent));
        }
    }

    /// The partial order is irreflexive for `<` and consistent with
    /// relative_to.
    #[test]
    fn ordering_matches_relative_to(base in posix_path_strategy(), tail in segment_strategy()) {
        let base = PurePath::parse(Platform::Posix, &base).unwrap();
        let child = base.join(&tail).unwrap();
        prop_assert!(base < child);
        prop_assert!(!(base < base));
        let rel = child.relative_to(&base).unwrap();
        prop_assert_eq!(base.join_path(&rel), child);
    }

    /// Equal values hash equally under the platform case rule.
    #[test]
    fn equality_and_hash_agree(raw in windows_path_strategy()) {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let path = PurePath::parse(Platform::Windows, &raw).unwrap();
        let folded = PurePath::parse(Platform::Windows, &raw.to_lowercase()).unwrap();
        prop_assert_eq!(&path, &folded);

        let mut h1 = DefaultHasher::new();
        let mut h2 = DefaultHasher::new();
        path.hash(&mut h1);
        folded.hash(&mut h2);
        prop_assert_eq!(h1.finish(), h2.finish());
    }
}
