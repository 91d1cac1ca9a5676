//! Property-based tests for path transformation.
//!
//! The normalize and format modules carry their own quick properties; this
//! suite drives the full transformer through a [`Namespace`] with many more
//! cases.

use super::context::PathResolutionContext;
use super::format::format_path;
use super::input::PathInput;
use super::transform::transform;
use super::types::{PathKind, ProviderHandle, ResolvedPath};
use crate::namespace::{Namespace, Provider};
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 1..6)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn namespace(items: &[String]) -> Namespace {
    Namespace::new(vec![Provider::listed("FileSystem")
        .with_drive("Root", "/")
        .with_items(items.iter().cloned())])
    .and_then(|ns| ns.with_location("Root", "/work"))
    .unwrap()
}

fn fs() -> ProviderHandle {
    ProviderHandle::new("FileSystem")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Simple formatting leaves unqualified paths alone
    #[test]
    fn simple_is_identity_on_unqualified(path in absolute_path_strategy()) {
        let ns = namespace(&[]);
        let resolved = ResolvedPath::new(path.clone(), fs());
        prop_assert_eq!(format_path(&resolved, PathKind::Simple, &ns).unwrap(), path);
    }

    // Qualifying then simplifying returns the unqualified form
    #[test]
    fn qualify_then_simplify_round_trips(path in absolute_path_strategy()) {
        let ns = namespace(&[]);
        let qualified =
            format_path(&ResolvedPath::new(path.clone(), fs()), PathKind::ProviderQualified, &ns)
                .unwrap();
        let simple =
            format_path(&ResolvedPath::new(qualified, fs()), PathKind::Simple, &ns).unwrap();
        prop_assert_eq!(simple, path);
    }

    // Qualifying is idempotent
    #[test]
    fn qualify_is_idempotent(path in absolute_path_strategy()) {
        let ns = namespace(&[]);
        let once =
            format_path(&ResolvedPath::new(path, fs()), PathKind::ProviderQualified, &ns).unwrap();
        let twice =
            format_path(&ResolvedPath::new(once.clone(), fs()), PathKind::ProviderQualified, &ns)
                .unwrap();
        prop_assert_eq!(twice, once);
    }

    // A pattern matching N items yields N results in match order
    #[test]
    fn wildcard_cardinality(names in prop::collection::btree_set(component_strategy(), 0..20)) {
        let items: Vec<String> = names.iter().map(|n| format!("/pool/{n}")).collect();
        let ns = namespace(&items);

        let input = PathInput::from("/pool/*");
        let out = transform(Some(&input), PathKind::Simple, &ns).unwrap();
        prop_assert_eq!(out, items);
    }

    // Every drive-qualified result is drive-absolute
    #[test]
    fn drive_qualified_is_drive_absolute(path in absolute_path_strategy()) {
        let ns = namespace(&[]);
        let input = PathInput::from(path);
        for result in transform(Some(&input), PathKind::DriveQualified, &ns).unwrap() {
            prop_assert!(ns.absolute_drive(&result).is_some());
        }
    }

    // A relative result resolves back to the path it came from
    #[test]
    fn relative_resolves_back(path in absolute_path_strategy()) {
        let ns = namespace(&[]);
        let resolved = ResolvedPath::new(path.clone(), fs());
        let relative = format_path(&resolved, PathKind::Relative, &ns).unwrap();
        let back = ns.resolve_literal(&relative).unwrap();
        prop_assert_eq!(back.provider_path(), path.as_str());
    }
}
