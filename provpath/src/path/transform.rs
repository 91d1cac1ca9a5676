//! The argument transformation entry point.
//!
//! A [`PathTransformer`] is declared once per parameter with a fixed
//! [`PathKind`] and invoked once per bound value. Each raw path is resolved
//! through the [`PathResolutionContext`] (wildcards expand to zero or more
//! matches, literals to exactly one path) and every resolved path is
//! re-formatted as the declared kind.

use crate::error::Result;
use crate::path::context::PathResolutionContext;
use crate::path::format::format_path;
use crate::path::input::{unwrap_paths, PathInput};
use crate::path::types::{PathKind, ResolvedPath};

/// Transforms bound parameter values into canonical path strings.
///
/// # Examples
///
/// ```
/// use provpath::namespace::{Namespace, Provider};
/// use provpath::path::{PathInput, PathKind, PathTransformer};
///
/// let ns = Namespace::new(vec![Provider::listed("FileSystem").with_drive("Root", "/")])
///     .unwrap()
///     .with_location("Root", "/work")
///     .unwrap();
///
/// let transformer = PathTransformer::new(PathKind::ProviderQualified);
/// let input = PathInput::from("notes/today.md");
/// let paths = transformer.transform(Some(&input), &ns).unwrap();
/// assert_eq!(paths, vec!["FileSystem::/work/notes/today.md"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathTransformer {
    kind: PathKind,
}

impl PathTransformer {
    /// Create a transformer producing `kind`.
    #[must_use]
    pub fn new(kind: PathKind) -> Self {
        Self { kind }
    }

    /// The kind this transformer produces.
    #[must_use]
    pub fn kind(&self) -> PathKind {
        self.kind
    }

    /// Transform a bound value.
    ///
    /// Absent input yields an empty vector. Results keep the order of the
    /// input items, then the context's match order within each wildcard.
    /// Duplicates are kept.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PathResolution`] carrying the first raw path
    /// that failed. No partial results are returned.
    pub fn transform(
        &self,
        input: Option<&PathInput>,
        ctx: &dyn PathResolutionContext,
    ) -> Result<Vec<String>> {
        let raw_paths = unwrap_paths(input);
        log::trace!(
            "transforming {} value(s) as {} paths",
            raw_paths.len(),
            self.kind
        );

        let mut output = Vec::with_capacity(raw_paths.len());
        for raw in &raw_paths {
            let formatted = self.transform_one(raw, ctx).map_err(|e| e.for_path(raw))?;
            output.extend(formatted);
        }
        Ok(output)
    }

    fn transform_one(&self, raw: &str, ctx: &dyn PathResolutionContext) -> Result<Vec<String>> {
        let resolved: Vec<ResolvedPath> = if ctx.contains_wildcard(raw) {
            let matches = ctx.expand_wildcard(raw)?;
            log::debug!("wildcard '{raw}' matched {} item(s)", matches.len());
            matches
        } else {
            vec![ctx.resolve_literal(raw)?]
        };

        resolved
            .iter()
            .map(|r| format_path(r, self.kind, ctx))
            .collect()
    }
}

/// Transform `input` as `kind` through `ctx`.
///
/// Shorthand for [`PathTransformer::new`] followed by
/// [`PathTransformer::transform`].
///
/// # Errors
///
/// See [`PathTransformer::transform`].
pub fn transform(
    input: Option<&PathInput>,
    kind: PathKind,
    ctx: &dyn PathResolutionContext,
) -> Result<Vec<String>> {
    PathTransformer::new(kind).transform(input, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};
    use crate::path::context::MockPathResolutionContext;
    use crate::path::input::{FileEntry, PathItem};
    use crate::path::types::ProviderHandle;

    fn fs() -> ProviderHandle {
        ProviderHandle::new("FileSystem")
    }

    /// Literal paths resolve to themselves; wildcards match nothing.
    fn echo_context() -> MockPathResolutionContext {
        let mut ctx = MockPathResolutionContext::new();
        ctx.expect_contains_wildcard()
            .returning(|path| path.contains('*'));
        ctx.expect_resolve_literal()
            .returning(|path| Ok(ResolvedPath::new(path, fs())));
        ctx.expect_is_provider_qualified()
            .returning(|path| path.contains("::"));
        ctx
    }

    #[test]
    fn test_absent_input_never_touches_context() {
        let mut ctx = MockPathResolutionContext::new();
        ctx.expect_contains_wildcard().never();
        ctx.expect_resolve_literal().never();

        for kind in [
            PathKind::Simple,
            PathKind::ProviderQualified,
            PathKind::DriveQualified,
            PathKind::Relative,
        ] {
            assert!(transform(None, kind, &ctx).unwrap().is_empty());
        }
    }

    #[test]
    fn test_literal_paths_keep_input_order() {
        let ctx = echo_context();
        let input: PathInput = vec![
            PathItem::from("/b"),
            PathItem::from(FileEntry::new("/a/b.txt")),
            PathItem::from("/a"),
        ]
        .into();

        let out = PathTransformer::new(PathKind::Simple)
            .transform(Some(&input), &ctx)
            .unwrap();
        assert_eq!(out, vec!["/b", "/a/b.txt", "/a"]);
    }

    #[test]
    fn test_wildcard_cardinality_and_order() {
        let mut ctx = echo_context();
        ctx.expect_expand_wildcard().times(1).returning(|_| {
            Ok(vec![
                ResolvedPath::new("/work/c.txt", fs()),
                ResolvedPath::new("/work/a.txt", fs()),
                ResolvedPath::new("/work/c.txt", fs()),
            ])
        });

        let input = PathInput::from("/work/*.txt");
        let out = transform(Some(&input), PathKind::Simple, &ctx).unwrap();
        // Context order is kept and duplicates are not removed.
        assert_eq!(out, vec!["/work/c.txt", "/work/a.txt", "/work/c.txt"]);
    }

    #[test]
    fn test_wildcard_without_matches_contributes_nothing() {
        let mut ctx = echo_context();
        ctx.expect_expand_wildcard().returning(|_| Ok(Vec::new()));

        let input: PathInput = vec![PathItem::from("/none/*"), PathItem::from("/x")].into();
        let out = transform(Some(&input), PathKind::Simple, &ctx).unwrap();
        assert_eq!(out, vec!["/x"]);
    }

    #[test]
    fn test_literal_failure_wrapped_once_with_raw_text() {
        let mut ctx = MockPathResolutionContext::new();
        ctx.expect_contains_wildcard().returning(|_| false);
        ctx.expect_resolve_literal().returning(|path| {
            Err(Error::UnknownProvider {
                name: path.split("::").next().unwrap_or_default().to_string(),
            })
        });

        let input = PathInput::from("Nope::x");
        let err = transform(Some(&input), PathKind::Simple, &ctx).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::PathResolution);
        assert_eq!(err.offending_path(), Some("Nope::x"));
        match err {
            Error::PathResolution { source, .. } => {
                assert_eq!(source.kind(), ErrorKind::UnknownProvider);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_existing_path_resolution_error_passes_through() {
        let mut ctx = MockPathResolutionContext::new();
        ctx.expect_contains_wildcard().returning(|_| false);
        ctx.expect_resolve_literal().returning(|_| {
            Err(Error::LiteralResolution {
                path: "inner".to_string(),
                reason: "bad".to_string(),
            }
            .for_path("inner"))
        });

        let input = PathInput::from("outer");
        let err = transform(Some(&input), PathKind::Simple, &ctx).unwrap_err();
        assert_eq!(err.offending_path(), Some("inner"));
    }

    #[test]
    fn test_wildcard_failure_is_wrapped() {
        let mut ctx = echo_context();
        ctx.expect_expand_wildcard().returning(|pattern| {
            Err(Error::WildcardExpansion {
                pattern: pattern.to_string(),
                reason: "unterminated class".to_string(),
            })
        });

        let input = PathInput::from("/work/*[");
        let err = transform(Some(&input), PathKind::Simple, &ctx).unwrap_err();
        assert_eq!(err.offending_path(), Some("/work/*["));
    }

    #[test]
    fn test_first_failure_discards_partial_results() {
        let mut ctx = MockPathResolutionContext::new();
        ctx.expect_contains_wildcard().returning(|_| false);
        ctx.expect_is_provider_qualified().returning(|_| false);
        ctx.expect_resolve_literal()
            .withf(|path| path == "/ok")
            .returning(|path| Ok(ResolvedPath::new(path, fs())));
        ctx.expect_resolve_literal()
            .withf(|path| path == "/bad")
            .returning(|path| {
                Err(Error::LiteralResolution {
                    path: path.to_string(),
                    reason: "malformed".to_string(),
                })
            });
        ctx.expect_resolve_literal()
            .withf(|path| path == "/never")
            .never();

        let input: PathInput = vec![
            PathItem::from("/ok"),
            PathItem::from("/bad"),
            PathItem::from("/never"),
        ]
        .into();
        let err = transform(Some(&input), PathKind::Simple, &ctx).unwrap_err();
        assert_eq!(err.offending_path(), Some("/bad"));
    }

    #[test]
    fn test_format_failure_is_wrapped_with_raw_text() {
        let mut ctx = echo_context();
        ctx.expect_absolute_drive().returning(|_| None);

        // The literal resolves without a drive, so the re-resolution also
        // yields no drive and drive qualification fails.
        let input = PathInput::from("/work/a.txt");
        let err = transform(Some(&input), PathKind::DriveQualified, &ctx).unwrap_err();
        assert_eq!(err.offending_path(), Some("/work/a.txt"));
    }

    #[test]
    fn test_kind_accessor() {
        assert_eq!(PathTransformer::default().kind(), PathKind::Simple);
        assert_eq!(
            PathTransformer::new(PathKind::Relative).kind(),
            PathKind::Relative
        );
    }
}
