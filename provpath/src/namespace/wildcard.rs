//! Wildcard detection and matching.
//!
//! Patterns use `*`, `?` and `[...]` with a backtick as the escape
//! character. Matching is delegated to the `glob` crate after translating
//! the pattern into its syntax.

use std::path::PathBuf;

use glob::{MatchOptions, Pattern};

use crate::error::{Error, Result};

const ESCAPE: char = '`';

/// Options shared by listed and on-disk matching.
pub(crate) const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Whether `path` contains an unescaped `*`, `?` or `[`.
///
/// # Examples
///
/// ```
/// use provpath::namespace::contains_wildcard;
///
/// assert!(contains_wildcard("/work/*.txt"));
/// assert!(!contains_wildcard("/work/`[draft`].txt"));
/// ```
#[must_use]
pub fn contains_wildcard(path: &str) -> bool {
    let mut chars = path.chars();
    while let Some(c) = chars.next() {
        match c {
            ESCAPE => {
                chars.next();
            }
            '*' | '?' | '[' => return true,
            _ => {}
        }
    }
    false
}

/// Translate a provider pattern into `glob` syntax.
///
/// Both separators become `/`. An escaped character matches itself.
pub(crate) fn to_glob_syntax(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        match c {
            ESCAPE => match chars.next() {
                Some(escaped @ ('*' | '?' | '[' | ']')) => {
                    out.push('[');
                    out.push(escaped);
                    out.push(']');
                }
                Some('\\') => out.push('/'),
                Some(other) => out.push(other),
                None => {}
            },
            '\\' => out.push('/'),
            _ => out.push(c),
        }
    }
    out
}

fn compile(pattern: &str) -> Result<Pattern> {
    Pattern::new(&to_glob_syntax(pattern)).map_err(|e| Error::WildcardExpansion {
        pattern: pattern.to_string(),
        reason: e.msg.to_string(),
    })
}

/// Match `pattern` against a fixed set of provider paths.
///
/// Items are returned in the order given.
pub(crate) fn match_listed<'a, I>(pattern: &str, items: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = &'a String>,
{
    let compiled = compile(pattern)?;
    Ok(items
        .into_iter()
        .filter(|item| compiled.matches_with(&item.replace('\\', "/"), MATCH_OPTIONS))
        .cloned()
        .collect())
}

/// Match `pattern` against the host filesystem.
pub(crate) fn match_disk(pattern: &str) -> Result<Vec<String>> {
    let syntax = to_glob_syntax(pattern);
    let failure = |reason: String| Error::WildcardExpansion {
        pattern: pattern.to_string(),
        reason,
    };

    let entries =
        glob::glob_with(&syntax, MATCH_OPTIONS).map_err(|e| failure(e.msg.to_string()))?;

    let mut matches = Vec::new();
    for entry in entries {
        let path: PathBuf = entry.map_err(|e| failure(e.to_string()))?;
        matches.push(path.to_string_lossy().into_owned());
    }
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::TempDir;

    fn items(paths: &[&str]) -> BTreeSet<String> {
        paths.iter().map(|p| (*p).to_string()).collect()
    }

    #[test]
    fn test_contains_wildcard() {
        assert!(contains_wildcard("*"));
        assert!(contains_wildcard("C:\\a?c"));
        assert!(contains_wildcard("/logs/[0-9]*"));
        assert!(!contains_wildcard("/plain/path"));
        assert!(!contains_wildcard("/a/`*"));
        assert!(contains_wildcard("/a/``*"));
    }

    #[test]
    fn test_to_glob_syntax() {
        assert_eq!(to_glob_syntax("C:\\a\\*.txt"), "C:/a/*.txt");
        assert_eq!(to_glob_syntax("/a/`[x`]"), "/a/[[]x[]]");
        assert_eq!(to_glob_syntax("/a/`*b"), "/a/[*]b");
        assert_eq!(to_glob_syntax("/a/``"), "/a/`");
    }

    #[test]
    fn test_match_listed_case_insensitive() {
        let set = items(&["/Work/A.TXT", "/work/b.txt", "/work/c.md"]);
        let matched = match_listed("/work/*.txt", &set).unwrap();
        assert_eq!(matched, vec!["/Work/A.TXT", "/work/b.txt"]);
    }

    #[test]
    fn test_match_listed_separator_is_literal() {
        let set = items(&["/work/a.txt", "/work/sub/b.txt"]);
        let matched = match_listed("/work/*", &set).unwrap();
        assert_eq!(matched, vec!["/work/a.txt"]);
    }

    #[test]
    fn test_match_listed_backslash_items() {
        let set = items(&["HKLM\\Software\\Vendor", "HKLM\\System"]);
        let matched = match_listed("HKLM\\S*", &set).unwrap();
        assert_eq!(matched, vec!["HKLM\\System"]);
    }

    #[test]
    fn test_match_listed_escaped_bracket() {
        let set = items(&["/notes/[draft].md", "/notes/d.md"]);
        let matched = match_listed("/notes/`[draft`].md", &set).unwrap();
        assert_eq!(matched, vec!["/notes/[draft].md"]);
    }

    #[test]
    fn test_match_listed_no_matches() {
        let set = items(&["/a"]);
        assert!(match_listed("/b*", &set).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_pattern() {
        let set = items(&["/a"]);
        let err = match_listed("/a/[", &set).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::WildcardExpansion);
    }

    #[test]
    fn test_match_disk() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("one.log"), "").unwrap();
        std::fs::write(dir.path().join("two.log"), "").unwrap();
        std::fs::write(dir.path().join("three.txt"), "").unwrap();

        let pattern = format!("{}/*.log", dir.path().display());
        let matched = match_disk(&pattern).unwrap();
        assert_eq!(matched.len(), 2);
        assert!(matched[0].ends_with("one.log"));
        assert!(matched[1].ends_with("two.log"));
    }
}
