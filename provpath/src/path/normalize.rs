//! Provider path normalization functions.
//!
//! Provider paths are plain strings: they may use `/` or `\` as separators
//! and are not necessarily host filesystem paths. This module provides the
//! string-level operations the resolution context and the reformatter share:
//! - Separator handling and trimming
//! - Case-insensitive prefix removal
//! - Resolving `.` and `..` components
//! - Computing `..`-based relative walks between two provider paths

use std::borrow::Cow;

use crate::error::{Error, Result};

/// Returns `true` for either path separator.
#[must_use]
pub fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Remove trailing `/` and `\` characters.
///
/// # Examples
///
/// ```
/// use provpath::path::normalize::trim_trailing_separators;
///
/// assert_eq!(trim_trailing_separators("/work//"), "/work");
/// assert_eq!(trim_trailing_separators("C:\\"), "C:");
/// ```
#[must_use]
pub fn trim_trailing_separators(path: &str) -> &str {
    path.trim_end_matches(is_separator)
}

/// Remove leading `/` and `\` characters.
#[must_use]
pub fn trim_leading_separators(path: &str) -> &str {
    path.trim_start_matches(is_separator)
}

/// Compare two strings ignoring case.
#[must_use]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Remove `prefix` from the start of `path`, ignoring case.
///
/// Returns `None` if `path` does not start with `prefix`.
///
/// # Examples
///
/// ```
/// use provpath::path::normalize::strip_prefix_ignore_case;
///
/// assert_eq!(strip_prefix_ignore_case("C:\\Work\\a", "c:\\work"), Some("\\a"));
/// assert_eq!(strip_prefix_ignore_case("/other", "/work"), None);
/// ```
#[must_use]
pub fn strip_prefix_ignore_case<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let mut rest = path.char_indices();
    for expected in prefix.chars() {
        let (_, actual) = rest.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    let offset = rest.next().map_or(path.len(), |(index, _)| index);
    Some(&path[offset..])
}

/// Expand a leading `~` to the home directory.
///
/// Only `~` on its own or followed by a separator is expanded; `~user` is
/// left untouched.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
///
/// # Examples
///
/// ```
/// use provpath::path::normalize::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute").unwrap(), "/absolute");
/// assert_eq!(expand_tilde("~user/x").unwrap(), "~user/x");
/// assert!(expand_tilde("~/project").unwrap().ends_with("project"));
/// ```
pub fn expand_tilde(path: &str) -> Result<Cow<'_, str>> {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(is_separator) => rest,
        _ => return Ok(Cow::Borrowed(path)),
    };

    let home = home::home_dir().ok_or_else(|| Error::LiteralResolution {
        path: path.to_string(),
        reason: "cannot determine home directory".to_string(),
    })?;
    let home = home.to_string_lossy();
    let base = match trim_trailing_separators(&home) {
        "" => home.as_ref(),
        trimmed => trimmed,
    };
    Ok(Cow::Owned(format!("{base}{rest}")))
}

/// The components of a provider path.
///
/// A path that starts with a separator is *anchored* at the provider root.
/// An unanchored path treats its first component (`C:`,
/// `HKEY_LOCAL_MACHINE`, ...) as its anchor when compared with other paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components<'a> {
    anchored: bool,
    parts: Vec<&'a str>,
}

impl<'a> Components<'a> {
    /// Split a provider path on either separator, dropping empty parts.
    #[must_use]
    pub fn split(path: &'a str) -> Self {
        Self {
            anchored: path.starts_with(is_separator),
            parts: path.split(is_separator).filter(|p| !p.is_empty()).collect(),
        }
    }

    /// Whether the path starts with a separator.
    #[must_use]
    pub fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// The non-empty components in order.
    #[must_use]
    pub fn parts(&self) -> &[&'a str] {
        &self.parts
    }

    /// The number of components `..` may never pop.
    fn floor(&self) -> usize {
        usize::from(!self.anchored && !self.parts.is_empty())
    }

    /// Append `rest` to these components, resolving `.` and `..`.
    ///
    /// # Errors
    ///
    /// Returns an error if a `..` component would escape the anchor.
    pub fn push(&mut self, rest: &'a str) -> Result<()> {
        self.push_above(rest, self.floor())
    }

    /// Like [`Components::push`], but `..` may never pop below `floor`
    /// components.
    fn push_above(&mut self, rest: &'a str, floor: usize) -> Result<()> {
        for part in rest.split(is_separator).filter(|p| !p.is_empty()) {
            match part {
                "." => {}
                ".." => {
                    if self.parts.len() <= floor {
                        return Err(Error::LiteralResolution {
                            path: rest.to_string(),
                            reason: "path contains too many '..' components (escapes root)"
                                .to_string(),
                        });
                    }
                    self.parts.pop();
                }
                _ => self.parts.push(part),
            }
        }
        Ok(())
    }

    /// Render the components with the given separator.
    ///
    /// A single unanchored component keeps a trailing separator so that a
    /// root such as `C:` renders as `C:\`.
    #[must_use]
    pub fn render(&self, separator: char) -> String {
        let sep = separator.to_string();
        let mut out = String::new();
        if self.anchored {
            out.push(separator);
        }
        out.push_str(&self.parts.join(&sep));
        if !self.anchored && self.parts.len() == 1 {
            out.push(separator);
        }
        out
    }
}

/// Resolve `.` and `..` components in a provider path.
///
/// # Errors
///
/// Returns an error if the path contains too many `..` components.
///
/// # Examples
///
/// ```
/// use provpath::path::normalize::resolve_components;
///
/// let resolved = resolve_components("/a/./b/../c", '/').unwrap();
/// assert_eq!(resolved, "/a/c");
///
/// let resolved = resolve_components("C:\\a\\..\\b", '\\').unwrap();
/// assert_eq!(resolved, "C:\\b");
/// ```
pub fn resolve_components(path: &str, separator: char) -> Result<String> {
    let anchored = path.starts_with(is_separator);
    let mut components = Components {
        anchored,
        parts: Vec::new(),
    };
    // The anchor of an unanchored path is its first component.
    let rest = if anchored {
        path
    } else {
        let trimmed = path.trim_start_matches(is_separator);
        match trimmed.split_once(is_separator) {
            Some((anchor, rest)) => {
                components.parts.push(anchor);
                rest
            }
            None => {
                if !trimmed.is_empty() {
                    components.parts.push(trimmed);
                }
                ""
            }
        }
    };
    components.push(rest).map_err(|_| Error::LiteralResolution {
        path: path.to_string(),
        reason: "path contains too many '..' components (escapes root)".to_string(),
    })?;
    Ok(components.render(separator))
}

/// Join `rest` onto `base` and resolve `.` and `..` components.
///
/// `rest` is always treated as relative to `base`; leading separators in
/// `rest` are ignored.
///
/// # Errors
///
/// Returns an error if `rest` escapes the anchor of `base`.
///
/// # Examples
///
/// ```
/// use provpath::path::normalize::join;
///
/// assert_eq!(join("/work", "sub/../file.txt", '/').unwrap(), "/work/file.txt");
/// assert_eq!(join("C:\\", "\\data", '\\').unwrap(), "C:\\data");
/// ```
pub fn join(base: &str, rest: &str, separator: char) -> Result<String> {
    let base = resolve_components(base, separator)?;
    let mut components = Components::split(&base);
    components.push(rest).map_err(|_| Error::LiteralResolution {
        path: rest.to_string(),
        reason: format!("path escapes the root of '{base}'"),
    })?;
    Ok(components.render(separator))
}

/// Join `rest` onto `root` without leaving `root`.
///
/// Unlike [`join`], a `..` component may not climb above `root` itself.
///
/// # Errors
///
/// Returns an error if `rest` escapes `root`.
///
/// # Examples
///
/// ```
/// use provpath::path::normalize::join_within;
///
/// assert_eq!(join_within("/mnt/data", "a/../b", '/').unwrap(), "/mnt/data/b");
/// assert!(join_within("/mnt/data", "..", '/').is_err());
/// ```
pub fn join_within(root: &str, rest: &str, separator: char) -> Result<String> {
    let root = resolve_components(root, separator)?;
    let mut components = Components::split(&root);
    let floor = components.parts().len();
    components
        .push_above(rest, floor)
        .map_err(|_| Error::LiteralResolution {
            path: rest.to_string(),
            reason: format!("path escapes the root '{root}'"),
        })?;
    Ok(components.render(separator))
}

/// Express `path` relative to `root` as a walk of `..` and child components.
///
/// Components compare case-insensitively and the result is rendered with
/// `\` separators. Equal paths produce an empty string.
///
/// # Errors
///
/// Returns an error if the two paths share no anchor (one starts with a
/// separator and the other does not, or their first components differ), or
/// if either path escapes its own anchor.
///
/// # Examples
///
/// ```
/// use provpath::path::normalize::relative_walk;
///
/// assert_eq!(relative_walk("/work/sub/a.txt", "/work").unwrap(), "sub\\a.txt");
/// assert_eq!(relative_walk("/other/a.txt", "/work").unwrap(), "..\\other\\a.txt");
/// assert!(relative_walk("D:\\a", "C:\\a").is_err());
/// ```
pub fn relative_walk(path: &str, root: &str) -> Result<String> {
    let failure = |reason: &str| Error::RelativeNormalization {
        path: path.to_string(),
        root: root.to_string(),
        reason: reason.to_string(),
    };

    let resolved_path = resolve_components(path, '\\').map_err(|e| failure(&e.to_string()))?;
    let resolved_root = resolve_components(root, '\\').map_err(|e| failure(&e.to_string()))?;
    let target = Components::split(&resolved_path);
    let base = Components::split(&resolved_root);

    if target.is_anchored() != base.is_anchored() {
        return Err(failure("paths do not share a root"));
    }
    if !target.is_anchored() {
        match (target.parts().first(), base.parts().first()) {
            (Some(a), Some(b)) if eq_ignore_case(a, b) => {}
            _ => return Err(failure("paths do not share a root")),
        }
    }

    let common = target
        .parts()
        .iter()
        .zip(base.parts())
        .take_while(|(a, b)| eq_ignore_case(a, b))
        .count();

    let walk: Vec<&str> = std::iter::repeat("..")
        .take(base.parts().len() - common)
        .chain(target.parts()[common..].iter().copied())
        .collect();

    Ok(walk.join("\\"))
}
