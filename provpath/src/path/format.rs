//! Re-formatting resolved provider paths into a requested [`PathKind`].
//!
//! Each kind is an independent formatting rule:
//!
//! | Kind                | Output                                          |
//! |---------------------|-------------------------------------------------|
//! | `Simple`            | provider path without its `<provider>::` prefix |
//! | `ProviderQualified` | `<provider>::<path>`, never qualified twice     |
//! | `DriveQualified`    | `<drive>:\<path relative to drive root>`        |
//! | `Relative`          | `.\<path below current location>` or a `..` walk |

use crate::error::{Error, Result};
use crate::path::context::PathResolutionContext;
use crate::path::normalize::{
    is_separator, strip_prefix_ignore_case, trim_leading_separators, trim_trailing_separators,
};
use crate::path::types::{DriveHandle, PathKind, ResolvedPath};

/// Format one resolved path as `kind`.
///
/// # Errors
///
/// Returns an error only when a derived path must be resolved again and
/// that resolution fails (drive-qualified output for a path resolved
/// without a drive), or when the context cannot report a location.
///
/// # Examples
///
/// ```
/// use provpath::namespace::{Namespace, Provider};
/// use provpath::path::{format_path, PathKind, ProviderHandle, ResolvedPath};
///
/// let ns = Namespace::new(vec![Provider::listed("FileSystem").with_drive("Root", "/")])
///     .unwrap()
///     .with_location("Root", "/work")
///     .unwrap();
/// let resolved = ResolvedPath::new("/work/sub/a.txt", ProviderHandle::new("FileSystem"));
///
/// assert_eq!(
///     format_path(&resolved, PathKind::ProviderQualified, &ns).unwrap(),
///     "FileSystem::/work/sub/a.txt"
/// );
/// assert_eq!(
///     format_path(&resolved, PathKind::Relative, &ns).unwrap(),
///     ".\\sub\\a.txt"
/// );
/// ```
pub fn format_path(
    resolved: &ResolvedPath,
    kind: PathKind,
    ctx: &dyn PathResolutionContext,
) -> Result<String> {
    let path = resolved.provider_path();

    if kind == PathKind::ProviderQualified {
        if ctx.is_provider_qualified(path) {
            return Ok(path.to_string());
        }
        return Ok(format!("{}{path}", resolved.provider().qualifier()));
    }

    let path = if ctx.is_provider_qualified(path) {
        path.strip_prefix(&resolved.provider().qualifier())
            .unwrap_or(path)
    } else {
        path
    };

    match kind {
        PathKind::Simple | PathKind::ProviderQualified => Ok(path.to_string()),
        PathKind::DriveQualified => drive_qualified(path, resolved.drive(), ctx),
        PathKind::Relative => relative(path, resolved, ctx),
    }
}

fn drive_qualified(
    path: &str,
    drive: Option<&DriveHandle>,
    ctx: &dyn PathResolutionContext,
) -> Result<String> {
    if ctx.absolute_drive(path).is_some() {
        return Ok(path.to_string());
    }

    // Resolve again when the path carries no drive.
    let (path, drive) = match drive {
        Some(drive) => (path.to_string(), Some(drive.clone())),
        None => {
            let again = ctx.resolve_literal(path)?;
            let drive = again.drive().cloned();
            (again.provider_path().to_string(), drive)
        }
    };

    if ctx.absolute_drive(&path).is_some() {
        return Ok(path);
    }

    let drive = drive.ok_or_else(|| Error::LiteralResolution {
        path: path.clone(),
        reason: "path does not belong to any drive".to_string(),
    })?;
    let below_root = ctx.normalize_relative(&path, drive.root())?;
    Ok(format!("{}:\\{below_root}", drive.name()))
}

fn relative(
    path: &str,
    resolved: &ResolvedPath,
    ctx: &dyn PathResolutionContext,
) -> Result<String> {
    let location = ctx.current_location(resolved.provider())?;
    let trimmed = trim_trailing_separators(&location);
    // A location made only of separators is the provider root itself.
    let base = if trimmed.is_empty() {
        location.as_str()
    } else {
        trimmed
    };

    if let Some(below) = strip_location(path, base) {
        let below = trim_leading_separators(below).replace('/', "\\");
        return Ok(format!(".\\{below}"));
    }

    match ctx.normalize_relative(path, base) {
        Ok(walk) => Ok(walk),
        Err(e) => {
            log::debug!("no relative form for '{path}' from '{base}', keeping it: {e}");
            Ok(path.to_string())
        }
    }
}

/// Remove `location` from the front of `path` if `path` lies beneath it.
fn strip_location<'a>(path: &'a str, location: &str) -> Option<&'a str> {
    if location.is_empty() {
        return None;
    }
    let rest = strip_prefix_ignore_case(path, location)?;
    let at_boundary =
        rest.is_empty() || rest.starts_with(is_separator) || location.ends_with(is_separator);
    at_boundary.then_some(rest)
}
