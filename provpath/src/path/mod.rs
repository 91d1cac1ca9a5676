//! Provider path transformation.
//!
//! This module turns loosely-typed parameter values into canonical path
//! strings of a requested [`PathKind`].
//!
//! # Key Concepts
//!
//! ## Unwrapping
//!
//! A bound value may be a string, a file-system entry, a wrapper around
//! either, or an arbitrary object, alone or in a sequence. [`unwrap_paths`]
//! flattens it into raw path strings, preferring an entry's full name over
//! its display form.
//!
//! ## Resolution
//!
//! Raw paths are resolved through a [`PathResolutionContext`]. Wildcard
//! patterns expand to every existing match (possibly none); literal paths
//! resolve to exactly one provider path, which need not exist.
//!
//! ## Formatting
//!
//! [`format_path`] renders each resolved path as one of four kinds:
//!
//! - **Simple**: `/work/a.txt`
//! - **`ProviderQualified`**: `FileSystem::/work/a.txt`
//! - **`DriveQualified`**: `Root:\work\a.txt`
//! - **Relative**: `.\a.txt` (from `/work`)
//!
//! # Examples
//!
//! ```
//! use provpath::namespace::{Namespace, Provider};
//! use provpath::path::{transform, PathInput, PathItem, PathKind};
//!
//! let ns = Namespace::new(vec![
//!     Provider::listed("FileSystem")
//!         .with_drive("Root", "/")
//!         .with_items(["/work/a.txt", "/work/b.txt", "/work/c.md"]),
//! ])
//! .unwrap()
//! .with_location("Root", "/work")
//! .unwrap();
//!
//! let input: PathInput = vec![PathItem::from("*.txt"), PathItem::from("/etc")].into();
//! let paths = transform(Some(&input), PathKind::DriveQualified, &ns).unwrap();
//! assert_eq!(paths, vec!["Root:\\work\\a.txt", "Root:\\work\\b.txt", "Root:\\etc"]);
//! ```

pub mod context;
pub mod format;
pub mod input;
pub mod normalize;
pub mod transform;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use context::PathResolutionContext;
pub use format::format_path;
pub use input::{unwrap_paths, FileEntry, PathInput, PathItem};
pub use transform::{transform, PathTransformer};
pub use types::{DriveHandle, PathKind, ProviderHandle, ResolvedPath};
