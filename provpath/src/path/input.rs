//! Parameter values accepted by the transformer.
//!
//! A bound value may be a plain string, a file-system entry, an object
//! wrapping either of those, or any other displayable object, alone or in a
//! sequence. [`unwrap_paths`] flattens all of these into raw path strings.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// A reference to a file-system entry.
///
/// Its display form is the bare entry name, which omits the location; the
/// transformer always uses [`FileEntry::full_name`] instead.
///
/// # Examples
///
/// ```
/// use provpath::path::FileEntry;
///
/// let entry = FileEntry::new("/a/b.txt");
/// assert_eq!(entry.full_name(), "/a/b.txt");
/// assert_eq!(entry.to_string(), "b.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileEntry {
    full_name: String,
}

impl FileEntry {
    /// Create an entry from its full path text.
    #[must_use]
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
        }
    }

    /// Create an entry from a host path.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        Self::new(path.to_string_lossy())
    }

    /// The full path text of the entry.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// The last component of the entry's path.
    #[must_use]
    pub fn name(&self) -> &str {
        self.full_name
            .trim_end_matches(['/', '\\'])
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default()
    }
}

impl fmt::Display for FileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single parameter value.
#[derive(Clone)]
pub enum PathItem {
    /// A plain string.
    Text(String),
    /// A file-system entry.
    FileEntry(FileEntry),
    /// A generic wrapper around another value.
    Wrapped(Box<PathItem>),
    /// Any other object; only its text conversion is available.
    Opaque(Arc<dyn fmt::Display + Send + Sync>),
}

impl PathItem {
    /// Wrap an item one level deep.
    #[must_use]
    pub fn wrap(item: impl Into<PathItem>) -> Self {
        Self::Wrapped(Box::new(item.into()))
    }

    /// Create an opaque item from any displayable value.
    #[must_use]
    pub fn opaque(value: impl fmt::Display + Send + Sync + 'static) -> Self {
        Self::Opaque(Arc::new(value))
    }
}

impl fmt::Debug for PathItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Self::FileEntry(entry) => f.debug_tuple("FileEntry").field(entry).finish(),
            Self::Wrapped(inner) => f.debug_tuple("Wrapped").field(inner).finish(),
            Self::Opaque(value) => f.debug_tuple("Opaque").field(&value.to_string()).finish(),
        }
    }
}

/// Generic text conversion of an item.
impl fmt::Display for PathItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::FileEntry(entry) => fmt::Display::fmt(entry, f),
            Self::Wrapped(inner) => fmt::Display::fmt(inner, f),
            Self::Opaque(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl From<&str> for PathItem {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PathItem {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<FileEntry> for PathItem {
    fn from(entry: FileEntry) -> Self {
        Self::FileEntry(entry)
    }
}

/// A bound parameter value: one item or an ordered sequence of items.
///
/// # Examples
///
/// ```
/// use provpath::path::{FileEntry, PathInput, PathItem};
///
/// let single = PathInput::from("C:\\work");
/// assert_eq!(single.items().len(), 1);
///
/// let many = PathInput::from(vec![
///     PathItem::from("a.txt"),
///     PathItem::from(FileEntry::new("/a/b.txt")),
/// ]);
/// assert_eq!(many.items().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub enum PathInput {
    /// A scalar value.
    Item(PathItem),
    /// An ordered sequence of values.
    Sequence(Vec<PathItem>),
}

impl PathInput {
    /// The items of this input; a scalar is a one-element sequence.
    #[must_use]
    pub fn items(&self) -> &[PathItem] {
        match self {
            Self::Item(item) => std::slice::from_ref(item),
            Self::Sequence(items) => items,
        }
    }
}

impl From<PathItem> for PathInput {
    fn from(item: PathItem) -> Self {
        Self::Item(item)
    }
}

impl From<&str> for PathInput {
    fn from(s: &str) -> Self {
        Self::Item(s.into())
    }
}

impl From<String> for PathInput {
    fn from(s: String) -> Self {
        Self::Item(s.into())
    }
}

impl From<FileEntry> for PathInput {
    fn from(entry: FileEntry) -> Self {
        Self::Item(entry.into())
    }
}

impl From<Vec<PathItem>> for PathInput {
    fn from(items: Vec<PathItem>) -> Self {
        Self::Sequence(items)
    }
}

impl FromIterator<PathItem> for PathInput {
    fn from_iter<I: IntoIterator<Item = PathItem>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().collect())
    }
}

/// Flatten a bound value into raw path strings.
///
/// Absent input yields an empty vector: the value has not arrived yet.
///
/// # Examples
///
/// ```
/// use provpath::path::{unwrap_paths, FileEntry, PathInput, PathItem};
///
/// assert!(unwrap_paths(None).is_empty());
///
/// let input = PathInput::from(PathItem::wrap(FileEntry::new("/a/b.txt")));
/// assert_eq!(unwrap_paths(Some(&input)), vec!["/a/b.txt"]);
/// ```
#[must_use]
pub fn unwrap_paths(input: Option<&PathInput>) -> Vec<String> {
    let Some(input) = input else {
        return Vec::new();
    };
    input.items().iter().map(unwrap_item).collect()
}

fn unwrap_item(item: &PathItem) -> String {
    match item {
        PathItem::FileEntry(entry) => entry.full_name().to_string(),
        PathItem::Wrapped(inner) => match inner.as_ref() {
            PathItem::FileEntry(entry) => entry.full_name().to_string(),
            other => other.to_string(),
        },
        other => other.to_string(),
    }
}
