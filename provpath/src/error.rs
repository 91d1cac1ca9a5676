//! Error types for the provpath library.
//!
//! This module provides the error hierarchy for path resolution and the
//! ambient configuration layer, using `thiserror` for ergonomic error handling.
//!
//! Errors carry an explicit [`ErrorKind`] tag. The transformer relies on that
//! tag to surface a single [`Error::PathResolution`] per failed value without
//! ever wrapping one path-resolution error inside another.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a provpath error.
///
/// # Examples
///
/// ```
/// use provpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("C:\\work".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the provpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// The resolution context could not enumerate matches for a wildcard.
    #[error("cannot expand wildcard '{pattern}': {reason}")]
    WildcardExpansion {
        /// The pattern that could not be expanded.
        pattern: String,
        /// The reason the expansion failed.
        reason: String,
    },

    /// A literal path could not be resolved to a provider path.
    #[error("cannot resolve path '{path}': {reason}")]
    LiteralResolution {
        /// The path that could not be resolved.
        path: String,
        /// The reason the resolution failed.
        reason: String,
    },

    /// No relative expression exists between a path and a root.
    #[error("cannot express '{path}' relative to '{root}': {reason}")]
    RelativeNormalization {
        /// The path being made relative.
        path: String,
        /// The root it was made relative to.
        root: String,
        /// The reason no relative form exists.
        reason: String,
    },

    /// A parameter value could not be transformed.
    ///
    /// This is the only error the transformer surfaces. It carries the
    /// offending raw path text and the underlying cause.
    #[error("cannot determine path ('{path}'): {source}")]
    PathResolution {
        /// The raw path text that failed.
        path: String,
        /// The underlying failure.
        #[source]
        source: Box<Error>,
    },

    /// No provider with the given name is registered.
    #[error("unknown provider: {name}")]
    UnknownProvider {
        /// The provider name that was looked up.
        name: String,
    },

    /// No drive with the given name is registered.
    #[error("unknown drive: {name}")]
    UnknownDrive {
        /// The drive name that was looked up.
        name: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Closed set of error kinds, one per [`Error`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::WildcardExpansion`].
    WildcardExpansion,
    /// See [`Error::LiteralResolution`].
    LiteralResolution,
    /// See [`Error::RelativeNormalization`].
    RelativeNormalization,
    /// See [`Error::PathResolution`].
    PathResolution,
    /// See [`Error::UnknownProvider`].
    UnknownProvider,
    /// See [`Error::UnknownDrive`].
    UnknownDrive,
    /// See [`Error::InvalidPath`].
    InvalidPath,
    /// See [`Error::Validation`].
    Validation,
    /// See [`Error::Configuration`].
    Configuration,
    /// See [`Error::Io`].
    Io,
}

impl Error {
    /// Returns the kind tag of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use provpath::{Error, ErrorKind};
    ///
    /// let err = Error::UnknownDrive { name: "Q".to_string() };
    /// assert_eq!(err.kind(), ErrorKind::UnknownDrive);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::WildcardExpansion { .. } => ErrorKind::WildcardExpansion,
            Self::LiteralResolution { .. } => ErrorKind::LiteralResolution,
            Self::RelativeNormalization { .. } => ErrorKind::RelativeNormalization,
            Self::PathResolution { .. } => ErrorKind::PathResolution,
            Self::UnknownProvider { .. } => ErrorKind::UnknownProvider,
            Self::UnknownDrive { .. } => ErrorKind::UnknownDrive,
            Self::InvalidPath { .. } => ErrorKind::InvalidPath,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// Check if this error is already classified as a path-resolution error.
    #[must_use]
    pub fn is_path_resolution(&self) -> bool {
        self.kind() == ErrorKind::PathResolution
    }

    /// Attach the offending raw path text to this error.
    ///
    /// Errors already classified as [`ErrorKind::PathResolution`] are
    /// returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use provpath::{Error, ErrorKind};
    ///
    /// let cause = Error::UnknownDrive { name: "Q".to_string() };
    /// let wrapped = cause.for_path("Q:\\data");
    /// assert_eq!(wrapped.kind(), ErrorKind::PathResolution);
    ///
    /// // Wrapping again is a no-op
    /// let again = wrapped.for_path("other");
    /// assert!(again.to_string().contains("Q:\\data"));
    /// ```
    #[must_use]
    pub fn for_path(self, path: &str) -> Self {
        if self.is_path_resolution() {
            return self;
        }
        Self::PathResolution {
            path: path.to_string(),
            source: Box::new(self),
        }
    }

    /// Returns the raw path text of a path-resolution error.
    #[must_use]
    pub fn offending_path(&self) -> Option<&str> {
        match self {
            Self::PathResolution { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Check if error indicates that a provider or drive is unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use provpath::Error;
    ///
    /// let err = Error::UnknownProvider { name: "Registry".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownProvider { .. } | Self::UnknownDrive { .. })
    }
}
