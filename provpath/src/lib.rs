#![cfg_attr(not(test), deny(missing_docs))]
#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # provpath
//!
//! A library for transforming loosely-typed path arguments into canonical
//! provider paths.
//!
//! A command parameter declares the [`PathKind`] it wants. Whatever the
//! caller binds to it (strings, file entries, wrapped objects, sequences of
//! these, wildcard patterns) is resolved through a
//! [`PathResolutionContext`] and re-formatted into that kind.
//!
//! ## Core Types
//!
//! - [`PathTransformer`] and [`PathKind`]: the transformation entry point
//! - [`PathInput`] and [`PathItem`]: bound parameter values
//! - [`PathResolutionContext`]: the provider and drive resolution capability
//! - [`Namespace`]: a concrete context built from [`Config`]
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use provpath::{Namespace, PathInput, PathKind, PathTransformer, Provider};
//!
//! let ns = Namespace::new(vec![Provider::listed("FileSystem").with_drive("Root", "/")])
//!     .unwrap()
//!     .with_location("Root", "/work")
//!     .unwrap();
//!
//! let input = PathInput::from("/work/sub/file.txt");
//! let relative = PathTransformer::new(PathKind::Relative)
//!     .transform(Some(&input), &ns)
//!     .unwrap();
//! assert_eq!(relative, vec![".\\sub\\file.txt"]);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod namespace;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use namespace::{Namespace, Provider};
pub use path::{
    transform, unwrap_paths, DriveHandle, FileEntry, PathInput, PathItem, PathKind,
    PathResolutionContext, PathTransformer, ProviderHandle, ResolvedPath,
};
