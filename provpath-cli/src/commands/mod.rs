//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `transform`: Resolve paths and print them in a canonical form
//! - `providers`: List providers, drives and current locations
//! - `show_location`: Show the current location
//! - `validate`: Validate configuration
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod providers;
pub mod show_location;
pub mod transform;
pub mod validate;

pub use completions::CompletionsCommand;
pub use providers::ProvidersCommand;
pub use show_location::ShowLocationCommand;
pub use transform::TransformCommand;
pub use validate::ValidateCommand;
