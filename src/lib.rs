/// Shared command-line plumbing for the three binaries
pub mod cli;

/// Error taxonomy shared by every component
pub mod error;

/// Markdown rendering of milestones, issues and pull requests
pub mod formatter;

/// GitHub REST client and wire types
pub mod github;

/// Fetcher, record stores and the document/wiki generators
pub mod services;

/// Core type definitions and domain models used throughout the library
pub mod types;

pub use error::{Error, Result};
