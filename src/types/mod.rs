//! Core type definitions and domain models
//!
//! Typed, read-only snapshots of the GitHub records the reports are built
//! from. Each type converts from its REST wire shape with `TryFrom`, so
//! malformed records are rejected where the record stores are read.

pub mod config;
pub mod issue;
pub mod label;
pub mod milestone;
pub mod pull_request;
pub mod repository;

pub use config::*;
pub use issue::*;
pub use label::*;
pub use milestone::*;
pub use pull_request::*;
pub use repository::*;
