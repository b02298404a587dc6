pub mod issue;
pub mod milestone;
pub mod pull_request;

use serde::{Deserialize, Serialize};

pub use issue::*;
pub use milestone::*;
pub use pull_request::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownContent(pub String);

impl MarkdownContent {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MarkdownContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
