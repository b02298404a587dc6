use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label(String);

impl Label {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Label(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<String> for Label {
    fn from(name: String) -> Self {
        Label(name)
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Label(name.to_string())
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
