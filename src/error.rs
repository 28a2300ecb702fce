use std::fmt::{self, Display};

/// Error type for the fallible parts of the crate: building tables from
/// structured input. Rendering itself never fails.
#[derive(Debug, Clone)]
pub struct TabulonError {
    pub message: String,
}

impl TabulonError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl Display for TabulonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for TabulonError {}

impl From<serde_json::Error> for TabulonError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}
