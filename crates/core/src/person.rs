use serde::{Deserialize, Serialize};

use crate::error::NotableError;

/// A person known only by first and last name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

impl PersonName {
    /// Build a name from its parts. Both parts are trimmed and must be non-empty.
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Result<Self, NotableError> {
        let first = first.into().trim().to_string();
        let last = last.into().trim().to_string();

        if first.is_empty() || last.is_empty() {
            return Err(NotableError::MalformedInput(format!(
                "expected non-empty first and last name, got '{}' '{}'",
                first, last
            )));
        }

        Ok(Self { first, last })
    }

    /// Split `"First Last"` on the first space. Everything after it is the last name,
    /// so `"Mary Ann Smith"` becomes `("Mary", "Ann Smith")`.
    pub fn parse(full_name: &str) -> Result<Self, NotableError> {
        let trimmed = full_name.trim();
        let (first, last) = trimmed.split_once(' ').ok_or_else(|| {
            NotableError::MalformedInput(format!(
                "'{}' has no separating space between first and last name",
                trimmed
            ))
        })?;
        Self::new(first, last)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}
