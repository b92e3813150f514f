use serde::{Deserialize, Serialize};

/// Marker appended when the identification was condensed from an article.
pub const SOURCE_MARKER: &str = "(Source: Wikipedia -";

/// Note appended when no article matched.
pub const NO_ARTICLE_NOTE: &str = "\n\n(Note: No Wikipedia article found)";

/// Note appended when the authoritative lookup itself failed.
pub const LOOKUP_ERROR_NOTE: &str = "\n\n(Note: Wikipedia search encountered an error)";

/// Free-text identification of one person, optionally carrying a provenance tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identification(String);

impl Identification {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Append `"\n\n(Source: Wikipedia - {url})"`.
    pub fn with_source(mut self, url: &str) -> Self {
        self.0.push_str(&format!("\n\n{} {})", SOURCE_MARKER, url));
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.0.push_str(note);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
