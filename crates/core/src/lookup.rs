use serde::{Deserialize, Serialize};

/// What the authoritative source said about a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// An article matched. `summary` may be empty when the source has no extract.
    Found {
        title: String,
        summary: String,
        url: Option<String>,
    },
    /// The search completed and nothing matched. Not a failure.
    NotFound,
    /// Transport failure or an unexpected response shape.
    Failed { reason: String },
}

/// Result of one authoritative lookup for a full name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub name: String,
    pub outcome: LookupOutcome,
}

impl LookupResult {
    pub fn found(
        name: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
        url: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            outcome: LookupOutcome::Found {
                title: title.into(),
                summary: summary.into(),
                url,
            },
        }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: LookupOutcome::NotFound,
        }
    }

    pub fn failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: LookupOutcome::Failed {
                reason: reason.into(),
            },
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self.outcome, LookupOutcome::Found { .. })
    }

    pub fn title(&self) -> Option<&str> {
        match &self.outcome {
            LookupOutcome::Found { title, .. } => Some(title),
            _ => None,
        }
    }

    pub fn summary(&self) -> Option<&str> {
        match &self.outcome {
            LookupOutcome::Found { summary, .. } => Some(summary),
            _ => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match &self.outcome {
            LookupOutcome::Found { url, .. } => url.as_deref(),
            _ => None,
        }
    }

    /// Failure reason. `None` for both found and clean not-found results.
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            LookupOutcome::Failed { reason } => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_exposes_title_summary_url() {
        let r = LookupResult::found(
            "Isaac Newton",
            "Isaac Newton",
            "English mathematician",
            Some("https://en.wikipedia.org/wiki/Isaac_Newton".into()),
        );
        assert!(r.is_found());
        assert_eq!(r.title(), Some("Isaac Newton"));
        assert_eq!(r.summary(), Some("English mathematician"));
        assert_eq!(r.url(), Some("https://en.wikipedia.org/wiki/Isaac_Newton"));
        assert_eq!(r.error(), None);
    }

    #[test]
    fn found_with_empty_summary_still_has_summary() {
        let r = LookupResult::found("A B", "A B", "", None);
        assert_eq!(r.summary(), Some(""));
        assert_eq!(r.url(), None);
    }

    #[test]
    fn not_found_has_no_error() {
        let r = LookupResult::not_found("Nobody Here");
        assert!(!r.is_found());
        assert_eq!(r.error(), None);
        assert_eq!(r.summary(), None);
    }

    #[test]
    fn failed_carries_reason() {
        let r = LookupResult::failed("Nobody Here", "Wikipedia search failed: timeout");
        assert!(!r.is_found());
        assert_eq!(r.error(), Some("Wikipedia search failed: timeout"));
        assert_eq!(r.title(), None);
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(LookupOutcome::NotFound).unwrap();
        assert_eq!(json["status"], "not_found");
    }
}
