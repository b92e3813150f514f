use serde::{Deserialize, Serialize};

/// Matched against the lower-cased identification.
const NOTABLE_KEYWORDS: &[&str] = &[
    "famous",
    "renowned",
    "acclaimed",
    "nobel",
    "oscar",
    "grammy",
    "president",
    "prime minister",
    "ceo",
    "founder",
    "inventor",
    "scientist",
    "author",
    "actor",
    "actress",
    "musician",
    "artist",
    "director",
    "producer",
    "athlete",
    "champion",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotabilityVerdict {
    Yes,
    No,
    Uncertain,
}

impl std::fmt::Display for NotabilityVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotabilityVerdict::Yes => write!(f, "YES"),
            NotabilityVerdict::No => write!(f, "NO"),
            NotabilityVerdict::Uncertain => write!(f, "UNCERTAIN"),
        }
    }
}

/// Keyword check for whether an identification describes a public figure.
/// Unidentified or failed identifications are never notable.
pub fn assess_notability(info: &str) -> NotabilityVerdict {
    if info.contains("Unknown") || info.contains("Error") {
        return NotabilityVerdict::No;
    }

    let lower = info.to_lowercase();
    if NOTABLE_KEYWORDS.iter().any(|k| lower.contains(k)) {
        NotabilityVerdict::Yes
    } else {
        NotabilityVerdict::Uncertain
    }
}
