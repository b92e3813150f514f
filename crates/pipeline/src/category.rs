use serde::{Deserialize, Serialize};

use notable_core::Identification;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    VerifiedNotable,
    PossiblyNotableUnverified,
    FictionalCharacter,
    UnknownNonNotable,
    Error,
}

impl Category {
    /// Fixed report display order.
    pub const ALL: [Category; 5] = [
        Category::VerifiedNotable,
        Category::PossiblyNotableUnverified,
        Category::FictionalCharacter,
        Category::UnknownNonNotable,
        Category::Error,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::VerifiedNotable => "Verified Notable Person",
            Category::PossiblyNotableUnverified => "Possibly Notable (Unverified)",
            Category::FictionalCharacter => "Fictional Character",
            Category::UnknownNonNotable => "Unknown/Non-Notable",
            Category::Error => "Error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::VerifiedNotable => "✅",
            Category::PossiblyNotableUnverified => "⚠️",
            Category::FictionalCharacter => "🎭",
            Category::UnknownNonNotable => "❌",
            Category::Error => "⚠️",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.icon(), self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
    NotApplicable,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::High => write!(f, "High"),
            Confidence::Medium => write!(f, "Medium"),
            Confidence::Low => write!(f, "Low"),
            Confidence::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// One person's identification with its category and confidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedResult {
    pub name: String,
    pub category: Category,
    pub confidence: Confidence,
    pub details: Identification,
}
