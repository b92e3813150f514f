//! Substring heuristics that turn an identification into a notability category.
//!
//! Rules are evaluated in order and the first match wins. The order matters:
//! categories are not textually exclusive, so the provenance and error rules
//! must run before the keyword rules.

use notable_core::identification::SOURCE_MARKER;
use notable_core::Identification;

use crate::category::{CategorizedResult, Category, Confidence};

const NO_ARTICLE: &str = "No Wikipedia article found";
const UNKNOWN_PERSON: &str = "Unknown person";

/// Matched against the lower-cased identification.
const FICTION_KEYWORDS: &[&str] = &["fictional", "character", "anime", "movie", "tv show", "novel"];

/// One categorization rule.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub category: Category,
    pub confidence: Confidence,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("confidence", &self.confidence)
            .finish()
    }
}

pub const RULES: &[Rule] = &[
    Rule {
        name: "wikipedia-source",
        matches: has_source_marker,
        category: Category::VerifiedNotable,
        confidence: Confidence::High,
    },
    Rule {
        name: "error",
        matches: mentions_error,
        category: Category::Error,
        confidence: Confidence::NotApplicable,
    },
    Rule {
        name: "no-article-unknown",
        matches: no_article_and_unknown,
        category: Category::UnknownNonNotable,
        confidence: Confidence::Low,
    },
    Rule {
        name: "no-article",
        matches: no_article,
        category: Category::PossiblyNotableUnverified,
        confidence: Confidence::Medium,
    },
    Rule {
        name: "fiction-keyword",
        matches: mentions_fiction,
        category: Category::FictionalCharacter,
        confidence: Confidence::High,
    },
    Rule {
        name: "default",
        matches: always,
        category: Category::UnknownNonNotable,
        confidence: Confidence::Low,
    },
];

fn has_source_marker(text: &str) -> bool {
    text.contains(SOURCE_MARKER)
}

fn mentions_error(text: &str) -> bool {
    text.contains("Error") || text.contains("error")
}

fn no_article_and_unknown(text: &str) -> bool {
    text.contains(NO_ARTICLE) && text.contains(UNKNOWN_PERSON)
}

fn no_article(text: &str) -> bool {
    text.contains(NO_ARTICLE)
}

fn mentions_fiction(text: &str) -> bool {
    let lower = text.to_lowercase();
    FICTION_KEYWORDS.iter().any(|k| lower.contains(k))
}

fn always(_: &str) -> bool {
    true
}

/// First rule in [`RULES`] matching `text`.
pub fn matching_rule(text: &str) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| (rule.matches)(text))
        .unwrap_or(&RULES[RULES.len() - 1])
}

/// Categorize one identification. Pure and deterministic.
pub fn categorize(full_name: &str, identification: &Identification) -> CategorizedResult {
    let rule = matching_rule(identification.as_str());
    CategorizedResult {
        name: full_name.to_string(),
        category: rule.category,
        confidence: rule.confidence,
        details: identification.clone(),
    }
}
