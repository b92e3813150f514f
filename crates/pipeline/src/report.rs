//! Batch aggregation and the human-readable report.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use notable_core::Identification;

use crate::categorize::categorize;
use crate::category::{CategorizedResult, Category};

/// Details longer than this many characters are cut in the rendered report.
const MAX_DETAIL_CHARS: usize = 300;

const RULE_WIDTH: usize = 80;

/// Categorized results for one batch, with derived per-category statistics.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    results: Vec<CategorizedResult>,
}

/// Build a report from categorized results, keeping their order.
pub fn aggregate(results: Vec<CategorizedResult>) -> BatchReport {
    BatchReport { results }
}

impl BatchReport {
    /// Categorize a name → identification mapping and aggregate it.
    pub fn from_identifications(identifications: &IndexMap<String, Identification>) -> Self {
        aggregate(
            identifications
                .iter()
                .map(|(name, identification)| categorize(name, identification))
                .collect(),
        )
    }

    pub fn results(&self) -> &[CategorizedResult] {
        &self.results
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn count(&self, category: Category) -> usize {
        self.results.iter().filter(|r| r.category == category).count()
    }

    /// Counts in display order.
    pub fn counts(&self) -> [(Category, usize); 5] {
        Category::ALL.map(|c| (c, self.count(c)))
    }

    /// Results of one category, in insertion order.
    pub fn group(&self, category: Category) -> impl Iterator<Item = &CategorizedResult> {
        self.results.iter().filter(move |r| r.category == category)
    }

    /// Share of the batch in `category`, 0-100. Zero for an empty batch.
    pub fn percentage(&self, category: Category) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(category) as f64 / total as f64 * 100.0
    }

    /// Fraction of the batch verified against the authoritative source, 0-1.
    pub fn verification_rate(&self) -> f64 {
        self.percentage(Category::VerifiedNotable) / 100.0
    }

    /// One-line overview with whole-number percentages.
    pub fn quick_stats(&self) -> String {
        let total = self.total();
        if total == 0 {
            return "No results".to_string();
        }
        let verified = self.count(Category::VerifiedNotable);
        let unknown = self.count(Category::UnknownNonNotable);
        format!(
            "{total} people processed | {verified} verified ({:.0}%) | {unknown} unknown ({:.0}%)",
            self.percentage(Category::VerifiedNotable),
            self.percentage(Category::UnknownNonNotable),
        )
    }

    fn write_summary_statistics(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "SUMMARY STATISTICS")?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;

        let total = self.total();
        if total == 0 {
            return writeln!(f, "No results to display");
        }

        writeln!(f)?;
        writeln!(f, "Total People Processed: {total}")?;
        for (category, count) in self.counts() {
            if count > 0 {
                writeln!(f, "{category}: {count} ({:.1}%)", self.percentage(category))?;
            }
        }

        let verified = self.count(Category::VerifiedNotable);
        writeln!(f)?;
        writeln!(
            f,
            "Verification Success Rate: {verified}/{total} ({:.1}%)",
            self.verification_rate() * 100.0
        )?;

        if verified == 0 {
            writeln!(f)?;
            writeln!(f, "💡 Note: Most randomly generated names belong to nobody notable and won't have")?;
            writeln!(f, "   Wikipedia articles. This is expected. Verified results only appear when")?;
            writeln!(f, "   a name matches a real notable person.")?;
        }
        Ok(())
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "IDENTIFICATION RESULTS - CATEGORIZED")?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f)?;
        writeln!(f, "📊 Quick Stats: {}", self.quick_stats())?;

        for category in Category::ALL {
            let count = self.count(category);
            writeln!(f)?;
            writeln!(f, "{category} ({count} {})", if count == 1 { "person" } else { "people" })?;
            writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;

            if count == 0 {
                writeln!(f, "  (none found)")?;
                continue;
            }

            for item in self.group(category) {
                writeln!(f)?;
                writeln!(f, "  {} (Confidence: {})", item.name, item.confidence)?;
                let (shown, truncated) = truncate_details(item.details.as_str());
                for line in shown.lines().map(str::trim).filter(|l| !l.is_empty()) {
                    writeln!(f, "    {line}")?;
                }
                if truncated {
                    writeln!(f, "    ... (truncated)")?;
                }
            }
        }

        self.write_summary_statistics(f)?;

        writeln!(f)?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))
    }
}

/// Cut long details at the last sentence end (or line break) within the limit.
fn truncate_details(details: &str) -> (&str, bool) {
    let Some((limit, _)) = details.char_indices().nth(MAX_DETAIL_CHARS) else {
        return (details, false);
    };

    let head = &details[..limit];
    let cut = head
        .rfind('.')
        .or_else(|| head.rfind('\n'))
        .map(|i| i + 1)
        .unwrap_or(limit);
    (&details[..cut], true)
}
