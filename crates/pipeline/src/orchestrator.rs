//! Authoritative-then-generative identification.
//!
//! For each person the lookup runs first. An article with a non-empty summary
//! is condensed by the generative identifier and tagged with its source URL;
//! anything else falls back to generative recall tagged with a note saying
//! why. The tag is always present, so the categorizer can tell verified from
//! speculative output without calling any service again.

use futures::stream::{self, StreamExt};
use indexmap::IndexMap;
use tracing::{info, warn};

use notable_core::identification::{LOOKUP_ERROR_NOTE, NO_ARTICLE_NOTE};
use notable_core::{Identification, LookupOutcome, PersonName};
use notable_llm::GenerativeIdentifier;
use notable_search::LookupSource;

/// Returned for names that cannot be split into first and last parts.
pub const INVALID_NAME_MESSAGE: &str = "Invalid name format. Expected 'FirstName LastName'";

pub struct FallbackOrchestrator {
    lookup: Box<dyn LookupSource>,
    identifier: GenerativeIdentifier,
    /// Maximum people in flight during a batch (>= 1).
    concurrency: usize,
}

impl FallbackOrchestrator {
    /// Sequential orchestrator (one person at a time).
    pub fn new(lookup: Box<dyn LookupSource>, identifier: GenerativeIdentifier) -> Self {
        Self {
            lookup,
            identifier,
            concurrency: 1,
        }
    }

    /// Allow up to `concurrency` people in flight during a batch. 0 is treated as 1.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    pub fn identifier(&self) -> &GenerativeIdentifier {
        &self.identifier
    }

    /// Identify one person: authoritative summary when available, generative recall otherwise.
    pub async fn identify_with_fallback(&self, person: &PersonName) -> Identification {
        let result = self.lookup.lookup(&person.first, &person.last).await;

        match result.outcome {
            LookupOutcome::Found { title, summary, url } if !summary.is_empty() => {
                info!(name = %result.name, %title, source = self.lookup.source_name(), "condensing article summary");
                let max_tokens = self.identifier.settings().identify_max_tokens;
                let text = self.identifier.summarize(&result.name, &summary, max_tokens).await;
                let identification = Identification::new(text);
                match url {
                    Some(url) => identification.with_source(&url),
                    None => identification,
                }
            }
            LookupOutcome::Failed { reason } => {
                warn!(name = %result.name, %reason, "lookup failed, using generative fallback");
                let text = self.identifier.identify(&person.first, &person.last).await;
                Identification::new(text).with_note(LOOKUP_ERROR_NOTE)
            }
            LookupOutcome::Found { .. } | LookupOutcome::NotFound => {
                info!(name = %result.name, "no usable article, using generative fallback");
                let text = self.identifier.identify(&person.first, &person.last).await;
                Identification::new(text).with_note(NO_ARTICLE_NOTE)
            }
        }
    }

    /// Identify from a `"First Last"` string. Malformed names are answered
    /// immediately without touching either service.
    pub async fn identify_full_name(&self, full_name: &str) -> Identification {
        match PersonName::parse(full_name) {
            Ok(person) => self.identify_with_fallback(&person).await,
            Err(e) => {
                warn!(name = %full_name, error = %e, "skipping malformed name");
                Identification::new(INVALID_NAME_MESSAGE)
            }
        }
    }

    /// Identify everyone in input order.
    ///
    /// Keys keep first-seen order. Duplicate names are processed every time
    /// and the later result replaces the earlier one.
    pub async fn batch_identify_with_fallback(
        &self,
        people: &[PersonName],
    ) -> IndexMap<String, Identification> {
        info!(people = people.len(), concurrency = self.concurrency, "starting batch");

        let results: Vec<(String, Identification)> = stream::iter(people)
            .map(|person| async move {
                (person.full_name(), self.identify_with_fallback(person).await)
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        collect_last_write_wins(results)
    }

    /// Batch over raw `"First Last"` strings, keyed by the trimmed input.
    pub async fn batch_identify_names(&self, names: &[String]) -> IndexMap<String, Identification> {
        let results: Vec<(String, Identification)> = stream::iter(names)
            .map(|name| async move {
                let key = match PersonName::parse(name) {
                    Ok(person) => person.full_name(),
                    Err(_) => name.trim().to_string(),
                };
                (key, self.identify_full_name(name).await)
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        collect_last_write_wins(results)
    }
}

fn collect_last_write_wins(
    results: Vec<(String, Identification)>,
) -> IndexMap<String, Identification> {
    let mut map = IndexMap::with_capacity(results.len());
    for (name, identification) in results {
        map.insert(name, identification);
    }
    map
}
