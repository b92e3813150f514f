//! Identification and classification pipeline.
//!
//! - [`FallbackOrchestrator`] chains the authoritative lookup with the
//!   generative fallback, one name or a whole batch at a time
//! - [`categorize`] maps one identification to a notability [`Category`]
//! - [`aggregate`] groups categorized results into a [`BatchReport`]

pub mod categorize;
pub mod category;
pub mod notability;
pub mod orchestrator;
pub mod report;

pub use categorize::{categorize, Rule, RULES};
pub use category::{CategorizedResult, Category, Confidence};
pub use notability::{assess_notability, NotabilityVerdict};
pub use orchestrator::{FallbackOrchestrator, INVALID_NAME_MESSAGE};
pub use report::{aggregate, BatchReport};
