//! Authoritative person lookup.
//!
//! [`LookupSource`] is the seam the identification pipeline depends on;
//! [`WikipediaSearch`] is the encyclopedia-backed implementation.

pub mod source;
pub mod wikipedia;

pub use source::LookupSource;
pub use wikipedia::{WikipediaError, WikipediaSearch};
