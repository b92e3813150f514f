//! Random-person data source.
//!
//! Supplies the raw first/last name pairs the identification pipeline runs
//! over, plus the birth-year filter and sampling applied before a batch.

pub mod random_user;
pub mod select;
pub mod source;

pub use random_user::RandomUserClient;
pub use select::{filter_born_on_or_before, select_random, DEFAULT_MAX_BIRTH_YEAR};
pub use source::{PersonSource, RandomUser, UserSourceError};
