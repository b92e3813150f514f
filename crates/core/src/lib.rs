pub mod config;
pub mod error;
pub mod identification;
pub mod lookup;
pub mod person;

pub use config::Config;
pub use error::*;
pub use identification::Identification;
pub use lookup::{LookupOutcome, LookupResult};
pub use person::PersonName;
