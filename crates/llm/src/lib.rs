pub mod identifier;
pub mod provider;
pub mod providers;

pub use identifier::{GenerativeIdentifier, IdentifierSettings};
pub use provider::{LlmError, LlmProvider, Message, Role};
pub use providers::create_provider;
