// Greeter - Core Library
// Exposes the greeting core for the CLI, the API server, and tests

pub mod person;
pub mod greeting;
pub mod batch;
pub mod config;

// Re-export commonly used types
pub use person::{Person, ValidationError, ValidationResult, DEFAULT_AGE, DEFAULT_NAME};
pub use greeting::{greet, Greeting, UnknownGreeting};
pub use batch::{greet_all, load_requests, GreetingRequest, GreetingResponse};
pub use config::GreeterConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
