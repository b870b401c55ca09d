// 👤 Person - the record every greeting is addressed to
//
// Plain value type: a name and an age. The name is expected to be
// non-empty, but nothing downstream refuses an empty one.
// Fields missing from JSON fall back to the fixture person.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name used by the fixture person
pub const DEFAULT_NAME: &str = "World";

/// Age used by the fixture person
pub const DEFAULT_AGE: i64 = 42;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Person] {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), Vec<ValidationError>>;

// ============================================================================
// PERSON
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    /// Display name, used verbatim in the greeting
    pub name: String,

    /// Age in years. Signed, any value is accepted; never printed.
    pub age: i64,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Person {
            name: name.into(),
            age,
        }
    }

    /// The fixture constant: `{ name = "World", age = 42 }`
    pub fn default_person() -> Self {
        Person::new(DEFAULT_NAME, DEFAULT_AGE)
    }

    /// Check the naming convention. Advisory only.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError {
                field: "name".to_string(),
                message: "Name is empty".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for Person {
    fn default() -> Self {
        Person::default_person()
    }
}

// ============================================================================
// TESTS
// ============================================================================
