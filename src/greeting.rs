// 👋 Greeting - style selection and formatting
//
// greet(style, person) = "<prefix>, <name>!"
//   Formal → "Good day"
//   Casual → "Hi"

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::person::Person;

// ============================================================================
// GREETING STYLE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Greeting {
    /// "Good day, ..."
    Formal,

    /// "Hi, ..."
    Casual,
}

impl Greeting {
    pub const ALL: [Greeting; 2] = [Greeting::Formal, Greeting::Casual];

    pub fn prefix(&self) -> &'static str {
        match self {
            Greeting::Formal => "Good day",
            Greeting::Casual => "Hi",
        }
    }

    /// Lowercase name, same as the JSON form
    pub fn as_str(&self) -> &'static str {
        match self {
            Greeting::Formal => "formal",
            Greeting::Casual => "casual",
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownGreeting {
    pub input: String,
}

impl fmt::Display for UnknownGreeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown greeting style '{}' (expected 'formal' or 'casual')",
            self.input
        )
    }
}

impl std::error::Error for UnknownGreeting {}

impl FromStr for Greeting {
    type Err = UnknownGreeting;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "formal" => Ok(Greeting::Formal),
            "casual" => Ok(Greeting::Casual),
            _ => Err(UnknownGreeting {
                input: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// FORMATTING
// ============================================================================

/// Format a greeting for `person` in the given style.
///
/// Total and pure: only the name is read, the age never shows up.
pub fn greet(style: Greeting, person: &Person) -> String {
    tracing::trace!(style = %style, name = %person.name, "formatting greeting");
    format!("{}, {}!", style.prefix(), person.name)
}

// ============================================================================
// TESTS
// ============================================================================
