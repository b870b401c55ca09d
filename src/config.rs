// ⚙️ Configuration - JSON file, then environment overrides
//
// Precedence (last wins): built-in defaults → config file → GREETER_* env vars

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::greeting::Greeting;
use crate::person::Person;

pub const ENV_STYLE: &str = "GREETER_STYLE";
pub const ENV_NAME: &str = "GREETER_NAME";
pub const ENV_AGE: &str = "GREETER_AGE";
pub const ENV_ADDR: &str = "GREETER_ADDR";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreeterConfig {
    /// Style used when none is given
    pub default_style: Greeting,

    /// Person greeted when none is given. A partial person keeps the
    /// fixture values for the fields it leaves out.
    pub default_person: Person,

    /// Listen address for the HTTP server
    pub bind_addr: String,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        GreeterConfig {
            default_style: Greeting::Formal,
            default_person: Person::default_person(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl GreeterConfig {
    /// Load from a JSON file. Missing fields keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        serde_json::from_str(&content).context("Failed to parse config JSON")
    }

    /// Defaults, then the file (if any), then the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        let config = config.apply_env()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    pub fn apply_env(self) -> Result<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply GREETER_* overrides from any key lookup
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(style) = lookup(ENV_STYLE) {
            self.default_style = style
                .parse::<Greeting>()
                .with_context(|| format!("Invalid {}", ENV_STYLE))?;
        }

        if let Some(name) = lookup(ENV_NAME) {
            self.default_person.name = name;
        }

        if let Some(age) = lookup(ENV_AGE) {
            self.default_person.age = age
                .trim()
                .parse::<i64>()
                .with_context(|| format!("Invalid {}: '{}'", ENV_AGE, age))?;
        }

        if let Some(addr) = lookup(ENV_ADDR) {
            self.bind_addr = addr;
        }

        Ok(self)
    }
}

// ============================================================================
// TESTS
// ============================================================================
