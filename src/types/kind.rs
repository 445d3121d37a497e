//! Generation discriminators: compliment category and specificity level.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PlauditError;

/// Template category a compliment is drawn from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplimentType {
    Animal,
    Object,
    Skill,
    #[default]
    Random,
}

impl ComplimentType {
    /// All categories, in bank order.
    pub const ALL: [ComplimentType; 4] = [Self::Animal, Self::Object, Self::Skill, Self::Random];

    /// Canonical lowercase name, as used in cache keys and the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Animal => "animal",
            Self::Object => "object",
            Self::Skill => "skill",
            Self::Random => "random",
        }
    }

    /// Parse a category name, routing anything unrecognized to [`Random`](Self::Random).
    ///
    /// Use this for untrusted input (stored preferences, CLI arguments) where
    /// an unknown category should still produce a compliment.
    pub fn lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::debug!(name, "unknown compliment type, using random");
            Self::Random
        })
    }
}

impl fmt::Display for ComplimentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplimentType {
    type Err = PlauditError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "animal" => Ok(Self::Animal),
            "object" => Ok(Self::Object),
            "skill" => Ok(Self::Skill),
            "random" => Ok(Self::Random),
            other => Err(PlauditError::InvalidInput(format!(
                "unknown compliment type '{other}'"
            ))),
        }
    }
}

/// How strongly a compliment is intensified with a modifier phrase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecificityLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl SpecificityLevel {
    pub const ALL: [SpecificityLevel; 3] = [Self::Low, Self::Medium, Self::High];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for SpecificityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpecificityLevel {
    type Err = PlauditError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(PlauditError::InvalidInput(format!(
                "unknown specificity level '{other}'"
            ))),
        }
    }
}
