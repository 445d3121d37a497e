//! Per-call generation options and results.

use serde::{Deserialize, Serialize};

use super::{ComplimentType, SpecificityLevel};

/// Options for a single compliment generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Template category.
    #[serde(default)]
    pub kind: ComplimentType,

    /// Modifier intensity.
    #[serde(default)]
    pub specificity: SpecificityLevel,

    /// Name woven into the compliment, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,

    /// Restrict to work-appropriate content. Only affects the cache key today.
    #[serde(default = "default_work_safe")]
    pub work_safe: bool,
}

fn default_work_safe() -> bool {
    true
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            kind: ComplimentType::default(),
            specificity: SpecificityLevel::default(),
            recipient_name: None,
            work_safe: default_work_safe(),
        }
    }
}

impl GenerateOptions {
    /// Create options with the default category and specificity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the template category.
    pub fn kind(mut self, kind: ComplimentType) -> Self {
        self.kind = kind;
        self
    }

    /// Set the specificity level.
    pub fn specificity(mut self, specificity: SpecificityLevel) -> Self {
        self.specificity = specificity;
        self
    }

    /// Set the recipient name. An empty name is treated as no name.
    pub fn recipient_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.recipient_name = (!name.is_empty()).then_some(name);
        self
    }

    /// Set the work-safe flag.
    pub fn work_safe(mut self, work_safe: bool) -> Self {
        self.work_safe = work_safe;
        self
    }

    /// Cache key for this generation context: `{type}-{specificity}-{safe|any}`.
    ///
    /// The recipient name is not part of the key.
    pub fn cache_key(&self) -> String {
        let safety = if self.work_safe { "safe" } else { "any" };
        format!("{}-{}-{safety}", self.kind, self.specificity)
    }
}

/// Where a generated compliment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Drawn from the persisted cache.
    Cache,
    /// Synthesized from the fallback content bank.
    Fallback,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cache => "cache",
            Self::Fallback => "fallback",
        }
    }
}

/// A generated compliment with diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generated {
    /// The final, personalized compliment.
    pub text: String,
    /// Whether it came from the cache or fresh synthesis.
    pub source: Source,
    /// Cache key of the generation context.
    pub cache_key: String,
    /// True when a store failure was absorbed during this call.
    pub degraded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_key_is_random_medium_safe() {
        assert_eq!(GenerateOptions::default().cache_key(), "random-medium-safe");
    }

    #[test]
    fn key_is_stable_for_same_discriminators() {
        let a = GenerateOptions::new()
            .kind(ComplimentType::Animal)
            .specificity(SpecificityLevel::High)
            .work_safe(false);
        let b = a.clone().recipient_name("Sam");
        assert_eq!(a.cache_key(), "animal-high-any");
        assert_eq!(a.cache_key(), b.cache_key());
        assert_eq!(a.cache_key(), a.cache_key());
    }

    #[test]
    fn empty_recipient_name_is_none() {
        let opts = GenerateOptions::new().recipient_name("");
        assert_eq!(opts.recipient_name, None);
    }

    #[test]
    fn deserialize_fills_defaults() {
        let opts: GenerateOptions = serde_json::from_str(r#"{"kind":"skill"}"#).unwrap();
        assert_eq!(opts.kind, ComplimentType::Skill);
        assert_eq!(opts.specificity, SpecificityLevel::Medium);
        assert!(opts.work_safe);
    }
}
