//! Library record types.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ComplimentType, GenerateOptions, SpecificityLevel};

/// A compliment the user chose to keep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCompliment {
    pub id: String,
    pub text: String,
    /// RFC 3339 UTC timestamp of when it was saved.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl SavedCompliment {
    /// A new record with a fresh id, stamped now.
    pub fn new(text: impl Into<String>, category: Option<&str>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            category: category.map(str::to_string),
        }
    }
}

/// Persisted generation preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(rename = "complimentType")]
    pub kind: ComplimentType,
    pub specificity: SpecificityLevel,
    pub work_safe: bool,
    /// Empty means no recipient.
    pub recipient_name: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            kind: ComplimentType::Random,
            specificity: SpecificityLevel::Medium,
            work_safe: true,
            recipient_name: String::new(),
        }
    }
}

impl Preferences {
    /// Generation options reflecting these preferences.
    pub fn to_options(&self) -> GenerateOptions {
        GenerateOptions::new()
            .kind(self.kind)
            .specificity(self.specificity)
            .work_safe(self.work_safe)
            .recipient_name(self.recipient_name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_compliment_shape() {
        let saved = SavedCompliment::new("Nice hat", Some("Funny"));
        assert_eq!(saved.text, "Nice hat");
        assert_eq!(saved.category.as_deref(), Some("Funny"));
        assert!(uuid::Uuid::parse_str(&saved.id).is_ok());
        assert!(chrono::DateTime::parse_from_rfc3339(&saved.date).is_ok());
        assert!(saved.date.ends_with('Z'));
    }

    #[test]
    fn uncategorized_omits_field() {
        let saved = SavedCompliment::new("Nice hat", None);
        let json = serde_json::to_string(&saved).unwrap();
        assert!(!json.contains("category"));
    }

    #[test]
    fn preferences_to_options() {
        let prefs = Preferences {
            kind: ComplimentType::Skill,
            specificity: SpecificityLevel::High,
            work_safe: false,
            recipient_name: String::new(),
        };
        let opts = prefs.to_options();
        assert_eq!(opts.cache_key(), "skill-high-any");
        assert_eq!(opts.recipient_name, None);
    }

    #[test]
    fn preferences_serialize_camel_case() {
        let json = serde_json::to_value(Preferences::default()).unwrap();
        assert_eq!(json["complimentType"], "random");
        assert_eq!(json["workSafe"], true);
        assert_eq!(json["recipientName"], "");
    }
}
