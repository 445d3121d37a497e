//! Saved compliments, viewing history, categories and preferences.
//!
//! [`ComplimentLibrary`] is the user-data side of the app: everything a
//! user chooses to keep. It shares the [`KeyValueStore`] with the generator
//! and stores each collection as JSON under its own key. Unlike the
//! compliment cache, failures here are returned to the caller. The two
//! helpers used alongside generation, [`preferred_options`] and
//! [`remember`], log failures instead.
//!
//! [`preferred_options`]: ComplimentLibrary::preferred_options
//! [`remember`]: ComplimentLibrary::remember

mod types;

pub use types::{Preferences, SavedCompliment};

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::store::KeyValueStore;
use crate::types::{ComplimentType, GenerateOptions, SpecificityLevel};
use crate::{PlauditError, Result};

/// Store keys.
pub mod keys {
    pub const SAVED: &str = "savedCompliments";
    pub const HISTORY: &str = "complimentHistory";
    pub const CATEGORIES: &str = "categories";
    pub const COMPLIMENT_TYPE: &str = "complimentType";
    pub const SPECIFICITY: &str = "specificity";
    pub const WORK_SAFE: &str = "workSafe";
    pub const RECIPIENT_NAME: &str = "recipientName";
}

/// Persisted history keeps at most this many compliments.
pub const HISTORY_LIMIT: usize = 50;

/// Categories offered before the user edits the list.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Funny", "Inspirational", "Clever", "Sweet"];

/// Favorites, history, categories and preferences over a [`KeyValueStore`].
#[derive(Clone)]
pub struct ComplimentLibrary {
    store: Arc<dyn KeyValueStore>,
}

impl ComplimentLibrary {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    async fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.store.get(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn store_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw).await
    }

    // ===== Saved compliments =====

    /// All saved compliments, newest first.
    pub async fn saved(&self) -> Result<Vec<SavedCompliment>> {
        Ok(self.load_json(keys::SAVED).await?.unwrap_or_default())
    }

    /// Saved compliments filed under `category`.
    pub async fn saved_in_category(&self, category: &str) -> Result<Vec<SavedCompliment>> {
        let mut saved = self.saved().await?;
        saved.retain(|s| s.category.as_deref() == Some(category));
        Ok(saved)
    }

    /// Save `text` as a favorite, optionally filed under `category`.
    ///
    /// The compliment is also pushed onto the history if it is not there yet.
    pub async fn save(&self, text: &str, category: Option<&str>) -> Result<SavedCompliment> {
        if text.trim().is_empty() {
            return Err(PlauditError::InvalidInput(
                "cannot save an empty compliment".to_string(),
            ));
        }

        let record = SavedCompliment::new(text, category);
        self.push_history(text).await?;

        let mut saved = self.saved().await?;
        saved.insert(0, record.clone());
        self.store_json(keys::SAVED, &saved).await?;

        debug!(id = %record.id, category = ?record.category, "saved compliment");
        Ok(record)
    }

    /// Remove the saved compliment with `id`. Returns whether one was removed.
    pub async fn remove(&self, id: &str) -> Result<bool> {
        let mut saved = self.saved().await?;
        let before = saved.len();
        saved.retain(|s| s.id != id);
        if saved.len() == before {
            return Ok(false);
        }
        self.store_json(keys::SAVED, &saved).await?;
        Ok(true)
    }

    // ===== History =====

    /// Compliments seen, newest first.
    pub async fn history(&self) -> Result<Vec<String>> {
        Ok(self.load_json(keys::HISTORY).await?.unwrap_or_default())
    }

    /// Put `text` at the front of the history unless it is already present.
    ///
    /// Returns whether the history changed. Only the newest
    /// [`HISTORY_LIMIT`] entries are kept.
    pub async fn push_history(&self, text: &str) -> Result<bool> {
        let mut history = self.history().await?;
        if history.iter().any(|h| h == text) {
            return Ok(false);
        }
        history.insert(0, text.to_string());
        history.truncate(HISTORY_LIMIT);
        self.store_json(keys::HISTORY, &history).await?;
        Ok(true)
    }

    /// Best-effort [`push_history`](Self::push_history): failures are logged.
    pub async fn remember(&self, text: &str) {
        if let Err(e) = self.push_history(text).await {
            warn!(error = %e, "could not record compliment history");
        }
    }

    pub async fn clear_history(&self) -> Result<()> {
        self.store.remove(keys::HISTORY).await
    }

    // ===== Categories =====

    /// The category list, [`DEFAULT_CATEGORIES`] until first edited.
    pub async fn categories(&self) -> Result<Vec<String>> {
        Ok(self
            .load_json(keys::CATEGORIES)
            .await?
            .unwrap_or_else(|| DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()))
    }

    /// Append `category` if it is not already listed. Returns whether it was added.
    pub async fn add_category(&self, category: &str) -> Result<bool> {
        if category.trim().is_empty() {
            return Err(PlauditError::InvalidInput(
                "category name cannot be empty".to_string(),
            ));
        }
        let mut categories = self.categories().await?;
        if categories.iter().any(|c| c == category) {
            return Ok(false);
        }
        categories.push(category.to_string());
        self.store_json(keys::CATEGORIES, &categories).await?;
        Ok(true)
    }

    /// Drop `category` from the list. Saved compliments keep their label.
    pub async fn remove_category(&self, category: &str) -> Result<bool> {
        let mut categories = self.categories().await?;
        let before = categories.len();
        categories.retain(|c| c != category);
        self.store_json(keys::CATEGORIES, &categories).await?;
        Ok(categories.len() != before)
    }

    // ===== Preferences =====

    /// Stored generation preferences, defaults for anything unset.
    ///
    /// Values are plain strings, not JSON. Unknown category names fall back
    /// to `random` and unknown levels to `medium`.
    pub async fn preferences(&self) -> Result<Preferences> {
        let mut prefs = Preferences::default();

        if let Some(kind) = self.store.get(keys::COMPLIMENT_TYPE).await? {
            prefs.kind = ComplimentType::lenient(&kind);
        }
        if let Some(level) = self.store.get(keys::SPECIFICITY).await? {
            prefs.specificity = level.parse().unwrap_or(SpecificityLevel::default());
        }
        if let Some(work_safe) = self.store.get(keys::WORK_SAFE).await? {
            prefs.work_safe = work_safe == "true";
        }
        if let Some(name) = self.store.get(keys::RECIPIENT_NAME).await? {
            prefs.recipient_name = name;
        }

        Ok(prefs)
    }

    /// Generation options from stored preferences, or `defaults` when none
    /// were saved or the store cannot be read.
    pub async fn preferred_options(&self, defaults: &GenerateOptions) -> GenerateOptions {
        let stored = match self.has_preferences().await {
            Ok(true) => self.preferences().await.map(|p| Some(p.to_options())),
            Ok(false) => Ok(None),
            Err(e) => Err(e),
        };
        match stored {
            Ok(Some(options)) => options,
            Ok(None) => defaults.clone(),
            Err(e) => {
                warn!(error = %e, "could not read preferences, using defaults");
                defaults.clone()
            }
        }
    }

    /// Whether preferences were ever saved.
    pub async fn has_preferences(&self) -> Result<bool> {
        Ok(self.store.get(keys::COMPLIMENT_TYPE).await?.is_some())
    }

    /// Persist every preference field.
    pub async fn set_preferences(&self, prefs: &Preferences) -> Result<()> {
        self.store
            .set(keys::COMPLIMENT_TYPE, prefs.kind.as_str())
            .await?;
        self.store
            .set(keys::SPECIFICITY, prefs.specificity.as_str())
            .await?;
        self.store
            .set(keys::WORK_SAFE, if prefs.work_safe { "true" } else { "false" })
            .await?;
        self.store
            .set(keys::RECIPIENT_NAME, &prefs.recipient_name)
            .await
    }
}
