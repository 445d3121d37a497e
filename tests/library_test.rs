//! Tests for [`ComplimentLibrary`]: favorites, history, categories and preferences.

use std::sync::Arc;

use async_trait::async_trait;

use plaudit::library::{DEFAULT_CATEGORIES, HISTORY_LIMIT, keys};
use plaudit::{
    ComplimentLibrary, ComplimentType, GenerateOptions, KeyValueStore, MemoryStore, PlauditError,
    Preferences, Result, SpecificityLevel,
};

fn library() -> (ComplimentLibrary, MemoryStore) {
    let store = MemoryStore::new();
    (ComplimentLibrary::new(Arc::new(store.clone())), store)
}

struct UnreadableStore;

#[async_trait]
impl KeyValueStore for UnreadableStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(PlauditError::Io(std::io::Error::other("permission denied")))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(PlauditError::Io(std::io::Error::other("permission denied")))
    }

    async fn remove(&self, _key: &str) -> Result<()> {
        Err(PlauditError::Io(std::io::Error::other("permission denied")))
    }
}

// ============================================================================
// Saved compliments
// ============================================================================

#[tokio::test]
async fn save_lists_newest_first() {
    let (library, _) = library();
    let first = library.save("You are kind", None).await.unwrap();
    let second = library.save("You are funny", Some("Funny")).await.unwrap();

    let saved = library.saved().await.unwrap();
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].id, second.id);
    assert_eq!(saved[1].id, first.id);
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn save_also_records_history() {
    let (library, _) = library();
    library.save("You are kind", None).await.unwrap();
    library.save("You are kind", None).await.unwrap();

    assert_eq!(library.history().await.unwrap(), ["You are kind"]);
    assert_eq!(library.saved().await.unwrap().len(), 2);
}

#[tokio::test]
async fn empty_compliment_is_rejected() {
    let (library, _) = library();
    let err = library.save("   ", None).await.unwrap_err();
    assert!(matches!(err, PlauditError::InvalidInput(_)));
    assert!(library.saved().await.unwrap().is_empty());
}

#[tokio::test]
async fn filter_by_category() {
    let (library, _) = library();
    library.save("one", Some("Sweet")).await.unwrap();
    library.save("two", Some("Funny")).await.unwrap();
    library.save("three", None).await.unwrap();

    let sweet = library.saved_in_category("Sweet").await.unwrap();
    assert_eq!(sweet.len(), 1);
    assert_eq!(sweet[0].text, "one");
}

#[tokio::test]
async fn remove_by_id() {
    let (library, _) = library();
    let keep = library.save("keep", None).await.unwrap();
    let gone = library.save("gone", None).await.unwrap();

    assert!(library.remove(&gone.id).await.unwrap());
    assert!(!library.remove(&gone.id).await.unwrap());

    let saved = library.saved().await.unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id, keep.id);
}

#[tokio::test]
async fn saved_compliments_persist_as_json_array() {
    let (library, store) = library();
    library.save("You are kind", Some("Sweet")).await.unwrap();

    let raw = store.get(keys::SAVED).await.unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["text"], "You are kind");
    assert_eq!(value[0]["category"], "Sweet");
    assert!(value[0]["id"].is_string());
    assert!(value[0]["date"].is_string());
}

#[tokio::test]
async fn corrupt_saved_list_is_an_error() {
    let (library, store) = library();
    store.set(keys::SAVED, "not json").await.unwrap();
    assert!(matches!(
        library.saved().await,
        Err(PlauditError::Json(_))
    ));
}

// ============================================================================
// History
// ============================================================================

#[tokio::test]
async fn history_dedupes_and_prepends() {
    let (library, _) = library();
    assert!(library.push_history("a").await.unwrap());
    assert!(library.push_history("b").await.unwrap());
    assert!(!library.push_history("a").await.unwrap());

    assert_eq!(library.history().await.unwrap(), ["b", "a"]);
}

#[tokio::test]
async fn history_is_capped() {
    let (library, _) = library();
    for i in 0..HISTORY_LIMIT + 10 {
        library.push_history(&format!("c{i}")).await.unwrap();
    }

    let history = library.history().await.unwrap();
    assert_eq!(history.len(), HISTORY_LIMIT);
    assert_eq!(history[0], format!("c{}", HISTORY_LIMIT + 9));
}

#[tokio::test]
async fn clear_history() {
    let (library, _) = library();
    library.push_history("a").await.unwrap();
    library.clear_history().await.unwrap();
    assert!(library.history().await.unwrap().is_empty());
}

// ============================================================================
// Categories
// ============================================================================

#[tokio::test]
async fn categories_start_with_defaults() {
    let (library, _) = library();
    assert_eq!(library.categories().await.unwrap(), DEFAULT_CATEGORIES);
}

#[tokio::test]
async fn add_and_remove_categories() {
    let (library, _) = library();
    assert!(library.add_category("Work").await.unwrap());
    assert!(!library.add_category("Work").await.unwrap());
    assert!(library.remove_category("Funny").await.unwrap());
    assert!(!library.remove_category("Funny").await.unwrap());

    assert_eq!(
        library.categories().await.unwrap(),
        ["Inspirational", "Clever", "Sweet", "Work"]
    );
}

#[tokio::test]
async fn blank_category_is_rejected() {
    let (library, _) = library();
    assert!(matches!(
        library.add_category("").await,
        Err(PlauditError::InvalidInput(_))
    ));
}

// ============================================================================
// Preferences
// ============================================================================

#[tokio::test]
async fn preferences_default_when_unset() {
    let (library, _) = library();
    assert!(!library.has_preferences().await.unwrap());
    assert_eq!(library.preferences().await.unwrap(), Preferences::default());
}

#[tokio::test]
async fn preferences_round_trip_as_plain_strings() {
    let (library, store) = library();
    let prefs = Preferences {
        kind: ComplimentType::Animal,
        specificity: SpecificityLevel::High,
        work_safe: false,
        recipient_name: "Sam".to_string(),
    };
    library.set_preferences(&prefs).await.unwrap();

    assert!(library.has_preferences().await.unwrap());
    assert_eq!(library.preferences().await.unwrap(), prefs);
    assert_eq!(
        store.get(keys::COMPLIMENT_TYPE).await.unwrap().as_deref(),
        Some("animal")
    );
    assert_eq!(
        store.get(keys::WORK_SAFE).await.unwrap().as_deref(),
        Some("false")
    );

    let options = library.preferences().await.unwrap().to_options();
    assert_eq!(options.cache_key(), "animal-high-any");
    assert_eq!(options.recipient_name.as_deref(), Some("Sam"));
}

#[tokio::test]
async fn unrecognized_stored_values_fall_back() {
    let (library, store) = library();
    store.set(keys::COMPLIMENT_TYPE, "dragon").await.unwrap();
    store.set(keys::SPECIFICITY, "extreme").await.unwrap();
    store.set(keys::WORK_SAFE, "yes").await.unwrap();

    let prefs = library.preferences().await.unwrap();
    assert_eq!(prefs.kind, ComplimentType::Random);
    assert_eq!(prefs.specificity, SpecificityLevel::Medium);
    // Only the literal "true" enables work-safe
    assert!(!prefs.work_safe);
}

#[tokio::test]
async fn preferred_options_use_stored_preferences() {
    let (library, _) = library();
    let defaults = GenerateOptions::new().kind(ComplimentType::Object);
    assert_eq!(library.preferred_options(&defaults).await, defaults);

    library
        .set_preferences(&Preferences {
            kind: ComplimentType::Skill,
            specificity: SpecificityLevel::Low,
            work_safe: true,
            recipient_name: "Ada".to_string(),
        })
        .await
        .unwrap();

    let options = library.preferred_options(&defaults).await;
    assert_eq!(options.cache_key(), "skill-low-safe");
    assert_eq!(options.recipient_name.as_deref(), Some("Ada"));
}

// ============================================================================
// Unavailable store
// ============================================================================

#[tokio::test]
async fn preferred_options_fall_back_when_store_is_unreadable() {
    let library = ComplimentLibrary::new(Arc::new(UnreadableStore));
    let defaults = GenerateOptions::new()
        .kind(ComplimentType::Animal)
        .recipient_name("Sam");

    assert!(library.has_preferences().await.is_err());
    assert_eq!(library.preferred_options(&defaults).await, defaults);
}

#[tokio::test]
async fn remember_absorbs_store_failures() {
    let library = ComplimentLibrary::new(Arc::new(UnreadableStore));
    assert!(library.push_history("You glow").await.is_err());
    library.remember("You glow").await;
}

#[tokio::test]
async fn remember_records_history() {
    let (library, _) = library();
    library.remember("You glow").await;
    library.remember("You glow").await;
    assert_eq!(library.history().await.unwrap(), ["You glow"]);
}
