//! Plaudit - randomized compliments with a persistent, expiring cache
//!
//! This crate generates whimsical compliments from a categorized template
//! bank, caches what it generates per generation context in a pluggable
//! [`KeyValueStore`], and avoids repeating anything shown recently. Storage
//! failures never fail a generation.
//!
//! # Example
//!
//! ```rust
//! use plaudit::{ComplimentType, GenerateOptions, MemoryStore, Plaudit, SpecificityLevel};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> plaudit::Result<()> {
//!     let mut generator = Plaudit::builder()
//!         .store(MemoryStore::new())
//!         .build()?;
//!
//!     let compliment = generator
//!         .generate(
//!             &GenerateOptions::new()
//!                 .kind(ComplimentType::Animal)
//!                 .specificity(SpecificityLevel::High)
//!                 .recipient_name("Sam"),
//!         )
//!         .await?;
//!     println!("{compliment}");
//!
//!     let stats = generator.stats().await;
//!     assert_eq!(stats.cached_types, 1);
//!     Ok(())
//! }
//! ```

pub mod bank;
pub mod cache;
#[cfg(feature = "cli")]
pub mod config;
pub mod error;
pub mod generator;
pub mod library;
pub mod store;
pub mod telemetry;
pub mod types;
mod version;

// Re-export main types at crate root
pub use bank::{FallbackBank, personalize};
pub use cache::{CacheConfig, CacheEntry, CacheStats, ComplimentCache, RecentHistory};
pub use error::{PlauditError, Result};
pub use generator::{ComplimentGenerator, Plaudit, PlauditBuilder};
pub use library::{ComplimentLibrary, Preferences, SavedCompliment};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use types::{ComplimentType, GenerateOptions, Generated, Source, SpecificityLevel};
pub use version::{PKG_VERSION, version_string};
