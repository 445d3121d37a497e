//! plaudit: compliment generator CLI
//!
//! Generates compliments and manages the local cache, favorites, history,
//! categories and preferences in a file store.

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use plaudit::config::Config;
use plaudit::{
    CacheConfig, ComplimentCache, ComplimentLibrary, ComplimentType, FileStore, KeyValueStore,
    Plaudit, PlauditError, SpecificityLevel,
};

/// Plaudit compliment generator
#[derive(Parser)]
#[command(name = "plaudit")]
#[command(version = plaudit::PKG_VERSION)]
#[command(about = "Generate whimsical compliments")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Store directory (overrides config).
    #[arg(long, env = "PLAUDIT_STORE_DIR")]
    store_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate compliments
    Generate {
        /// Category: animal, object, skill or random
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Specificity: low, medium or high
        #[arg(short, long)]
        specificity: Option<SpecificityLevel>,
        /// Recipient name
        #[arg(short, long)]
        name: Option<String>,
        /// Allow content that is not work-safe
        #[arg(long)]
        any: bool,
        /// Number of compliments to generate
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// Print where each compliment came from
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show cache statistics
    Stats,

    /// Remove every cached compliment
    ClearCache,

    /// Save a compliment as a favorite
    Save {
        /// Compliment text (or omit to read from stdin)
        text: Option<String>,
        /// Category to file it under
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List saved compliments
    Saved {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Remove a saved compliment by id
    Remove {
        /// Saved compliment id
        id: String,
    },

    /// Show or clear the compliment history
    History {
        /// Clear the history
        #[arg(long)]
        clear: bool,
    },

    /// List or edit categories
    Categories {
        /// Add a category
        #[arg(long, conflicts_with = "remove")]
        add: Option<String>,
        /// Remove a category
        #[arg(long)]
        remove: Option<String>,
    },

    /// Show or update stored preferences
    Prefs {
        /// Category: animal, object, skill or random
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Specificity: low, medium or high
        #[arg(short, long)]
        specificity: Option<SpecificityLevel>,
        /// Recipient name (empty string clears it)
        #[arg(short, long)]
        name: Option<String>,
        /// Work-safe flag
        #[arg(long)]
        work_safe: Option<bool>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    let store_dir = match args.store_dir {
        Some(dir) => dir,
        None => config.store.resolve_dir()?,
    };
    info!(version = plaudit::version_string(), store = %store_dir.display(), "plaudit starting");
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(store_dir));
    let library = ComplimentLibrary::new(store.clone());

    match args.command {
        Command::Generate {
            kind,
            specificity,
            name,
            any,
            count,
            verbose,
        } => {
            let mut options = library
                .preferred_options(&config.defaults.to_options())
                .await;
            if let Some(kind) = kind {
                options = options.kind(ComplimentType::lenient(&kind));
            }
            if let Some(specificity) = specificity {
                options = options.specificity(specificity);
            }
            if let Some(name) = name {
                options = options.recipient_name(name);
            }
            if any {
                options = options.work_safe(false);
            }

            let mut generator = Plaudit::builder()
                .shared_store(store)
                .cache_config(CacheConfig::from(&config.cache))
                .history_size(config.history.size)
                .build()?;

            for _ in 0..count {
                let generated = generator.generate_detailed(&options).await?;
                if verbose {
                    let degraded = if generated.degraded { ", degraded" } else { "" };
                    println!(
                        "[{} {}{degraded}] {}",
                        generated.cache_key,
                        generated.source.as_str(),
                        generated.text
                    );
                } else {
                    println!("{}", generated.text);
                }
                library.remember(&generated.text).await;
            }
        }

        Command::Stats => {
            let cache = ComplimentCache::new(store, CacheConfig::from(&config.cache));
            let stats = cache.stats().await;
            println!("cached types: {}", stats.cached_types);
            println!("cached compliments: {}", stats.total_cached_compliments);
        }

        Command::ClearCache => {
            let cache = ComplimentCache::new(store, CacheConfig::from(&config.cache));
            cache.clear().await;
            println!("compliment cache cleared");
        }

        Command::Save { text, category } => {
            let text = resolve_text(text)?;
            let saved = library.save(&text, category.as_deref()).await?;
            println!("saved {}", saved.id);
        }

        Command::Saved { category } => {
            let saved = match category {
                Some(category) => library.saved_in_category(&category).await?,
                None => library.saved().await?,
            };
            if saved.is_empty() {
                println!("no saved compliments");
            }
            for s in saved {
                let category = s.category.as_deref().unwrap_or("-");
                println!("{}  {}  [{category}]  {}", s.id, s.date, s.text);
            }
        }

        Command::Remove { id } => {
            if library.remove(&id).await? {
                println!("removed {id}");
            } else {
                println!("no saved compliment with id {id}");
            }
        }

        Command::History { clear } => {
            if clear {
                library.clear_history().await?;
                println!("history cleared");
            } else {
                let history = library.history().await?;
                if history.is_empty() {
                    println!("history is empty");
                }
                for text in history {
                    println!("{text}");
                }
            }
        }

        Command::Categories { add, remove } => {
            if let Some(category) = add {
                if !library.add_category(&category).await? {
                    println!("category {category:?} already exists");
                }
            }
            if let Some(category) = remove {
                if !library.remove_category(&category).await? {
                    println!("no category {category:?}");
                }
            }
            for category in library.categories().await? {
                println!("{category}");
            }
        }

        Command::Prefs {
            kind,
            specificity,
            name,
            work_safe,
        } => {
            let mut prefs = library.preferences().await?;
            let changed =
                kind.is_some() || specificity.is_some() || name.is_some() || work_safe.is_some();
            if let Some(kind) = kind {
                prefs.kind = ComplimentType::lenient(&kind);
            }
            if let Some(specificity) = specificity {
                prefs.specificity = specificity;
            }
            if let Some(name) = name {
                prefs.recipient_name = name;
            }
            if let Some(work_safe) = work_safe {
                prefs.work_safe = work_safe;
            }
            if changed {
                library.set_preferences(&prefs).await?;
            }
            println!("type: {}", prefs.kind);
            println!("specificity: {}", prefs.specificity);
            println!("work safe: {}", prefs.work_safe);
            println!("recipient: {}", prefs.recipient_name);
        }
    }

    Ok(())
}

/// Use the argument if given, otherwise read stdin.
fn resolve_text(text: Option<String>) -> Result<String, PlauditError> {
    match text {
        Some(text) => Ok(text),
        None if io::stdin().is_terminal() => Err(PlauditError::InvalidInput(
            "no compliment given (pass text or pipe it on stdin)".to_string(),
        )),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf.trim().to_string())
        }
    }
}
