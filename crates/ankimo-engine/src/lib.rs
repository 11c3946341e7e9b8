//! Phonetic annotation and study-summary workflows for Anki.
//!
//! This crate builds on the [`ankimo`] client and combines several
//! AnkiConnect calls into complete operations.
//!
//! # Quick Start
//!
//! ```no_run
//! use ankimo_engine::Engine;
//! use ankimo_engine::annotate::AnnotateOptions;
//!
//! # async fn example() -> ankimo_engine::Result<()> {
//! let engine = Engine::new();
//!
//! let report = engine
//!     .annotate()
//!     .deck("English", "phonetics.tsv", &AnnotateOptions::default())
//!     .await?;
//! println!("{} of {} cards updated", report.updated, report.total);
//! # Ok(())
//! # }
//! ```
//!
//! # Feature Flags
//!
//! - `annotate` - Append dictionary transcriptions to card fronts
//! - `stats` - Today's study statistics
//! - `notify` - Webhook study summaries

mod error;

pub mod dictionary;

#[cfg(feature = "annotate")]
pub mod annotate;

#[cfg(feature = "stats")]
pub mod stats;

#[cfg(feature = "notify")]
pub mod notify;

pub use dictionary::PhoneticDictionary;
pub use error::{Error, Result};

// Re-export ankimo types for convenience
pub use ankimo::{
    AnkiClient, CardField, CardInfo, ClientBuilder, DEFAULT_TIMEOUT, DEFAULT_URL, TodayStats,
};

#[cfg(feature = "annotate")]
use annotate::AnnotateEngine;

#[cfg(feature = "stats")]
use stats::StatsEngine;

/// High-level workflow engine for Anki operations.
///
/// # Example
///
/// ```no_run
/// use ankimo_engine::Engine;
///
/// # fn example() -> ankimo_engine::Result<()> {
/// let client = ankimo_engine::AnkiClient::builder()
///     .url("http://localhost:8765")
///     .build()?;
/// let engine = Engine::from_client(client);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    client: AnkiClient,
}

impl Engine {
    /// Create a new engine with default client settings.
    ///
    /// Connects to AnkiConnect at `http://127.0.0.1:8765`.
    pub fn new() -> Self {
        Self {
            client: AnkiClient::new(),
        }
    }

    /// Create an engine from an existing client.
    pub fn from_client(client: AnkiClient) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying client.
    pub fn client(&self) -> &AnkiClient {
        &self.client
    }

    /// Access phonetic annotation workflows.
    #[cfg(feature = "annotate")]
    pub fn annotate(&self) -> AnnotateEngine<'_> {
        AnnotateEngine::new(&self.client)
    }

    /// Access study statistics workflows.
    #[cfg(feature = "stats")]
    pub fn stats(&self) -> StatsEngine<'_> {
        StatsEngine::new(&self.client)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
