//! An async Rust client for the AnkiConnect API.
//!
//! Covers the actions needed to read decks and cards, rewrite note fields,
//! and collect the day's study statistics.
//!
//! # Quick Start
//!
//! ```no_run
//! use ankimo::AnkiClient;
//!
//! # async fn example() -> ankimo::Result<()> {
//! let client = AnkiClient::new();
//!
//! let ids = client.cards().find_in_deck("English").await?;
//! let cards = client.cards().info(&ids).await?;
//! println!("{} cards", cards.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Client Configuration
//!
//! ```no_run
//! use std::time::Duration;
//! use ankimo::AnkiClient;
//!
//! # fn example() -> ankimo::Result<()> {
//! let client = AnkiClient::builder()
//!     .url("http://localhost:8765")
//!     .timeout(Duration::from_secs(10))
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Action Groups
//!
//! - [`AnkiClient::decks()`] - List decks
//! - [`AnkiClient::cards()`] - Find and inspect cards
//! - [`AnkiClient::notes()`] - Update note fields
//! - [`AnkiClient::statistics()`] - Today's study statistics
//! - [`AnkiClient::misc()`] - Version and sync

pub mod actions;
pub mod client;
pub mod error;
pub mod query;
mod request;
pub mod types;

pub use client::{AnkiClient, ClientBuilder, DEFAULT_TIMEOUT, DEFAULT_URL};
pub use error::{Error, Result};
pub use query::QueryBuilder;
pub use types::{BACK_FIELD, CardField, CardInfo, FRONT_FIELD, TodayStats};
