//! Card-related AnkiConnect actions.
//!
//! # Example
//!
//! ```no_run
//! use ankimo::AnkiClient;
//!
//! # async fn example() -> ankimo::Result<()> {
//! let client = AnkiClient::new();
//!
//! let ids = client.cards().find_in_deck("English").await?;
//! let cards = client.cards().info(&ids).await?;
//! for card in &cards {
//!     println!("{}: {:?}", card.card_id, card.front());
//! }
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;
use crate::query::QueryBuilder;
use crate::types::CardInfo;

/// Provides access to card-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::cards()`].
#[derive(Debug)]
pub struct CardActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct FindCardsParams<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct CardsInfoParams<'a> {
    cards: &'a [i64],
}

impl<'a> CardActions<'a> {
    /// Find card IDs matching a raw search query.
    pub async fn find(&self, query: &str) -> Result<Vec<i64>> {
        self.client
            .invoke("findCards", FindCardsParams { query })
            .await
    }

    /// Find the IDs of all cards in a deck.
    ///
    /// The deck name is escaped through [`QueryBuilder::deck`].
    pub async fn find_in_deck(&self, deck: &str) -> Result<Vec<i64>> {
        let query = QueryBuilder::new().deck(deck).build();
        self.find(&query).await
    }

    /// Get full information for cards, in the order requested.
    ///
    /// An empty ID list returns an empty vector without contacting Anki.
    pub async fn info(&self, card_ids: &[i64]) -> Result<Vec<CardInfo>> {
        if card_ids.is_empty() {
            return Ok(Vec::new());
        }
        self.client
            .invoke("cardsInfo", CardsInfoParams { cards: card_ids })
            .await
    }
}
